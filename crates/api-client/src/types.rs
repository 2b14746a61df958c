//! Wire types of the storefront backend.

use serde::{Deserialize, Serialize};
use storefront_core::cart::{CartRef, CartSnapshot};
use storefront_core::notifications::Notification;

/// `{items, summary}` body returned by every cart endpoint.
pub type CartResponse = CartSnapshot;

/// `GET /api/carts` answers either a bare array or `{carts: [...]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CartsResponse {
    List(Vec<CartRef>),
    Wrapped { carts: Vec<CartRef> },
}

impl CartsResponse {
    pub fn into_carts(self) -> Vec<CartRef> {
        match self {
            CartsResponse::List(carts) | CartsResponse::Wrapped { carts } => carts,
        }
    }
}

/// `GET /api/notifications` answers either a bare array or
/// `{notifications: [...]}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NotificationsResponse {
    List(Vec<Notification>),
    Wrapped { notifications: Vec<Notification> },
}

impl NotificationsResponse {
    pub fn into_notifications(self) -> Vec<Notification> {
        match self {
            NotificationsResponse::List(list)
            | NotificationsResponse::Wrapped {
                notifications: list,
            } => list,
        }
    }
}

/// Error body of the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
}
