//! Shared application state.

use serde::{Deserialize, Serialize};

use crate::cart::{CartRef, CartSnapshot};
use crate::notifications::{Notification, Toast};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Customer,
    /// May own several carts at once
    ProfessionalBuyer,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user_id: Option<String>,
    pub role: UserRole,
}

impl AuthState {
    pub fn signed_in(user_id: impl Into<String>, role: UserRole) -> Self {
        Self {
            is_authenticated: true,
            user_id: Some(user_id.into()),
            role,
        }
    }

    pub fn can_manage_multiple_carts(&self) -> bool {
        self.is_authenticated && self.role == UserRole::ProfessionalBuyer
    }
}

/// Server-confirmed cart slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub snapshot: CartSnapshot,
    pub active_cart_id: Option<String>,
    pub available_carts: Vec<CartRef>,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationState {
    /// Most recent first, in the order the backend delivered them
    pub items: Vec<Notification>,
    pub unread_count: usize,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl NotificationState {
    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    pub open_modal: Option<String>,
    pub toasts: Vec<Toast>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub auth: AuthState,
    pub cart: CartState,
    pub notifications: NotificationState,
    pub ui: UiState,
}
