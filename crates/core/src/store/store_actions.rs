//! Typed action contract of the store.

use crate::cart::{CartRef, CartSnapshot};
use crate::notifications::{Notification, Toast};

use super::store_model::AuthState;

/// Every change to [`super::AppState`] is expressed as one of these actions.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SessionChanged(AuthState),

    /// A full cart fetch (initial load or cart switch) started.
    CartRequested,
    /// Server-confirmed cart content. `cart_id` is `None` for the default cart.
    CartLoaded {
        cart_id: Option<String>,
        snapshot: CartSnapshot,
    },
    /// A mutating request was confirmed; only the content changes.
    CartConfirmed(CartSnapshot),
    /// A full cart fetch failed.
    CartRequestFailed(String),
    /// A mutating item request was rejected. Loading state is untouched.
    CartMutationFailed(String),
    AvailableCartsLoaded(Vec<CartRef>),

    NotificationsRequested,
    NotificationsLoaded(Vec<Notification>),
    NotificationsRequestFailed(String),
    /// A notification delivered by the push channel.
    NotificationPushed(Notification),
    NotificationRead(String),
    AllNotificationsRead,

    ToastAdded(Toast),
    ToastCleared(String),

    ModalOpened(String),
    ModalClosed(String),
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SessionChanged(_) => "session/changed",
            Action::CartRequested => "cart/requested",
            Action::CartLoaded { .. } => "cart/loaded",
            Action::CartConfirmed(_) => "cart/confirmed",
            Action::CartRequestFailed(_) => "cart/requestFailed",
            Action::CartMutationFailed(_) => "cart/mutationFailed",
            Action::AvailableCartsLoaded(_) => "cart/availableLoaded",
            Action::NotificationsRequested => "notifications/requested",
            Action::NotificationsLoaded(_) => "notifications/loaded",
            Action::NotificationsRequestFailed(_) => "notifications/requestFailed",
            Action::NotificationPushed(_) => "notifications/pushed",
            Action::NotificationRead(_) => "notifications/read",
            Action::AllNotificationsRead => "notifications/allRead",
            Action::ToastAdded(_) => "ui/toastAdded",
            Action::ToastCleared(_) => "ui/toastCleared",
            Action::ModalOpened(_) => "ui/modalOpened",
            Action::ModalClosed(_) => "ui/modalClosed",
        }
    }
}
