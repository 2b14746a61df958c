//! Pure reducer applying [`Action`]s to [`AppState`].

use super::store_actions::Action;
use super::store_model::{AppState, NotificationState};
use crate::notifications::Notification;

/// Applies `action` to `state`.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::SessionChanged(auth) => {
            if !auth.is_authenticated {
                state.notifications = NotificationState::default();
            }
            state.auth = auth;
        }

        Action::CartRequested => {
            state.cart.is_loading = true;
        }
        Action::CartLoaded { cart_id, snapshot } => {
            state.cart.snapshot = snapshot;
            if cart_id.is_some() {
                state.cart.active_cart_id = cart_id;
            }
            state.cart.is_loading = false;
            state.cart.last_error = None;
        }
        Action::CartConfirmed(snapshot) => {
            state.cart.snapshot = snapshot;
            state.cart.last_error = None;
        }
        Action::CartRequestFailed(message) => {
            state.cart.is_loading = false;
            state.cart.last_error = Some(message);
        }
        Action::CartMutationFailed(message) => {
            state.cart.last_error = Some(message);
        }
        Action::AvailableCartsLoaded(carts) => {
            state.cart.available_carts = carts;
        }

        Action::NotificationsRequested => {
            state.notifications.is_loading = true;
        }
        Action::NotificationsLoaded(incoming) => {
            let slice = &mut state.notifications;
            let merged = incoming
                .into_iter()
                .map(|n| keep_read_flag(&slice.items, n))
                .collect();
            slice.items = merged;
            slice.is_loading = false;
            slice.last_error = None;
        }
        Action::NotificationsRequestFailed(message) => {
            state.notifications.is_loading = false;
            state.notifications.last_error = Some(message);
        }
        Action::NotificationPushed(notification) => {
            let slice = &mut state.notifications;
            let notification = keep_read_flag(&slice.items, notification);
            match slice.items.iter_mut().find(|n| n.id == notification.id) {
                Some(existing) => *existing = notification,
                None => slice.items.insert(0, notification),
            }
        }
        Action::NotificationRead(id) => {
            if let Some(n) = state.notifications.items.iter_mut().find(|n| n.id == id) {
                n.is_read = true;
            }
        }
        Action::AllNotificationsRead => {
            for n in state.notifications.items.iter_mut() {
                n.is_read = true;
            }
        }

        Action::ToastAdded(toast) => {
            let toasts = &mut state.ui.toasts;
            match toasts.iter_mut().find(|t| t.id == toast.id) {
                Some(existing) => *existing = toast,
                None => toasts.push(toast),
            }
        }
        Action::ToastCleared(id) => {
            state.ui.toasts.retain(|t| t.id != id);
        }
        Action::ModalOpened(modal) => {
            state.ui.open_modal = Some(modal);
        }
        Action::ModalClosed(modal) => {
            if state.ui.open_modal.as_deref() == Some(modal.as_str()) {
                state.ui.open_modal = None;
            }
        }
    }

    state.notifications.unread_count = state
        .notifications
        .items
        .iter()
        .filter(|n| !n.is_read)
        .count();
}

// Read flags only move forward: a stale copy never un-reads a notification.
fn keep_read_flag(existing: &[Notification], mut incoming: Notification) -> Notification {
    if existing.iter().any(|n| n.id == incoming.id && n.is_read) {
        incoming.is_read = true;
    }
    incoming
}
