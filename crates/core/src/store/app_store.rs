//! Injectable state container.

use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

use super::store_actions::Action;
use super::store_model::AppState;
use super::store_reducer::reduce;

/// Shared handle to the application state.
///
/// Clones share the same state. Subscribers are woken after every dispatch.
#[derive(Clone)]
pub struct Store {
    sender: Arc<watch::Sender<AppState>>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Applies `action` through the reducer and notifies subscribers.
    pub fn dispatch(&self, action: Action) {
        debug!("[Store] dispatch {}", action.name());
        self.sender.send_modify(|state| reduce(state, action));
    }

    /// Clones the whole current state.
    pub fn snapshot(&self) -> AppState {
        self.sender.borrow().clone()
    }

    /// Reads a projection of the current state without cloning all of it.
    pub fn select<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.sender.borrow())
    }

    /// Returns a receiver that observes every subsequent change.
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.sender.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{Toast, ToastSeverity};

    #[test]
    fn test_clones_share_state() {
        let store = Store::default();
        let other = store.clone();
        other.dispatch(Action::ToastAdded(Toast::new("t1", ToastSeverity::Success, "ok")));

        assert_eq!(store.select(|s| s.ui.toasts.len()), 1);
        assert_eq!(store.snapshot(), other.snapshot());
    }

    #[test]
    fn test_subscribers_see_changes() {
        let store = Store::default();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.dispatch(Action::ModalOpened("cart".to_string()));
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            rx.borrow_and_update().ui.open_modal.as_deref(),
            Some("cart")
        );
        assert!(!rx.has_changed().unwrap());
    }
}
