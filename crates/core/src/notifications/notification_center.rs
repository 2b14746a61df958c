//! Notification center controller: bell badge, dropdown, banner and toasts.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, info};

use super::dropdown::{Bounds, DropdownState, Point};
use super::notifications_model::{Notification, NotificationFilter, Toast};
use super::notifications_traits::NotificationApiTrait;
use super::notifications_view::{badge_label, filter_notifications, route_for, system_banner};
use crate::errors::Result;
use crate::navigation::{Navigator, Route};
use crate::store::{Action, Store};

#[derive(Debug, Default)]
struct CenterUi {
    dropdown: DropdownState,
    filter: NotificationFilter,
}

pub struct NotificationCenter {
    api: Arc<dyn NotificationApiTrait>,
    store: Store,
    navigator: Arc<dyn Navigator>,
    ui: Mutex<CenterUi>,
}

impl NotificationCenter {
    pub fn new(
        api: Arc<dyn NotificationApiTrait>,
        store: Store,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            store,
            navigator,
            ui: Mutex::new(CenterUi::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CenterUi> {
        self.ui.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetches notifications when the session is authenticated. Further
    /// updates arrive through [`Action::NotificationPushed`].
    pub async fn on_mount(&self) -> Result<()> {
        if !self.store.select(|s| s.auth.is_authenticated) {
            debug!("[Notifications] Not authenticated, skipping fetch");
            return Ok(());
        }
        self.fetch().await
    }

    /// Fetches the notification list. On failure the previous list stays.
    pub async fn fetch(&self) -> Result<()> {
        self.store.dispatch(Action::NotificationsRequested);
        match self.api.fetch_notifications().await {
            Ok(list) => {
                debug!("[Notifications] Fetched {} notifications", list.len());
                self.store.dispatch(Action::NotificationsLoaded(list));
                Ok(())
            }
            Err(e) => {
                error!("[Notifications] Failed to fetch notifications: {}", e);
                self.store
                    .dispatch(Action::NotificationsRequestFailed(e.to_string()));
                Err(e)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Read state
    // ─────────────────────────────────────────────────────────────────────

    /// Marks the notification read and follows its relation, if any.
    ///
    /// Returns the route navigated to.
    pub async fn open_notification(&self, notification_id: &str) -> Option<Route> {
        let notification = self
            .store
            .select(|s| s.notifications.get(notification_id).cloned());
        let Some(notification) = notification else {
            debug!("[Notifications] Unknown notification {}", notification_id);
            return None;
        };

        if !notification.is_read {
            self.mark_read(notification_id).await;
        }

        let route = notification.related.as_ref().and_then(route_for)?;
        self.lock().dropdown.close();
        self.navigator.navigate(&route);
        Some(route)
    }

    /// Marks one notification read. The local flag is never reverted.
    pub async fn mark_read(&self, notification_id: &str) {
        self.store
            .dispatch(Action::NotificationRead(notification_id.to_string()));
        if let Err(e) = self.api.mark_as_read(notification_id).await {
            error!(
                "[Notifications] Failed to mark {} as read: {}",
                notification_id, e
            );
        }
    }

    pub async fn mark_all_read(&self) {
        self.store.dispatch(Action::AllNotificationsRead);
        if let Err(e) = self.api.mark_all_as_read().await {
            error!("[Notifications] Failed to mark all as read: {}", e);
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Banner and toasts
    // ─────────────────────────────────────────────────────────────────────

    pub fn banner(&self) -> Option<Notification> {
        self.store
            .select(|s| system_banner(&s.notifications.items).cloned())
    }

    /// Dismisses the current banner by marking it read.
    pub async fn dismiss_banner(&self) -> Option<String> {
        let banner = self.banner()?;
        info!("[Notifications] Dismissing system banner {}", banner.id);
        self.mark_read(&banner.id).await;
        Some(banner.id)
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.store.select(|s| s.ui.toasts.clone())
    }

    /// Shows a toast. Expiry is left to the host's timer.
    pub fn show_toast(&self, toast: Toast) {
        self.store.dispatch(Action::ToastAdded(toast));
    }

    pub fn dismiss_toast(&self, toast_id: &str) {
        self.store
            .dispatch(Action::ToastCleared(toast_id.to_string()));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Dropdown
    // ─────────────────────────────────────────────────────────────────────

    pub fn is_open(&self) -> bool {
        self.lock().dropdown.is_open()
    }

    pub fn toggle_dropdown(&self) -> bool {
        self.lock().dropdown.toggle()
    }

    pub fn close_dropdown(&self) {
        self.lock().dropdown.close();
    }

    pub fn set_dropdown_bounds(&self, bounds: Bounds) {
        self.lock().dropdown.set_bounds(bounds);
    }

    /// Pointer interaction anywhere on the page; closes on outside clicks.
    pub fn handle_pointer_down(&self, point: Point) -> bool {
        self.lock().dropdown.pointer_down(point)
    }

    pub fn filter(&self) -> NotificationFilter {
        self.lock().filter
    }

    pub fn set_filter(&self, filter: NotificationFilter) {
        self.lock().filter = filter;
    }

    /// Notifications under the current filter.
    pub fn visible(&self) -> Vec<Notification> {
        let filter = self.filter();
        self.store
            .select(|s| filter_notifications(&s.notifications.items, filter))
    }

    pub fn unread_count(&self) -> usize {
        self.store.select(|s| s.notifications.unread_count)
    }

    pub fn badge(&self) -> Option<String> {
        badge_label(self.unread_count())
    }

    pub fn is_loading(&self) -> bool {
        self.store.select(|s| s.notifications.is_loading)
    }

    pub fn view_all(&self) {
        self.close_dropdown();
        self.navigator.navigate(&Route::Notifications);
    }
}
