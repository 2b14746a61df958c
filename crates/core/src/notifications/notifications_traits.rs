//! Backend contract for notifications.

use async_trait::async_trait;

use super::notifications_model::Notification;
use crate::errors::Result;

#[async_trait]
pub trait NotificationApiTrait: Send + Sync {
    /// Fetches the user's notifications, most recent first.
    async fn fetch_notifications(&self) -> Result<Vec<Notification>>;

    async fn mark_as_read(&self, notification_id: &str) -> Result<()>;

    async fn mark_all_as_read(&self) -> Result<()>;
}
