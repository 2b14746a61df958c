//! Notifications module - models, pure views, backend contract and the
//! notification center.

mod dropdown;
mod notification_center;
mod notifications_model;
mod notifications_traits;
mod notifications_view;


pub use dropdown::{Bounds, DropdownState, Point};
pub use notification_center::NotificationCenter;
pub use notifications_model::{
    Notification, NotificationFilter, NotificationType, RelatedEntity, RelatedEntityType, Toast,
    ToastSeverity,
};
pub use notifications_traits::NotificationApiTrait;
pub use notifications_view::{
    badge_label, filter_notifications, route_for, system_banner, unread_count,
};
