//! Notification and toast domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a server-side notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    OrderStatus,
    NewMessage,
    PriceChange,
    BackInStock,
    QuoteResponse,
    NewReview,
    PaymentProcessed,
    ReturnApproved,
    System,
    /// Types this client does not know yet; shown only under `All`
    #[serde(other)]
    Unknown,
}

/// Kind of entity a notification points at.
///
/// Unknown kinds from the backend deserialize to [`RelatedEntityType::Other`]
/// and never navigate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelatedEntityType {
    Order,
    Message,
    Product,
    Question,
    Answer,
    #[serde(other)]
    Other,
}

/// Relation descriptor used for click-navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedEntity {
    pub entity_type: RelatedEntityType,
    pub entity_id: String,
    /// Product owning a question or answer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related: Option<RelatedEntity>,
}

impl Notification {
    pub fn is_system(&self) -> bool {
        self.notification_type == NotificationType::System
    }
}

/// UI filter categories of the notification dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFilter {
    #[default]
    All,
    OrderStatus,
    Messages,
    PriceAlerts,
    System,
}

impl NotificationFilter {
    pub const ALL: [NotificationFilter; 5] = [
        NotificationFilter::All,
        NotificationFilter::OrderStatus,
        NotificationFilter::Messages,
        NotificationFilter::PriceAlerts,
        NotificationFilter::System,
    ];

    /// Whether a notification of type `kind` belongs to this category.
    pub fn matches(self, kind: NotificationType) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::OrderStatus => kind == NotificationType::OrderStatus,
            NotificationFilter::Messages => kind == NotificationType::NewMessage,
            NotificationFilter::PriceAlerts => matches!(
                kind,
                NotificationType::PriceChange | NotificationType::BackInStock
            ),
            NotificationFilter::System => kind == NotificationType::System,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NotificationFilter::All => "All",
            NotificationFilter::OrderStatus => "Orders",
            NotificationFilter::Messages => "Messages",
            NotificationFilter::PriceAlerts => "Price Alerts",
            NotificationFilter::System => "System",
        }
    }
}

impl std::str::FromStr for NotificationFilter {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(NotificationFilter::All),
            "order_status" | "orders" => Ok(NotificationFilter::OrderStatus),
            "messages" => Ok(NotificationFilter::Messages),
            "price_alerts" => Ok(NotificationFilter::PriceAlerts),
            "system" => Ok(NotificationFilter::System),
            other => Err(crate::Error::Validation(format!(
                "Unknown notification filter '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastSeverity {
    Success,
    Error,
    Warning,
    Info,
}

/// Transient message shown on top of the page. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: String,
    pub severity: ToastSeverity,
    pub message: String,
}

impl Toast {
    pub fn new(id: impl Into<String>, severity: ToastSeverity, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
        }
    }

    /// Creates a toast with a freshly generated id.
    pub fn generate(severity: ToastSeverity, message: impl Into<String>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), severity, message)
    }
}
