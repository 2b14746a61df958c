//! Pure projections over the notification list.

use crate::constants::MAX_BADGE_COUNT;
use crate::navigation::{ProductAnchor, Route};

use super::notifications_model::{
    Notification, NotificationFilter, RelatedEntity, RelatedEntityType,
};

/// Notifications matching `filter`, in their original order.
pub fn filter_notifications(
    notifications: &[Notification],
    filter: NotificationFilter,
) -> Vec<Notification> {
    notifications
        .iter()
        .filter(|n| filter.matches(n.notification_type))
        .cloned()
        .collect()
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.is_read).count()
}

/// The single notification shown as a banner: the most recent unread
/// `system` notification. Ties on `created_at` go to the earlier entry.
pub fn system_banner(notifications: &[Notification]) -> Option<&Notification> {
    notifications
        .iter()
        .filter(|n| n.is_system() && !n.is_read)
        .fold(None, |best: Option<&Notification>, n| match best {
            Some(b) if b.created_at >= n.created_at => Some(b),
            _ => Some(n),
        })
}

/// Text of the unread badge. Hidden when nothing is unread.
pub fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > MAX_BADGE_COUNT => Some(format!("{}+", MAX_BADGE_COUNT)),
        n => Some(n.to_string()),
    }
}

/// Destination for a click on a notification with this relation.
pub fn route_for(related: &RelatedEntity) -> Option<Route> {
    let id = related.entity_id.clone();
    match related.entity_type {
        RelatedEntityType::Order => Some(Route::Order { id }),
        RelatedEntityType::Message => Some(Route::Message { id }),
        RelatedEntityType::Product => Some(Route::Product { id, anchor: None }),
        RelatedEntityType::Question => Some(Route::Product {
            id: related.product_id.clone().unwrap_or_else(|| id.clone()),
            anchor: Some(ProductAnchor::Question(id)),
        }),
        RelatedEntityType::Answer => Some(Route::Product {
            id: related.product_id.clone().unwrap_or_else(|| id.clone()),
            anchor: Some(ProductAnchor::Answer(id)),
        }),
        RelatedEntityType::Other => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationType;
    use chrono::{Duration, TimeZone, Utc};

    fn notification(id: &str, kind: NotificationType, read: bool, minutes: i64) -> Notification {
        Notification {
            id: id.to_string(),
            notification_type: kind,
            title: id.to_uppercase(),
            message: format!("message {}", id),
            is_read: read,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + Duration::minutes(minutes),
            related: None,
        }
    }

    fn sample() -> Vec<Notification> {
        vec![
            notification("a", NotificationType::PriceChange, false, 5),
            notification("b", NotificationType::OrderStatus, false, 4),
            notification("c", NotificationType::BackInStock, true, 3),
            notification("d", NotificationType::NewMessage, false, 2),
            notification("e", NotificationType::System, false, 1),
            notification("f", NotificationType::PriceChange, true, 0),
            notification("g", NotificationType::NewReview, false, 0),
        ]
    }

    fn ids(list: &[Notification]) -> Vec<&str> {
        list.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_price_alerts_are_price_change_and_back_in_stock_in_order() {
        let filtered = filter_notifications(&sample(), NotificationFilter::PriceAlerts);
        assert_eq!(ids(&filtered), vec!["a", "c", "f"]);
    }

    #[test]
    fn test_each_filter_category() {
        let all = sample();
        assert_eq!(filter_notifications(&all, NotificationFilter::All).len(), 7);
        assert_eq!(
            ids(&filter_notifications(&all, NotificationFilter::OrderStatus)),
            vec!["b"]
        );
        assert_eq!(
            ids(&filter_notifications(&all, NotificationFilter::Messages)),
            vec!["d"]
        );
        assert_eq!(
            ids(&filter_notifications(&all, NotificationFilter::System)),
            vec!["e"]
        );
    }

    #[test]
    fn test_unknown_type_only_listed_under_all() {
        let list: Vec<Notification> = serde_json::from_str(
            r#"[{"id": "z", "type": "loyalty_points", "title": "Points", "message": "+50",
                 "createdAt": "2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();
        assert_eq!(list[0].notification_type, NotificationType::Unknown);

        for filter in NotificationFilter::ALL {
            let expected = usize::from(filter == NotificationFilter::All);
            assert_eq!(filter_notifications(&list, filter).len(), expected);
        }
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(
            "price_alerts".parse::<NotificationFilter>().unwrap(),
            NotificationFilter::PriceAlerts
        );
        assert_eq!(
            "Orders".parse::<NotificationFilter>().unwrap(),
            NotificationFilter::OrderStatus
        );
        assert!("reviews".parse::<NotificationFilter>().is_err());
    }

    #[test]
    fn test_banner_picks_most_recent_unread_system() {
        let list = vec![
            notification("old", NotificationType::System, false, 1),
            notification("read", NotificationType::System, true, 50),
            notification("new", NotificationType::System, false, 30),
            notification("order", NotificationType::OrderStatus, false, 90),
        ];
        assert_eq!(system_banner(&list).map(|n| n.id.as_str()), Some("new"));
        assert!(system_banner(&list[3..]).is_none());
    }

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0), None);
        assert_eq!(badge_label(7).as_deref(), Some("7"));
        assert_eq!(badge_label(99).as_deref(), Some("99"));
        assert_eq!(badge_label(100).as_deref(), Some("99+"));
    }

    #[test]
    fn test_routes_per_entity_type() {
        let rel = |entity_type, product_id: Option<&str>| RelatedEntity {
            entity_type,
            entity_id: "x1".to_string(),
            product_id: product_id.map(str::to_string),
        };

        assert_eq!(
            route_for(&rel(RelatedEntityType::Order, None)).map(|r| r.path()),
            Some("/account/orders/x1".to_string())
        );
        assert_eq!(
            route_for(&rel(RelatedEntityType::Message, None)).map(|r| r.path()),
            Some("/messages/x1".to_string())
        );
        assert_eq!(
            route_for(&rel(RelatedEntityType::Product, None)).map(|r| r.path()),
            Some("/products/x1".to_string())
        );
        assert_eq!(
            route_for(&rel(RelatedEntityType::Question, Some("p7"))).map(|r| r.path()),
            Some("/products/p7?question=x1".to_string())
        );
        assert_eq!(
            route_for(&rel(RelatedEntityType::Answer, Some("p7"))).map(|r| r.path()),
            Some("/products/p7?answer=x1".to_string())
        );
        assert_eq!(route_for(&rel(RelatedEntityType::Other, None)), None);
    }

    #[test]
    fn test_unknown_entity_type_deserializes_to_other() {
        let rel: RelatedEntity =
            serde_json::from_str(r#"{"entityType":"coupon","entityId":"c1"}"#).unwrap();
        assert_eq!(rel.entity_type, RelatedEntityType::Other);
        assert!(route_for(&rel).is_none());
    }
}
