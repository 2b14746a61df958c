//! Plain-text rendering of controller state.

use std::fmt::Write;

use storefront_core::cart::{CartRef, CartSnapshot};
use storefront_core::notifications::Notification;

pub fn cart(snapshot: &CartSnapshot) -> String {
    let mut out = String::new();
    if snapshot.active_items().next().is_none() {
        out.push_str("Your cart is empty\n");
    }
    for item in snapshot.active_items() {
        let _ = writeln!(
            out,
            "{:<12} {:<30} {:>4} x {:>8} = {:>9}",
            item.id,
            describe(&item.product_name, item.variant.as_deref()),
            item.quantity,
            item.unit_price,
            item.line_total()
        );
    }

    let saved: Vec<_> = snapshot.saved_items().collect();
    if !saved.is_empty() {
        let _ = writeln!(out, "Saved for later ({})", saved.len());
        for item in saved {
            let _ = writeln!(
                out,
                "  {:<10} {}",
                item.id,
                describe(&item.product_name, item.variant.as_deref())
            );
        }
    }

    let s = &snapshot.summary;
    let _ = writeln!(out, "Items:    {}", s.item_count);
    let _ = writeln!(out, "Subtotal: {}", s.subtotal);
    let _ = writeln!(out, "Tax:      {}", s.tax_amount);
    let _ = writeln!(out, "Shipping: {}", s.shipping_amount);
    if !s.discount_amount.is_zero() {
        let _ = writeln!(out, "Discount: -{}", s.discount_amount);
    }
    let _ = writeln!(out, "Total:    {}", s.total_amount);
    out
}

pub fn carts(carts: &[CartRef], active: Option<&str>) -> String {
    if carts.is_empty() {
        return "No additional carts\n".to_string();
    }
    let mut out = String::new();
    for cart in carts {
        let marker = if Some(cart.id.as_str()) == active { "*" } else { " " };
        let _ = writeln!(out, "{} {:<12} {}", marker, cart.id, cart.name);
    }
    out
}

pub fn notifications(list: &[Notification], badge: Option<String>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Unread: {}", badge.unwrap_or_else(|| "0".to_string()));
    if list.is_empty() {
        out.push_str("No notifications\n");
    }
    for n in list {
        let marker = if n.is_read { " " } else { "*" };
        let _ = writeln!(
            out,
            "{} {:<10} {} {}: {}",
            marker,
            n.id,
            n.created_at.format("%Y-%m-%d %H:%M"),
            n.title,
            n.message
        );
    }
    out
}

fn describe(name: &str, variant: Option<&str>) -> String {
    match variant {
        Some(v) => format!("{} ({})", name, v),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::cart::{compute_summary, CartItem};
    use storefront_core::PricingConfig;

    #[test]
    fn test_empty_cart() {
        let out = cart(&CartSnapshot::default());
        assert!(out.starts_with("Your cart is empty"));
        assert!(out.contains("Total:    0"));
    }

    #[test]
    fn test_cart_lines_and_saved_section() {
        let items = vec![
            CartItem {
                id: "i1".to_string(),
                product_name: "Mug".to_string(),
                variant: Some("Red".to_string()),
                unit_price: 10.into(),
                quantity: 2,
                is_saved_for_later: false,
                image_url: None,
            },
            CartItem {
                id: "i2".to_string(),
                product_name: "Tea".to_string(),
                variant: None,
                unit_price: 5.into(),
                quantity: 1,
                is_saved_for_later: true,
                image_url: None,
            },
        ];
        let summary = compute_summary(&items, 0.into(), &PricingConfig::default());
        let out = cart(&CartSnapshot { items, summary });

        assert!(out.contains("Mug (Red)"));
        assert!(out.contains("Saved for later (1)"));
        assert!(out.contains("Total:    37.00"));
        assert!(!out.contains("Discount"));
    }

    #[test]
    fn test_active_cart_marker() {
        let list = vec![
            CartRef {
                id: "c1".to_string(),
                name: "Main".to_string(),
            },
            CartRef {
                id: "c2".to_string(),
                name: "Office".to_string(),
            },
        ];
        let out = carts(&list, Some("c2"));
        assert!(out.contains("* c2"));
        assert!(out.contains("  c1"));
    }
}
