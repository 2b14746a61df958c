//! Cart domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// A line item in a cart.
///
/// `unit_price` is the price snapshot captured when the product was added;
/// the client never rewrites it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub product_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(default)]
    pub is_saved_for_later: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl CartItem {
    /// Price of the line (unit price times quantity).
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Active items count toward the summary; saved-for-later items do not.
    pub fn is_active(&self) -> bool {
        !self.is_saved_for_later
    }
}

/// Aggregate totals over the active items of a cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub tax_amount: Decimal,
    #[serde(default)]
    pub shipping_amount: Decimal,
    #[serde(default)]
    pub discount_amount: Decimal,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub item_count: u32,
}

/// A named cart owned by the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRef {
    pub id: String,
    pub name: String,
}

/// Full server-confirmed content of one cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub summary: CartSummary,
}

impl CartSnapshot {
    pub fn item(&self, item_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn active_items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter().filter(|item| item.is_active())
    }

    pub fn saved_items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter().filter(|item| item.is_saved_for_later)
    }
}

/// Input model for a remote cart item update.
///
/// Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemUpdate {
    #[serde(default, skip_serializing)]
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_saved_for_later: Option<bool>,
}

impl CartItemUpdate {
    pub fn quantity(item_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            item_id: item_id.into(),
            quantity: Some(quantity),
            is_saved_for_later: None,
        }
    }

    pub fn saved_for_later(item_id: impl Into<String>, saved: bool) -> Self {
        Self {
            item_id: item_id.into(),
            quantity: None,
            is_saved_for_later: Some(saved),
        }
    }

    /// Validates the update data.
    pub fn validate(&self) -> Result<()> {
        if self.item_id.trim().is_empty() {
            return Err(Error::Validation("Cart item ID is required".to_string()));
        }
        if self.quantity.is_none() && self.is_saved_for_later.is_none() {
            return Err(Error::Validation(
                "Cart item update must change quantity or saved flag".to_string(),
            ));
        }
        if self.quantity == Some(0) {
            return Err(Error::Validation("Quantity must be at least 1".to_string()));
        }
        Ok(())
    }
}
