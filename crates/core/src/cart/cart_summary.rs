//! Local summary recomputation.
//!
//! This is a placeholder pricing model that keeps the sidebar from lagging
//! while a mutation is in flight. The next server-confirmed summary always
//! replaces it.

use rust_decimal::{Decimal, RoundingStrategy};

use super::cart_model::{CartItem, CartSummary};
use crate::config::PricingConfig;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Computes the summary of `items` with the given pricing parameters.
///
/// Only active (not saved-for-later) items are counted. `discount` is the
/// server-supplied discount, carried through unchanged.
pub fn compute_summary(
    items: &[CartItem],
    discount: Decimal,
    pricing: &PricingConfig,
) -> CartSummary {
    let (subtotal, item_count) = items
        .iter()
        .filter(|item| item.is_active())
        .fold((Decimal::ZERO, 0u32), |(sum, count), item| {
            (sum + item.line_total(), count.saturating_add(item.quantity))
        });

    let tax_amount = round_money(subtotal * pricing.tax_rate);
    let shipping_amount = if subtotal > Decimal::ZERO {
        pricing.flat_shipping_fee
    } else {
        Decimal::ZERO
    };
    let subtotal = round_money(subtotal);
    let total_amount = round_money(subtotal + tax_amount + shipping_amount - discount);

    CartSummary {
        subtotal,
        tax_amount,
        shipping_amount,
        discount_amount: discount,
        total_amount,
        item_count,
    }
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}
