//! Property-based tests for local cart summary recomputation.
//!
//! Random carts are mutated by random sequences of quantity changes and
//! saved-for-later flips; the recomputed summary must stay consistent with
//! the items after every step.

use proptest::prelude::*;
use rust_decimal::Decimal;
use storefront_core::cart::{compute_summary, CartItem};
use storefront_core::PricingConfig;

// =============================================================================
// Generators
// =============================================================================

/// Generates a money amount with cent precision.
fn arb_cents(max: i64) -> impl Strategy<Value = Decimal> {
    (0i64..=max).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a cart line with a random price, quantity and saved flag.
fn arb_item() -> impl Strategy<Value = CartItem> {
    ("[a-z]{4,10}", arb_cents(50_000), 1u32..20, any::<bool>()).prop_map(
        |(name, unit_price, quantity, saved)| CartItem {
            id: String::new(),
            product_name: name,
            variant: None,
            unit_price,
            quantity,
            is_saved_for_later: saved,
            image_url: None,
        },
    )
}

/// Generates a cart of up to eight lines with unique ids.
fn arb_items() -> impl Strategy<Value = Vec<CartItem>> {
    proptest::collection::vec(arb_item(), 0..8).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(idx, mut item)| {
                item.id = format!("i{}", idx);
                item
            })
            .collect()
    })
}

#[derive(Debug, Clone)]
enum Edit {
    SetQuantity(usize, u32),
    ToggleSaved(usize),
}

/// Generates an edit addressing a line by (wrapped) position.
fn arb_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (any::<usize>(), 1u32..20).prop_map(|(idx, qty)| Edit::SetQuantity(idx, qty)),
        any::<usize>().prop_map(Edit::ToggleSaved),
    ]
}

fn apply(items: &mut [CartItem], edit: &Edit) {
    if items.is_empty() {
        return;
    }
    let len = items.len();
    match *edit {
        Edit::SetQuantity(idx, qty) => items[idx % len].quantity = qty,
        Edit::ToggleSaved(idx) => {
            let item = &mut items[idx % len];
            item.is_saved_for_later = !item.is_saved_for_later;
        }
    }
}

fn active_quantity(items: &[CartItem]) -> u32 {
    items
        .iter()
        .filter(|item| !item.is_saved_for_later)
        .map(|item| item.quantity)
        .sum()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property 1: Item count equals the sum of active quantities**
    #[test]
    fn prop_item_count_tracks_active_quantities(
        mut items in arb_items(),
        edits in proptest::collection::vec(arb_edit(), 0..20),
    ) {
        let pricing = PricingConfig::default();
        for edit in &edits {
            apply(&mut items, edit);
            let summary = compute_summary(&items, Decimal::ZERO, &pricing);
            prop_assert_eq!(
                summary.item_count,
                active_quantity(&items),
                "item count drifted after {:?}",
                edit
            );
        }
    }

    /// **Property 2: Total is subtotal plus tax plus shipping minus discount**
    #[test]
    fn prop_total_is_sum_of_parts(
        mut items in arb_items(),
        edits in proptest::collection::vec(arb_edit(), 0..20),
        discount in arb_cents(2_000),
    ) {
        let pricing = PricingConfig::default();
        for edit in &edits {
            apply(&mut items, edit);
            let summary = compute_summary(&items, discount, &pricing);
            prop_assert_eq!(
                summary.total_amount,
                summary.subtotal + summary.tax_amount + summary.shipping_amount
                    - summary.discount_amount,
                "total does not add up after {:?}",
                edit
            );
            prop_assert_eq!(summary.discount_amount, discount);
        }
    }

    /// **Property 3: Shipping is charged only when something is being bought**
    #[test]
    fn prop_shipping_only_for_non_empty_subtotal(items in arb_items()) {
        let pricing = PricingConfig::default();
        let summary = compute_summary(&items, Decimal::ZERO, &pricing);
        if summary.subtotal > Decimal::ZERO {
            prop_assert_eq!(summary.shipping_amount, pricing.flat_shipping_fee);
        } else {
            prop_assert_eq!(summary.shipping_amount, Decimal::ZERO);
        }
    }

    /// **Property 4: Saved-for-later lines never affect the summary**
    #[test]
    fn prop_saved_items_are_ignored(items in arb_items()) {
        let pricing = PricingConfig::default();
        let active: Vec<CartItem> = items
            .iter()
            .filter(|item| !item.is_saved_for_later)
            .cloned()
            .collect();
        prop_assert_eq!(
            compute_summary(&items, Decimal::ZERO, &pricing),
            compute_summary(&active, Decimal::ZERO, &pricing)
        );
    }
}
