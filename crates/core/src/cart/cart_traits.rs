//! Backend contract for cart operations.

use async_trait::async_trait;

use super::cart_model::{CartItemUpdate, CartRef, CartSnapshot};
use crate::errors::Result;

/// Remote cart operations.
///
/// Every mutating call answers with the full server-confirmed cart, which
/// becomes the new source of truth in the store.
#[async_trait]
pub trait CartApiTrait: Send + Sync {
    /// Fetches the user's current (default or last active) cart.
    async fn fetch_cart(&self) -> Result<CartSnapshot>;

    /// Fetches one specific cart.
    async fn fetch_cart_by_id(&self, cart_id: &str) -> Result<CartSnapshot>;

    /// Lists the carts the user owns.
    async fn list_carts(&self) -> Result<Vec<CartRef>>;

    async fn update_cart_item(&self, update: CartItemUpdate) -> Result<CartSnapshot>;

    async fn remove_cart_item(&self, item_id: &str) -> Result<CartSnapshot>;
}
