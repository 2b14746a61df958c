//! Async cart actions: call the backend, then dispatch the outcome.

use std::sync::Arc;

use log::{debug, error};

use super::cart_model::{CartItemUpdate, CartRef, CartSnapshot};
use super::cart_traits::CartApiTrait;
use crate::errors::Result;
use crate::store::{Action, Store};

#[derive(Clone)]
pub struct CartThunks {
    api: Arc<dyn CartApiTrait>,
    store: Store,
}

impl CartThunks {
    pub fn new(api: Arc<dyn CartApiTrait>, store: Store) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub async fn fetch_cart(&self) -> Result<CartSnapshot> {
        self.store.dispatch(Action::CartRequested);
        match self.api.fetch_cart().await {
            Ok(snapshot) => {
                self.store.dispatch(Action::CartLoaded {
                    cart_id: None,
                    snapshot: snapshot.clone(),
                });
                Ok(snapshot)
            }
            Err(e) => {
                error!("[Cart] Failed to fetch cart: {}", e);
                self.store.dispatch(Action::CartRequestFailed(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn fetch_cart_by_id(&self, cart_id: &str) -> Result<CartSnapshot> {
        self.store.dispatch(Action::CartRequested);
        match self.api.fetch_cart_by_id(cart_id).await {
            Ok(snapshot) => {
                self.store.dispatch(Action::CartLoaded {
                    cart_id: Some(cart_id.to_string()),
                    snapshot: snapshot.clone(),
                });
                Ok(snapshot)
            }
            Err(e) => {
                error!("[Cart] Failed to fetch cart {}: {}", cart_id, e);
                self.store.dispatch(Action::CartRequestFailed(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn fetch_available_carts(&self) -> Result<Vec<CartRef>> {
        match self.api.list_carts().await {
            Ok(carts) => {
                debug!("[Cart] {} carts available", carts.len());
                self.store
                    .dispatch(Action::AvailableCartsLoaded(carts.clone()));
                Ok(carts)
            }
            Err(e) => {
                error!("[Cart] Failed to fetch available carts: {}", e);
                Err(e)
            }
        }
    }

    pub async fn update_cart_item(&self, update: CartItemUpdate) -> Result<CartSnapshot> {
        update.validate()?;
        debug!("[Cart] update item {}: {:?}", update.item_id, update);
        let result = self.api.update_cart_item(update).await;
        self.settle(result)
    }

    pub async fn remove_cart_item(&self, item_id: &str) -> Result<CartSnapshot> {
        debug!("[Cart] remove item {}", item_id);
        let result = self.api.remove_cart_item(item_id).await;
        self.settle(result)
    }

    fn settle(&self, result: Result<CartSnapshot>) -> Result<CartSnapshot> {
        match result {
            Ok(snapshot) => {
                self.store.dispatch(Action::CartConfirmed(snapshot.clone()));
                Ok(snapshot)
            }
            Err(e) => {
                self.store.dispatch(Action::CartMutationFailed(e.to_string()));
                Err(e)
            }
        }
    }
}
