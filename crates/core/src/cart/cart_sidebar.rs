//! Cart sidebar controller.
//!
//! Owns the locally displayed cart and runs every item mutation through the
//! same protocol: compute locally, apply locally, then confirm from the store
//! or restore the last server-confirmed state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, error, warn};
use tokio::sync::watch;

use super::cart_model::{CartItem, CartItemUpdate, CartRef, CartSnapshot, CartSummary};
use super::cart_summary::compute_summary;
use super::cart_thunks::CartThunks;
use super::cart_traits::CartApiTrait;
use crate::config::PricingConfig;
use crate::constants::CART_MODAL_ID;
use crate::errors::Result;
use crate::navigation::{Navigator, Route};
use crate::optimistic::{InFlightTracker, MutationOutcome, Speculative};
use crate::store::{Action, AppState, Store};

struct SidebarState {
    view: Speculative<CartSnapshot>,
    active_cart: Speculative<Option<String>>,
    in_flight: InFlightTracker,
    receiver: watch::Receiver<AppState>,
}

impl SidebarState {
    // Copies the store's confirmed cart into the local mirrors.
    fn reconcile(&mut self) {
        let (snapshot, active) = {
            let app = self.receiver.borrow_and_update();
            (app.cart.snapshot.clone(), app.cart.active_cart_id.clone())
        };
        self.view.reconcile(snapshot);
        self.active_cart.reconcile(active);
    }
}

pub struct CartSidebar {
    thunks: CartThunks,
    navigator: Arc<dyn Navigator>,
    pricing: PricingConfig,
    state: Mutex<SidebarState>,
}

impl CartSidebar {
    pub fn new(
        api: Arc<dyn CartApiTrait>,
        store: Store,
        navigator: Arc<dyn Navigator>,
        pricing: PricingConfig,
    ) -> Self {
        let receiver = store.subscribe();
        let (snapshot, active) =
            store.select(|s| (s.cart.snapshot.clone(), s.cart.active_cart_id.clone()));
        Self {
            thunks: CartThunks::new(api, store),
            navigator,
            pricing,
            state: Mutex::new(SidebarState {
                view: Speculative::new(snapshot),
                active_cart: Speculative::new(active),
                in_flight: InFlightTracker::new(),
                receiver,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SidebarState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn store(&self) -> &Store {
        self.thunks.store()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────

    /// Opens the sidebar and loads its content.
    pub async fn open(&self) -> Result<()> {
        self.store().dispatch(Action::ModalOpened(CART_MODAL_ID.to_string()));
        self.load().await
    }

    /// Fetches the cart, and the cart list for professional buyers.
    ///
    /// A failed cart list fetch is logged and does not fail the load.
    pub async fn load(&self) -> Result<()> {
        let result = self.thunks.fetch_cart().await;
        self.sync_from_store();
        result?;

        if self.store().select(|s| s.auth.can_manage_multiple_carts()) {
            let _ = self.load_available_carts().await;
        }
        Ok(())
    }

    /// Refreshes the list of carts. Only professional buyers own several.
    pub async fn load_available_carts(&self) -> Result<Vec<CartRef>> {
        if !self.store().select(|s| s.auth.can_manage_multiple_carts()) {
            return Ok(Vec::new());
        }
        self.thunks.fetch_available_carts().await
    }

    /// Copies the store's cart into the local mirror when the confirmed cart
    /// or active cart id changed. Other store changes leave in-flight
    /// optimistic edits alone. Returns whether anything was copied.
    pub fn sync_from_store(&self) -> bool {
        let mut state = self.lock();
        if !state.receiver.has_changed().unwrap_or(false) {
            return false;
        }
        let (snapshot, active) = {
            let app = state.receiver.borrow_and_update();
            (app.cart.snapshot.clone(), app.cart.active_cart_id.clone())
        };
        if &snapshot == state.view.confirmed() && &active == state.active_cart.confirmed() {
            return false;
        }
        state.view.reconcile(snapshot);
        state.active_cart.reconcile(active);
        true
    }

    pub fn close(&self) {
        self.store().dispatch(Action::ModalClosed(CART_MODAL_ID.to_string()));
    }

    /// Closes the sidebar and navigates to checkout. Refused for an empty cart.
    pub fn checkout(&self) -> bool {
        if self.is_empty() {
            debug!("[Cart] Checkout refused: no active items");
            return false;
        }
        self.close();
        self.navigator.navigate(&Route::Checkout);
        true
    }

    pub fn view_full_cart(&self) {
        self.close();
        self.navigator.navigate(&Route::Cart);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Item mutations
    // ─────────────────────────────────────────────────────────────────────

    pub async fn set_quantity(&self, item_id: &str, quantity: u32) -> MutationOutcome {
        if quantity < 1 {
            debug!("[Cart] Ignoring quantity {} for item {}", quantity, item_id);
            return MutationOutcome::Rejected;
        }

        let pricing = self.pricing;
        let started = self.begin(item_id, |cart| {
            if let Some(item) = cart.items.iter_mut().find(|i| i.id == item_id) {
                item.quantity = quantity;
            }
            recompute(cart, &pricing);
        });
        if !started {
            return MutationOutcome::Rejected;
        }

        let result = self
            .thunks
            .update_cart_item(CartItemUpdate::quantity(item_id, quantity))
            .await;
        self.settle(item_id, "update quantity", result)
    }

    pub async fn increment(&self, item_id: &str) -> MutationOutcome {
        match self.item(item_id) {
            Some(item) => self.set_quantity(item_id, item.quantity.saturating_add(1)).await,
            None => MutationOutcome::Rejected,
        }
    }

    pub async fn decrement(&self, item_id: &str) -> MutationOutcome {
        match self.item(item_id) {
            Some(item) => self.set_quantity(item_id, item.quantity.saturating_sub(1)).await,
            None => MutationOutcome::Rejected,
        }
    }

    pub async fn remove_item(&self, item_id: &str) -> MutationOutcome {
        let pricing = self.pricing;
        let started = self.begin(item_id, |cart| {
            cart.items.retain(|i| i.id != item_id);
            recompute(cart, &pricing);
        });
        if !started {
            return MutationOutcome::Rejected;
        }

        let result = self.thunks.remove_cart_item(item_id).await;
        self.settle(item_id, "remove item", result)
    }

    pub async fn save_for_later(&self, item_id: &str) -> MutationOutcome {
        self.set_saved_for_later(item_id, true).await
    }

    pub async fn move_to_cart(&self, item_id: &str) -> MutationOutcome {
        self.set_saved_for_later(item_id, false).await
    }

    async fn set_saved_for_later(&self, item_id: &str, saved: bool) -> MutationOutcome {
        if self
            .item(item_id)
            .is_some_and(|item| item.is_saved_for_later == saved)
        {
            debug!("[Cart] Item {} already has saved flag {}", item_id, saved);
            return MutationOutcome::Rejected;
        }

        let pricing = self.pricing;
        let started = self.begin(item_id, |cart| {
            if let Some(item) = cart.items.iter_mut().find(|i| i.id == item_id) {
                item.is_saved_for_later = saved;
            }
            recompute(cart, &pricing);
        });
        if !started {
            return MutationOutcome::Rejected;
        }

        let result = self
            .thunks
            .update_cart_item(CartItemUpdate::saved_for_later(item_id, saved))
            .await;
        let op = if saved { "save for later" } else { "move to cart" };
        self.settle(item_id, op, result)
    }

    /// Switches the active cart and replaces the local content wholesale.
    ///
    /// The new id is shown immediately; if the fetch fails the previous id
    /// is restored alongside the last confirmed items.
    pub async fn switch_cart(&self, cart_id: &str) -> MutationOutcome {
        {
            let mut state = self.lock();
            if state.active_cart.current().as_deref() == Some(cart_id) {
                return MutationOutcome::Rejected;
            }
            state
                .active_cart
                .apply(|active| *active = Some(cart_id.to_string()));
        }

        let result = self.thunks.fetch_cart_by_id(cart_id).await;

        let mut state = self.lock();
        state.reconcile();
        match result {
            Ok(_) => MutationOutcome::Confirmed,
            Err(e) => {
                error!("[Cart] Failed to switch to cart {}: {}", cart_id, e);
                state.active_cart.rollback();
                MutationOutcome::RolledBack
            }
        }
    }

    // Phase 1 and 2: guard, then apply the speculative change.
    fn begin(&self, item_id: &str, mutate: impl FnOnce(&mut CartSnapshot)) -> bool {
        let mut state = self.lock();
        if state.view.current().item(item_id).is_none() {
            warn!("[Cart] Unknown cart item {}", item_id);
            return false;
        }
        if !state.in_flight.try_begin(item_id) {
            debug!("[Cart] Item {} already has a request in flight", item_id);
            return false;
        }
        state.view.apply(mutate);
        true
    }

    // Phase 3: take the store's confirmed state either way.
    fn settle(
        &self,
        item_id: &str,
        op: &str,
        result: Result<CartSnapshot>,
    ) -> MutationOutcome {
        let mut state = self.lock();
        let outcome = match result {
            Ok(_) => MutationOutcome::Confirmed,
            Err(e) => {
                error!("[Cart] Failed to {} for item {}: {}", op, item_id, e);
                MutationOutcome::RolledBack
            }
        };
        state.reconcile();
        state.in_flight.finish(item_id, outcome)
    }

    // ─────────────────────────────────────────────────────────────────────
    // View
    // ─────────────────────────────────────────────────────────────────────

    /// The displayed cart, including any in-flight optimistic changes.
    pub fn snapshot(&self) -> CartSnapshot {
        self.lock().view.current().clone()
    }

    pub fn item(&self, item_id: &str) -> Option<CartItem> {
        self.lock().view.current().item(item_id).cloned()
    }

    pub fn active_items(&self) -> Vec<CartItem> {
        self.lock().view.current().active_items().cloned().collect()
    }

    pub fn saved_items(&self) -> Vec<CartItem> {
        self.lock().view.current().saved_items().cloned().collect()
    }

    pub fn summary(&self) -> CartSummary {
        self.lock().view.current().summary.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().view.current().active_items().next().is_none()
    }

    pub fn is_updating(&self, item_id: &str) -> bool {
        self.lock().in_flight.is_pending(item_id)
    }

    pub fn active_cart_id(&self) -> Option<String> {
        self.lock().active_cart.current().clone()
    }

    pub fn available_carts(&self) -> Vec<CartRef> {
        self.store().select(|s| s.cart.available_carts.clone())
    }

    /// True while a full cart fetch (load or switch) is running.
    pub fn is_loading(&self) -> bool {
        self.store().select(|s| s.cart.is_loading)
    }
}

fn recompute(cart: &mut CartSnapshot, pricing: &PricingConfig) {
    cart.summary = compute_summary(&cart.items, cart.summary.discount_amount, pricing);
}
