//! Store module - shared state, typed actions and the reducer.

mod app_store;
mod store_actions;
mod store_model;
mod store_reducer;

pub use app_store::Store;
pub use store_actions::Action;
pub use store_model::{AppState, AuthState, CartState, NotificationState, UiState, UserRole};
pub use store_reducer::reduce;
