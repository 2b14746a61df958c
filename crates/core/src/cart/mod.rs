//! Cart module - models, local pricing, backend contract and the sidebar.

mod cart_model;
mod cart_sidebar;
mod cart_summary;
mod cart_thunks;
mod cart_traits;


pub use cart_model::{CartItem, CartItemUpdate, CartRef, CartSnapshot, CartSummary};
pub use cart_sidebar::CartSidebar;
pub use cart_summary::compute_summary;
pub use cart_thunks::CartThunks;
pub use cart_traits::CartApiTrait;
