//! Storefront Core - headless cart sidebar and notification center.
//!
//! The controllers in this crate own view state and talk to three injected
//! collaborators: the shared [`store::Store`], the backend API traits, and a
//! [`navigation::Navigator`]. Rendering is left to the host.

pub mod cart;
pub mod config;
pub mod constants;
pub mod errors;
pub mod navigation;
pub mod notifications;
pub mod optimistic;
pub mod store;

pub use config::{PricingConfig, StorefrontConfig};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
