//! Storefront API client - reqwest implementation of the backend contracts
//! defined in `storefront-core`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use storefront_api_client::HttpStorefrontClient;
//! use storefront_core::cart::CartApiTrait;
//!
//! let client = HttpStorefrontClient::new("https://shop.example.com", None)?;
//! let cart = client.fetch_cart().await?;
//! ```

mod client;
mod error;
mod types;

pub use client::HttpStorefrontClient;
pub use error::{ApiClientError, Result};
pub use types::*;
