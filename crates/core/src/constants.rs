use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Default base URL of the storefront backend
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Default timeout for backend requests, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Placeholder tax rate applied during local summary recomputation
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.10);

/// Flat shipping fee applied when the active subtotal is positive
pub const DEFAULT_FLAT_SHIPPING_FEE: Decimal = dec!(15.00);

/// Decimal precision for displayed money amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Badge counts above this value render as "99+"
pub const MAX_BADGE_COUNT: usize = 99;

/// Modal identifier used by the cart sidebar
pub const CART_MODAL_ID: &str = "cart";
