//! Client configuration.
//!
//! Values come from `STOREFRONT_*` environment variables, falling back to the
//! defaults in [`crate::constants`].

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_FLAT_SHIPPING_FEE, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_TAX_RATE,
};
use crate::errors::{Error, Result};

pub const ENV_API_URL: &str = "STOREFRONT_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "STOREFRONT_TIMEOUT_SECS";
pub const ENV_ACCESS_TOKEN: &str = "STOREFRONT_ACCESS_TOKEN";
pub const ENV_TAX_RATE: &str = "STOREFRONT_TAX_RATE";
pub const ENV_SHIPPING_FEE: &str = "STOREFRONT_SHIPPING_FEE";

/// Parameters of the local (placeholder) pricing model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    pub tax_rate: Decimal,
    pub flat_shipping_fee: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            flat_shipping_fee: DEFAULT_FLAT_SHIPPING_FEE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub pricing: PricingConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            access_token: None,
            pricing: PricingConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_URL) {
            config.api_base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(raw) = get(ENV_TIMEOUT_SECS) {
            config.request_timeout_secs = raw.trim().parse::<u64>().map_err(|e| {
                Error::InvalidConfigValue(format!("{}='{}': {}", ENV_TIMEOUT_SECS, raw, e))
            })?;
        }
        config.access_token = get(ENV_ACCESS_TOKEN);
        if let Some(raw) = get(ENV_TAX_RATE) {
            config.pricing.tax_rate = parse_decimal(ENV_TAX_RATE, &raw)?;
        }
        if let Some(raw) = get(ENV_SHIPPING_FEE) {
            config.pricing.flat_shipping_fee = parse_decimal(ENV_SHIPPING_FEE, &raw)?;
        }

        Ok(config)
    }
}

fn parse_decimal(key: &str, raw: &str) -> Result<Decimal> {
    let value = Decimal::from_str(raw.trim())
        .map_err(|e| Error::InvalidConfigValue(format!("{}='{}': {}", key, raw, e)))?;
    if value.is_sign_negative() {
        return Err(Error::InvalidConfigValue(format!(
            "{} must not be negative",
            key
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let config = StorefrontConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.pricing.tax_rate, dec!(0.10));
        assert_eq!(config.pricing.flat_shipping_fee, dec!(15.00));
    }

    #[test]
    fn test_overrides_from_env() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            (ENV_API_URL, "https://shop.example.com/"),
            (ENV_TIMEOUT_SECS, "5"),
            (ENV_ACCESS_TOKEN, "tok"),
            (ENV_TAX_RATE, "0.2"),
            (ENV_SHIPPING_FEE, "4.99"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url, "https://shop.example.com");
        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.access_token.as_deref(), Some("tok"));
        assert_eq!(config.pricing.tax_rate, dec!(0.2));
        assert_eq!(config.pricing.flat_shipping_fee, dec!(4.99));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config =
            StorefrontConfig::from_lookup(lookup(&[(ENV_ACCESS_TOKEN, "  "), (ENV_API_URL, "")]))
                .unwrap();
        assert!(config.access_token.is_none());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_invalid_numbers_are_rejected() {
        let err = StorefrontConfig::from_lookup(lookup(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));

        let err = StorefrontConfig::from_lookup(lookup(&[(ENV_TAX_RATE, "-0.1")])).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue(_)));
    }
}
