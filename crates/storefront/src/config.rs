//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `WIGHUB_DATA_DIR` - Directory of the file store (default: `./data`)
//! - `WIGHUB_TAX_RATE` - Tax rate in percent (default: 8)
//! - `WIGHUB_FREE_SHIPPING_THRESHOLD` - Subtotal at which shipping is free (default: 75)
//! - `WIGHUB_SHIPPING_FEE` - Flat shipping fee below the threshold (default: 10)
//! - `WIGHUB_CURRENCY` - ISO 4217 display currency (default: USD)

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;
use wighub_core::{CurrencyCode, Price};

/// Default directory of the file store.
pub const DEFAULT_DATA_DIR: &str = "./data";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory of the file store
    pub data_dir: PathBuf,
    /// Cart and checkout pricing
    pub pricing: PricingConfig,
}

/// Pricing rules applied to carts and orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingConfig {
    /// Tax rate in percent (8 means 8%)
    pub tax_rate: Decimal,
    /// Subtotal at or above which shipping is free
    pub free_shipping_threshold: Decimal,
    /// Flat shipping fee charged below the threshold
    pub shipping_fee: Decimal,
    /// Currency used when displaying amounts
    pub currency: CurrencyCode,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::from(8),
            free_shipping_threshold: Decimal::from(75),
            shipping_fee: Decimal::from(10),
            currency: CurrencyCode::USD,
        }
    }
}

impl PricingConfig {
    /// Wrap `amount` in this configuration's display currency.
    #[must_use]
    pub const fn price(&self, amount: Decimal) -> Price {
        Price::new(amount, self.currency)
    }

    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            tax_rate: non_negative_decimal(
                "WIGHUB_TAX_RATE",
                get_optional_env("WIGHUB_TAX_RATE"),
                defaults.tax_rate,
            )?,
            free_shipping_threshold: non_negative_decimal(
                "WIGHUB_FREE_SHIPPING_THRESHOLD",
                get_optional_env("WIGHUB_FREE_SHIPPING_THRESHOLD"),
                defaults.free_shipping_threshold,
            )?,
            shipping_fee: non_negative_decimal(
                "WIGHUB_SHIPPING_FEE",
                get_optional_env("WIGHUB_SHIPPING_FEE"),
                defaults.shipping_fee,
            )?,
            currency: get_env_or_default("WIGHUB_CURRENCY", defaults.currency.code())
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("WIGHUB_CURRENCY".to_string(), e))?,
        })
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            data_dir: PathBuf::from(get_env_or_default("WIGHUB_DATA_DIR", DEFAULT_DATA_DIR)),
            pricing: PricingConfig::from_env()?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a non-negative decimal, falling back to `default` when unset.
fn non_negative_decimal(
    key: &str,
    raw: Option<String>,
    default: Decimal,
) -> Result<Decimal, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value: Decimal = raw
        .trim()
        .parse()
        .map_err(|e: rust_decimal::Error| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if value.is_sign_negative() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be negative".to_string(),
        ));
    }
    Ok(value)
}
