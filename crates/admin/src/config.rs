//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional. The storefront variables (`WIGHUB_DATA_DIR`, pricing) apply
//! here as well, plus:
//! - `WIGHUB_LOW_STOCK_THRESHOLD` - Stock at or below which a product is flagged (default: 5)

use std::path::PathBuf;

use thiserror::Error;
use wighub_storefront::{PricingConfig, StorefrontConfig, config::DEFAULT_DATA_DIR};

/// Default low stock threshold.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error(transparent)]
    Storefront(#[from] wighub_storefront::ConfigError),
}

/// Admin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Directory of the file store
    pub data_dir: PathBuf,
    /// Pricing rules, shared with the storefront
    pub pricing: PricingConfig,
    /// Stock at or below which the dashboard flags a product
    pub low_stock_threshold: u32,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            pricing: PricingConfig::default(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let StorefrontConfig { data_dir, pricing } = StorefrontConfig::from_env()?;

        Ok(Self {
            data_dir,
            pricing,
            low_stock_threshold: parse_threshold(
                std::env::var("WIGHUB_LOW_STOCK_THRESHOLD").ok(),
            )?,
        })
    }
}

fn parse_threshold(raw: Option<String>) -> Result<u32, ConfigError> {
    raw.map_or(Ok(DEFAULT_LOW_STOCK_THRESHOLD), |value| {
        value.trim().parse().map_err(|e: std::num::ParseIntError| {
            ConfigError::InvalidEnvVar("WIGHUB_LOW_STOCK_THRESHOLD".to_string(), e.to_string())
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_default_and_parse() {
        assert_eq!(parse_threshold(None).unwrap(), 5);
        assert_eq!(parse_threshold(Some(" 12 ".to_string())).unwrap(), 12);
    }

    #[test]
    fn test_threshold_rejects_garbage() {
        assert!(matches!(
            parse_threshold(Some("-3".to_string())),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
        assert!(matches!(
            parse_threshold(Some("lots".to_string())),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }
}
