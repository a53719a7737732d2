//! # Configuration
//!
//! Runtime configuration, layered over defaults.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`CHECKOUT_*`)
//! 2. Defaults (this file)
//!
//! ## Environment Variables
//! - `CHECKOUT_SHIPPING_RATE`: shipping per kg in major units (`10`, `12.50`)
//! - `CHECKOUT_SHIPPING_WEIGHT`: `per-line` (default) or `per-unit`
//! - `CHECKOUT_OUTPUT`: `text` (default) or `json`

use checkout_core::weight::ShippingRate;
use checkout_core::{CheckoutConfig, Money, WeightAggregation};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const SHIPPING_RATE_VAR: &str = "CHECKOUT_SHIPPING_RATE";
pub const SHIPPING_WEIGHT_VAR: &str = "CHECKOUT_SHIPPING_WEIGHT";
pub const OUTPUT_VAR: &str = "CHECKOUT_OUTPUT";

/// How the report is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Shipment notice and receipt as plain text.
    #[default]
    Text,
    /// The whole checkout outcome as one JSON document.
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub checkout: CheckoutConfig,
    pub output: OutputFormat,
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from any key lookup. Unset keys keep defaults;
    /// set but malformed keys are errors.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(raw) = lookup(SHIPPING_RATE_VAR) {
            let rate = parse_major_units(&raw).ok_or_else(|| AppError::Config {
                key: SHIPPING_RATE_VAR,
                value: raw.clone(),
                expected: "a non-negative amount with at most two decimals",
            })?;
            config.checkout.shipping_rate = ShippingRate::per_kg(rate);
        }

        if let Some(raw) = lookup(SHIPPING_WEIGHT_VAR) {
            config.checkout.weight_aggregation = match raw.trim() {
                "per-line" => WeightAggregation::PerLine,
                "per-unit" => WeightAggregation::PerUnit,
                _ => {
                    return Err(AppError::Config {
                        key: SHIPPING_WEIGHT_VAR,
                        value: raw.clone(),
                        expected: "per-line or per-unit",
                    })
                }
            };
        }

        if let Some(raw) = lookup(OUTPUT_VAR) {
            config.output = match raw.trim() {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(AppError::Config {
                        key: OUTPUT_VAR,
                        value: raw.clone(),
                        expected: "text or json",
                    })
                }
            };
        }

        Ok(config)
    }
}

/// Parses `"12"`, `"12.5"` or `"12.50"` into Money. Rejects negatives and
/// more than two decimals.
fn parse_major_units(raw: &str) -> Option<Money> {
    let raw = raw.trim();
    let (major, minor) = match raw.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (raw, ""),
    };

    if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if minor.len() > 2 || !minor.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let major: i64 = major.parse().ok()?;
    let minor: i64 = match minor.len() {
        0 => 0,
        1 => minor.parse::<i64>().ok()? * 10,
        _ => minor.parse().ok()?,
    };
    Some(Money::from_major_minor(major, minor))
}
