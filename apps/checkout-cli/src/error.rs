//! # App Error Type
//!
//! Everything that can end a run. The `Display` text is what follows
//! `Error: ` on stderr, so domain failures pass their message through
//! unchanged.

use checkout_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Cart, funds, stock or validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An environment variable held a value we cannot use.
    #[error("invalid {key}={value:?}: expected {expected}")]
    Config {
        key: &'static str,
        value: String,
        expected: &'static str,
    },

    /// Writing the report failed (closed pipe, full disk).
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Core(CoreError::ItemUnavailable { .. }) => "ITEM_UNAVAILABLE",
            AppError::Core(CoreError::EmptyCart) => "EMPTY_CART",
            AppError::Core(CoreError::InsufficientFunds { .. }) => "INSUFFICIENT_FUNDS",
            AppError::Core(CoreError::InsufficientStock { .. }) => "INSUFFICIENT_STOCK",
            AppError::Core(CoreError::ItemNotFound(_)) => "NOT_FOUND",
            AppError::Core(CoreError::CartTooLarge { .. } | CoreError::Validation(_)) => {
                "VALIDATION_ERROR"
            }
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Io(_) | AppError::Json(_) => "OUTPUT_ERROR",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
