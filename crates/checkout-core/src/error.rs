//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Cart, funds and stock failures                 │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  checkout-cli errors (binary)                                          │
//! │  └── AppError         - Core + I/O + config, printed as "Error: ..."   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr, exit 1         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (item name, holder, quantities)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::money::Money;
use crate::types::ItemId;

// =============================================================================
// Core Error
// =============================================================================

/// Cart, checkout and inventory failures.
///
/// Every variant aborts the checkout in progress. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The item cannot be added to a cart in the requested quantity.
    ///
    /// ## When This Occurs
    /// - Requested quantity exceeds current stock
    /// - The item tracks expiry and the expiry instant has passed
    #[error("Product {item} not available: requested {requested}, in stock {available}{}", expiry_suffix(.expired))]
    ItemUnavailable {
        item: String,
        requested: u32,
        available: u32,
        expired: bool,
    },

    /// Checkout was attempted on a cart with no lines.
    #[error("Cannot checkout with empty cart")]
    EmptyCart,

    /// The account balance does not cover the checkout total.
    #[error("Insufficient balance for {holder}: required {required}, available {balance}")]
    InsufficientFunds {
        holder: String,
        required: Money,
        balance: Money,
    },

    /// Stock dropped below what the cart needs.
    ///
    /// ## When This Occurs
    /// `add_line` already checked availability, so this only fires when
    /// stock changed between adding the line and checking out, or when
    /// several lines for the same item together ask for more than exists.
    ///
    /// ```text
    /// add_line(Cheese, 6)  stock=10 ✓
    /// add_line(Cheese, 6)  stock=10 ✓
    ///      │
    ///      ▼
    /// checkout: demand 12 > stock 10
    ///      │
    ///      ▼
    /// InsufficientStock { item: "Cheese", available: 10, requested: 12 }
    /// ```
    #[error("Not enough stock for {item}: available {available}, requested {requested}")]
    InsufficientStock {
        item: String,
        available: u32,
        requested: u32,
    },

    /// A cart line points at an item the catalog does not hold.
    #[error("Item not found in catalog: {0}")]
    ItemNotFound(ItemId),

    /// Cart has reached the maximum number of lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

fn expiry_suffix(expired: &bool) -> &'static str {
    if *expired {
        " (expired)"
    } else {
        ""
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised while constructing items and accounts or adding cart lines, before
/// any business rule runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            item: "Cheese".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for Cheese: available 3, requested 5"
        );

        assert_eq!(
            CoreError::EmptyCart.to_string(),
            "Cannot checkout with empty cart"
        );
    }

    #[test]
    fn test_unavailable_message_marks_expiry() {
        let err = CoreError::ItemUnavailable {
            item: "Biscuits".to_string(),
            requested: 5,
            available: 3,
            expired: false,
        };
        assert_eq!(
            err.to_string(),
            "Product Biscuits not available: requested 5, in stock 3"
        );

        let err = CoreError::ItemUnavailable {
            item: "Milk".to_string(),
            requested: 1,
            available: 4,
            expired: true,
        };
        assert_eq!(
            err.to_string(),
            "Product Milk not available: requested 1, in stock 4 (expired)"
        );
    }

    #[test]
    fn test_insufficient_funds_names_holder() {
        let err = CoreError::InsufficientFunds {
            holder: "John Doe".to_string(),
            required: Money::from_major(502),
            balance: Money::from_major(10),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance for John Doe: required 502.00, available 10.00"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
