//! # Validation Module
//!
//! Input validation for catalog items, accounts and cart quantities.
//!
//! ## Where Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Item::new ──────► validate_item_name, validate_price                  │
//! │  Account::new ───► validate_holder_name, validate_balance              │
//! │  Cart::add_line ─► validate_quantity, then availability (stock/expiry) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_item_name, validate_quantity};
//!
//! assert!(validate_item_name("Cheese").is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_name("name", name)
}

/// Validates an account holder name. Same rules as item names.
pub fn validate_holder_name(holder: &str) -> ValidationResult<()> {
    validate_name("holder", holder)
}

fn validate_name(field: &str, value: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use checkout_core::money::Money;
/// use checkout_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_major(100)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_cents(-1)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    non_negative("price", price)
}

/// Validates an opening account balance.
pub fn validate_balance(balance: Money) -> ValidationResult<()> {
    non_negative("balance", balance)
}

/// Validates an amount about to be charged. A negative charge would credit
/// the account.
pub fn validate_charge(amount: Money) -> ValidationResult<()> {
    non_negative("charge", amount)
}

fn non_negative(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(amount_out_of_range(field));
    }

    Ok(())
}

/// An amount outside `0..=i64::MAX` cents, either negative or too large to
/// compute.
pub(crate) fn amount_out_of_range(field: &str) -> ValidationError {
    ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: i64::MAX,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Mobile Scratch Card").is_ok());
        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_holder_name_reports_field() {
        let err = validate_holder_name("").unwrap_err();
        assert_eq!(err.to_string(), "holder is required");
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(matches!(
            validate_quantity(1000),
            Err(ValidationError::OutOfRange { max: 999, .. })
        ));
    }

    #[test]
    fn test_validate_balance() {
        assert!(validate_balance(Money::zero()).is_ok());
        assert!(validate_balance(Money::from_major(20000)).is_ok());
        assert!(validate_balance(Money::from_major(-1)).is_err());
    }

    #[test]
    fn test_validate_charge() {
        assert!(validate_charge(Money::zero()).is_ok());
        assert!(validate_charge(Money::from_major(502)).is_ok());
        assert_eq!(
            validate_charge(Money::from_cents(-1)).unwrap_err().to_string(),
            "charge must be between 0 and 9223372036854775807"
        );
    }
}
