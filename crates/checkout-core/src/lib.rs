//! # checkout-core: Pure Business Logic for Checkout
//!
//! This crate holds the catalog, cart, account and checkout rules as pure
//! functions over owned data. Nothing here prints, reads the environment, or
//! looks at the wall clock directly.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    checkout-cli (binary)                        │   │
//! │  │    sample data ──► add_line ──► process_checkout ──► report     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │   Item    │  │   Money   │  │   Cart    │  │  Receipt  │  │   │
//! │  │   │  Account  │  │  Weight   │  │ CartLine  │  │ Shipment  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STDOUT • INJECTED CLOCK                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Catalog, Account, CheckoutConfig)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`weight`] - Shipping weights and the per-kilogram shipping rate
//! - [`clock`] - Injectable wall clock for expiry checks
//! - [`cart`] - Cart and cart lines
//! - [`shipment`] - Shipment notice assembly and rendering
//! - [`checkout`] - The checkout procedure and receipt
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{process_checkout, Account, Cart, Catalog, CheckoutConfig, Item, Money};
//! use checkout_core::clock::SystemClock;
//! use checkout_core::weight::Weight;
//!
//! let mut catalog = Catalog::new();
//! let cheese = catalog.insert(
//!     Item::new("Cheese", Money::from_major(100), 10).unwrap().shippable(Weight::from_grams(200)),
//! );
//! let biscuits = catalog.insert(Item::new("Biscuits", Money::from_major(150), 3).unwrap());
//!
//! let mut cart = Cart::new();
//! cart.add_line(catalog.get(cheese).unwrap(), 2, &SystemClock).unwrap();
//! cart.add_line(catalog.get(biscuits).unwrap(), 2, &SystemClock).unwrap();
//!
//! let mut account = Account::new("John Doe", Money::from_major(20000)).unwrap();
//! let outcome = process_checkout(&cart, &mut catalog, &mut account, &CheckoutConfig::default()).unwrap();
//!
//! assert_eq!(outcome.receipt.total, Money::from_major(502));
//! assert_eq!(account.balance(), Money::from_major(19498));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod clock;
pub mod error;
pub mod money;
pub mod shipment;
pub mod types;
pub mod validation;
pub mod weight;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use checkout::{process_checkout, CheckoutOutcome, Receipt, ReceiptLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use shipment::{ShipmentLine, ShipmentNotice};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum lines allowed in a single cart.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity on a single cart line.
///
/// Catches fat-fingered quantities (1000 instead of 10) before they reach
/// stock checks.
pub const MAX_LINE_QUANTITY: u32 = 999;
