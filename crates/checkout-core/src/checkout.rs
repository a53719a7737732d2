//! # Checkout Procedure
//!
//! Turns a cart into a charge, a stock decrement, a shipment notice and a
//! receipt.
//!
//! ## Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Precondition   cart empty?                    → EmptyCart           │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  2. Pricing        subtotal = Σ unit_price × qty                        │
//! │                    weight   = Σ shipment line weights                   │
//! │                    fee      = weight(kg) × rate (10.00/kg)              │
//! │                    total    = subtotal + fee                            │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  3. Settlement     total > balance?               → InsufficientFunds   │
//! │                    demand per item > stock?       → InsufficientStock   │
//! │                    ── nothing has changed up to here ──                 │
//! │                    charge account, reduce stock per line                │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  4. Reporting      CheckoutOutcome { shipment notice?, receipt }        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Funds and stock are both checked before either is touched, so a failed
//! checkout never leaves the account charged or the catalog short.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, instrument};

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::shipment::ShipmentNotice;
use crate::types::{Account, Catalog, CheckoutConfig, ItemId};
use crate::validation::amount_out_of_range;
use crate::weight::Weight;

// =============================================================================
// Receipt
// =============================================================================

/// One receipt line, frozen at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub quantity: u32,
    pub name: String,
    pub line_total: Money,
}

/// What the customer paid and what is left.
///
/// `total == subtotal + shipping` and `subtotal == Σ line_total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub holder: String,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: Money,
    pub shipping_weight: Weight,
    pub shipping: Money,
    pub total: Money,
    pub remaining_balance: Money,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Checkout receipt **")?;
        for line in &self.lines {
            writeln!(f, "{}x {}    {}", line.quantity, line.name, line.line_total)?;
        }
        writeln!(f, "---")?;
        writeln!(f, "Subtotal    {}", self.subtotal)?;
        writeln!(f, "Shipping    {}", self.shipping)?;
        writeln!(f, "Amount    {}", self.total)?;
        writeln!(f, "Remaining balance: {}", self.remaining_balance)
    }
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOutcome {
    /// `None` when nothing in the cart ships.
    pub shipment: Option<ShipmentNotice>,
    pub receipt: Receipt,
}

/// Shipment notice (if any) followed by the receipt.
impl fmt::Display for CheckoutOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(shipment) = &self.shipment {
            write!(f, "{}", shipment)?;
        }
        write!(f, "{}", self.receipt)
    }
}

// =============================================================================
// Procedure
// =============================================================================

/// Checks out `cart` against `catalog` and `account`.
///
/// On error neither the catalog nor the account has changed.
#[instrument(skip_all, fields(holder = account.holder(), lines = cart.len()))]
pub fn process_checkout(
    cart: &Cart,
    catalog: &mut Catalog,
    account: &mut Account,
    config: &CheckoutConfig,
) -> CoreResult<CheckoutOutcome> {
    // 1. Precondition
    if cart.is_empty() {
        debug!("checkout rejected: empty cart");
        return Err(CoreError::EmptyCart);
    }

    // 2. Pricing. Every sum is checked; an amount that does not fit is a
    // validation error, never a wrapped total.
    let mut lines = Vec::with_capacity(cart.len());
    for line in cart.lines() {
        lines.push(ReceiptLine {
            quantity: line.quantity,
            name: catalog.require(line.item_id)?.name().to_string(),
            line_total: line.line_total(catalog)?,
        });
    }
    let subtotal = cart.subtotal(catalog)?;

    let shipment =
        ShipmentNotice::from_lines(cart.shipment_lines(catalog, config.weight_aggregation)?)?;
    let shipping_weight = shipment
        .as_ref()
        .map_or(Weight::zero(), ShipmentNotice::total_weight);
    let shipping = config
        .shipping_rate
        .fee_for(shipping_weight)
        .ok_or_else(|| amount_out_of_range("shipping fee"))?;
    let total = subtotal
        .checked_add(shipping)
        .ok_or_else(|| amount_out_of_range("total"))?;
    debug!(%subtotal, %shipping_weight, %shipping, %total, "priced cart");

    // 3. Settlement: validate everything, then mutate.
    let mut settled = account.clone();
    settled.charge(total).inspect_err(|err| debug!(%err, "checkout rejected"))?;
    check_stock(cart, catalog).inspect_err(|err| debug!(%err, "checkout rejected"))?;

    for line in cart.lines() {
        catalog.require_mut(line.item_id)?.reduce_stock(line.quantity)?;
    }
    *account = settled;

    info!(%total, remaining = %account.balance(), "checkout completed");

    // 4. Reporting
    Ok(CheckoutOutcome {
        shipment,
        receipt: Receipt {
            holder: account.holder().to_string(),
            lines,
            subtotal,
            shipping_weight,
            shipping,
            total,
            remaining_balance: account.balance(),
        },
    })
}

/// Fails if any item's combined demand across the cart exceeds its stock.
/// Items are checked in order of first appearance in the cart.
fn check_stock(cart: &Cart, catalog: &Catalog) -> CoreResult<()> {
    let mut demand: Vec<(ItemId, u32)> = Vec::new();
    for line in cart.lines() {
        match demand.iter_mut().find(|(id, _)| *id == line.item_id) {
            Some((_, qty)) => *qty += line.quantity,
            None => demand.push((line.item_id, line.quantity)),
        }
    }

    for (id, requested) in demand {
        let item = catalog.require(id)?;
        if requested > item.stock() {
            return Err(CoreError::InsufficientStock {
                item: item.name().to_string(),
                available: item.stock(),
                requested,
            });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
