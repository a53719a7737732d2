//! # Cart
//!
//! An ordered list of cart lines. Each line is an [`ItemId`] into the
//! catalog plus a requested quantity.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_line(item, qty, clock)                                             │
//! │     ├── qty <= 0 or > 999?        → ValidationError                     │
//! │     ├── 100 lines already?        → CartTooLarge                        │
//! │     ├── stock < qty or expired?   → ItemUnavailable                     │
//! │     └── OK → lines.push(CartLine)   (stock is NOT touched)              │
//! │                                                                         │
//! │  subtotal(catalog)          Σ unit_price × qty                          │
//! │  shippable_items(catalog)   one &Item per shippable line                │
//! │  shipment_lines(catalog)    what the shipment notice lists              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adding the same item twice yields two lines; insertion order is the
//! receipt order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::shipment::ShipmentLine;
use crate::types::{Catalog, Item, ItemId, WeightAggregation};
use crate::validation::{amount_out_of_range, validate_quantity};
use crate::MAX_CART_LINES;

/// One selection in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: ItemId,
    pub quantity: u32,
}

impl CartLine {
    /// Unit price × quantity, resolved against the catalog.
    pub fn line_total(&self, catalog: &Catalog) -> CoreResult<Money> {
        let item = catalog.require(self.item_id)?;
        item.unit_price()
            .checked_mul_quantity(self.quantity)
            .ok_or_else(|| amount_out_of_range("line total").into())
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Every line has `1 <= quantity <= MAX_LINE_QUANTITY`
/// - At most `MAX_CART_LINES` lines
/// - Every line was available (stock and expiry) when it was added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line for `quantity` units of `item`.
    ///
    /// Fails with `ItemUnavailable` if the item lacks the stock or has
    /// expired. Stock is only taken down at checkout.
    pub fn add_line<C: Clock + ?Sized>(
        &mut self,
        item: &Item,
        quantity: u32,
        clock: &C,
    ) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        if !item.is_available(quantity, clock) {
            debug!(item = item.name(), quantity, stock = item.stock(), "rejected cart line");
            return Err(CoreError::ItemUnavailable {
                item: item.name().to_string(),
                requested: quantity,
                available: item.stock(),
                expired: item.is_currently_expired(clock),
            });
        }

        self.lines.push(CartLine {
            item_id: item.id(),
            quantity,
        });
        debug!(item = item.name(), quantity, lines = self.lines.len(), "added cart line");
        Ok(())
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Σ unit price × quantity over all lines.
    pub fn subtotal(&self, catalog: &Catalog) -> CoreResult<Money> {
        self.lines.iter().try_fold(Money::zero(), |subtotal, line| -> CoreResult<Money> {
            subtotal
                .checked_add(line.line_total(catalog)?)
                .ok_or_else(|| amount_out_of_range("subtotal").into())
        })
    }

    /// One reference per line whose item is shippable, in cart order.
    ///
    /// A line with quantity 3 still yields a single reference.
    pub fn shippable_items<'c>(&self, catalog: &'c Catalog) -> CoreResult<Vec<&'c Item>> {
        let mut shippable = Vec::new();
        for line in &self.lines {
            let item = catalog.require(line.item_id)?;
            if item.is_shippable() {
                shippable.push(item);
            }
        }
        Ok(shippable)
    }

    /// The shipment notice entries for this cart.
    ///
    /// `PerLine` lists each shippable line once with a unit count of 1;
    /// `PerUnit` carries the line quantity.
    pub fn shipment_lines(
        &self,
        catalog: &Catalog,
        aggregation: WeightAggregation,
    ) -> CoreResult<Vec<ShipmentLine>> {
        let mut shipment = Vec::new();
        for line in &self.lines {
            let item = catalog.require(line.item_id)?;
            let Some(unit_weight) = item.shipping_weight() else {
                continue;
            };
            let quantity = match aggregation {
                WeightAggregation::PerLine => 1,
                WeightAggregation::PerUnit => line.quantity,
            };
            shipment.push(ShipmentLine::new(item.name(), quantity, unit_weight)?);
        }
        Ok(shipment)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::error::ValidationError;
    use crate::weight::Weight;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    struct Fixture {
        catalog: Catalog,
        cheese: ItemId,
        biscuits: ItemId,
        tv: ItemId,
    }

    fn fixture() -> Fixture {
        let mut catalog = Catalog::new();
        let cheese = catalog.insert(
            Item::new("Cheese", Money::from_major(100), 10)
                .unwrap()
                .shippable(Weight::from_grams(200)),
        );
        let biscuits = catalog.insert(Item::new("Biscuits", Money::from_major(150), 3).unwrap());
        let tv = catalog.insert(
            Item::new("TV", Money::from_major(15000), 3)
                .unwrap()
                .shippable(Weight::from_grams(5000)),
        );
        Fixture {
            catalog,
            cheese,
            biscuits,
            tv,
        }
    }

    fn add(cart: &mut Cart, f: &Fixture, id: ItemId, qty: u32) -> CoreResult<()> {
        cart.add_line(f.catalog.get(id).unwrap(), qty, &clock())
    }

    #[test]
    fn test_add_line_and_subtotal() {
        let f = fixture();
        let mut cart = Cart::new();
        assert!(cart.is_empty());

        add(&mut cart, &f, f.cheese, 2).unwrap();
        add(&mut cart, &f, f.biscuits, 2).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 4);
        assert_eq!(cart.subtotal(&f.catalog).unwrap(), Money::from_major(500));
        assert_eq!(cart.lines()[0].item_id, f.cheese);
    }

    #[test]
    fn test_add_line_over_stock_is_unavailable() {
        let f = fixture();
        let mut cart = Cart::new();

        let err = add(&mut cart, &f, f.biscuits, 5).unwrap_err();
        assert_eq!(
            err,
            CoreError::ItemUnavailable {
                item: "Biscuits".to_string(),
                requested: 5,
                available: 3,
                expired: false,
            }
        );
        assert!(cart.is_empty());
        assert_eq!(f.catalog.get(f.biscuits).unwrap().stock(), 3);
    }

    #[test]
    fn test_add_line_expired_is_unavailable() {
        let mut catalog = Catalog::new();
        let milk = catalog.insert(
            Item::new("Milk", Money::from_major(20), 5)
                .unwrap()
                .with_expiry(clock().now() - Duration::hours(1), Weight::from_grams(1000)),
        );
        let mut cart = Cart::new();

        let err = cart
            .add_line(catalog.get(milk).unwrap(), 1, &clock())
            .unwrap_err();
        assert!(matches!(err, CoreError::ItemUnavailable { expired: true, .. }));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_line_rejects_bad_quantity() {
        let f = fixture();
        let mut cart = Cart::new();

        let err = add(&mut cart, &f, f.cheese, 0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_cart_line_limit() {
        let mut catalog = Catalog::new();
        let card = catalog.insert(Item::new("Scratch Card", Money::from_major(50), 999).unwrap());
        let item = catalog.get(card).unwrap();
        let mut cart = Cart::new();

        for _ in 0..MAX_CART_LINES {
            cart.add_line(item, 1, &clock()).unwrap();
        }
        assert_eq!(
            cart.add_line(item, 1, &clock()),
            Err(CoreError::CartTooLarge { max: MAX_CART_LINES })
        );
    }

    #[test]
    fn test_shippable_items_one_per_line() {
        let f = fixture();
        let mut cart = Cart::new();
        add(&mut cart, &f, f.cheese, 3).unwrap();
        add(&mut cart, &f, f.biscuits, 1).unwrap();
        add(&mut cart, &f, f.tv, 1).unwrap();

        let names: Vec<_> = cart
            .shippable_items(&f.catalog)
            .unwrap()
            .into_iter()
            .map(Item::name)
            .collect();
        assert_eq!(names, ["Cheese", "TV"]);
    }

    #[test]
    fn test_shipment_lines_by_aggregation() {
        let f = fixture();
        let mut cart = Cart::new();
        add(&mut cart, &f, f.cheese, 3).unwrap();

        let per_line = cart
            .shipment_lines(&f.catalog, WeightAggregation::PerLine)
            .unwrap();
        assert_eq!(per_line[0].quantity, 1);
        assert_eq!(per_line[0].total_weight(), Weight::from_grams(200));

        let per_unit = cart
            .shipment_lines(&f.catalog, WeightAggregation::PerUnit)
            .unwrap();
        assert_eq!(per_unit[0].quantity, 3);
        assert_eq!(per_unit[0].total_weight(), Weight::from_grams(600));
    }

    #[test]
    fn test_unknown_item_is_reported() {
        let f = fixture();
        let mut cart = Cart::new();
        add(&mut cart, &f, f.cheese, 1).unwrap();

        let empty = Catalog::new();
        assert_eq!(
            cart.subtotal(&empty),
            Err(CoreError::ItemNotFound(f.cheese))
        );
    }

    #[test]
    fn test_subtotal_overflow_is_an_error() {
        let mut catalog = Catalog::new();
        let gold = catalog.insert(Item::new("Gold", Money::from_cents(i64::MAX), 5).unwrap());
        let item = catalog.get(gold).unwrap();

        let mut cart = Cart::new();
        cart.add_line(item, 2, &clock()).unwrap();
        assert!(matches!(
            cart.lines()[0].line_total(&catalog),
            Err(CoreError::Validation(ValidationError::OutOfRange { ref field, .. })) if field == "line total"
        ));

        let mut cart = Cart::new();
        cart.add_line(item, 1, &clock()).unwrap();
        cart.add_line(item, 1, &clock()).unwrap();
        assert!(matches!(
            cart.subtotal(&catalog),
            Err(CoreError::Validation(ValidationError::OutOfRange { ref field, .. })) if field == "subtotal"
        ));
    }

    proptest! {
        /// add_line never accepts more than is in stock, and never moves stock.
        #[test]
        fn add_line_respects_stock(stock in 0u32..50, qty in 1u32..100) {
            let mut catalog = Catalog::new();
            let id = catalog.insert(Item::new("Widget", Money::from_major(1), stock).unwrap());
            let mut cart = Cart::new();

            let result = cart.add_line(catalog.get(id).unwrap(), qty, &clock());

            prop_assert_eq!(result.is_ok(), qty <= stock);
            prop_assert_eq!(cart.len(), usize::from(qty <= stock));
            prop_assert_eq!(catalog.get(id).unwrap().stock(), stock);
        }
    }
}
