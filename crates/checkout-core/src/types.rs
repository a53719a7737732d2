//! # Domain Types
//!
//! Core domain types used throughout checkout.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Catalog      │   │      Item       │   │    Account      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  owns Items     │──►│  id (UUID)      │   │  holder         │       │
//! │  │  by ItemId      │   │  name, price    │   │  balance        │       │
//! │  └─────────────────┘   │  stock          │   └─────────────────┘       │
//! │                        │  expires_at?    │                              │
//! │                        │  shippable      │   ┌─────────────────┐       │
//! │                        │  weight?        │   │ CheckoutConfig  │       │
//! │                        └─────────────────┘   │  shipping rate  │       │
//! │                                              │  aggregation    │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The catalog is the sole owner of items. Cart lines hold an [`ItemId`] and
//! resolve it against the catalog when pricing, so checkout can borrow the
//! catalog mutably to take stock down.

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::{
    validate_balance, validate_charge, validate_holder_name, validate_item_name, validate_price,
};
use crate::weight::{ShippingRate, Weight};

// =============================================================================
// Item Id
// =============================================================================

/// Catalog item identifier (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        ItemId(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A purchasable catalog entry.
///
/// ## Invariants
/// - `stock` never goes negative; over-reduction is an error, not a clamp
/// - `weight` is meaningful only for shippable or expiry-tracked items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    unit_price: Money,
    stock: u32,
    expires_at: Option<DateTime<Utc>>,
    shippable: bool,
    weight: Option<Weight>,
}

impl Item {
    /// Creates a non-expiring, non-shippable item.
    pub fn new(name: impl Into<String>, unit_price: Money, stock: u32) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(unit_price)?;

        Ok(Item {
            id: ItemId::new(),
            name,
            unit_price,
            stock,
            expires_at: None,
            shippable: false,
            weight: None,
        })
    }

    /// Tracks expiry for this item. Perishables carry a weight as well.
    #[must_use]
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>, weight: Weight) -> Self {
        self.expires_at = Some(expires_at);
        self.weight = Some(weight);
        self
    }

    /// Marks the item as shippable with the given per-unit weight.
    #[must_use]
    pub fn shippable(mut self, weight: Weight) -> Self {
        self.shippable = true;
        self.weight = Some(weight);
        self
    }

    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn stock(&self) -> u32 {
        self.stock
    }

    #[inline]
    pub fn is_shippable(&self) -> bool {
        self.shippable
    }

    #[inline]
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    /// Per-unit weight to ship, `None` for items that are not shipped.
    pub fn shipping_weight(&self) -> Option<Weight> {
        self.shippable.then(|| self.weight.unwrap_or_default())
    }

    /// True iff the item tracks expiry and `now` is strictly past it.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| now > expiry)
    }

    pub fn is_currently_expired<C: Clock + ?Sized>(&self, clock: &C) -> bool {
        self.is_expired_at(clock.now())
    }

    /// True iff `requested` units are in stock and the item has not expired.
    pub fn is_available<C: Clock + ?Sized>(&self, requested: u32, clock: &C) -> bool {
        self.stock >= requested && !self.is_currently_expired(clock)
    }

    /// Takes `amount` units out of stock.
    ///
    /// Leaves stock untouched when `amount` exceeds it.
    pub fn reduce_stock(&mut self, amount: u32) -> CoreResult<()> {
        self.stock = self
            .stock
            .checked_sub(amount)
            .ok_or_else(|| CoreError::InsufficientStock {
                item: self.name.clone(),
                available: self.stock,
                requested: amount,
            })?;
        Ok(())
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Owns every item a cart can reference. Iterates in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: HashMap<ItemId, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item and returns its id. Re-inserting an id replaces the entry.
    pub fn insert(&mut self, item: Item) -> ItemId {
        let id = item.id();
        match self.index.get(&id) {
            Some(&pos) => self.items[pos] = item,
            None => {
                self.index.insert(id, self.items.len());
                self.items.push(item);
            }
        }
        id
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).map(|&pos| &self.items[pos])
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.index.get(&id).map(|&pos| &mut self.items[pos])
    }

    /// Like [`Catalog::get`], failing with `ItemNotFound`.
    pub fn require(&self, id: ItemId) -> CoreResult<&Item> {
        self.get(id).ok_or(CoreError::ItemNotFound(id))
    }

    pub fn require_mut(&mut self, id: ItemId) -> CoreResult<&mut Item> {
        self.get_mut(id).ok_or(CoreError::ItemNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

// =============================================================================
// Account
// =============================================================================

/// A customer's spendable balance.
///
/// The balance only changes through [`Account::charge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    holder: String,
    balance: Money,
}

impl Account {
    pub fn new(holder: impl Into<String>, balance: Money) -> CoreResult<Self> {
        let holder = holder.into();
        validate_holder_name(&holder)?;
        validate_balance(balance)?;
        Ok(Account { holder, balance })
    }

    #[inline]
    pub fn holder(&self) -> &str {
        &self.holder
    }

    #[inline]
    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn can_afford(&self, amount: Money) -> bool {
        amount <= self.balance
    }

    /// Deducts `amount`, or fails and deducts nothing. A negative amount is
    /// a validation error, never a credit.
    pub fn charge(&mut self, amount: Money) -> CoreResult<()> {
        validate_charge(amount)?;
        if !self.can_afford(amount) {
            return Err(CoreError::InsufficientFunds {
                holder: self.holder.clone(),
                required: amount,
                balance: self.balance,
            });
        }
        self.balance -= amount;
        Ok(())
    }
}

// =============================================================================
// Checkout Configuration
// =============================================================================

/// How shippable cart lines contribute to shipment weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WeightAggregation {
    /// One unit's weight per shippable line, whatever the line quantity.
    #[default]
    PerLine,
    /// Unit weight times line quantity.
    PerUnit,
}

/// Pricing knobs for [`crate::process_checkout`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    pub shipping_rate: ShippingRate,
    pub weight_aggregation: WeightAggregation,
}

// =============================================================================
// Unit Tests
// =============================================================================
