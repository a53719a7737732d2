//! # Weight & Shipping Rate
//!
//! Shipping weights are whole grams; the shipping fee is a rate per kilogram
//! applied to the total weight of a shipment.
//!
//! ```text
//! shipment weight (g) ──► / 1000 ──► kg ──► × rate per kg ──► fee
//!
//!   200g at 10.00/kg  = 2.00
//!   6000g at 10.00/kg = 60.00
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use crate::money::Money;

const GRAMS_PER_KG: u64 = 1000;

// =============================================================================
// Weight
// =============================================================================

/// A shipping weight in whole grams.
///
/// Catalog weights are entered in grams, so sub-gram precision is not
/// represented: an item weighing 0.5g has to be recorded as 0g or 1g.
/// At the default rate one gram costs one cent, so a whole gram is also
/// the smallest weight that can change the fee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(u64);

impl Weight {
    #[inline]
    pub const fn from_grams(grams: u64) -> Self {
        Weight(grams)
    }

    #[inline]
    pub const fn grams(&self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }

    /// Adds two weights, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Weight) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(grams) => Some(Weight(grams)),
            None => None,
        }
    }

    /// Weight of `qty` units, `None` on overflow.
    #[inline]
    pub const fn checked_mul(&self, qty: u32) -> Option<Self> {
        match self.0.checked_mul(qty as u64) {
            Some(grams) => Some(Weight(grams)),
            None => None,
        }
    }

    /// Renders the weight in kilograms with trailing zeros trimmed.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::weight::Weight;
    ///
    /// assert_eq!(Weight::from_grams(200).kilograms(), "0.2");
    /// assert_eq!(Weight::from_grams(6000).kilograms(), "6");
    /// assert_eq!(Weight::from_grams(1250).kilograms(), "1.25");
    /// ```
    pub fn kilograms(&self) -> String {
        let whole = self.0 / GRAMS_PER_KG;
        let fraction = self.0 % GRAMS_PER_KG;
        if fraction == 0 {
            return whole.to_string();
        }
        let digits = format!("{:03}", fraction);
        format!("{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g", self.0)
    }
}

impl Add for Weight {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

/// Weight of `qty` units.
impl Mul<u32> for Weight {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Weight(self.0 * qty as u64)
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::zero(), Add::add)
    }
}

// =============================================================================
// Shipping Rate
// =============================================================================

/// Shipping charged per kilogram of shipment weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingRate(Money);

impl ShippingRate {
    /// Ten currency units per kilogram.
    pub const DEFAULT: ShippingRate = ShippingRate(Money::from_major(10));

    #[inline]
    pub const fn per_kg(rate: Money) -> Self {
        ShippingRate(rate)
    }

    #[inline]
    pub const fn rate_per_kg(&self) -> Money {
        self.0
    }

    /// Calculates the fee for a shipment of the given weight, or `None`
    /// when the fee does not fit in [`Money`].
    ///
    /// ## Implementation
    /// Integer math in i128: `(grams * rate_cents + 500) / 1000`. The +500
    /// rounds a half cent up.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use checkout_core::weight::{ShippingRate, Weight};
    ///
    /// let rate = ShippingRate::default();
    /// assert_eq!(rate.fee_for(Weight::from_grams(200)), Some(Money::from_major(2)));
    /// assert_eq!(rate.fee_for(Weight::from_grams(u64::MAX)), None);
    /// ```
    pub fn fee_for(&self, weight: Weight) -> Option<Money> {
        let milli_cents = i128::from(weight.grams()).checked_mul(i128::from(self.0.cents()))?;
        let cents = milli_cents.checked_add(500)? / i128::from(GRAMS_PER_KG);
        i64::try_from(cents).ok().map(Money::from_cents)
    }
}

impl Default for ShippingRate {
    fn default() -> Self {
        ShippingRate::DEFAULT
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
