//! # Sample Shop
//!
//! The fixed catalog, account and cart the binary checks out.
//!
//! | Item                | Price    | Stock | Expiry   | Ships   |
//! |---------------------|----------|-------|----------|---------|
//! | Cheese              | 100.00   | 10    | +7 days  | 1000g   |
//! | Biscuits            | 150.00   | 3     | +14 days | -       |
//! | Meat                | 150.00   | 5     | -        | -       |
//! | TV                  | 15000.00 | 3     | -        | 5000g   |
//! | Mobile Scratch Card | 50.00    | 100   | -        | -       |
//!
//! Account: John Doe, 20000.00. Cart: 2 Cheese, 2 Biscuits, 1 TV,
//! 3 Mobile Scratch Card, 2 Meat.

use chrono::Duration;
use checkout_core::clock::Clock;
use checkout_core::weight::Weight;
use checkout_core::{Account, Cart, Catalog, CoreResult, Item, Money};

/// Everything one checkout needs.
#[derive(Debug, Clone)]
pub struct SampleShop {
    pub catalog: Catalog,
    pub account: Account,
    pub cart: Cart,
}

/// Builds the sample shop, dating expiries from `clock`.
pub fn sample_shop<C: Clock + ?Sized>(clock: &C) -> CoreResult<SampleShop> {
    let now = clock.now();
    let mut catalog = Catalog::new();

    let cheese = catalog.insert(
        Item::new("Cheese", Money::from_major(100), 10)?
            .with_expiry(now + Duration::days(7), Weight::from_grams(200))
            .shippable(Weight::from_grams(1000)),
    );
    let biscuits = catalog.insert(
        Item::new("Biscuits", Money::from_major(150), 3)?
            .with_expiry(now + Duration::days(14), Weight::from_grams(700)),
    );
    let meat = catalog.insert(Item::new("Meat", Money::from_major(150), 5)?);
    let tv = catalog.insert(
        Item::new("TV", Money::from_major(15000), 3)?.shippable(Weight::from_grams(5000)),
    );
    let scratch_card =
        catalog.insert(Item::new("Mobile Scratch Card", Money::from_major(50), 100)?);

    let account = Account::new("John Doe", Money::from_major(20000))?;

    let mut cart = Cart::new();
    for (id, quantity) in [(cheese, 2), (biscuits, 2), (tv, 1), (scratch_card, 3), (meat, 2)] {
        cart.add_line(catalog.require(id)?, quantity, clock)?;
    }

    Ok(SampleShop {
        catalog,
        account,
        cart,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::clock::FixedClock;
    use checkout_core::{process_checkout, CheckoutConfig};
    use chrono::{TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_sample_shop_contents() {
        let shop = sample_shop(&clock()).unwrap();
        assert_eq!(shop.catalog.len(), 5);
        assert_eq!(shop.cart.len(), 5);
        assert_eq!(shop.account.balance(), Money::from_major(20000));
    }

    #[test]
    fn test_sample_checkout() {
        let SampleShop {
            mut catalog,
            mut account,
            cart,
        } = sample_shop(&clock()).unwrap();

        let outcome =
            process_checkout(&cart, &mut catalog, &mut account, &CheckoutConfig::default())
                .unwrap();

        assert_eq!(outcome.receipt.subtotal, Money::from_major(15950));
        // Cheese (1000g) and TV (5000g), one of each per line.
        assert_eq!(outcome.receipt.shipping, Money::from_major(60));
        assert_eq!(outcome.receipt.total, Money::from_major(16010));
        assert_eq!(account.balance(), Money::from_major(3990));
    }
}
