//! # Report Writer
//!
//! Writes a checkout outcome to any `Write`: the shipment notice (if
//! anything ships) followed by the receipt, or a single JSON document.

use std::io::Write;

use checkout_core::CheckoutOutcome;

use crate::config::OutputFormat;
use crate::error::AppResult;

pub fn write_report<W: Write>(
    out: &mut W,
    outcome: &CheckoutOutcome,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Text => write!(out, "{}", outcome)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, outcome)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkout_core::clock::SystemClock;
    use checkout_core::weight::Weight;
    use checkout_core::{process_checkout, Account, Cart, Catalog, CheckoutConfig, Item, Money};

    fn outcome() -> CheckoutOutcome {
        let mut catalog = Catalog::new();
        let tv = catalog.insert(
            Item::new("TV", Money::from_major(15000), 3)
                .unwrap()
                .shippable(Weight::from_grams(5000)),
        );
        let mut cart = Cart::new();
        cart.add_line(catalog.get(tv).unwrap(), 1, &SystemClock).unwrap();
        let mut account = Account::new("John Doe", Money::from_major(20000)).unwrap();

        process_checkout(&cart, &mut catalog, &mut account, &CheckoutConfig::default()).unwrap()
    }

    #[test]
    fn test_text_report() {
        let mut out = Vec::new();
        write_report(&mut out, &outcome(), OutputFormat::Text).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "** Shipment notice **\n\
             1x TV    5000g\n\
             Total package weight 5kg\n\
             \n\
             ** Checkout receipt **\n\
             1x TV    15000.00\n\
             ---\n\
             Subtotal    15000.00\n\
             Shipping    50.00\n\
             Amount    15050.00\n\
             Remaining balance: 4950.00\n"
        );
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_report(&mut out, &outcome(), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["receipt"]["holder"], "John Doe");
        assert_eq!(value["receipt"]["total"], 1_505_000);
        assert_eq!(value["shipment"]["lines"][0]["name"], "TV");
    }
}
