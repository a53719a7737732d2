//! # Shipment Notice
//!
//! The list of shippable goods handed to the carrier, and its plain-text
//! rendering. Building a notice has no effect on stock or balances.
//!
//! ```text
//! ** Shipment notice **
//! 1x Cheese    200g
//! 1x TV    5000g
//! Total package weight 5.2kg
//!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::validation::amount_out_of_range;
use crate::weight::Weight;

/// One entry on the shipment notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentLine {
    pub name: String,
    pub quantity: u32,
    pub unit_weight: Weight,
    total_weight: Weight,
}

impl ShipmentLine {
    /// Fails when `unit_weight × quantity` does not fit in a [`Weight`].
    pub fn new(name: impl Into<String>, quantity: u32, unit_weight: Weight) -> CoreResult<Self> {
        let total_weight = unit_weight
            .checked_mul(quantity)
            .ok_or_else(|| amount_out_of_range("shipping weight"))?;
        Ok(ShipmentLine {
            name: name.into(),
            quantity,
            unit_weight,
            total_weight,
        })
    }

    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }
}

/// A non-empty shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentNotice {
    lines: Vec<ShipmentLine>,
    total_weight: Weight,
}

impl ShipmentNotice {
    /// Returns `None` when there is nothing to ship.
    pub fn from_lines(lines: Vec<ShipmentLine>) -> CoreResult<Option<Self>> {
        if lines.is_empty() {
            return Ok(None);
        }
        let total_weight = lines
            .iter()
            .try_fold(Weight::zero(), |total, line| total.checked_add(line.total_weight()))
            .ok_or_else(|| amount_out_of_range("shipping weight"))?;
        Ok(Some(ShipmentNotice {
            lines,
            total_weight,
        }))
    }

    pub fn lines(&self) -> &[ShipmentLine] {
        &self.lines
    }

    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }
}

impl fmt::Display for ShipmentNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "** Shipment notice **")?;
        for line in &self.lines {
            writeln!(f, "{}x {}    {}", line.quantity, line.name, line.total_weight())?;
        }
        writeln!(f, "Total package weight {}kg", self.total_weight.kilograms())?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn line(name: &str, quantity: u32, grams: u64) -> ShipmentLine {
        ShipmentLine::new(name, quantity, Weight::from_grams(grams)).unwrap()
    }

    fn is_weight_overflow(err: &CoreError) -> bool {
        matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { field, .. }) if field == "shipping weight"
        )
    }

    #[test]
    fn test_empty_shipment_is_none() {
        assert_eq!(ShipmentNotice::from_lines(Vec::new()), Ok(None));
    }

    #[test]
    fn test_weight_overflow_is_an_error() {
        let err = ShipmentLine::new("Anvil", 2, Weight::from_grams(u64::MAX)).unwrap_err();
        assert!(is_weight_overflow(&err));

        let heavy = u64::MAX / 2 + 1;
        let err = ShipmentNotice::from_lines(vec![line("Anvil", 1, heavy), line("Anvil", 1, heavy)])
            .unwrap_err();
        assert!(is_weight_overflow(&err));
    }

    #[test]
    fn test_render() {
        let notice =
            ShipmentNotice::from_lines(vec![line("Cheese", 1, 1000), line("TV", 1, 5000)])
                .unwrap()
                .unwrap();

        assert_eq!(notice.total_weight(), Weight::from_grams(6000));
        assert_eq!(
            notice.to_string(),
            "** Shipment notice **\n\
             1x Cheese    1000g\n\
             1x TV    5000g\n\
             Total package weight 6kg\n\
             \n"
        );
    }

    #[test]
    fn test_render_multi_unit_line() {
        let notice = ShipmentNotice::from_lines(vec![line("Cheese", 2, 200)]).unwrap().unwrap();
        assert_eq!(
            notice.to_string(),
            "** Shipment notice **\n2x Cheese    400g\nTotal package weight 0.4kg\n\n"
        );
    }
}
