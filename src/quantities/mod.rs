//! Per-serving quantity heuristics and unit-aware display.
//!
//! The estimator is a coarse lookup over a fixed table, not a culinary
//! database. Anything answering `(name, servings) -> Quantity` can replace it.

mod estimator;
mod formatter;

pub use estimator::{estimate, estimate_quantity, PER_SERVING_DEFAULTS};
pub use formatter::format_quantity;

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Unit {
    Grams,
    Milliliters,
    Count,
    Clove,
    Teaspoon,
    Tablespoon,
    /// Any other unit, displayed by name
    Generic(&'static str),
}

impl Unit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Grams => "g",
            Unit::Milliliters => "ml",
            Unit::Count => "count",
            Unit::Clove => "clove",
            Unit::Teaspoon => "tsp",
            Unit::Tablespoon => "tbsp",
            Unit::Generic(name) => name,
        }
    }
}

/// A total amount of some unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantity {
    pub unit: Unit,
    pub amount: f64,
}

impl Quantity {
    pub fn new(unit: Unit, amount: f64) -> Self {
        Quantity { unit, amount }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_quantity(self.unit, self.amount))
    }
}
