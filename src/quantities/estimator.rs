use log::debug;

use super::{format_quantity, Quantity, Unit};
use crate::model::Servings;

/// Rough per-serving defaults, keyed by lowercase substring.
///
/// Scanned in order; the first key contained in the ingredient name wins.
pub const PER_SERVING_DEFAULTS: &[(&str, Unit, f64)] = &[
    ("potato", Unit::Grams, 150.0),
    ("tomato", Unit::Grams, 70.0),
    ("onion", Unit::Grams, 50.0),
    ("carrot", Unit::Grams, 70.0),
    ("chicken", Unit::Grams, 150.0),
    ("rice", Unit::Grams, 80.0),
    ("pasta", Unit::Grams, 90.0),
    ("egg", Unit::Count, 1.0),
    ("milk", Unit::Milliliters, 100.0),
    ("oil", Unit::Milliliters, 10.0),
    ("butter", Unit::Grams, 10.0),
    ("salt", Unit::Teaspoon, 0.5),
    ("sugar", Unit::Teaspoon, 1.0),
    ("pepper", Unit::Teaspoon, 0.25),
    ("garlic", Unit::Clove, 1.0),
    ("ginger", Unit::Grams, 5.0),
    ("spices", Unit::Teaspoon, 1.0),
    ("mint", Unit::Grams, 5.0),
    ("peas", Unit::Grams, 50.0),
];

/// Unmatched ingredients get one tablespoon per serving
const FALLBACK_PER_SERVING: (Unit, f64) = (Unit::Tablespoon, 1.0);

/// Estimate the total quantity of `ingredient` for `servings` people
pub fn estimate(ingredient: &str, servings: Servings) -> Quantity {
    let key = ingredient.to_lowercase();
    let count = f64::from(servings.get());

    let (unit, per_serving) = PER_SERVING_DEFAULTS
        .iter()
        .find(|(k, _, _)| key.contains(k))
        .map(|(_, unit, amount)| (*unit, *amount))
        .unwrap_or_else(|| {
            debug!("No per-serving default for '{}', using tablespoons", ingredient);
            FALLBACK_PER_SERVING
        });

    Quantity::new(unit, per_serving * count)
}

/// Estimate and format in one go, e.g. `"300 g"`
pub fn estimate_quantity(ingredient: &str, servings: Servings) -> String {
    let quantity = estimate(ingredient, servings);
    format_quantity(quantity.unit, quantity.amount)
}
