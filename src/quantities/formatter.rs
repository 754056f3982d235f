use super::Unit;

/// Teaspoons per tablespoon
const TSP_PER_TBSP: f64 = 3.0;
/// Tablespoons per cup
const TBSP_PER_CUP: f64 = 16.0;

/// Render a quantity for display.
///
/// - grams / ml: nearest multiple of 5
/// - count / clove: nearest integer
/// - tsp: 3 or more becomes tbsp (1 decimal), else tsp (2 decimals)
/// - tbsp: 16 or more becomes cups (2 decimals), else tbsp (2 decimals)
/// - anything else: 2 decimals followed by the unit name
///
/// Every rounding step is half-up (ties away from zero, amounts are never
/// negative). Decimal amounts always show at least one fractional digit.
pub fn format_quantity(unit: Unit, value: f64) -> String {
    match unit {
        Unit::Grams => format!("{} g", round_to_step(value, 5.0)),
        Unit::Milliliters => format!("{} ml", round_to_step(value, 5.0)),
        Unit::Count => format!("{} pcs", round_to_step(value, 1.0)),
        Unit::Clove => format!("{} clove(s)", round_to_step(value, 1.0)),
        Unit::Teaspoon => {
            if value >= TSP_PER_TBSP {
                format!("{} tbsp", decimal(value / TSP_PER_TBSP, 1))
            } else {
                format!("{} tsp", decimal(value, 2))
            }
        }
        Unit::Tablespoon => {
            if value >= TBSP_PER_CUP {
                format!("{} cup(s)", decimal(value / TBSP_PER_CUP, 2))
            } else {
                format!("{} tbsp", decimal(value, 2))
            }
        }
        Unit::Generic(name) => format!("{} {}", decimal(value, 2), name),
    }
}

fn round_to_step(value: f64, step: f64) -> i64 {
    ((value / step).round() * step) as i64
}

fn decimal(value: f64, places: i32) -> String {
    let factor = 10f64.powi(places);
    let rounded = (value * factor).round() / factor;
    let text = rounded.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}
