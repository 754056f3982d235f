mod parser;

pub use parser::{parse_service_output, parse_typed};

/// Substitute ingredients used whenever the source text yields nothing usable
pub const FALLBACK_INGREDIENTS: [&str; 4] = ["onion", "tomato", "oil", "salt"];

pub fn fallback_ingredients() -> Vec<String> {
    FALLBACK_INGREDIENTS.iter().map(|s| s.to_string()).collect()
}

/// Title-case an ingredient name for display.
///
/// A word starts after any character that is neither alphanumeric nor an
/// apostrophe, so "chef's  knife" becomes "Chef's  Knife".
pub fn title_case(name: &str) -> String {
    let mut output = String::with_capacity(name.len());
    let mut word_start = true;

    for c in name.chars() {
        if word_start {
            output.extend(c.to_uppercase());
        } else {
            output.extend(c.to_lowercase());
        }
        word_start = !(c.is_alphanumeric() || c == '\'');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("chicken"), "Chicken");
        assert_eq!(title_case("GREEN peas"), "Green Peas");
        assert_eq!(title_case("sun-dried tomato"), "Sun-Dried Tomato");
        assert_eq!(title_case("chef's special"), "Chef's Special");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_fallback_set() {
        assert_eq!(fallback_ingredients(), vec!["onion", "tomato", "oil", "salt"]);
    }
}
