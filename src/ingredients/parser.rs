use log::debug;

use super::fallback_ingredients;

/// Split user-typed, comma separated ingredients.
///
/// Segments are trimmed and empty ones dropped; order and case are kept.
/// May return an empty list: callers reject blank input before this point.
pub fn parse_typed(raw: &str) -> Vec<String> {
    split_commas(raw)
}

/// Collect ingredients from the free text returned by a vision service.
///
/// Bulleted lines (`-` or `*`) win. Without any, the first line containing a
/// comma is split instead. If that yields nothing either, the fallback set is
/// returned, so the result is never empty.
pub fn parse_service_output(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut ingredients: Vec<String> = lines
        .iter()
        .filter_map(|line| line.strip_prefix('-').or_else(|| line.strip_prefix('*')))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect();

    if ingredients.is_empty() {
        if let Some(line) = lines.iter().find(|l| l.contains(',')) {
            debug!("No bulleted ingredients, splitting line: {}", line);
            ingredients = split_commas(line);
        }
    }

    if ingredients.is_empty() {
        debug!("No ingredients found in service output, using fallback set");
        return fallback_ingredients();
    }

    ingredients
}

fn split_commas(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
