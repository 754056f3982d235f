use super::present;
use crate::model::{CookingTime, Cuisine, MealType};

/// Generate the numbered cooking steps.
///
/// Six fixed steps, plus a seventh garnish step when a specific cuisine is
/// chosen. The cooking verb is "saute" when any ingredient mentions oil.
pub fn generate_steps(
    ingredients: &[String],
    cuisine: Cuisine,
    meal_type: MealType,
    cooking_time: CookingTime,
    dish_name: Option<&str>,
) -> Vec<String> {
    let uses_oil = ingredients
        .iter()
        .any(|i| i.to_lowercase().contains("oil"));
    let method = if uses_oil { "saute" } else { "mix" };

    let listed = if ingredients.is_empty() {
        "your chosen ingredients".to_string()
    } else {
        ingredients.join(", ")
    };

    let dish = match dish_name.and_then(present) {
        Some(name) => name.to_string(),
        None => meal_type.as_str().to_lowercase(),
    };

    let mut steps = vec![
        "Prepare all ingredients by washing, peeling, and chopping as needed.".to_string(),
        format!(
            "Heat a pan and {} the base ingredients (like onions, garlic, or aromatics) if available.",
            method
        ),
        format!("Add the main ingredients: {}.", listed),
        format!(
            "Season with salt, pepper, and any spices that match {} cuisine.",
            cuisine
        ),
        format!(
            "Cook for about {} minutes, stirring occasionally.",
            cooking_time.minutes()
        ),
        format!("Taste and adjust seasoning. Serve hot as a delicious {}.", dish),
    ];

    if cuisine.is_specific() {
        steps.push(format!(
            "For extra authenticity, add classic {} garnishes or sides (e.g., herbs, bread, or rice).",
            cuisine
        ));
    }

    steps
        .into_iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect()
}
