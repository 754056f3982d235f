mod steps;

pub use steps::generate_steps;

use log::debug;

use crate::ingredients::title_case;
use crate::model::{Cuisine, MealType, Recipe, RecipeOptions, Servings};
use crate::quantities::estimate_quantity;

/// Ingredients listed when a caller hands over an empty ingredient list
const EMPTY_LIST_DEFAULTS: [&str; 3] = ["salt", "pepper", "oil"];

/// Build the recipe title.
///
/// A non-blank dish name (from image analysis) is used verbatim. Otherwise the first
/// ingredient plus the meal type, or "Chef's Special" plus the meal type when
/// there are no ingredients. A specific cuisine is prefixed in every case.
pub fn recipe_title(
    ingredients: &[String],
    cuisine: Cuisine,
    meal_type: MealType,
    dish_name: Option<&str>,
) -> String {
    let base = match (dish_name.and_then(present), ingredients.first()) {
        (Some(name), _) => name.to_string(),
        (None, Some(first)) => format!("{} {}", title_case(first), meal_type),
        (None, None) => format!("Chef's Special {}", meal_type),
    };

    if cuisine.is_specific() {
        format!("{} {}", cuisine, base)
    } else {
        base
    }
}

/// The trimmed dish name, or `None` when it is blank
pub(crate) fn present(dish_name: &str) -> Option<&str> {
    Some(dish_name.trim()).filter(|name| !name.is_empty())
}

/// Formatted ingredient lines: `Serves: N`, then `<quantity> <Name>` each
pub fn ingredient_lines(ingredients: &[String], servings: Servings) -> Vec<String> {
    let mut lines = vec![format!("Serves: {}", servings.get())];

    let names: Vec<&str> = if ingredients.is_empty() {
        EMPTY_LIST_DEFAULTS.to_vec()
    } else {
        ingredients.iter().map(String::as_str).collect()
    };

    for name in names {
        let quantity = estimate_quantity(name, servings);
        lines.push(format!("{} {}", quantity, title_case(name.trim())));
    }

    lines
}

/// Assembles title, ingredient block and steps into a [`Recipe`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeComposer {
    options: RecipeOptions,
}

impl RecipeComposer {
    pub fn new(options: RecipeOptions) -> Self {
        RecipeComposer { options }
    }

    pub fn options(&self) -> &RecipeOptions {
        &self.options
    }

    /// Compose a recipe. Never fails.
    pub fn compose(&self, ingredients: &[String], dish_name: Option<&str>) -> Recipe {
        let RecipeOptions {
            cuisine,
            meal_type,
            servings,
            cooking_time,
        } = self.options;

        let title = recipe_title(ingredients, cuisine, meal_type, dish_name);
        debug!(
            "Composing '{}' from {} ingredient(s) for {} serving(s)",
            title,
            ingredients.len(),
            servings.get()
        );

        Recipe {
            title,
            cuisine,
            meal_type,
            cooking_time,
            ingredients: ingredient_lines(ingredients, servings),
            steps: generate_steps(ingredients, cuisine, meal_type, cooking_time, dish_name),
        }
    }
}
