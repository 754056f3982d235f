//! Compose structured recipes from ingredient names.
//!
//! Ingredients come from typed, comma separated text or from a food photo
//! described by a vision service. The engine estimates per-serving
//! quantities, synthesizes a title and cooking steps, renders markdown and
//! lays the result out as a paginated document.

pub mod builder;
pub mod composer;
pub mod config;
pub mod error;
pub mod export;
pub mod ingredients;
pub mod model;
pub mod quantities;
pub mod vision;

pub use builder::{ComposedRecipe, InputSource, RecipeRequest, RecipeRequestBuilder};
pub use composer::RecipeComposer;
pub use config::{load_config, ComposerConfig, VisionConfig};
pub use error::{ComposeError, VisionError};
pub use export::{export_recipe, ExportedDocument, PageLayout, PdfCanvas, TextCanvas};
pub use model::{CookingTime, Cuisine, MealType, Recipe, RecipeOptions, Servings};
pub use vision::{analyze_dish, DishAnalysis, GeminiVision, VisionService};

/// Compose a recipe from comma separated ingredient text
///
/// # Example
/// ```
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_composer::ComposeError> {
/// use recipe_composer::{recipe_from_text, RecipeOptions};
///
/// let recipe = recipe_from_text("potato, onion", RecipeOptions::default()).await?;
/// assert_eq!(recipe.title, "Potato Dish");
/// # Ok(())
/// # }
/// ```
pub async fn recipe_from_text(text: &str, options: RecipeOptions) -> Result<Recipe, ComposeError> {
    let composed = RecipeRequest::builder()
        .text(text)
        .options(options)
        .build()
        .await?;
    Ok(composed.recipe)
}

/// Compose a recipe from a food photo
///
/// Pass `None` as `vision` when no credential is configured.
pub async fn recipe_from_image(
    image: &[u8],
    content_type: &str,
    options: RecipeOptions,
    vision: Option<&dyn VisionService>,
) -> Result<ComposedRecipe, ComposeError> {
    let mut builder = RecipeRequest::builder()
        .image(image, content_type)
        .options(options);
    if let Some(service) = vision {
        builder = builder.vision(service);
    }
    builder.build().await
}
