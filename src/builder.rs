use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::composer::RecipeComposer;
use crate::ingredients::parse_typed;
use crate::model::{CookingTime, Cuisine, MealType, Recipe, RecipeOptions, Servings};
use crate::vision::{analyze_dish, DishAnalysis, VisionService};
use crate::ComposeError;

/// Represents the input source for a recipe
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Comma separated ingredient names
    Text(String),
    /// Image bytes with their content type
    Image { bytes: Vec<u8>, content_type: String },
    /// Image file, content type inferred from the extension
    ImageFile(PathBuf),
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct ComposedRecipe {
    pub recipe: Recipe,
    /// What the vision service reported, for image input
    pub analysis: Option<DishAnalysis>,
}

/// Builder for configuring and running one recipe composition
#[derive(Default)]
pub struct RecipeRequestBuilder<'a> {
    source: Option<InputSource>,
    options: RecipeOptions,
    vision: Option<&'a dyn VisionService>,
}

impl<'a> RecipeRequestBuilder<'a> {
    /// Set the input source to typed ingredients
    ///
    /// # Example
    /// ```
    /// use recipe_composer::RecipeRequest;
    ///
    /// let builder = RecipeRequest::builder()
    ///     .text("potato, tomato, onion");
    /// ```
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.source = Some(InputSource::Text(text.into()));
        self
    }

    /// Set the input source to a food photo already in memory
    pub fn image(mut self, bytes: impl Into<Vec<u8>>, content_type: impl Into<String>) -> Self {
        self.source = Some(InputSource::Image {
            bytes: bytes.into(),
            content_type: content_type.into(),
        });
        self
    }

    /// Set the input source to a food photo on disk
    ///
    /// # Example
    /// ```
    /// use recipe_composer::RecipeRequest;
    ///
    /// let builder = RecipeRequest::builder()
    ///     .image_file("/path/to/dinner.jpg");
    /// ```
    pub fn image_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(InputSource::ImageFile(path.into()));
        self
    }

    /// Replace all options at once, e.g. with configured defaults
    pub fn options(mut self, options: RecipeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn cuisine(mut self, cuisine: Cuisine) -> Self {
        self.options.cuisine = cuisine;
        self
    }

    pub fn meal_type(mut self, meal_type: MealType) -> Self {
        self.options.meal_type = meal_type;
        self
    }

    pub fn servings(mut self, servings: Servings) -> Self {
        self.options.servings = servings;
        self
    }

    pub fn cooking_time(mut self, cooking_time: CookingTime) -> Self {
        self.options.cooking_time = cooking_time;
        self
    }

    /// Set the vision service used for image input
    ///
    /// Without one, images resolve to the no-credential placeholder result.
    pub fn vision(mut self, service: &'a dyn VisionService) -> Self {
        self.vision = Some(service);
        self
    }

    /// Run the composition
    ///
    /// # Errors
    /// Returns `ComposeError` if:
    /// - No input source was specified
    /// - The typed text holds no ingredient, or the image is empty
    /// - An image file cannot be read
    ///
    /// Vision service failures are not errors; they yield fallback data.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_composer::RecipeRequest;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let composed = RecipeRequest::builder()
    ///     .text("chicken, rice")
    ///     .build()
    ///     .await?;
    /// println!("{}", composed.recipe.to_markdown());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<ComposedRecipe, ComposeError> {
        let source = self.source.ok_or_else(|| {
            ComposeError::BuilderError(
                "No input source specified. Use .text(), .image() or .image_file()".to_string(),
            )
        })?;

        let composer = RecipeComposer::new(self.options);

        match source {
            InputSource::Text(text) => {
                let ingredients = parse_typed(&text);
                if ingredients.is_empty() {
                    return Err(ComposeError::EmptyInput(
                        "Please enter at least one ingredient".to_string(),
                    ));
                }

                Ok(ComposedRecipe {
                    recipe: composer.compose(&ingredients, None),
                    analysis: None,
                })
            }

            InputSource::Image {
                bytes,
                content_type,
            } => compose_from_image(&composer, self.vision, &bytes, &content_type).await,

            InputSource::ImageFile(path) => {
                let bytes = tokio::fs::read(&path).await?;
                let content_type = content_type_for(&path);
                compose_from_image(&composer, self.vision, &bytes, content_type).await
            }
        }
    }
}

async fn compose_from_image(
    composer: &RecipeComposer,
    vision: Option<&dyn VisionService>,
    bytes: &[u8],
    content_type: &str,
) -> Result<ComposedRecipe, ComposeError> {
    if bytes.is_empty() {
        return Err(ComposeError::EmptyInput(
            "Please upload an image first".to_string(),
        ));
    }

    let analysis = analyze_dish(vision, bytes, content_type).await;

    let dish_name = match analysis.service_error() {
        Some(message) => {
            warn!("Vision service error, composing without a dish name: {}", message);
            None
        }
        None => {
            info!("Detected dish: {}", analysis.dish_name);
            analysis.usable_dish_name()
        }
    };

    Ok(ComposedRecipe {
        recipe: composer.compose(&analysis.ingredients, dish_name),
        analysis: Some(analysis),
    })
}

/// Guess an image content type from its file extension
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase);

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

/// Main entry point for the builder API
pub struct RecipeRequest;

impl RecipeRequest {
    /// Creates a new builder for composing a recipe
    ///
    /// # Example
    /// ```
    /// use recipe_composer::RecipeRequest;
    ///
    /// let builder = RecipeRequest::builder();
    /// ```
    pub fn builder<'a>() -> RecipeRequestBuilder<'a> {
        RecipeRequestBuilder::default()
    }
}
