//! Image analysis through an external vision service.
//!
//! [`analyze_dish`] is the boundary: whatever the service does, callers get a
//! usable dish name and a non-empty ingredient list back.

mod gemini;

pub use gemini::GeminiVision;

use async_trait::async_trait;
use log::{debug, error, info, warn};

use crate::error::VisionError;
use crate::ingredients::{fallback_ingredients, parse_service_output};

/// Prefix marking a dish name that carries a service error message
pub const SERVICE_ERROR_PREFIX: &str = "Gemini Error: ";
pub const NO_CREDENTIAL_DISH: &str = "Unknown Dish (no API key)";
pub const FAILED_DISH: &str = "Unknown Dish (error)";
pub const UNKNOWN_DISH: &str = "Unknown Dish";

/// The prompt sent along with every image
pub const DISH_PROMPT: &str = "You are a cooking assistant. Look at this food photo and respond in this EXACT format:\n\
Dish name: <dish name>\n\
Ingredients:\n\
- ingredient 1\n\
- ingredient 2\n\
Only food-related details, no extra explanation.";

/// Describes a food photo as free text
#[async_trait]
pub trait VisionService: Send + Sync {
    /// Get the service name (e.g., "gemini")
    fn name(&self) -> &str;

    /// Return the service's free-text answer to [`DISH_PROMPT`] for `image`
    async fn describe(&self, image: &[u8], content_type: &str) -> Result<String, VisionError>;
}

/// Dish name and ingredients read from a photo
#[derive(Debug, Clone, PartialEq)]
pub struct DishAnalysis {
    pub dish_name: String,
    pub ingredients: Vec<String>,
}

impl DishAnalysis {
    fn fallback(dish_name: impl Into<String>) -> Self {
        DishAnalysis {
            dish_name: dish_name.into(),
            ingredients: fallback_ingredients(),
        }
    }

    /// The service error message, when the dish name carries one
    pub fn service_error(&self) -> Option<&str> {
        self.dish_name.strip_prefix(SERVICE_ERROR_PREFIX)
    }

    /// The dish name to compose with; `None` when it is blank or reports a
    /// service error
    pub fn usable_dish_name(&self) -> Option<&str> {
        match self.service_error() {
            Some(_) => None,
            None => Some(self.dish_name.trim()).filter(|name| !name.is_empty()),
        }
    }
}

/// Read the dish name from service text.
///
/// The first line starting with "dish name" (any case) decides: the text after
/// its first colon, trimmed, which may be empty. Without such a line the dish
/// is unknown.
pub fn parse_dish_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| line.to_lowercase().starts_with("dish name"))
        .and_then(|line| line.split_once(':'))
        .map(|(_, name)| name.trim().to_string())
        .unwrap_or_else(|| UNKNOWN_DISH.to_string())
}

/// Parse a full service answer into a [`DishAnalysis`]
pub fn parse_analysis(text: &str) -> DishAnalysis {
    let text = text.trim();
    DishAnalysis {
        dish_name: parse_dish_name(text),
        ingredients: parse_service_output(text),
    }
}

/// Analyze a food photo. Never fails.
///
/// - no service (no credential configured): placeholder result, no call made
/// - rejected request: dish name prefixed with [`SERVICE_ERROR_PREFIX`]
/// - any other failure: [`FAILED_DISH`]
///
/// Every failure comes with the fallback ingredient set.
pub async fn analyze_dish(
    service: Option<&dyn VisionService>,
    image: &[u8],
    content_type: &str,
) -> DishAnalysis {
    let Some(service) = service else {
        warn!("No vision credential configured, using placeholder ingredients");
        return DishAnalysis::fallback(NO_CREDENTIAL_DISH);
    };

    debug!(
        "Analyzing {} byte image ({}) with {}",
        image.len(),
        content_type,
        service.name()
    );

    match service.describe(image, content_type).await {
        Ok(text) => {
            let analysis = parse_analysis(&text);
            info!(
                "Detected '{}' with {} ingredient(s)",
                analysis.dish_name,
                analysis.ingredients.len()
            );
            analysis
        }
        Err(VisionError::InvalidArgument(message)) => {
            error!("{} rejected the image: {}", service.name(), message);
            DishAnalysis::fallback(format!("{}{}", SERVICE_ERROR_PREFIX, message))
        }
        Err(e) => {
            error!("{} failed: {}", service.name(), e);
            DishAnalysis::fallback(FAILED_DISH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(Result<&'static str, fn() -> VisionError>);

    #[async_trait]
    impl VisionService for Canned {
        fn name(&self) -> &str {
            "canned"
        }

        async fn describe(&self, _image: &[u8], _content_type: &str) -> Result<String, VisionError> {
            match &self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(make) => Err(make()),
            }
        }
    }

    #[test]
    fn test_parse_dish_name() {
        assert_eq!(parse_dish_name("Dish name: Palak Paneer\n- spinach"), "Palak Paneer");
        assert_eq!(parse_dish_name("  DISH NAME :  Ramen  "), "Ramen");
        assert_eq!(parse_dish_name("Dish name Ramen"), UNKNOWN_DISH);
        assert_eq!(parse_dish_name("- rice"), UNKNOWN_DISH);
        assert_eq!(parse_dish_name("Dish name:   "), "");
    }

    #[tokio::test]
    async fn test_blank_dish_name_is_not_usable() {
        let service = Canned(Ok("Dish name:   \nIngredients:\n- rice"));
        let analysis = analyze_dish(Some(&service), b"img", "image/jpeg").await;
        assert_eq!(analysis.dish_name, "");
        assert_eq!(analysis.service_error(), None);
        assert_eq!(analysis.usable_dish_name(), None);
        assert_eq!(analysis.ingredients, vec!["rice"]);
    }

    #[tokio::test]
    async fn test_no_service_short_circuits() {
        let analysis = analyze_dish(None, b"img", "image/png").await;
        assert_eq!(analysis.dish_name, "Unknown Dish (no API key)");
        assert_eq!(analysis.ingredients, vec!["onion", "tomato", "oil", "salt"]);
    }

    #[tokio::test]
    async fn test_successful_analysis() {
        let service = Canned(Ok("Dish name: Caprese\nIngredients:\n- tomato\n- mozzarella\n- basil"));
        let analysis = analyze_dish(Some(&service), b"img", "image/jpeg").await;
        assert_eq!(analysis.dish_name, "Caprese");
        assert_eq!(analysis.ingredients, vec!["tomato", "mozzarella", "basil"]);
        assert_eq!(analysis.usable_dish_name(), Some("Caprese"));
    }

    #[tokio::test]
    async fn test_invalid_argument_is_labeled() {
        let service = Canned(Err(|| VisionError::InvalidArgument("API key not valid".to_string())));
        let analysis = analyze_dish(Some(&service), b"img", "image/jpeg").await;
        assert_eq!(analysis.dish_name, "Gemini Error: API key not valid");
        assert_eq!(analysis.service_error(), Some("API key not valid"));
        assert_eq!(analysis.usable_dish_name(), None);
        assert_eq!(analysis.ingredients, vec!["onion", "tomato", "oil", "salt"]);
    }

    #[tokio::test]
    async fn test_other_errors_are_generic() {
        let service = Canned(Err(|| VisionError::EmptyResponse));
        let analysis = analyze_dish(Some(&service), b"img", "image/jpeg").await;
        assert_eq!(analysis.dish_name, "Unknown Dish (error)");
        assert_eq!(analysis.service_error(), None);
        assert_eq!(analysis.ingredients.len(), 4);
    }
}
