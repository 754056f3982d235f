use async_trait::async_trait;
use recipe_composer::{
    recipe_from_image, recipe_from_text, ComposeError, CookingTime, Cuisine, MealType,
    RecipeOptions, RecipeRequest, Servings, VisionError, VisionService,
};
use std::io::Write;

struct StubVision {
    answer: Result<&'static str, &'static str>,
}

#[async_trait]
impl VisionService for StubVision {
    fn name(&self) -> &str {
        "stub"
    }

    async fn describe(&self, _image: &[u8], _content_type: &str) -> Result<String, VisionError> {
        match self.answer {
            Ok(text) => Ok(text.to_string()),
            Err(message) => Err(VisionError::InvalidArgument(message.to_string())),
        }
    }
}

#[tokio::test]
async fn test_text_to_recipe() {
    let composed = RecipeRequest::builder()
        .text("chicken, rice")
        .cuisine(Cuisine::Indian)
        .meal_type(MealType::Curry)
        .servings(Servings::new(4).unwrap())
        .cooking_time(CookingTime::new(40).unwrap())
        .build()
        .await
        .unwrap();

    assert!(composed.analysis.is_none());
    let recipe = composed.recipe;
    assert_eq!(recipe.title, "Indian Chicken Curry");
    assert_eq!(recipe.ingredients, vec!["Serves: 4", "600 g Chicken", "320 g Rice"]);
    assert_eq!(recipe.steps.len(), 7);
    assert!(recipe.steps[4].contains("40 minutes"));
}

#[tokio::test]
async fn test_blank_text_is_rejected() {
    let result = RecipeRequest::builder().text("  , ,  ").build().await;
    assert!(matches!(result, Err(ComposeError::EmptyInput(_))));

    let result = recipe_from_text("", RecipeOptions::default()).await;
    assert!(matches!(result, Err(ComposeError::EmptyInput(_))));
}

#[tokio::test]
async fn test_missing_source_is_builder_error() {
    let result = RecipeRequest::builder().build().await;
    assert!(matches!(result, Err(ComposeError::BuilderError(_))));
}

#[tokio::test]
async fn test_empty_image_is_rejected() {
    let result = RecipeRequest::builder().image(Vec::<u8>::new(), "image/png").build().await;
    assert!(matches!(result, Err(ComposeError::EmptyInput(_))));
}

#[tokio::test]
async fn test_image_without_credential_uses_placeholder() {
    let composed = recipe_from_image(b"img", "image/jpeg", RecipeOptions::default(), None)
        .await
        .unwrap();

    let analysis = composed.analysis.unwrap();
    assert_eq!(analysis.dish_name, "Unknown Dish (no API key)");
    assert_eq!(composed.recipe.title, "Unknown Dish (no API key)");
    assert_eq!(
        composed.recipe.steps[2],
        "3. Add the main ingredients: onion, tomato, oil, salt."
    );
}

#[tokio::test]
async fn test_image_with_detected_dish() {
    let vision = StubVision {
        answer: Ok("Dish name: Tom Yum\nIngredients:\n- shrimp\n- lemongrass\n- chili oil"),
    };
    let composed = RecipeRequest::builder()
        .image(b"img".to_vec(), "image/jpeg")
        .cuisine(Cuisine::Thai)
        .meal_type(MealType::Soup)
        .vision(&vision)
        .build()
        .await
        .unwrap();

    let recipe = composed.recipe;
    assert_eq!(recipe.title, "Thai Tom Yum");
    assert!(recipe.steps[1].contains("saute"));
    assert!(recipe.steps[5].ends_with("a delicious Tom Yum."));
    assert!(recipe.steps[6].contains("Thai"));
}

#[tokio::test]
async fn test_empty_dish_name_falls_back_to_first_ingredient() {
    let vision = StubVision {
        answer: Ok("Dish name:\nIngredients:\n- rice\n- peas"),
    };
    let composed = RecipeRequest::builder()
        .image(b"img".to_vec(), "image/jpeg")
        .cuisine(Cuisine::Thai)
        .vision(&vision)
        .build()
        .await
        .unwrap();

    assert_eq!(composed.analysis.unwrap().usable_dish_name(), None);
    let recipe = composed.recipe;
    assert_eq!(recipe.title, "Thai Rice Dish");
    assert_eq!(recipe.steps[5], "6. Taste and adjust seasoning. Serve hot as a delicious dish.");
}

#[tokio::test]
async fn test_service_error_composes_without_dish_name() {
    let vision = StubVision {
        answer: Err("Image payload is invalid"),
    };
    let composed = RecipeRequest::builder()
        .image(b"img".to_vec(), "image/jpeg")
        .meal_type(MealType::Salad)
        .vision(&vision)
        .build()
        .await
        .unwrap();

    let analysis = composed.analysis.unwrap();
    assert_eq!(analysis.service_error(), Some("Image payload is invalid"));
    assert_eq!(composed.recipe.title, "Onion Salad");
    assert!(composed.recipe.steps[5].ends_with("a delicious salad."));
}

#[tokio::test]
async fn test_image_file_is_read() {
    let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    file.write_all(b"fake png bytes").unwrap();

    let vision = StubVision {
        answer: Ok("Dish name: Fried Rice\n- rice\n- egg\n- peas"),
    };
    let composed = RecipeRequest::builder()
        .image_file(file.path())
        .vision(&vision)
        .build()
        .await
        .unwrap();

    assert_eq!(composed.recipe.title, "Fried Rice");
    assert_eq!(
        composed.recipe.ingredients,
        vec!["Serves: 2", "160 g Rice", "2 pcs Egg", "100 g Peas"]
    );
}

#[tokio::test]
async fn test_missing_image_file_is_io_error() {
    let result = RecipeRequest::builder()
        .image_file("/definitely/not/here.jpg")
        .build()
        .await;
    assert!(matches!(result, Err(ComposeError::Io(_))));
}
