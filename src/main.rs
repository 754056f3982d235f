use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;

use recipe_composer::{
    export_recipe, ComposeError, ComposerConfig, CookingTime, Cuisine, GeminiVision, MealType,
    PdfCanvas, RecipeRequest, Servings, VisionService,
};

/// Turn ingredients or a food photo into a recipe
#[derive(Parser, Debug)]
#[command(name = "recipe-composer", version, about)]
struct Cli {
    /// Comma separated ingredients, e.g. "potato, tomato, onion"
    #[arg(conflicts_with = "image")]
    ingredients: Option<String>,

    /// Food photo (jpg / png) to analyze instead of typed ingredients
    #[arg(long, value_name = "PATH")]
    image: Option<PathBuf>,

    /// Preferred cuisine (Any, Indian, Italian, Chinese, Mexican, American, Thai, Other)
    #[arg(long)]
    cuisine: Option<Cuisine>,

    /// Meal type (Dish, Curry, Salad, Pasta, Soup, Snack)
    #[arg(long)]
    meal_type: Option<MealType>,

    /// Number of servings, 1 to 45
    #[arg(long)]
    servings: Option<u32>,

    /// Cooking time in minutes, 5 to 240 in steps of 5
    #[arg(long)]
    cooking_time: Option<u32>,

    /// Write the recipe as a paginated PDF into this directory
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ComposerConfig::load()?;
    debug!("Loaded configuration: {:?}", config.defaults);

    let mut options = config.defaults;
    if let Some(cuisine) = cli.cuisine {
        options.cuisine = cuisine;
    }
    if let Some(meal_type) = cli.meal_type {
        options.meal_type = meal_type;
    }
    if let Some(servings) = cli.servings {
        options.servings = Servings::new(servings)?;
    }
    if let Some(minutes) = cli.cooking_time {
        options.cooking_time = CookingTime::new(minutes)?;
    }

    let vision = GeminiVision::from_config(&config.vision);
    let mut request = RecipeRequest::builder().options(options);
    request = match cli.image {
        Some(path) => request.image_file(path),
        None => request.text(cli.ingredients.unwrap_or_default()),
    };
    if let Some(service) = vision.as_ref() {
        request = request.vision(service as &dyn VisionService);
    }

    let composed = match request.build().await {
        Ok(composed) => composed,
        Err(ComposeError::EmptyInput(message)) => {
            eprintln!("warning: {}", message);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    if let Some(analysis) = &composed.analysis {
        if let Some(message) = analysis.service_error() {
            eprintln!("error: {}", message);
        }
        eprintln!(
            "Detected dish: {}",
            analysis.usable_dish_name().unwrap_or("Unknown")
        );
    }

    println!("{}", composed.recipe.to_markdown());

    if let Some(dir) = cli.export {
        let canvas = PdfCanvas::new(&composed.recipe.title, &config.layout)?;
        let document = export_recipe(&composed.recipe, &config.layout, canvas)?;
        let path = dir.join(&document.file_name);
        std::fs::write(&path, &document.bytes)?;
        info!("Wrote {} page(s) to {}", document.page_count, path.display());
        eprintln!("Recipe ready: {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}
