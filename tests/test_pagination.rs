use recipe_composer::export::{
    export_recipe, paginate, prepare_lines, suggested_file_name, Canvas, PageLayout, TextCanvas,
};
use recipe_composer::{RecipeComposer, RecipeOptions, Servings};
use std::io::Read;

fn many_ingredients(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("ingredient {}", i)).collect()
}

#[test]
fn test_long_line_is_drawn_as_several_lines() {
    let layout = PageLayout::default();
    let line = "word ".repeat(50);
    let document = paginate(&[line.clone()], &layout);

    let drawn: Vec<&str> = document.pages[0]
        .lines
        .iter()
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(drawn.len(), 3);
    assert!(drawn.iter().all(|d| d.chars().count() <= layout.wrap_width));
    assert_eq!(drawn.concat(), line);
}

#[test]
fn test_pages_never_exceed_capacity() {
    let layout = PageLayout::default();
    let capacity = layout.lines_per_page();
    let mut lines: Vec<String> = (0..130).map(|i| format!("line {}", i)).collect();
    lines.push("y".repeat(400));

    let document = paginate(&lines, &layout);
    assert_eq!(document.line_count(), 135);
    assert_eq!(document.pages.len(), 3);
    for page in &document.pages {
        assert!(page.lines.len() <= capacity);
        assert!(page.lines.iter().all(|l| l.y >= layout.bottom_margin));
        assert_eq!(page.lines[0].y, layout.text_top());
    }
}

#[test]
fn test_export_recipe_end_to_end() {
    let options = RecipeOptions {
        servings: Servings::new(45).unwrap(),
        ..RecipeOptions::default()
    };
    let recipe = RecipeComposer::new(options).compose(&many_ingredients(60), None);

    let document = export_recipe(&recipe, &PageLayout::default(), TextCanvas::new()).unwrap();
    assert_eq!(document.file_name, "Ingredient_0_Dish.txt");
    assert_eq!(document.page_count, 2);

    let mut text = String::new();
    document.reader().read_to_string(&mut text).unwrap();
    assert!(text.starts_with("Ingredient 0 Dish\n\nCuisine: Any\n"));
    assert!(text.contains("\u{2022} Serves: 45"));
    assert!(text.contains("\u{2022} 2.81 cup(s) Ingredient 7\n"));
    assert!(!text.contains("##"));
    assert!(!text.contains("**"));
    assert_eq!(text.matches('\u{c}').count(), 1);
}

#[test]
fn test_prepare_lines_strips_markup() {
    let recipe = RecipeComposer::default().compose(&["egg".to_string()], None);
    let lines = prepare_lines(&recipe.to_markdown());
    assert_eq!(lines[0], "Egg Dish");
    assert_eq!(lines[2], "Cuisine: Any");
    assert!(lines.contains(&"Ingredients".to_string()));
    assert!(lines.contains(&"\u{2022} 2 pcs Egg".to_string()));
}

#[test]
fn test_file_name_from_title() {
    assert_eq!(
        suggested_file_name("Thai Green Curry", "pdf"),
        "Thai_Green_Curry.pdf"
    );
}

#[derive(Debug)]
struct BrokenPen;

impl std::fmt::Display for BrokenPen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("pen ran dry")
    }
}

impl std::error::Error for BrokenPen {}

struct FailingCanvas {
    remaining: usize,
}

impl Canvas for FailingCanvas {
    type Error = BrokenPen;

    fn extension(&self) -> &str {
        "bin"
    }

    fn draw_text(&mut self, _x: f64, _y: f64, _text: &str) -> Result<(), Self::Error> {
        if self.remaining == 0 {
            return Err(BrokenPen);
        }
        self.remaining -= 1;
        Ok(())
    }

    fn finish_page(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn finish(self) -> Result<Vec<u8>, Self::Error> {
        Ok(Vec::new())
    }
}

#[test]
fn test_drawing_failure_is_returned() {
    let recipe = RecipeComposer::default().compose(&["rice".to_string()], None);
    let result = export_recipe(&recipe, &PageLayout::default(), FailingCanvas { remaining: 3 });
    assert_eq!(result.unwrap_err().to_string(), "pen ran dry");
}
