use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ComposeError;

/// Preferred cuisine. `Any` means no particular cuisine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cuisine {
    #[default]
    Any,
    Indian,
    Italian,
    Chinese,
    Mexican,
    American,
    Thai,
    Other,
}

impl Cuisine {
    pub const ALL: [Cuisine; 8] = [
        Cuisine::Any,
        Cuisine::Indian,
        Cuisine::Italian,
        Cuisine::Chinese,
        Cuisine::Mexican,
        Cuisine::American,
        Cuisine::Thai,
        Cuisine::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Cuisine::Any => "Any",
            Cuisine::Indian => "Indian",
            Cuisine::Italian => "Italian",
            Cuisine::Chinese => "Chinese",
            Cuisine::Mexican => "Mexican",
            Cuisine::American => "American",
            Cuisine::Thai => "Thai",
            Cuisine::Other => "Other",
        }
    }

    /// True for every cuisine except the `Any` sentinel
    pub fn is_specific(&self) -> bool {
        *self != Cuisine::Any
    }
}

/// Kind of dish the recipe should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MealType {
    #[default]
    Dish,
    Curry,
    Salad,
    Pasta,
    Soup,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 6] = [
        MealType::Dish,
        MealType::Curry,
        MealType::Salad,
        MealType::Pasta,
        MealType::Soup,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Dish => "Dish",
            MealType::Curry => "Curry",
            MealType::Salad => "Salad",
            MealType::Pasta => "Pasta",
            MealType::Soup => "Soup",
            MealType::Snack => "Snack",
        }
    }
}

macro_rules! choice_conversions {
    ($ty:ident, $label:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ComposeError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        ComposeError::InvalidInput(format!("unknown {}: '{}'", $label, s))
                    })
            }
        }

        impl TryFrom<String> for $ty {
            type Error = ComposeError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

choice_conversions!(Cuisine, "cuisine");
choice_conversions!(MealType, "meal type");

/// Number of people the recipe serves, 1 to 45
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Servings(u32);

impl Servings {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 45;

    pub fn new(count: u32) -> Result<Self, ComposeError> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Servings(count))
        } else {
            Err(ComposeError::InvalidInput(format!(
                "servings must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                count
            )))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for Servings {
    fn default() -> Self {
        Servings(2)
    }
}

impl TryFrom<u32> for Servings {
    type Error = ComposeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Servings::new(value)
    }
}

impl From<Servings> for u32 {
    fn from(value: Servings) -> Self {
        value.0
    }
}

/// Approximate cooking time in minutes: 5 to 240 in steps of 5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CookingTime(u32);

impl CookingTime {
    pub const MIN: u32 = 5;
    pub const MAX: u32 = 240;
    pub const STEP: u32 = 5;

    pub fn new(minutes: u32) -> Result<Self, ComposeError> {
        if !(Self::MIN..=Self::MAX).contains(&minutes) || minutes % Self::STEP != 0 {
            return Err(ComposeError::InvalidInput(format!(
                "cooking time must be a multiple of {} between {} and {} minutes, got {}",
                Self::STEP,
                Self::MIN,
                Self::MAX,
                minutes
            )));
        }
        Ok(CookingTime(minutes))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl Default for CookingTime {
    fn default() -> Self {
        CookingTime(30)
    }
}

impl TryFrom<u32> for CookingTime {
    type Error = ComposeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        CookingTime::new(value)
    }
}

impl From<CookingTime> for u32 {
    fn from(value: CookingTime) -> Self {
        value.0
    }
}

/// User choices that shape a recipe besides its ingredients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecipeOptions {
    pub cuisine: Cuisine,
    pub meal_type: MealType,
    pub servings: Servings,
    pub cooking_time: CookingTime,
}

/// A composed recipe. Built once by `RecipeComposer`, then rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub cuisine: Cuisine,
    pub meal_type: MealType,
    pub cooking_time: CookingTime,
    /// Formatted ingredient lines, `Serves: N` first
    pub ingredients: Vec<String>,
    /// Numbered step lines
    pub steps: Vec<String>,
}

impl Recipe {
    /// Render the recipe as on-screen markdown
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("## {}\n\n", self.title));
        output.push_str(&format!("**Cuisine:** {}  \n", self.cuisine));
        output.push_str(&format!("**Meal Type:** {}  \n", self.meal_type));
        output.push_str(&format!(
            "**Approx. Cooking Time:** {} minutes  \n\n",
            self.cooking_time.minutes()
        ));

        output.push_str("### Ingredients\n");
        for line in &self.ingredients {
            output.push_str(&format!("- {}\n", line));
        }

        output.push_str("\n### Steps\n");
        for step in &self.steps {
            output.push_str(step);
            output.push('\n');
        }

        output
    }
}
