use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Pantry category: always on hand, or on hand right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum PantryCategory {
    Staple,
    Current,
}

impl PantryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PantryCategory::Staple => "staple",
            PantryCategory::Current => "current",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "staple" => Some(PantryCategory::Staple),
            "current" => Some(PantryCategory::Current),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PantryItem {
    pub id: String,
    pub name: String,
    pub category: PantryCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// The pantry document. Item names are unique case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Pantry {
    #[serde(default)]
    pub items: Vec<PantryItem>,
}

/// One consolidated shopping list line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ShoppingItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub checked: bool,
    /// Names of the recipes that contributed this line, in insertion order, no duplicates.
    #[serde(default)]
    pub from_recipes: Vec<String>,
}

/// The shopping list document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ShoppingList {
    #[serde(default)]
    pub items: Vec<ShoppingItem>,
    #[serde(default)]
    pub last_cleared: Option<DateTime<Utc>>,
}

/// Result of merging one ingredient block into the shopping list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MergeCounts {
    /// New lines appended to the list
    pub added: usize,
    /// Ingredients dropped because the pantry already stocks them
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RecipeSource {
    #[default]
    Manual,
    Instagram,
}

/// A stored recipe. The core only ever reads `title` and `ingredients`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Recipe {
    pub id: String,
    pub title: String,
    /// One ingredient per line, or comma-separated
    pub ingredients: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooking_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub source: RecipeSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Lunch,
    Dinner,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "lunch" => Some(MealType::Lunch),
            "dinner" => Some(MealType::Dinner),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlannedMeal {
    pub id: String,
    pub recipe_id: String,
    pub recipe_title: String,
    pub date: NaiveDate,
    pub meal_type: MealType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MealPlan {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub meals: Vec<PlannedMeal>,
    pub created_at: DateTime<Utc>,
}

/// A calendar day of a plan, with the meals planned for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct WeekDay {
    pub date: NaiveDate,
    pub day_name: String,
    pub day_number: u32,
    pub is_today: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunch: Option<PlannedMeal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dinner: Option<PlannedMeal>,
}

/// Totals from generating a shopping list out of a meal plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlanShoppingSummary {
    pub recipes_merged: usize,
    pub recipes_missing: usize,
    pub added: usize,
    pub skipped: usize,
}
