//! Recipe CRUD and search. The shopping list only ever reads recipes.

use crate::error::StoreError;
use crate::id::generate_id;
use crate::store::RecipeStore;
use crate::types::{Difficulty, Recipe, RecipeSource};
use chrono::Utc;
use serde::Deserialize;

/// Fields supplied by the caller when saving a new recipe.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub cooking_time: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    #[serde(default)]
    pub source: RecipeSource,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub created_by: String,
}

/// Save a new recipe with a fresh id. A blank title is dropped (`None`).
pub async fn create_recipe(
    store: &dyn RecipeStore,
    new: NewRecipe,
) -> Result<Option<Recipe>, StoreError> {
    let title = new.title.trim();
    if title.is_empty() {
        return Ok(None);
    }

    let recipe = Recipe {
        id: generate_id(),
        title: title.to_string(),
        ingredients: new.ingredients,
        steps: new.steps,
        servings: new.servings,
        cooking_time: new.cooking_time,
        cuisine: new.cuisine,
        difficulty: new.difficulty,
        dietary_tags: new.dietary_tags,
        source: new.source,
        source_url: new.source_url,
        created_at: Utc::now(),
        created_by: new.created_by,
    };
    store.save_recipe(&recipe).await?;

    tracing::info!(recipe_id = %recipe.id, title = %recipe.title, "recipe created");
    Ok(Some(recipe))
}

/// Fields to change on an existing recipe. Absent fields are left as they are.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub steps: Option<Vec<String>>,
    pub servings: Option<u32>,
    pub cooking_time: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub dietary_tags: Option<Vec<String>>,
    pub source_url: Option<String>,
}

/// Apply `update` to a stored recipe. Returns `None` when the recipe does not exist.
///
/// A blank title is ignored; the recipe keeps its current one.
pub async fn update_recipe(
    store: &dyn RecipeStore,
    id: &str,
    update: RecipeUpdate,
) -> Result<Option<Recipe>, StoreError> {
    let Some(mut recipe) = store.get_recipe_by_id(id).await? else {
        return Ok(None);
    };

    if let Some(title) = update.title {
        let title = title.trim();
        if !title.is_empty() {
            recipe.title = title.to_string();
        }
    }
    if let Some(ingredients) = update.ingredients {
        recipe.ingredients = ingredients;
    }
    if let Some(steps) = update.steps {
        recipe.steps = steps;
    }
    if let Some(servings) = update.servings {
        recipe.servings = Some(servings);
    }
    if let Some(cooking_time) = update.cooking_time {
        recipe.cooking_time = Some(cooking_time);
    }
    if let Some(cuisine) = update.cuisine {
        recipe.cuisine = Some(cuisine);
    }
    if let Some(difficulty) = update.difficulty {
        recipe.difficulty = Some(difficulty);
    }
    if let Some(dietary_tags) = update.dietary_tags {
        recipe.dietary_tags = dietary_tags;
    }
    if let Some(source_url) = update.source_url {
        recipe.source_url = Some(source_url);
    }

    store.save_recipe(&recipe).await?;
    tracing::info!(recipe_id = %recipe.id, "recipe updated");
    Ok(Some(recipe))
}

/// Delete a recipe. Meal plans that reference it keep their meals; the
/// shopping list generator skips it from then on.
pub async fn delete_recipe(store: &dyn RecipeStore, id: &str) -> Result<bool, StoreError> {
    let deleted = store.delete_recipe(id).await?;
    if deleted {
        tracing::info!(recipe_id = id, "recipe deleted");
    }
    Ok(deleted)
}

/// Recipes whose title or ingredients contain `term`, ignoring case.
///
/// A blank term matches everything. Order is preserved.
pub fn search_recipes(recipes: Vec<Recipe>, term: &str) -> Vec<Recipe> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return recipes;
    }

    recipes
        .into_iter()
        .filter(|recipe| {
            recipe.title.to_lowercase().contains(&term)
                || recipe.ingredients.to_lowercase().contains(&term)
        })
        .collect()
}
