//! Document store abstraction.
//!
//! The shopping list and the pantry are single shared documents; recipes and
//! meal plans are keyed by id. Every mutation in this crate is a full
//! read-modify-write of one document with no locking: concurrent writers can
//! lose updates (last save wins).

mod disk;
mod memory;

pub use disk::{JsonFileStore, StoreConfig};
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::types::{MealPlan, Pantry, Recipe, ShoppingList};
use async_trait::async_trait;

#[async_trait]
pub trait ShoppingListStore: Send + Sync {
    /// Load the shopping list. A missing document reads as an empty list.
    async fn get_shopping_list(&self) -> Result<ShoppingList, StoreError>;

    /// Replace the stored shopping list.
    async fn save_shopping_list(&self, list: &ShoppingList) -> Result<(), StoreError>;
}

#[async_trait]
pub trait PantryStore: Send + Sync {
    /// Load the pantry. A missing document reads as an empty pantry.
    async fn get_pantry(&self) -> Result<Pantry, StoreError>;

    /// Replace the stored pantry.
    async fn save_pantry(&self, pantry: &Pantry) -> Result<(), StoreError>;
}

#[async_trait]
pub trait RecipeStore: Send + Sync {
    async fn get_recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError>;

    /// All recipes, newest first.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, StoreError>;

    async fn save_recipe(&self, recipe: &Recipe) -> Result<(), StoreError>;

    /// Remove a recipe. Returns whether it existed.
    async fn delete_recipe(&self, id: &str) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait MealPlanStore: Send + Sync {
    async fn get_meal_plan_by_id(&self, id: &str) -> Result<Option<MealPlan>, StoreError>;

    /// The most recently created plan, if any.
    async fn get_current_meal_plan(&self) -> Result<Option<MealPlan>, StoreError>;

    async fn save_meal_plan(&self, plan: &MealPlan) -> Result<(), StoreError>;
}
