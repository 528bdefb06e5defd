//! In-memory store for tests and ephemeral use.

use super::{MealPlanStore, PantryStore, RecipeStore, ShoppingListStore};
use crate::error::StoreError;
use crate::types::{MealPlan, Pantry, Recipe, ShoppingList};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Default)]
struct Documents {
    shopping_list: ShoppingList,
    pantry: Pantry,
    recipes: HashMap<String, Recipe>,
    meal_plans: HashMap<String, MealPlan>,
}

/// A store holding every document in memory.
///
/// Writes can be made to fail on demand, to exercise persistence failures.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: RwLock<Documents>,
    fail_writes: AtomicBool,
    shopping_list_saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a pantry document.
    pub fn with_pantry(self, pantry: Pantry) -> Self {
        self.write().pantry = pantry;
        self
    }

    /// Seed the store with a shopping list document.
    pub fn with_shopping_list(self, list: ShoppingList) -> Self {
        self.write().shopping_list = list;
        self
    }

    /// Seed the store with recipes.
    pub fn with_recipes(self, recipes: impl IntoIterator<Item = Recipe>) -> Self {
        {
            let mut docs = self.write();
            for recipe in recipes {
                docs.recipes.insert(recipe.id.clone(), recipe);
            }
        }
        self
    }

    /// Make every subsequent save fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful shopping list saves so far.
    pub fn shopping_list_saves(&self) -> usize {
        self.shopping_list_saves.load(Ordering::SeqCst)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Documents> {
        self.docs.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Documents> {
        self.docs.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn check_writable(&self) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(
                "MemoryStore: writes disabled".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ShoppingListStore for MemoryStore {
    async fn get_shopping_list(&self) -> Result<ShoppingList, StoreError> {
        Ok(self.read().shopping_list.clone())
    }

    async fn save_shopping_list(&self, list: &ShoppingList) -> Result<(), StoreError> {
        self.check_writable()?;
        self.write().shopping_list = list.clone();
        self.shopping_list_saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl PantryStore for MemoryStore {
    async fn get_pantry(&self) -> Result<Pantry, StoreError> {
        Ok(self.read().pantry.clone())
    }

    async fn save_pantry(&self, pantry: &Pantry) -> Result<(), StoreError> {
        self.check_writable()?;
        self.write().pantry = pantry.clone();
        Ok(())
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn get_recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        Ok(self.read().recipes.get(id).cloned())
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        let mut recipes: Vec<Recipe> = self.read().recipes.values().cloned().collect();
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(recipes)
    }

    async fn save_recipe(&self, recipe: &Recipe) -> Result<(), StoreError> {
        self.check_writable()?;
        self.write()
            .recipes
            .insert(recipe.id.clone(), recipe.clone());
        Ok(())
    }

    async fn delete_recipe(&self, id: &str) -> Result<bool, StoreError> {
        self.check_writable()?;
        Ok(self.write().recipes.remove(id).is_some())
    }
}

#[async_trait]
impl MealPlanStore for MemoryStore {
    async fn get_meal_plan_by_id(&self, id: &str) -> Result<Option<MealPlan>, StoreError> {
        Ok(self.read().meal_plans.get(id).cloned())
    }

    async fn get_current_meal_plan(&self) -> Result<Option<MealPlan>, StoreError> {
        Ok(self
            .read()
            .meal_plans
            .values()
            .max_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| b.id.cmp(&a.id)))
            .cloned())
    }

    async fn save_meal_plan(&self, plan: &MealPlan) -> Result<(), StoreError> {
        self.check_writable()?;
        self.write().meal_plans.insert(plan.id.clone(), plan.clone());
        Ok(())
    }
}
