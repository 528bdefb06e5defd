pub mod error;
pub mod id;
pub mod ingredients;
pub mod meal_plan;
pub mod pantry;
pub mod recipes;
pub mod shopping;
pub mod store;
pub mod types;

pub use error::{MealPlanError, StoreError};
pub use ingredients::{is_stocked, matches, tokenize};
pub use meal_plan::{
    add_meal_to_day, create_empty_meal_plan, generate_shopping_list_from_plan, plan_calendar,
    remove_meal_from_day, MAX_PLAN_WEEKS,
};
pub use pantry::{
    add_pantry_item, move_shopping_item_to_pantry, pantry_item_names, remove_pantry_item,
    set_pantry_item_category,
};
pub use recipes::{
    create_recipe, delete_recipe, search_recipes, update_recipe, NewRecipe, RecipeUpdate,
};
pub use shopping::{
    add_ingredients_to_shopping_list, add_manual_item, clear_all_items, clear_checked_items,
    merge_ingredients, remove_item, toggle_item,
};
pub use store::{
    JsonFileStore, MealPlanStore, MemoryStore, PantryStore, RecipeStore, ShoppingListStore,
    StoreConfig,
};
pub use types::{
    Difficulty, MealPlan, MealType, MergeCounts, Pantry, PantryCategory, PantryItem,
    PlanShoppingSummary, PlannedMeal, Recipe, RecipeSource, ShoppingItem, ShoppingList, WeekDay,
};
