//! Shopping list consolidation.
//!
//! Ingredient mentions from many recipes are folded into one list of line items.
//! A mention joins the first existing line it fuzzy-matches (see
//! [`crate::ingredients::matches`]) and only records its recipe as provenance;
//! otherwise it becomes a new line. Mentions the pantry already covers can be
//! left out entirely.
//!
//! Each operation loads the list, changes a local copy, and saves it once. A
//! failed save leaves the stored list as it was.

use crate::error::StoreError;
use crate::id::generate_id;
use crate::ingredients::{is_stocked, matches, tokenize};
use crate::pantry::pantry_item_names;
use crate::store::{PantryStore, ShoppingListStore};
use crate::types::{MergeCounts, ShoppingItem, ShoppingList};
use chrono::Utc;

/// Merge an ingredient block from one recipe into `list`.
///
/// `pantry_names` is only consulted when `exclude_pantry` is set. Ingredients
/// are processed in document order and each one searches the list as it stands, including lines added earlier in the
/// same call, so repeated mentions within a block collapse into one line.
pub fn merge_ingredients<S: AsRef<str>>(
    list: &mut ShoppingList,
    ingredients_text: &str,
    recipe_name: &str,
    exclude_pantry: bool,
    pantry_names: &[S],
) -> MergeCounts {
    let mut counts = MergeCounts::default();

    for ingredient in tokenize(ingredients_text) {
        if exclude_pantry && is_stocked(ingredient, pantry_names) {
            tracing::debug!(ingredient, "already in pantry, skipping");
            counts.skipped += 1;
            continue;
        }

        match list
            .items
            .iter_mut()
            .find(|item| matches(ingredient, &item.text))
        {
            Some(existing) => {
                tracing::debug!(ingredient, line = %existing.text, "merged into existing line");
                if !existing.from_recipes.iter().any(|r| r == recipe_name) {
                    existing.from_recipes.push(recipe_name.to_string());
                }
            }
            None => {
                list.items.push(ShoppingItem {
                    id: generate_id(),
                    text: ingredient.to_string(),
                    checked: false,
                    from_recipes: vec![recipe_name.to_string()],
                });
                counts.added += 1;
            }
        }
    }

    counts
}

/// Add a recipe's ingredients to the stored shopping list.
///
/// With `exclude_pantry`, anything the pantry already stocks is skipped.
pub async fn add_ingredients_to_shopping_list(
    shopping: &dyn ShoppingListStore,
    pantry: &dyn PantryStore,
    ingredients_text: &str,
    recipe_name: &str,
    exclude_pantry: bool,
) -> Result<MergeCounts, StoreError> {
    let pantry_names = if exclude_pantry {
        pantry_item_names(pantry).await?
    } else {
        Vec::new()
    };

    let mut list = shopping.get_shopping_list().await?;
    let counts = merge_ingredients(
        &mut list,
        ingredients_text,
        recipe_name,
        exclude_pantry,
        &pantry_names,
    );
    shopping.save_shopping_list(&list).await?;

    tracing::info!(
        recipe = recipe_name,
        added = counts.added,
        skipped = counts.skipped,
        "ingredients added to shopping list"
    );
    Ok(counts)
}

/// Append a hand-typed line. Blank text is ignored and nothing is saved.
pub async fn add_manual_item(
    shopping: &dyn ShoppingListStore,
    text: &str,
) -> Result<Option<ShoppingItem>, StoreError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let mut list = shopping.get_shopping_list().await?;
    let item = ShoppingItem {
        id: generate_id(),
        text: text.to_string(),
        checked: false,
        from_recipes: Vec::new(),
    };
    list.items.push(item.clone());
    shopping.save_shopping_list(&list).await?;

    Ok(Some(item))
}

/// Flip an item's checked flag. Returns the updated item, or `None` if unknown.
pub async fn toggle_item(
    shopping: &dyn ShoppingListStore,
    item_id: &str,
) -> Result<Option<ShoppingItem>, StoreError> {
    let mut list = shopping.get_shopping_list().await?;
    let Some(item) = list.items.iter_mut().find(|i| i.id == item_id) else {
        return Ok(None);
    };
    item.checked = !item.checked;
    let updated = item.clone();

    shopping.save_shopping_list(&list).await?;
    Ok(Some(updated))
}

/// Remove one item. Returns whether it existed.
pub async fn remove_item(
    shopping: &dyn ShoppingListStore,
    item_id: &str,
) -> Result<bool, StoreError> {
    let mut list = shopping.get_shopping_list().await?;
    let before = list.items.len();
    list.items.retain(|i| i.id != item_id);
    let removed = list.items.len() != before;

    shopping.save_shopping_list(&list).await?;
    Ok(removed)
}

/// Remove every checked item, keeping the rest in order. Returns how many went.
pub async fn clear_checked_items(shopping: &dyn ShoppingListStore) -> Result<usize, StoreError> {
    let mut list = shopping.get_shopping_list().await?;
    let before = list.items.len();
    list.items.retain(|i| !i.checked);
    let deleted = before - list.items.len();

    shopping.save_shopping_list(&list).await?;
    tracing::info!(deleted, "cleared checked items");
    Ok(deleted)
}

/// Empty the list and stamp `last_cleared`.
pub async fn clear_all_items(shopping: &dyn ShoppingListStore) -> Result<(), StoreError> {
    shopping
        .save_shopping_list(&ShoppingList {
            items: Vec::new(),
            last_cleared: Some(Utc::now()),
        })
        .await
}
