//! Pantry ("despensa") inventory.

use crate::error::StoreError;
use crate::id::generate_id;
use crate::store::PantryStore;
use crate::types::{PantryCategory, PantryItem};
use chrono::Utc;

/// Add an item unless one with the same name (ignoring case) is already there.
///
/// Returns the new item, or `None` when the name was blank or a duplicate.
pub async fn add_pantry_item(
    store: &dyn PantryStore,
    name: &str,
    category: PantryCategory,
    quantity: Option<&str>,
) -> Result<Option<PantryItem>, StoreError> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }

    let mut pantry = store.get_pantry().await?;
    let normalized = name.to_lowercase();
    if pantry
        .items
        .iter()
        .any(|item| item.name.trim().to_lowercase() == normalized)
    {
        tracing::debug!(name, "pantry already has item");
        return Ok(None);
    }

    let item = PantryItem {
        id: generate_id(),
        name: name.to_string(),
        category,
        quantity: quantity.map(str::to_string),
        added_at: Utc::now(),
    };
    pantry.items.push(item.clone());
    store.save_pantry(&pantry).await?;

    tracing::info!(name, category = category.as_str(), "pantry item added");
    Ok(Some(item))
}

/// Remove an item by id. Returns whether it existed.
pub async fn remove_pantry_item(store: &dyn PantryStore, item_id: &str) -> Result<bool, StoreError> {
    let mut pantry = store.get_pantry().await?;
    let before = pantry.items.len();
    pantry.items.retain(|i| i.id != item_id);
    let removed = pantry.items.len() != before;

    store.save_pantry(&pantry).await?;
    Ok(removed)
}

/// Move an item between staple and current. Nothing is saved for unknown ids.
pub async fn set_pantry_item_category(
    store: &dyn PantryStore,
    item_id: &str,
    category: PantryCategory,
) -> Result<Option<PantryItem>, StoreError> {
    let mut pantry = store.get_pantry().await?;
    let Some(item) = pantry.items.iter_mut().find(|i| i.id == item_id) else {
        return Ok(None);
    };
    item.category = category;
    let updated = item.clone();

    store.save_pantry(&pantry).await?;
    Ok(Some(updated))
}

/// Record a bought shopping item as currently on hand.
///
/// The shopping list is left alone; removing the line is a separate step.
pub async fn move_shopping_item_to_pantry(
    store: &dyn PantryStore,
    item_text: &str,
) -> Result<Option<PantryItem>, StoreError> {
    add_pantry_item(store, item_text, PantryCategory::Current, None).await
}

/// Every pantry item name, lowercased.
pub async fn pantry_item_names(store: &dyn PantryStore) -> Result<Vec<String>, StoreError> {
    let pantry = store.get_pantry().await?;
    Ok(pantry
        .items
        .iter()
        .map(|item| item.name.to_lowercase())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn test_add_rejects_case_insensitive_duplicates() {
        let store = MemoryStore::new();
        let first = add_pantry_item(&store, "Leche", PantryCategory::Staple, Some("2 l"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(first.quantity.as_deref(), Some("2 l"));

        assert!(add_pantry_item(&store, "leche", PantryCategory::Current, None)
            .await
            .unwrap()
            .is_none());
        assert!(add_pantry_item(&store, " LECHE ", PantryCategory::Current, None)
            .await
            .unwrap()
            .is_none());

        let pantry = store.get_pantry().await.unwrap();
        assert_eq!(pantry.items.len(), 1);
        assert_eq!(pantry.items[0].category, PantryCategory::Staple);
    }

    #[tokio::test]
    async fn test_add_trims_and_drops_blank() {
        let store = MemoryStore::new();
        assert!(add_pantry_item(&store, "  ", PantryCategory::Current, None)
            .await
            .unwrap()
            .is_none());

        let item = add_pantry_item(&store, "  arroz ", PantryCategory::Staple, None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(item.name, "arroz");
    }

    #[tokio::test]
    async fn test_set_category_and_remove() {
        let store = MemoryStore::new();
        let item = add_pantry_item(&store, "Huevos", PantryCategory::Current, None)
            .await
            .unwrap()
            .unwrap();

        let updated = set_pantry_item_category(&store, &item.id, PantryCategory::Staple)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.category, PantryCategory::Staple);
        assert!(set_pantry_item_category(&store, "missing", PantryCategory::Current)
            .await
            .unwrap()
            .is_none());

        assert!(!remove_pantry_item(&store, "missing").await.unwrap());
        assert!(remove_pantry_item(&store, &item.id).await.unwrap());
        assert!(store.get_pantry().await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_names_are_lowercased() {
        let store = MemoryStore::new();
        add_pantry_item(&store, "Aceite de Oliva", PantryCategory::Staple, None)
            .await
            .unwrap();
        move_shopping_item_to_pantry(&store, "Tomate Frito")
            .await
            .unwrap();

        assert_eq!(
            pantry_item_names(&store).await.unwrap(),
            vec!["aceite de oliva", "tomate frito"]
        );
        let pantry = store.get_pantry().await.unwrap();
        assert_eq!(pantry.items[1].category, PantryCategory::Current);
    }
}
