//! End-to-end shopping list flows against the in-memory and JSON file stores.

use chrono::{NaiveDate, TimeZone, Utc};
use despensa_core::meal_plan::{add_meal_to_day, create_empty_meal_plan};
use despensa_core::{
    add_ingredients_to_shopping_list, add_manual_item, add_pantry_item, clear_all_items,
    clear_checked_items, delete_recipe, generate_shopping_list_from_plan, matches, move_shopping_item_to_pantry,
    remove_item, toggle_item, JsonFileStore, MealPlanStore, MealType, MemoryStore, MergeCounts,
    PantryCategory, PantryStore, Recipe, RecipeSource, RecipeStore, ShoppingListStore, StoreError,
};
use tempfile::TempDir;

fn recipe(id: &str, title: &str, ingredients: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        ingredients: ingredients.to_string(),
        steps: vec![],
        servings: None,
        cooking_time: None,
        cuisine: None,
        difficulty: None,
        dietary_tags: vec![],
        source: RecipeSource::Manual,
        source_url: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        created_by: "maria".to_string(),
    }
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

#[tokio::test]
async fn test_sofrito_into_empty_list() {
    let store = MemoryStore::new();

    let counts = add_ingredients_to_shopping_list(&store, &store, "Tomate\nCebolla, Ajo", "Sofrito", true)
        .await
        .unwrap();

    assert_eq!(counts, MergeCounts { added: 3, skipped: 0 });
    let list = store.get_shopping_list().await.unwrap();
    assert_eq!(list.items.len(), 3);
    for item in &list.items {
        assert!(!item.checked);
        assert_eq!(item.from_recipes, vec!["Sofrito"]);
    }
}

#[tokio::test]
async fn test_pantry_items_are_skipped() {
    let store = MemoryStore::new();
    add_pantry_item(&store, "Huevos", PantryCategory::Staple, None)
        .await
        .unwrap();

    let counts = add_ingredients_to_shopping_list(&store, &store, "huevos\nharina", "Bizcocho", true)
        .await
        .unwrap();

    assert_eq!(counts, MergeCounts { added: 1, skipped: 1 });
    let list = store.get_shopping_list().await.unwrap();
    assert!(!list.items.iter().any(|i| matches("huevos", &i.text)));

    // Same block without pantry exclusion picks the eggs up.
    let counts = add_ingredients_to_shopping_list(&store, &store, "huevos\nharina", "Bizcocho", false)
        .await
        .unwrap();
    assert_eq!(counts, MergeCounts { added: 1, skipped: 0 });
}

#[tokio::test]
async fn test_repeated_recipe_keeps_single_provenance() {
    let store = MemoryStore::new();
    for _ in 0..2 {
        add_ingredients_to_shopping_list(&store, &store, "leche\nleche entera\nazucar", "Flan", true)
            .await
            .unwrap();
    }

    let list = store.get_shopping_list().await.unwrap();
    assert_eq!(list.items.len(), 2);
    for item in &list.items {
        assert_eq!(item.from_recipes, vec!["Flan"]);
    }
}

#[tokio::test]
async fn test_item_lifecycle() {
    let store = MemoryStore::new();
    add_ingredients_to_shopping_list(&store, &store, "pan, queso, jamon", "Bocadillo", true)
        .await
        .unwrap();
    let manual = add_manual_item(&store, "servilletas").await.unwrap().unwrap();

    let list = store.get_shopping_list().await.unwrap();
    let queso = list.items[1].id.clone();
    let jamon = list.items[2].id.clone();

    assert!(toggle_item(&store, &queso).await.unwrap().unwrap().checked);
    assert!(toggle_item(&store, &manual.id).await.unwrap().unwrap().checked);
    assert!(remove_item(&store, &jamon).await.unwrap());
    assert!(!remove_item(&store, &jamon).await.unwrap());

    assert_eq!(clear_checked_items(&store).await.unwrap(), 2);
    let texts: Vec<String> = store
        .get_shopping_list()
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|i| i.text)
        .collect();
    assert_eq!(texts, vec!["pan"]);

    let before = Utc::now();
    clear_all_items(&store).await.unwrap();
    let list = store.get_shopping_list().await.unwrap();
    assert!(list.items.is_empty());
    assert!(list.last_cleared.unwrap() >= before);
}

#[tokio::test]
async fn test_clear_checked_preserves_order() {
    let store = MemoryStore::new();
    add_ingredients_to_shopping_list(&store, &store, "a1\nb2\nc3\nd4\ne5", "Test", false)
        .await
        .unwrap();
    let ids: Vec<String> = store
        .get_shopping_list()
        .await
        .unwrap()
        .items
        .iter()
        .map(|i| i.id.clone())
        .collect();
    toggle_item(&store, &ids[1]).await.unwrap();
    toggle_item(&store, &ids[3]).await.unwrap();

    clear_checked_items(&store).await.unwrap();
    let texts: Vec<String> = store
        .get_shopping_list()
        .await
        .unwrap()
        .items
        .into_iter()
        .map(|i| i.text)
        .collect();
    assert_eq!(texts, vec!["a1", "c3", "e5"]);
}

#[tokio::test]
async fn test_failed_save_leaves_list_untouched() {
    let store = MemoryStore::new();
    add_ingredients_to_shopping_list(&store, &store, "arroz", "Paella", true)
        .await
        .unwrap();
    let before = store.get_shopping_list().await.unwrap();

    store.set_fail_writes(true);
    let result = add_ingredients_to_shopping_list(&store, &store, "gambas, arroz", "Arroz negro", true).await;
    assert!(matches!(result, Err(StoreError::Unavailable(_))));
    assert_eq!(store.get_shopping_list().await.unwrap(), before);

    let result = clear_all_items(&store).await;
    assert!(result.is_err());
    assert_eq!(store.get_shopping_list().await.unwrap(), before);
}

#[tokio::test]
async fn test_move_to_pantry_keeps_shopping_line() {
    let store = MemoryStore::new();
    add_ingredients_to_shopping_list(&store, &store, "Aceite", "Ensalada", true)
        .await
        .unwrap();

    let item = move_shopping_item_to_pantry(&store, "Aceite")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(item.category, PantryCategory::Current);
    assert_eq!(store.get_shopping_list().await.unwrap().items.len(), 1);

    // Next time the recipe comes round, the pantry covers it.
    let counts = add_ingredients_to_shopping_list(&store, &store, "aceite de oliva", "Ensalada", true)
        .await
        .unwrap();
    assert_eq!(counts, MergeCounts { added: 0, skipped: 1 });
}

#[tokio::test]
async fn test_plan_merges_each_recipe_once() {
    let store = MemoryStore::new().with_recipes([
        recipe("r1", "Lentejas", "lentejas\nchorizo\nzanahoria"),
        recipe("r2", "Tortilla", "huevos, patatas, cebolla"),
    ]);
    add_pantry_item(&store, "cebolla", PantryCategory::Staple, None)
        .await
        .unwrap();

    let plan = create_empty_meal_plan("Semana", monday(), 1).unwrap();
    store.save_meal_plan(&plan).await.unwrap();
    let tuesday = monday().succ_opt().unwrap();
    add_meal_to_day(&store, &plan.id, monday(), MealType::Lunch, "r1", "Lentejas")
        .await
        .unwrap();
    add_meal_to_day(&store, &plan.id, monday(), MealType::Dinner, "r2", "Tortilla")
        .await
        .unwrap();
    add_meal_to_day(&store, &plan.id, tuesday, MealType::Lunch, "r1", "Lentejas")
        .await
        .unwrap();
    add_meal_to_day(&store, &plan.id, tuesday, MealType::Dinner, "gone", "Borrada")
        .await
        .unwrap();

    let plan = store.get_meal_plan_by_id(&plan.id).await.unwrap().unwrap();
    let summary = generate_shopping_list_from_plan(&plan, &store, &store, &store)
        .await
        .unwrap();

    assert_eq!(summary.recipes_merged, 2);
    assert_eq!(summary.recipes_missing, 1);
    assert_eq!(summary.added, 5);
    assert_eq!(summary.skipped, 1);
    assert_eq!(store.shopping_list_saves(), 2);

    let list = store.get_shopping_list().await.unwrap();
    let texts: Vec<&str> = list.items.iter().map(|i| i.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["lentejas", "chorizo", "zanahoria", "huevos", "patatas"]
    );
    assert_eq!(list.items[0].from_recipes, vec!["Lentejas"]);
    assert_eq!(list.items[3].from_recipes, vec!["Tortilla"]);
}

#[tokio::test]
async fn test_deleted_planned_recipe_counts_as_missing() {
    let store = MemoryStore::new().with_recipes([
        recipe("r1", "Lentejas", "lentejas\nchorizo"),
        recipe("r2", "Pisto", "calabacin, pimiento"),
    ]);
    let plan = create_empty_meal_plan("Semana", monday(), 1).unwrap();
    store.save_meal_plan(&plan).await.unwrap();
    add_meal_to_day(&store, &plan.id, monday(), MealType::Lunch, "r1", "Lentejas")
        .await
        .unwrap();
    add_meal_to_day(&store, &plan.id, monday(), MealType::Dinner, "r2", "Pisto")
        .await
        .unwrap();

    assert!(delete_recipe(&store, "r2").await.unwrap());

    let plan = store.get_meal_plan_by_id(&plan.id).await.unwrap().unwrap();
    assert_eq!(plan.meals.len(), 2);
    let summary = generate_shopping_list_from_plan(&plan, &store, &store, &store)
        .await
        .unwrap();

    assert_eq!(summary.recipes_merged, 1);
    assert_eq!(summary.recipes_missing, 1);
    assert_eq!(summary.added, 2);
    let list = store.get_shopping_list().await.unwrap();
    assert!(list.items.iter().all(|item| item.from_recipes == vec!["Lentejas"]));
}

#[tokio::test]
async fn test_plan_recipes_share_lines() {
    let store = MemoryStore::new().with_recipes([
        recipe("r1", "Sofrito", "tomate, cebolla"),
        recipe("r2", "Gazpacho", "tomate maduro\npepino"),
    ]);
    let mut plan = create_empty_meal_plan("Semana", monday(), 1).unwrap();
    store.save_meal_plan(&plan).await.unwrap();
    add_meal_to_day(&store, &plan.id, monday(), MealType::Lunch, "r1", "Sofrito")
        .await
        .unwrap();
    add_meal_to_day(&store, &plan.id, monday(), MealType::Dinner, "r2", "Gazpacho")
        .await
        .unwrap();
    plan = store.get_meal_plan_by_id(&plan.id).await.unwrap().unwrap();

    generate_shopping_list_from_plan(&plan, &store, &store, &store)
        .await
        .unwrap();

    let list = store.get_shopping_list().await.unwrap();
    assert_eq!(list.items.len(), 3);
    assert_eq!(list.items[0].text, "tomate");
    assert_eq!(list.items[0].from_recipes, vec!["Sofrito", "Gazpacho"]);
}

#[tokio::test]
async fn test_json_file_store_flow() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path());

    store
        .save_recipe(&recipe("r1", "Sofrito", "Tomate\nCebolla, Ajo"))
        .await
        .unwrap();
    add_pantry_item(&store, "ajo", PantryCategory::Staple, None)
        .await
        .unwrap();

    let plan = create_empty_meal_plan("Semana", monday(), 1).unwrap();
    store.save_meal_plan(&plan).await.unwrap();
    add_meal_to_day(&store, &plan.id, monday(), MealType::Lunch, "r1", "Sofrito")
        .await
        .unwrap();

    let current = store.get_current_meal_plan().await.unwrap().unwrap();
    assert_eq!(current.id, plan.id);
    let summary = generate_shopping_list_from_plan(&current, &store, &store, &store)
        .await
        .unwrap();
    assert_eq!(summary.added, 2);
    assert_eq!(summary.skipped, 1);

    let reopened = JsonFileStore::new(temp_dir.path());
    let list = reopened.get_shopping_list().await.unwrap();
    assert_eq!(list.items.len(), 2);
    assert_eq!(reopened.get_pantry().await.unwrap().items.len(), 1);
    assert_eq!(reopened.list_recipes().await.unwrap().len(), 1);
}
