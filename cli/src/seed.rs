use anyhow::{Context, Result};
use despensa_core::{
    add_pantry_item, create_recipe, Difficulty, JsonFileStore, NewRecipe, PantryCategory,
    RecipeStore,
};

struct SeedRecipe {
    title: &'static str,
    ingredients: &'static str,
    steps: &'static [&'static str],
    servings: u32,
    cooking_time: &'static str,
    difficulty: Difficulty,
    tags: &'static [&'static str],
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        title: "Tortilla de patatas",
        ingredients: "6 huevos\n4 patatas\n1 cebolla\naceite de oliva\nsal",
        steps: &[
            "Pela y corta las patatas y la cebolla en laminas finas.",
            "Confitalas en abundante aceite a fuego medio hasta que esten tiernas.",
            "Escurre, mezcla con los huevos batidos y sala.",
            "Cuaja en la sarten por ambos lados.",
        ],
        servings: 4,
        cooking_time: "45 min",
        difficulty: Difficulty::Medium,
        tags: &["vegetariana"],
    },
    SeedRecipe {
        title: "Lentejas con chorizo",
        ingredients: "300 g lentejas, 1 chorizo, 2 zanahorias, 1 cebolla, 1 pimiento verde, pimenton, sal",
        steps: &[
            "Sofrie la cebolla, el pimiento y la zanahoria picados.",
            "Anade el chorizo en rodajas y el pimenton.",
            "Incorpora las lentejas, cubre con agua y cuece 40 minutos.",
        ],
        servings: 4,
        cooking_time: "1 h",
        difficulty: Difficulty::Easy,
        tags: &[],
    },
    SeedRecipe {
        title: "Gazpacho",
        ingredients: "1 kg tomates\n1 pepino\n1 pimiento verde\n1 diente de ajo\npan del dia anterior\naceite de oliva\nvinagre de jerez\nsal",
        steps: &[
            "Trocea las verduras y remoja el pan.",
            "Tritura todo con el aceite, el vinagre y la sal.",
            "Cuela y enfria al menos dos horas.",
        ],
        servings: 6,
        cooking_time: "20 min",
        difficulty: Difficulty::Easy,
        tags: &["vegana", "sin coccion"],
    },
    SeedRecipe {
        title: "Arroz con pollo",
        ingredients: "400 g arroz\n1 pollo troceado\n1 cebolla\n2 dientes de ajo\n1 pimiento rojo\ncaldo de pollo\nazafran\naceite de oliva\nsal",
        steps: &[
            "Dora el pollo en la paella y reserva.",
            "Sofrie cebolla, ajo y pimiento.",
            "Anade el arroz, el caldo caliente y el azafran.",
            "Devuelve el pollo y cuece 18 minutos.",
        ],
        servings: 4,
        cooking_time: "50 min",
        difficulty: Difficulty::Medium,
        tags: &[],
    },
];

const PANTRY_STAPLES: &[&str] = &["sal", "aceite de oliva", "pimienta negra", "vinagre de jerez"];

/// Fill an empty store with sample recipes and pantry staples.
pub async fn seed(store: &JsonFileStore) -> Result<()> {
    if !store.list_recipes().await?.is_empty() {
        println!("Store already has recipes, skipping seed");
        return Ok(());
    }

    println!("Creating {} sample recipes...", SAMPLE_RECIPES.len());
    for recipe in SAMPLE_RECIPES {
        let new = NewRecipe {
            title: recipe.title.to_string(),
            ingredients: recipe.ingredients.to_string(),
            steps: recipe.steps.iter().map(|s| s.to_string()).collect(),
            servings: Some(recipe.servings),
            cooking_time: Some(recipe.cooking_time.to_string()),
            cuisine: Some("espanola".to_string()),
            difficulty: Some(recipe.difficulty),
            dietary_tags: recipe.tags.iter().map(|t| t.to_string()).collect(),
            created_by: "seed".to_string(),
            ..Default::default()
        };
        create_recipe(store, new)
            .await
            .with_context(|| format!("Failed to create recipe: {}", recipe.title))?;
        println!("  Created: {}", recipe.title);
    }

    println!("Stocking {} pantry staples...", PANTRY_STAPLES.len());
    for name in PANTRY_STAPLES {
        add_pantry_item(store, name, PantryCategory::Staple, None)
            .await
            .with_context(|| format!("Failed to add pantry item: {}", name))?;
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("SEED DATA COMPLETE");
    println!("{}", "=".repeat(50));
    println!("Data directory: {}", store.data_dir().display());
    println!("{}", "=".repeat(50));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use despensa_core::PantryStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_seed_fills_an_empty_store_once() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path());

        seed(&store).await.unwrap();
        seed(&store).await.unwrap();

        assert_eq!(store.list_recipes().await.unwrap().len(), SAMPLE_RECIPES.len());
        assert_eq!(store.get_pantry().await.unwrap().items.len(), PANTRY_STAPLES.len());
    }
}
