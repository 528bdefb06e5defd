//! JSON file store: one document per file under a data directory.
//!
//! Layout:
//! - `shopping_list.json`
//! - `despensa.json`
//! - `recipes/<id>.json`
//! - `meal_plans/<id>.json`
//!
//! Writes go to a temp file in the target directory and are renamed into place,
//! so a failed save never leaves a half-written document behind.

use super::{MealPlanStore, PantryStore, RecipeStore, ShoppingListStore};
use crate::error::StoreError;
use crate::types::{MealPlan, Pantry, Recipe, ShoppingList};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const SHOPPING_LIST_FILE: &str = "shopping_list.json";
const PANTRY_FILE: &str = "despensa.json";
const RECIPES_DIR: &str = "recipes";
const MEAL_PLANS_DIR: &str = "meal_plans";

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the JSON documents.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `DESPENSA_DATA_DIR`: Document directory (default: "~/.despensa/data")
    pub fn from_env() -> Self {
        let data_dir = env::var("DESPENSA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_dir());
        Self { data_dir }
    }

    /// Get the default data directory: ~/.despensa/data
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".despensa").join("data"))
            .unwrap_or_else(|| PathBuf::from("data"))
    }
}

/// Document store backed by JSON files.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn document_path(&self, collection: &str, id: &str) -> PathBuf {
        // Ids are generated base-36 strings; strip anything that could escape the directory.
        let safe_id: String = id
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        self.data_dir
            .join(collection)
            .join(format!("{}.json", safe_id))
    }

    fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|source| StoreError::InvalidDocument {
                path: path.to_path_buf(),
                source,
            })
    }

    fn write_document<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(io_err)?;

        let content =
            serde_json::to_vec_pretty(value).map_err(|source| StoreError::InvalidDocument {
                path: path.to_path_buf(),
                source,
            })?;

        let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
        temp.write_all(&content).map_err(io_err)?;
        temp.persist(path).map_err(|e| io_err(e.error))?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "document saved");
        Ok(())
    }

    fn read_collection<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, StoreError> {
        let dir = self.data_dir.join(collection);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(StoreError::Io { path: dir, source }),
        };

        let mut documents = Vec::new();
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().map(|e| e == "json").unwrap_or(false) {
                if let Some(doc) = Self::read_document(&path)? {
                    documents.push(doc);
                }
            }
        }
        Ok(documents)
    }
}

#[async_trait]
impl ShoppingListStore for JsonFileStore {
    async fn get_shopping_list(&self) -> Result<ShoppingList, StoreError> {
        Ok(Self::read_document(&self.data_dir.join(SHOPPING_LIST_FILE))?.unwrap_or_default())
    }

    async fn save_shopping_list(&self, list: &ShoppingList) -> Result<(), StoreError> {
        Self::write_document(&self.data_dir.join(SHOPPING_LIST_FILE), list)
    }
}

#[async_trait]
impl PantryStore for JsonFileStore {
    async fn get_pantry(&self) -> Result<Pantry, StoreError> {
        Ok(Self::read_document(&self.data_dir.join(PANTRY_FILE))?.unwrap_or_default())
    }

    async fn save_pantry(&self, pantry: &Pantry) -> Result<(), StoreError> {
        Self::write_document(&self.data_dir.join(PANTRY_FILE), pantry)
    }
}

#[async_trait]
impl RecipeStore for JsonFileStore {
    async fn get_recipe_by_id(&self, id: &str) -> Result<Option<Recipe>, StoreError> {
        Self::read_document(&self.document_path(RECIPES_DIR, id))
    }

    async fn list_recipes(&self) -> Result<Vec<Recipe>, StoreError> {
        let mut recipes: Vec<Recipe> = self.read_collection(RECIPES_DIR)?;
        recipes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(recipes)
    }

    async fn save_recipe(&self, recipe: &Recipe) -> Result<(), StoreError> {
        Self::write_document(&self.document_path(RECIPES_DIR, &recipe.id), recipe)
    }

    async fn delete_recipe(&self, id: &str) -> Result<bool, StoreError> {
        let path = self.document_path(RECIPES_DIR, id);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "document removed");
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

#[async_trait]
impl MealPlanStore for JsonFileStore {
    async fn get_meal_plan_by_id(&self, id: &str) -> Result<Option<MealPlan>, StoreError> {
        Self::read_document(&self.document_path(MEAL_PLANS_DIR, id))
    }

    async fn get_current_meal_plan(&self) -> Result<Option<MealPlan>, StoreError> {
        let plans: Vec<MealPlan> = self.read_collection(MEAL_PLANS_DIR)?;
        Ok(plans
            .into_iter()
            .max_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| b.id.cmp(&a.id))))
    }

    async fn save_meal_plan(&self, plan: &MealPlan) -> Result<(), StoreError> {
        Self::write_document(&self.document_path(MEAL_PLANS_DIR, &plan.id), plan)
    }
}
