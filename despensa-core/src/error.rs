use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid document {path}: {source}")]
    InvalidDocument {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum MealPlanError {
    #[error("Meal plan not found: {0}")]
    NotFound(String),

    #[error("Invalid meal plan range: {0}")]
    InvalidRange(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
