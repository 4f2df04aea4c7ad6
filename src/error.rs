//! Error types for keydiff operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeydiffError>;

#[derive(Error, Debug)]
pub enum KeydiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to read '{}': {message}", path.display())]
    Input { path: PathBuf, message: String },

    #[error("Schema error: {message}")]
    Schema { message: String, columns: Vec<String> },

    #[error("Duplicate key '{key}' in dataset '{dataset}'")]
    DegenerateKey { dataset: String, key: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl KeydiffError {
    pub fn input(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn schema(msg: impl Into<String>, columns: Vec<String>) -> Self {
        Self::Schema {
            message: msg.into(),
            columns,
        }
    }

    pub fn degenerate_key(dataset: impl Into<String>, key: impl Into<String>) -> Self {
        Self::DegenerateKey {
            dataset: dataset.into(),
            key: key.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    /// Offending column names for schema errors, empty otherwise
    pub fn offending_columns(&self) -> &[String] {
        match self {
            Self::Schema { columns, .. } => columns,
            _ => &[],
        }
    }
}
