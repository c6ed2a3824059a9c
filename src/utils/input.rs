use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use validator::Validate;

use crate::models::Item;

#[derive(Error, Debug)]
pub enum ItemLoadError {
    #[error("Failed to read items file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse items: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Validation error in item #{index}: {message}")]
    Validation { index: usize, message: String },
}

/// Parse a JSON array of items and validate each entry.
pub fn parse_items(json: &str) -> Result<Vec<Item>, ItemLoadError> {
    let items: Vec<Item> = serde_json::from_str(json)?;

    for (index, item) in items.iter().enumerate() {
        item.validate().map_err(|e| ItemLoadError::Validation {
            index,
            message: e.to_string(),
        })?;
    }

    Ok(items)
}

pub fn load_items(path: impl AsRef<Path>) -> Result<Vec<Item>, ItemLoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ItemLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_items(&contents)?;
    tracing::debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}
