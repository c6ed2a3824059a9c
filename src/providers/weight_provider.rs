use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeightTableError {
    #[error("Failed to read weight table {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse weight table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid weight {weight} for item '{id}'")]
    InvalidWeight { id: String, weight: f64 },
}

/// Resolves the weight of an item by its identifier.
///
/// Unknown identifiers must return `0.0`, which callers read as
/// "no weight information".
pub trait WeightProvider: Send + Sync {
    fn weight(&self, item_id: &str) -> f64;
}

impl<F> WeightProvider for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn weight(&self, item_id: &str) -> f64 {
        self(item_id)
    }
}

/// Map backed implementation of WeightProvider
#[derive(Debug, Clone, Default)]
pub struct InMemoryWeightProvider {
    weights: HashMap<String, f64>,
}

impl InMemoryWeightProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(weights: HashMap<String, f64>) -> Result<Self, WeightTableError> {
        for (id, weight) in &weights {
            check_weight(id, *weight)?;
        }
        Ok(Self { weights })
    }

    /// Parse a JSON object of `"id": weight` pairs.
    pub fn from_json_str(json: &str) -> Result<Self, WeightTableError> {
        let weights: HashMap<String, f64> = serde_json::from_str(json)?;
        Self::from_map(weights)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WeightTableError> {
        let path = path.as_ref();
        tracing::debug!("Loading weight table from {}", path.display());

        let contents = fs::read_to_string(path).map_err(|source| WeightTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let provider = Self::from_json_str(&contents)?;

        tracing::info!(
            "Loaded {} item weights from {}",
            provider.len(),
            path.display()
        );
        Ok(provider)
    }

    /// Returns the previous weight registered for `id`, if any.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        weight: f64,
    ) -> Result<Option<f64>, WeightTableError> {
        let id = id.into();
        check_weight(&id, weight)?;
        Ok(self.weights.insert(id, weight))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl WeightProvider for InMemoryWeightProvider {
    fn weight(&self, item_id: &str) -> f64 {
        self.weights.get(item_id).copied().unwrap_or(0.0)
    }
}

fn check_weight(id: &str, weight: f64) -> Result<(), WeightTableError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(WeightTableError::InvalidWeight {
            id: id.to_string(),
            weight,
        });
    }
    Ok(())
}
