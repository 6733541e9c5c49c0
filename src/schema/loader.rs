//! Schema registry and schema file loader
//!
//! A schema file is either a document of the form `{"models": [...]}` or a
//! single model object. A directory is loaded by reading every `*.json` file
//! in it, in file name order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::accessor::SchemaAccessor;
use super::errors::{SchemaError, SchemaResult};
use super::types::ModelSchema;

/// Multi-model schema document.
#[derive(Deserialize)]
struct SchemaDocument {
    models: Vec<ModelSchema>,
}

/// Accepted shapes of a schema file.
#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaFile {
    Document(SchemaDocument),
    Single(ModelSchema),
}

/// In-memory registry of model schemas indexed by model name.
///
/// Registered models are immutable; registering the same name twice fails.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    models: BTreeMap<String, ModelSchema>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a schema file or directory into a fresh registry.
    pub fn from_path(path: &Path) -> SchemaResult<Self> {
        let mut registry = Self::new();
        if path.is_dir() {
            registry.load_dir(path)?;
        } else {
            registry.load_file(path)?;
        }
        Ok(registry)
    }

    /// Registers a model schema directly.
    pub fn register(&mut self, model: ModelSchema) -> SchemaResult<()> {
        if self.models.contains_key(&model.name) {
            return Err(SchemaError::DuplicateModel(model.name));
        }
        self.models.insert(model.name.clone(), model);
        Ok(())
    }

    /// Loads every `*.json` file in `dir`.
    ///
    /// Returns the number of models registered.
    pub fn load_dir(&mut self, dir: &Path) -> SchemaResult<usize> {
        let entries = fs::read_dir(dir).map_err(|e| SchemaError::io(dir.display().to_string(), e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SchemaError::io(dir.display().to_string(), e))?;
            let path = entry.path();

            // Skip non-JSON files
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            loaded += self.load_file(&path)?;
        }
        Ok(loaded)
    }

    /// Loads a single schema file.
    ///
    /// Returns the number of models registered.
    pub fn load_file(&mut self, path: &Path) -> SchemaResult<usize> {
        let content =
            fs::read_to_string(path).map_err(|e| SchemaError::io(path.display().to_string(), e))?;

        let parsed: SchemaFile = serde_json::from_str(&content).map_err(|e| {
            SchemaError::malformed(path.display().to_string(), format!("Invalid JSON: {}", e))
        })?;

        let models = match parsed {
            SchemaFile::Document(doc) => doc.models,
            SchemaFile::Single(model) => vec![model],
        };

        let count = models.len();
        for model in models {
            if model.name.trim().is_empty() {
                return Err(SchemaError::malformed(
                    path.display().to_string(),
                    "model name must not be empty",
                ));
            }
            self.register(model)?;
        }

        debug!(path = %path.display(), models = count, "loaded schema file");
        Ok(count)
    }

    /// Gets a model schema by name.
    pub fn get(&self, model: &str) -> Option<&ModelSchema> {
        self.models.get(model)
    }

    /// Checks if a model exists.
    pub fn contains(&self, model: &str) -> bool {
        self.models.contains_key(model)
    }

    /// Returns all model names in sorted order.
    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    /// Returns all registered models.
    pub fn models(&self) -> impl Iterator<Item = &ModelSchema> {
        self.models.values()
    }

    /// Returns the number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Returns whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl SchemaAccessor for SchemaRegistry {
    fn model_fields(&self, model: &str) -> Option<&ModelSchema> {
        self.get(model)
    }
}
