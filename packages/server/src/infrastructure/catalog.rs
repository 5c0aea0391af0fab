//! Item catalog loading.
//!
//! The catalog is a JSON object mapping label → template. A default catalog is
//! embedded in the binary; `--catalog <path>` replaces it with a file on disk.

use std::{collections::BTreeMap, path::Path};

use thiserror::Error;

use crate::domain::ItemTemplate;

const DEFAULT_CATALOG: &str = include_str!("../../assets/item_catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read item catalog '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid item catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Item catalog is empty")]
    Empty,
}

/// Parse catalog templates from JSON text.
pub fn parse_catalog(json: &str) -> Result<BTreeMap<String, ItemTemplate>, CatalogError> {
    let templates: BTreeMap<String, ItemTemplate> = serde_json::from_str(json)?;
    if templates.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(templates)
}

/// Load templates from `path`, or the embedded default catalog when `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<BTreeMap<String, ItemTemplate>, CatalogError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;
            let templates = parse_catalog(&json)?;
            tracing::info!(
                "Loaded {} item templates from {}",
                templates.len(),
                path.display()
            );
            Ok(templates)
        }
        None => parse_catalog(DEFAULT_CATALOG),
    }
}
