use std::path::Path;
use std::sync::Arc;

use objection_core::{Catalog, CatalogDraft, content};

use crate::config::StudyConfig;
use crate::error::StudyError;

/// Parse and validate a JSON catalog.
///
/// # Errors
///
/// Returns `StudyError::CatalogFormat` for malformed JSON and
/// `StudyError::Catalog` when the content breaks a catalog invariant.
pub fn parse_catalog(json: &str) -> Result<Catalog, StudyError> {
    let draft: CatalogDraft = serde_json::from_str(json)?;
    Ok(draft.validate()?)
}

/// # Errors
///
/// Returns `StudyError::CatalogIo` if the file cannot be read, otherwise as
/// [`parse_catalog`].
pub fn read_catalog(path: &Path) -> Result<Catalog, StudyError> {
    let raw = std::fs::read_to_string(path).map_err(|source| StudyError::CatalogIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&raw)
}

/// Load the configured catalog, or the bundled one when no path is set.
///
/// # Errors
///
/// Returns `StudyError` if the catalog cannot be read or fails validation.
pub fn load_catalog(config: &StudyConfig) -> Result<Arc<Catalog>, StudyError> {
    let catalog = match config.catalog_path.as_deref() {
        Some(path) => {
            let catalog = read_catalog(path)?;
            tracing::info!(
                source = %path.display(),
                objections = catalog.objection_count(),
                scenarios = catalog.scenario_count(),
                "catalog loaded"
            );
            catalog
        }
        None => {
            let catalog = content::builtin()?;
            tracing::info!(
                source = "builtin",
                objections = catalog.objection_count(),
                scenarios = catalog.scenario_count(),
                "catalog loaded"
            );
            catalog
        }
    };
    Ok(Arc::new(catalog))
}
