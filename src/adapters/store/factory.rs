//! Record store factory

use super::jsonl::JsonLinesStore;
use super::traits::RecordStore;
use crate::config::LabexConfig;
use crate::domain::{LabexError, Result};
use std::sync::Arc;

/// Create a record store based on the configuration
///
/// # Errors
///
/// Returns a configuration error if the store path is empty
pub fn create_record_store(config: &LabexConfig) -> Result<Arc<dyn RecordStore + Send + Sync>> {
    let path = config.store.path.trim();
    if path.is_empty() {
        return Err(LabexError::Configuration(
            "store.path cannot be empty".to_string(),
        ));
    }

    tracing::debug!(path, "Creating JSON-lines record store");
    Ok(Arc::new(JsonLinesStore::new(path)) as Arc<dyn RecordStore + Send + Sync>)
}
