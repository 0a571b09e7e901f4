//! Reading and parsing the metadata file.

use crate::error::{MonitorError, Result};
use crate::store::MetadataStore;
use std::path::Path;

/// Read and parse the metadata file into a [`MetadataStore`] snapshot.
///
/// The read is asynchronous so a slow or large file never blocks the watcher
/// loop. Failures are always returned as values, never panicked:
///
/// # Errors
///
/// - [`MonitorError::Read`] if the file cannot be read (missing, permissions,
///   mid-rotation I/O error)
/// - [`MonitorError::Parse`] if the content is not valid JSON of the expected
///   shape
pub async fn read_store(path: impl AsRef<Path>) -> Result<MetadataStore> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    serde_json::from_slice(&bytes).map_err(MonitorError::from)
}
