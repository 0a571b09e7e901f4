//! Startup configuration for the monitor.

use crate::error::{MonitorError, Result};
use std::path::PathBuf;

/// Environment variable naming the metadata file to watch.
pub const ENV_METADATA_PATH: &str = "PATH_TO_METADATA_FILE";
/// Environment variable naming the listener URL to POST events to.
pub const ENV_LISTENER_URL: &str = "LOCAL_EVENT_LISTENER_URL";
/// Optional environment variable restricting events to one container.
pub const ENV_CONTAINER_FILTER: &str = "BLOB_CONTAINER_NAME";

/// Parameters the monitor needs to start.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Path to the emulator's metadata file. Must exist at startup.
    pub metadata_path: PathBuf,
    /// URL of the local event listener.
    pub listener_url: String,
    /// When set, blobs from other containers are ignored.
    pub container_filter: Option<String>,
}

impl MonitorConfig {
    /// Create a configuration with no container filter.
    pub fn new(metadata_path: impl Into<PathBuf>, listener_url: impl Into<String>) -> Self {
        Self {
            metadata_path: metadata_path.into(),
            listener_url: listener_url.into(),
            container_filter: None,
        }
    }

    /// Restrict events to blobs in the named container.
    pub fn with_container_filter(mut self, container: impl Into<String>) -> Self {
        self.container_filter = Some(container.into());
        self
    }

    /// Build a configuration from the process environment.
    ///
    /// Reads [`ENV_METADATA_PATH`] and [`ENV_LISTENER_URL`] (both required)
    /// and [`ENV_CONTAINER_FILTER`] (optional, empty treated as unset).
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Config`] when a required variable is missing.
    pub fn from_env() -> Result<Self> {
        let metadata_path = std::env::var(ENV_METADATA_PATH)
            .map_err(|_| MonitorError::Config(format!("{} must be set", ENV_METADATA_PATH)))?;
        let listener_url = std::env::var(ENV_LISTENER_URL)
            .map_err(|_| MonitorError::Config(format!("{} must be set", ENV_LISTENER_URL)))?;

        let mut config = Self::new(metadata_path, listener_url);
        config.container_filter = std::env::var(ENV_CONTAINER_FILTER)
            .ok()
            .filter(|c| !c.is_empty());
        Ok(config)
    }

    /// Validate the startup parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Config`] when the metadata path is empty or
    /// does not exist, or when the listener URL is empty.
    pub fn validate(&self) -> Result<()> {
        if self.metadata_path.as_os_str().is_empty() {
            return Err(MonitorError::Config(
                "The metadata file path must be provided".to_string(),
            ));
        }
        if !self.metadata_path.exists() {
            return Err(MonitorError::Config(format!(
                "File not found: {}",
                self.metadata_path.display()
            )));
        }
        if self.listener_url.trim().is_empty() {
            return Err(MonitorError::Config(
                "The local event listener URL must be provided".to_string(),
            ));
        }
        Ok(())
    }
}
