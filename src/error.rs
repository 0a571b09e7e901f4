//! Error types for blob-event-monitor.

/// Result type alias for blob-event-monitor operations.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Errors that can occur while monitoring the metadata file.
///
/// Only [`MonitorError::Config`] and [`MonitorError::Watch`] are fatal to the
/// monitor; every other variant is scoped to a single pipeline run and is
/// logged without stopping the watcher.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    /// Missing or invalid startup parameters. Fatal: the watcher never starts.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The metadata file could not be read at trigger time.
    #[error("Failed to read metadata file: {0}")]
    Read(#[from] std::io::Error),

    /// The metadata file content is not the expected JSON structure.
    #[error("Failed to parse metadata file: {0}")]
    Parse(String),

    /// The filesystem watch could not be created or registered.
    #[error("File watching error: {0}")]
    Watch(String),

    /// The outbound notification POST failed.
    #[error("Failed to deliver event: {0}")]
    Delivery(String),
}

impl From<serde_json::Error> for MonitorError {
    fn from(err: serde_json::Error) -> Self {
        MonitorError::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for MonitorError {
    fn from(err: reqwest::Error) -> Self {
        MonitorError::Delivery(err.to_string())
    }
}
