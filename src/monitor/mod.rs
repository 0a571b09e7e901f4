//! The long-lived monitor: validation, watch registration, and the
//! change-driven pipeline.

pub mod watcher;

pub use watcher::MetadataWatcher;

use crate::config::MonitorConfig;
use crate::delivery::DeliveryClient;
use crate::error::Result;
use crate::event::EventMessage;
use crate::store;
use tracing::{debug, info, warn};

/// Watches the metadata file and relays one synthesized blob-created event
/// per detected change.
///
/// Construction validates the startup parameters (fail-fast, no partial watch
/// registration); [`run`] registers the watch and then loops until the
/// process terminates. Every failure past startup is contained within its
/// pipeline run and logged, never propagated out of the loop.
///
/// # Examples
///
/// ```rust,no_run
/// use blob_event_monitor::{BlobMonitor, MonitorConfig};
///
/// # async fn example() -> blob_event_monitor::error::Result<()> {
/// let config = MonitorConfig::new("azurite/__azurite_db_blob__.json", "http://localhost:7071/events")
///     .with_container_filter("uploads");
/// BlobMonitor::new(config)?.run().await
/// # }
/// ```
///
/// [`run`]: BlobMonitor::run
pub struct BlobMonitor {
    config: MonitorConfig,
    client: DeliveryClient,
}

impl BlobMonitor {
    /// Validate the configuration and build a monitor.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Config`](crate::error::MonitorError::Config)
    /// when the metadata path is empty or missing, or the listener URL is
    /// empty. Nothing is registered on failure.
    pub fn new(config: MonitorConfig) -> Result<Self> {
        config.validate()?;
        let client = DeliveryClient::new(config.listener_url.clone());
        Ok(Self { config, client })
    }

    /// Register the filesystem watch and process change events forever.
    ///
    /// Each change spawns an independent pipeline task
    /// (read → select → synthesize → deliver), so neither a slow read nor a
    /// hung delivery blocks the next change from being observed. Pipeline
    /// runs start in notification order; delivery outcomes may log out of
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Watch`](crate::error::MonitorError::Watch) if
    /// the watch registration fails. Once watching, this only returns if the
    /// notification backend shuts down.
    pub async fn run(self) -> Result<()> {
        let (mut watcher, mut changes) = MetadataWatcher::new()?;
        watcher.watch(&self.config.metadata_path)?;
        info!(path = %self.config.metadata_path.display(), "Watching for changes");

        while changes.recv().await.is_some() {
            debug!(path = %self.config.metadata_path.display(), "Detected change in metadata file");
            let config = self.config.clone();
            let client = self.client.clone();
            tokio::spawn(run_pipeline(config, client));
        }
        Ok(())
    }
}

/// One pipeline run for one change event. All failures are logged here and go
/// no further.
async fn run_pipeline(config: MonitorConfig, client: DeliveryClient) {
    let store = match store::read_store(&config.metadata_path).await {
        Ok(store) => store,
        Err(err) => {
            warn!(error = %err, "Skipping change event");
            return;
        }
    };

    let Some(blob) = store::latest_blob(&store, config.container_filter.as_deref()) else {
        info!("No qualifying blob found");
        return;
    };

    info!(
        blob = %blob.name,
        container = %blob.container_name,
        last_modified = ?blob.properties.last_modified,
        content_length = ?blob.properties.content_length,
        "Sending event for newest blob"
    );
    client.deliver(EventMessage::blob_created(blob));
}
