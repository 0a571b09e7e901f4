//! Filesystem watch on the metadata file.

use crate::error::{MonitorError, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// Bridge from `notify` filesystem events to a tokio channel.
///
/// Each content-modify event on the watched file becomes one message on the
/// receiver, with no extra debouncing: rapid successive writes produce one
/// pipeline run each, and deduplication is the listener's concern. The watch
/// registration lives as long as this struct; dropping it ends the watch.
pub struct MetadataWatcher {
    watcher: RecommendedWatcher,
    watched_path: Option<PathBuf>,
}

impl MetadataWatcher {
    /// Create a watcher and the channel its change signals arrive on.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Watch`] if the underlying OS watcher cannot be
    /// created.
    pub fn new() -> Result<(Self, mpsc::UnboundedReceiver<()>)> {
        let (tx, rx) = mpsc::unbounded_channel();

        let watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            if let Ok(event) = res {
                // The emulator may write in place or replace the file; both
                // surface the same new content.
                if matches!(
                    event.kind,
                    notify::EventKind::Modify(_) | notify::EventKind::Create(_)
                ) {
                    let _ = tx.send(());
                }
            }
        })
        .map_err(|e| MonitorError::Watch(format!("Failed to create file watcher: {}", e)))?;

        Ok((
            Self {
                watcher,
                watched_path: None,
            },
            rx,
        ))
    }

    /// Register the watch on the metadata file.
    ///
    /// # Errors
    ///
    /// Returns [`MonitorError::Watch`] if the path cannot be resolved or the
    /// registration fails. On failure no partial watch remains.
    pub fn watch(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let canonical_path = path
            .as_ref()
            .canonicalize()
            .map_err(|e| MonitorError::Watch(format!("Failed to resolve path: {}", e)))?;

        self.watcher
            .watch(&canonical_path, RecursiveMode::NonRecursive)
            .map_err(|e| MonitorError::Watch(format!("Failed to watch path: {}", e)))?;

        self.watched_path = Some(canonical_path);
        Ok(())
    }

    /// The canonicalized path under watch, once registered.
    pub fn watched_path(&self) -> Option<&Path> {
        self.watched_path.as_deref()
    }
}
