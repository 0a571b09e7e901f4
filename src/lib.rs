//! # blob-event-monitor
//!
//! Emulates cloud blob-storage create notifications for local development:
//! watches a storage emulator's metadata file and forwards a synthesized
//! `Microsoft.Storage.BlobCreated` event to a locally running HTTP listener,
//! so event-driven integrations can be tested without a real cloud account.
//!
//! ## How it works
//!
//! On every change to the metadata file the monitor re-reads it, selects the
//! most recently modified blob record (optionally restricted to one
//! container), synthesizes an Event Grid style notification envelope, and
//! POSTs it to the listener. Failures in any one run are logged and never
//! stop the watcher.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blob_event_monitor::{BlobMonitor, MonitorConfig};
//!
//! #[tokio::main]
//! async fn main() -> blob_event_monitor::error::Result<()> {
//!     let config = MonitorConfig::new(
//!         "azurite/__azurite_db_blob__.json",
//!         "http://localhost:7071/runtime/webhooks/EventGrid",
//!     );
//!     BlobMonitor::new(config)?.run().await
//! }
//! ```
//!
//! ## Guarantees (and non-guarantees)
//!
//! - At-least-once, best-effort delivery: no persistence, no retry, no
//!   deduplication of identical successive changes.
//! - Only the single newest blob is considered per change; multiple blobs
//!   written in one batch do not each produce an event.
//! - Delivery is fire-and-forget; completion logs may be out of trigger order.

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod config;
pub mod delivery;
pub mod error;
pub mod event;
pub mod monitor;
pub mod store;

pub use config::MonitorConfig;
pub use monitor::BlobMonitor;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::config::MonitorConfig;
    pub use crate::delivery::DeliveryClient;
    pub use crate::error::{MonitorError, Result};
    pub use crate::event::EventMessage;
    pub use crate::monitor::BlobMonitor;
    pub use crate::store::{BlobRecord, MetadataStore};
}
