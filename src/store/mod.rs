//! The emulator's metadata store: model, reading, and newest-blob selection.

pub mod model;
pub mod reader;
pub mod selector;

pub use model::{BLOBS_COLLECTION, BlobProperties, BlobRecord, Collection, MetadataStore};
pub use reader::read_store;
pub use selector::latest_blob;
