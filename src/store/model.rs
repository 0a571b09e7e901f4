//! Typed view of the emulator's metadata file.
//!
//! The file is a LokiJS-style database dump: a top-level `collections` array
//! where each collection has a `name` and a `data` array. Blob records live in
//! the collection named [`BLOBS_COLLECTION`]. The emulator owns the file; this
//! crate only ever reads snapshots of it, so everything here is deserialization
//! only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Name of the collection that holds blob records.
pub const BLOBS_COLLECTION: &str = "$BLOBS_COLLECTION$";

/// Parsed snapshot of the metadata file.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataStore {
    /// All collections in the store, in file order.
    #[serde(default)]
    pub collections: Vec<Collection>,
}

impl MetadataStore {
    /// The blob records, if the blobs collection is present.
    ///
    /// An absent collection is a normal state for a freshly initialized
    /// emulator, not a parse failure, so this returns `None` rather than
    /// erroring.
    pub fn blobs(&self) -> Option<&[BlobRecord]> {
        self.collections
            .iter()
            .find(|c| c.name == BLOBS_COLLECTION)
            .map(|c| c.data.as_slice())
    }
}

/// One named collection in the store.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    /// Collection name, e.g. `$BLOBS_COLLECTION$`.
    pub name: String,
    /// The records in this collection.
    #[serde(default)]
    pub data: Vec<BlobRecord>,
}

/// One stored blob, as written by the emulator.
///
/// `name` and `containerName` are required; a record missing either fails the
/// snapshot parse. Everything under `properties` is optional and defaults to
/// absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobRecord {
    /// LokiJS row identifier, carried into the notification `id` field.
    #[serde(rename = "$loki", default)]
    pub id: u64,
    /// Blob name within its container.
    pub name: String,
    /// Name of the container holding this blob.
    pub container_name: String,
    /// Loose property bag maintained by the emulator.
    #[serde(default)]
    pub properties: BlobProperties,
}

/// Blob properties sub-structure. Partially populated files are common while
/// the emulator is mid-write, so every field tolerates absence.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobProperties {
    /// Entity tag assigned by the emulator.
    #[serde(default)]
    pub e_tag: Option<String>,
    /// MIME content type.
    #[serde(default)]
    pub content_type: Option<String>,
    /// Content length in bytes.
    #[serde(default)]
    pub content_length: Option<u64>,
    /// Blob type, e.g. `BlockBlob`.
    #[serde(default)]
    pub blob_type: Option<String>,
    /// When the blob was created.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub creation_time: Option<DateTime<Utc>>,
    /// When the blob was last modified. Drives newest-blob selection.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// Parse an RFC 3339 timestamp, mapping anything unparseable to `None` so a
/// single bad date does not fail the whole snapshot.
fn lenient_datetime<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_full_record() {
        let json = r#"{
            "collections": [
                {
                    "name": "$BLOBS_COLLECTION$",
                    "data": [
                        {
                            "$loki": 3,
                            "name": "report.pdf",
                            "containerName": "docs",
                            "properties": {
                                "eTag": "0x1DA2B3C",
                                "contentType": "application/pdf",
                                "contentLength": 2048,
                                "blobType": "BlockBlob",
                                "creationTime": "2024-05-01T10:00:00Z",
                                "lastModified": "2024-05-01T10:30:00Z"
                            }
                        }
                    ]
                }
            ]
        }"#;

        let store: MetadataStore = serde_json::from_str(json).unwrap();
        let blobs = store.blobs().unwrap();
        assert_eq!(blobs.len(), 1);
        let blob = &blobs[0];
        assert_eq!(blob.id, 3);
        assert_eq!(blob.name, "report.pdf");
        assert_eq!(blob.container_name, "docs");
        assert_eq!(blob.properties.e_tag.as_deref(), Some("0x1DA2B3C"));
        assert_eq!(blob.properties.content_length, Some(2048));
        assert!(blob.properties.last_modified.is_some());
    }

    #[test]
    fn test_tolerates_missing_properties() {
        let json = r#"{
            "collections": [
                {
                    "name": "$BLOBS_COLLECTION$",
                    "data": [{"name": "a.txt", "containerName": "c1"}]
                }
            ]
        }"#;

        let store: MetadataStore = serde_json::from_str(json).unwrap();
        let blob = &store.blobs().unwrap()[0];
        assert_eq!(blob.id, 0);
        assert!(blob.properties.content_type.is_none());
        assert!(blob.properties.last_modified.is_none());
    }

    #[test]
    fn test_tolerates_unparseable_timestamp() {
        let json = r#"{
            "collections": [
                {
                    "name": "$BLOBS_COLLECTION$",
                    "data": [
                        {
                            "name": "a.txt",
                            "containerName": "c1",
                            "properties": {"lastModified": "not-a-date"}
                        }
                    ]
                }
            ]
        }"#;

        let store: MetadataStore = serde_json::from_str(json).unwrap();
        assert!(store.blobs().unwrap()[0].properties.last_modified.is_none());
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let json = r#"{
            "collections": [
                {"name": "$BLOBS_COLLECTION$", "data": [{"name": "a.txt"}]}
            ]
        }"#;

        assert!(serde_json::from_str::<MetadataStore>(json).is_err());
    }

    #[test]
    fn test_absent_blobs_collection_is_none() {
        let json = r#"{"collections": [{"name": "$CONTAINERS_COLLECTION$", "data": []}]}"#;
        let store: MetadataStore = serde_json::from_str(json).unwrap();
        assert!(store.blobs().is_none());
    }

    #[test]
    fn test_empty_document_is_valid() {
        let store: MetadataStore = serde_json::from_str("{}").unwrap();
        assert!(store.collections.is_empty());
        assert!(store.blobs().is_none());
    }
}
