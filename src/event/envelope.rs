//! The synthesized blob-created notification envelope.
//!
//! The shape mirrors what an Azure Event Grid system topic would publish for
//! `Microsoft.Storage.BlobCreated`, wrapped in the `body` envelope a Service
//! Bus trigger expects. Everything not copied from the blob record is a fixed
//! placeholder so local listeners see a stable, realistic payload.

use crate::store::BlobRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Topic identifier stamped on every synthesized event.
pub const TOPIC: &str = "local-topic";
/// Event type of a blob creation, matching the Azure event schema.
pub const EVENT_TYPE: &str = "Microsoft.Storage.BlobCreated";
/// Host used to derive blob URLs, matching the default emulator account.
pub const EMULATOR_HOST: &str = "devstoreaccount1.blob.core.windows.net";

const API: &str = "PutBlob";
const CLIENT_REQUEST_ID: &str = "local-client-request-id";
const REQUEST_ID: &str = "local-request-id";
const SEQUENCER: &str = "00000000000000000000000000000000";
const IDENTITY: &str = "$superuser";

/// The outbound message: a [`NotificationEnvelope`] under a `body` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    /// The notification envelope itself.
    pub body: NotificationEnvelope,
}

impl EventMessage {
    /// Synthesize a blob-created message from a blob record.
    ///
    /// Pure except for reading the wall clock for `eventTime`. Absent property
    /// sub-fields become `null` in the payload; synthesis itself cannot fail.
    pub fn blob_created(blob: &BlobRecord) -> Self {
        Self {
            body: NotificationEnvelope::blob_created(blob),
        }
    }
}

/// One synthesized change notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEnvelope {
    /// Always [`TOPIC`].
    pub topic: String,
    /// `blobServices/default/containers/{container}/blobs/{name}`.
    pub subject: String,
    /// Always [`EVENT_TYPE`].
    pub event_type: String,
    /// Identifier copied from the source record.
    pub id: u64,
    /// Event payload describing the created blob.
    pub data: BlobCreatedData,
    /// Always empty, matching the cloud schema's optional data version.
    pub data_version: String,
    /// Always `"1"`.
    pub metadata_version: String,
    /// Wall-clock instant of synthesis, not the blob's modification time.
    pub event_time: DateTime<Utc>,
}

impl NotificationEnvelope {
    fn blob_created(blob: &BlobRecord) -> Self {
        Self {
            topic: TOPIC.to_string(),
            subject: format!(
                "blobServices/default/containers/{}/blobs/{}",
                blob.container_name, blob.name
            ),
            event_type: EVENT_TYPE.to_string(),
            id: blob.id,
            data: BlobCreatedData::from_record(blob),
            data_version: String::new(),
            metadata_version: "1".to_string(),
            event_time: Utc::now(),
        }
    }
}

/// The `data` payload of a blob-created notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlobCreatedData {
    /// Storage API that produced the blob.
    pub api: String,
    /// Fixed placeholder client request id.
    pub client_request_id: String,
    /// Fixed placeholder request id.
    pub request_id: String,
    /// Entity tag copied from the record, if present.
    pub e_tag: Option<String>,
    /// Content type copied from the record, if present.
    pub content_type: Option<String>,
    /// Content length copied from the record, if present.
    pub content_length: Option<u64>,
    /// Blob type copied from the record, if present.
    pub blob_type: Option<String>,
    /// `https://{host}/{container}/{name}` against [`EMULATOR_HOST`].
    pub blob_url: String,
    /// Same derivation as `blob_url`.
    pub url: String,
    /// Fixed all-zero sequencer.
    pub sequencer: String,
    /// Fixed identity string.
    pub identity: String,
}

impl BlobCreatedData {
    fn from_record(blob: &BlobRecord) -> Self {
        let url = format!(
            "https://{}/{}/{}",
            EMULATOR_HOST, blob.container_name, blob.name
        );
        Self {
            api: API.to_string(),
            client_request_id: CLIENT_REQUEST_ID.to_string(),
            request_id: REQUEST_ID.to_string(),
            e_tag: blob.properties.e_tag.clone(),
            content_type: blob.properties.content_type.clone(),
            content_length: blob.properties.content_length,
            blob_type: blob.properties.blob_type.clone(),
            blob_url: url.clone(),
            url,
            sequencer: SEQUENCER.to_string(),
            identity: IDENTITY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BlobProperties;

    fn record() -> BlobRecord {
        BlobRecord {
            id: 7,
            name: "b1.txt".to_string(),
            container_name: "c1".to_string(),
            properties: BlobProperties {
                e_tag: Some("0x8DC1".to_string()),
                content_type: Some("text/plain".to_string()),
                content_length: Some(42),
                blob_type: Some("BlockBlob".to_string()),
                creation_time: None,
                last_modified: None,
            },
        }
    }

    #[test]
    fn test_derives_subject_and_urls() {
        let message = EventMessage::blob_created(&record());
        let body = &message.body;

        assert_eq!(body.subject, "blobServices/default/containers/c1/blobs/b1.txt");
        assert_eq!(
            body.data.blob_url,
            "https://devstoreaccount1.blob.core.windows.net/c1/b1.txt"
        );
        assert_eq!(body.data.url, body.data.blob_url);
    }

    #[test]
    fn test_copies_record_fields() {
        let body = EventMessage::blob_created(&record()).body;

        assert_eq!(body.id, 7);
        assert_eq!(body.data.e_tag.as_deref(), Some("0x8DC1"));
        assert_eq!(body.data.content_type.as_deref(), Some("text/plain"));
        assert_eq!(body.data.content_length, Some(42));
        assert_eq!(body.data.blob_type.as_deref(), Some("BlockBlob"));
    }

    #[test]
    fn test_stamps_fixed_fields() {
        let body = EventMessage::blob_created(&record()).body;

        assert_eq!(body.topic, "local-topic");
        assert_eq!(body.event_type, "Microsoft.Storage.BlobCreated");
        assert_eq!(body.data.api, "PutBlob");
        assert_eq!(body.data.sequencer, "00000000000000000000000000000000");
        assert_eq!(body.data.identity, "$superuser");
        assert_eq!(body.data_version, "");
        assert_eq!(body.metadata_version, "1");
    }

    #[test]
    fn test_event_time_is_synthesis_time() {
        let before = Utc::now();
        let body = EventMessage::blob_created(&record()).body;
        let after = Utc::now();

        assert!(body.event_time >= before && body.event_time <= after);
    }

    #[test]
    fn test_absent_properties_serialize_as_null() {
        let mut blob = record();
        blob.properties = BlobProperties::default();

        let value = serde_json::to_value(EventMessage::blob_created(&blob)).unwrap();
        let data = &value["body"]["data"];
        assert!(data["eTag"].is_null());
        assert!(data["contentLength"].is_null());
        // Derived and fixed fields survive regardless.
        assert_eq!(
            data["url"],
            "https://devstoreaccount1.blob.core.windows.net/c1/b1.txt"
        );
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let value = serde_json::to_value(EventMessage::blob_created(&record())).unwrap();
        let body = &value["body"];

        assert!(body.get("eventType").is_some());
        assert!(body.get("dataVersion").is_some());
        assert!(body.get("metadataVersion").is_some());
        assert!(body.get("eventTime").is_some());
        assert!(body["data"].get("clientRequestId").is_some());
        assert!(body["data"].get("blobUrl").is_some());
    }
}
