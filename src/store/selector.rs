//! Selection of the newest qualifying blob from a store snapshot.

use crate::store::{BlobRecord, MetadataStore};

/// Return the blob with the maximum `lastModified` timestamp among records
/// whose container matches `container_filter` (all records when no filter is
/// given).
///
/// Returns `None` when the blobs collection is absent, empty, or nothing
/// passes the filter — the caller logs this and skips delivery. Records
/// without a parseable `lastModified` sort oldest. Ties on `lastModified` are
/// broken arbitrarily (the later record in file order wins); the store's
/// array is not assumed to be presorted.
pub fn latest_blob<'a>(
    store: &'a MetadataStore,
    container_filter: Option<&str>,
) -> Option<&'a BlobRecord> {
    store
        .blobs()?
        .iter()
        .filter(|blob| container_filter.is_none_or(|c| blob.container_name == c))
        .max_by_key(|blob| blob.properties.last_modified)
}
