//! Result type for cascading delete operations.
//!
//! Deleting a folder removes the folder itself, every descendant folder,
//! and every note owned by any folder in that closure. [`DeleteResult`]
//! reports exactly what was removed so that callers — the UI in
//! particular — can reconcile any transient selection state via
//! [`ViewState::reconcile`](crate::ViewState::reconcile).
//!
//! Fields serialize in camelCase, consistent with all other types that
//! cross the UI boundary in this project.

use serde::{Deserialize, Serialize};

/// The outcome of a delete operation performed on a
/// [`Workspace`](super::workspace::Workspace).
///
/// `deleted_count` is the total number of removed records (folders plus
/// notes); `folder_ids` and `note_ids` list exactly which ones. A no-op
/// delete (unknown id) yields the default, all-empty result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    /// Total number of folders and notes that were removed.
    pub deleted_count: usize,

    /// IDs of every folder removed by the cascade, target included.
    pub folder_ids: Vec<String>,

    /// IDs of every note removed by the cascade.
    pub note_ids: Vec<String>,
}

impl DeleteResult {
    /// True when the operation removed nothing.
    pub fn is_empty(&self) -> bool {
        self.deleted_count == 0
    }
}
