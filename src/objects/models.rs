//! Typed views over import documents.
//!
//! The object wrappers return raw [`HttpResponse`](crate::HttpResponse)s.
//! These types are an optional read model for callers that want to
//! deserialize an import with [`HttpResponse::json`](crate::HttpResponse::json).
//! Nothing in this crate tracks or validates import state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of an import, as reported by the server.
///
/// ```text
/// Open -> Ready -> Waiting -> Processing -> Complete
///                                       \-> Failed
/// (any non-terminal state) -> Canceled
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ImportStatus {
    /// Created and accepting batches.
    Open,
    /// Submitted for processing; no more batches accepted.
    Ready,
    /// Queued behind other imports.
    Waiting,
    /// Being processed.
    Processing,
    /// Processing finished.
    Complete,
    /// Processing failed.
    Failed,
    /// Canceled before completion.
    Canceled,
    /// A status this crate does not know about.
    #[serde(other)]
    Unknown,
}

impl ImportStatus {
    /// Returns `true` once the server will no longer change this import.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Failed | Self::Canceled)
    }

    /// Returns `true` while the import can still be canceled.
    #[must_use]
    pub const fn is_cancelable(self) -> bool {
        !self.is_terminal() && !matches!(self, Self::Unknown)
    }
}

/// An import as returned by `imports` reads and queries.
///
/// Every field is optional because responses only include the requested
/// `fields`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Import {
    /// The server-assigned import id.
    pub id: Option<u64>,
    /// The current status.
    pub status: Option<ImportStatus>,
    /// The import operation (e.g., "Upsert").
    pub operation: Option<String>,
    /// The object being imported (e.g., "Prospect").
    pub object: Option<String>,
    /// Whether the import's results are no longer available.
    pub is_expired: Option<bool>,
    /// Number of records created.
    pub created_count: Option<u64>,
    /// Number of records updated.
    pub updated_count: Option<u64>,
    /// Number of records that failed.
    pub error_count: Option<u64>,
    /// Path of the error report, once processing completes.
    pub errors_ref: Option<String>,
    /// When the import was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the import was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// The `input` document sent alongside a file when an import is created
/// from a single upload.
///
/// The default describes an immediately submitted prospect upsert that
/// restores deleted prospects and creates prospects with no match.
///
/// # Example
///
/// ```rust
/// use pardot_api::objects::ImportInput;
///
/// let json = serde_json::to_value(ImportInput::default()).unwrap();
/// assert_eq!(json["status"], "Ready");
/// assert_eq!(json["restoreDeleted"], true);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImportInput {
    /// Initial status; `Ready` submits the import immediately.
    pub status: String,
    /// The import operation.
    pub operation: String,
    /// The object being imported.
    pub object: String,
    /// Whether matching deleted records are restored.
    pub restore_deleted: bool,
    /// Whether records with no match are created.
    pub create_on_no_match: bool,
}

impl Default for ImportInput {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
            operation: "Upsert".to_string(),
            object: "Prospect".to_string(),
            restore_deleted: true,
            create_on_no_match: true,
        }
    }
}
