//! Shared wire shapes for write acknowledgements.
//!
//! Clients of the original service consumed the driver's raw result objects,
//! so these mirror their field names (`insertedId`, `matchedCount`, ...).

use mongodb::bson::oid::ObjectId;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use crate::database::UpsertOutcome;

/// Insert acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentInserted {
    /// Identifier of the inserted document
    pub inserted_id: String,
}

impl From<ObjectId> for DocumentInserted {
    fn from(id: ObjectId) -> Self {
        Self {
            inserted_id: id.to_hex(),
        }
    }
}

/// Upsert acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentUpdated {
    /// Number of documents matched by the filter
    pub matched_count: u64,

    /// Number of documents actually modified
    pub modified_count: u64,

    /// Identifier of the document created when nothing matched
    pub upserted_id: Option<String>,
}

impl From<UpsertOutcome> for DocumentUpdated {
    fn from(outcome: UpsertOutcome) -> Self {
        Self {
            matched_count: outcome.matched_count,
            modified_count: outcome.modified_count,
            upserted_id: outcome.upserted_id.map(|id| id.to_hex()),
        }
    }
}

/// Delete acknowledgement.
///
/// A delete that matched nothing reports `deletedCount` 0; it is not an error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DocumentDeleted {
    /// Number of documents removed
    pub deleted_count: u64,
}

impl From<u64> for DocumentDeleted {
    fn from(deleted_count: u64) -> Self {
        Self { deleted_count }
    }
}
