//! Bulk import request and report

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::equipment::EquipmentFields;

/// Rows already parsed from a spreadsheet by the import collaborator
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportRequest {
    pub records: Vec<EquipmentFields>,
}

/// A row that was not imported
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SkippedRow {
    /// Zero-based position of the row in the request
    pub row: usize,
    pub reason: String,
}

/// Outcome of an import; valid rows are kept even if others are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ImportReport {
    /// Ids of the created records, in request order
    pub created: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRow>,
}
