//! Gridly wire format types.
//!
//! A view's records travel as a JSON array of rows; each row is a
//! record id plus a flat list of column/value cells. Field names
//! match the Gridly REST API exactly.

use serde::{Deserialize, Serialize};

/// One cell of a table row: a column id and its value.
///
/// Text columns carry strings, but data-table columns may carry
/// numbers or booleans, so the raw JSON value is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub column_id: String,
    #[serde(default)]
    pub value: serde_json::Value,
    /// Informational only; ignored by the sync logic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_status: Option<String>,
}

impl TableCell {
    /// Creates a string-valued cell.
    #[must_use]
    pub fn text(column_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            value: serde_json::Value::String(value.into()),
            dependency_status: None,
        }
    }

    /// Creates a cell holding an arbitrary JSON value.
    #[must_use]
    pub fn new(column_id: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            column_id: column_id.into(),
            value,
            dependency_status: None,
        }
    }

    /// The cell value rendered as a string. Strings are returned
    /// as-is, null as empty, numbers and booleans in their JSON form.
    #[must_use]
    pub fn value_str(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// One record of a remote view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    /// The record's unique key on the remote side.
    pub id: String,
    /// Optional hierarchical namespace tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Creates a row with no path.
    #[must_use]
    pub fn new(id: impl Into<String>, cells: Vec<TableCell>) -> Self {
        Self {
            id: id.into(),
            path: None,
            cells,
        }
    }
}
