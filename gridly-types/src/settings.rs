//! Sync configuration.
//!
//! An explicit settings value handed to every fetcher, exporter and
//! codec call. The engine never reads ambient global state; snapshot
//! a value at operation start and it stays fixed for the whole run.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value type of a mapped metadata column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnDataType {
    String,
    Number,
}

/// Target column for one exported metadata field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnInfo {
    /// Column id on the Gridly side.
    pub name: String,
    pub data_type: ColumnDataType,
}

/// Configuration for import/export against Gridly.
///
/// Field names (in serde form) match the original plugin's settings
/// so existing config sections carry over unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridlySettings {
    /// API key used for record download.
    pub import_api_key: String,
    /// The view ids to fetch. Record ids are merged across views;
    /// later duplicates overwrite earlier ones.
    pub import_from_view_ids: Vec<String>,
    /// Max records per download request. Normally the API page limit.
    pub import_max_records_per_request: usize,
    /// API key used for record upload. Needs write access.
    pub export_api_key: String,
    /// The view id source strings are exported to.
    pub export_view_id: String,
    /// Max records per upload request.
    pub export_max_records_per_request: usize,
    /// Use combined comma-separated `{namespace},{key}` record ids.
    /// Should not change after a project has been exported.
    pub use_combined_namespace_id: bool,
    /// Export namespace to its own column even with combined ids.
    pub also_export_namespace_column: bool,
    /// Namespace column id; the special value `"path"` uses Gridly's
    /// path tag instead of a column.
    pub namespace_column_id: String,
    /// Column id prefix for source language columns.
    pub source_language_column_id_prefix: String,
    /// Column id prefix for target language columns.
    pub target_language_column_id_prefix: String,
    /// Consult `custom_culture_mapping` before the structural rule.
    pub use_custom_culture_mapping: bool,
    /// Maps engine cultures (`en-US`) to Gridly cultures (`enUS`).
    pub custom_culture_mapping: IndexMap<String, String>,
    /// Export the source location to the context column.
    pub export_context: bool,
    pub context_column_id: String,
    /// Export metadata through `metadata_mapping`.
    pub export_metadata: bool,
    /// Maps metadata field names to Gridly columns.
    pub metadata_mapping: IndexMap<String, ColumnInfo>,
    /// Base URL of the Gridly REST API. Overridable for tests.
    pub api_base_url: String,
}

impl Default for GridlySettings {
    fn default() -> Self {
        Self {
            import_api_key: String::new(),
            import_from_view_ids: Vec::new(),
            import_max_records_per_request: 1000,
            export_api_key: String::new(),
            export_view_id: String::new(),
            export_max_records_per_request: 1000,
            use_combined_namespace_id: false,
            also_export_namespace_column: false,
            namespace_column_id: "path".to_string(),
            source_language_column_id_prefix: "src_".to_string(),
            target_language_column_id_prefix: "tg_".to_string(),
            use_custom_culture_mapping: true,
            custom_culture_mapping: IndexMap::new(),
            export_context: false,
            context_column_id: "src_context".to_string(),
            export_metadata: false,
            metadata_mapping: IndexMap::new(),
            api_base_url: "https://api.gridly.com".to_string(),
        }
    }
}

impl GridlySettings {
    /// Import view ids with empty entries filtered out.
    #[must_use]
    pub fn import_view_ids(&self) -> Vec<String> {
        self.import_from_view_ids
            .iter()
            .filter(|id| !id.is_empty())
            .cloned()
            .collect()
    }

    /// Whether namespaces ride on the Gridly path tag during import.
    /// Combined ids take precedence over the path tag.
    #[must_use]
    pub fn use_path_as_namespace(&self) -> bool {
        !self.use_combined_namespace_id && self.namespace_column_id == "path"
    }
}
