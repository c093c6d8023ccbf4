//! Export a data table to its configured view.

use crate::data_table::{DataTable, data_table_to_rows};
use crate::error::GridlyResult;
use crate::exporter::{ChunkedExporter, ExportMethod};
use crate::progress::ProgressSender;
use gridly_types::GridlySettings;

/// Serializes a data table's rows and upserts them (PATCH) into the
/// table's view, chunked per the export limit.
pub struct ExportDataTable<'a> {
    table: &'a dyn DataTable,
    settings: GridlySettings,
    progress: Option<ProgressSender>,
}

impl<'a> ExportDataTable<'a> {
    #[must_use]
    pub fn new(table: &'a dyn DataTable, settings: GridlySettings) -> Self {
        Self {
            table,
            settings,
            progress: None,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProgressSender) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Runs the export to completion and returns the updated-entry
    /// count reported by the remote side.
    pub async fn run(self) -> GridlyResult<u64> {
        let rows = data_table_to_rows(self.table);

        let mut exporter = ChunkedExporter::new(
            self.settings.api_base_url.clone(),
            self.settings.export_api_key.clone(),
            self.table.view_id().to_string(),
            ExportMethod::Upsert,
            self.settings.export_max_records_per_request,
        );
        if let Some(progress) = self.progress {
            exporter = exporter.with_progress(progress);
        }

        exporter.export(&rows).await
    }
}
