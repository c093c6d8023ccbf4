//! Import a data table from its configured view.

use crate::data_table::{DataTable, rows_to_imported_rows};
use crate::error::GridlyResult;
use crate::fetcher::{DEFAULT_THROTTLE, PaginatedFetcher, RowAccumulator};
use crate::progress::ProgressSender;
use gridly_types::GridlySettings;
use std::time::Duration;
use tracing::info;

/// Downloads a data table's single view and replaces the table's
/// contents with the fetched rows.
pub struct ImportDataTable<'a, T: DataTable> {
    table: &'a mut T,
    settings: GridlySettings,
    throttle: Duration,
    progress: Option<ProgressSender>,
}

impl<'a, T: DataTable> ImportDataTable<'a, T> {
    #[must_use]
    pub fn new(table: &'a mut T, settings: GridlySettings) -> Self {
        Self {
            table,
            settings,
            throttle: DEFAULT_THROTTLE,
            progress: None,
        }
    }

    #[must_use]
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProgressSender) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Runs the import to completion and returns the row count.
    ///
    /// The table's existing contents are only replaced after the full
    /// fetch succeeds; a mid-pagination failure leaves it untouched.
    pub async fn run(self) -> GridlyResult<usize> {
        let view_id = self.table.view_id().to_string();
        let view_ids = if view_id.is_empty() {
            Vec::new()
        } else {
            vec![view_id]
        };

        let mut fetcher = PaginatedFetcher::new(
            self.settings.api_base_url.clone(),
            self.settings.import_api_key.clone(),
            view_ids,
            self.settings.import_max_records_per_request,
            RowAccumulator::default(),
        )
        .with_throttle(self.throttle);
        if let Some(progress) = self.progress {
            fetcher = fetcher.with_progress(progress);
        }

        let rows = fetcher.run().await?;
        let imported = rows_to_imported_rows(&rows);
        let count = imported.len();

        self.table.replace_contents(imported)?;
        info!("imported data table from Gridly: {count} rows");
        Ok(count)
    }
}
