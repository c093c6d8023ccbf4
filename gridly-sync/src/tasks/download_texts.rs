//! Download localized texts from the configured import views.

use crate::error::GridlyResult;
use crate::fetcher::{DEFAULT_THROTTLE, LocalizedTextAccumulator, PaginatedFetcher};
use crate::progress::ProgressSender;
use gridly_types::{GridlySettings, LocalizedText};
use std::time::Duration;
use tracing::info;

/// Downloads all records of all configured import views and merges
/// them into localized text records, later duplicate keys winning.
pub struct DownloadLocalizedTexts {
    settings: GridlySettings,
    target_cultures: Vec<String>,
    throttle: Duration,
    progress: Option<ProgressSender>,
}

impl DownloadLocalizedTexts {
    /// `target_cultures` is the project's supported culture list,
    /// used to resolve downloaded culture suffixes.
    #[must_use]
    pub fn new(settings: GridlySettings, target_cultures: Vec<String>) -> Self {
        Self {
            settings,
            target_cultures,
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

    /// Runs the download to completion.
    pub async fn run(self) -> GridlyResult<Vec<LocalizedText>> {
        let view_ids = self.settings.import_view_ids();
        let limit = self.settings.import_max_records_per_request;
        let base_url = self.settings.api_base_url.clone();
        let api_key = self.settings.import_api_key.clone();

        let consumer = LocalizedTextAccumulator::new(self.settings, self.target_cultures);
        let mut fetcher = PaginatedFetcher::new(base_url, api_key, view_ids, limit, consumer)
            .with_throttle(self.throttle);
        if let Some(progress) = self.progress {
            fetcher = fetcher.with_progress(progress);
        }

        let records = fetcher.run().await?;
        info!("downloaded {} localized texts", records.len());
        Ok(records.into_values().collect())
    }
}
