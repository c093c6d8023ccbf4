//! Export localized texts to the configured export view.

use crate::codec;
use crate::error::GridlyResult;
use crate::exporter::{ChunkedExporter, ExportMethod};
use crate::progress::ProgressSender;
use gridly_types::{GridlySettings, LocalizedText};

/// Exports source strings (and optionally all translations) of a
/// localization target, chunked per the export limit.
pub struct ExportLocalizedTexts {
    settings: GridlySettings,
    records: Vec<LocalizedText>,
    target_cultures: Vec<String>,
    include_target_translations: bool,
    progress: Option<ProgressSender>,
}

impl ExportLocalizedTexts {
    #[must_use]
    pub fn new(
        settings: GridlySettings,
        records: Vec<LocalizedText>,
        target_cultures: Vec<String>,
    ) -> Self {
        Self {
            settings,
            records,
            target_cultures,
            include_target_translations: false,
            progress: None,
        }
    }

    /// Also export every non-native, non-empty translation.
    #[must_use]
    pub fn with_target_translations(mut self, include: bool) -> Self {
        self.include_target_translations = include;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProgressSender) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Runs the export to completion and returns the updated-entry
    /// count reported by the remote side.
    pub async fn run(self) -> GridlyResult<u64> {
        let rows = codec::localized_texts_to_rows(
            &self.records,
            self.include_target_translations,
            &self.target_cultures,
            &self.settings,
        );

        let mut exporter = ChunkedExporter::new(
            self.settings.api_base_url.clone(),
            self.settings.export_api_key.clone(),
            self.settings.export_view_id.clone(),
            ExportMethod::Create,
            self.settings.export_max_records_per_request,
        );
        if let Some(progress) = self.progress {
            exporter = exporter.with_progress(progress);
        }

        exporter.export(&rows).await
    }
}
