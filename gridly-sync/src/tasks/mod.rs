//! Sync task orchestrators.
//!
//! One task per workflow, each composing the paginated fetcher or the
//! chunked exporter with the codec. A task is created fresh per
//! invocation and shares no state with other runs; its outcome is the
//! returned `Result`, with progress events on an optional channel.

mod download_texts;
mod export_data_table;
mod export_texts;
mod import_data_table;

pub use download_texts::DownloadLocalizedTexts;
pub use export_data_table::ExportDataTable;
pub use export_texts::ExportLocalizedTexts;
pub use import_data_table::ImportDataTable;
