//! Localization sync engine for the Gridly REST API.
//!
//! Downloads localization records from Gridly views and uploads source
//! strings, translations and gameplay data tables back. All network
//! traffic is strictly sequential, per Gridly's rate limits.
//!
//! # Components
//!
//! - **Fetcher**: paginated, throttled record download across views
//! - **Exporter**: chunked record upload, built-then-drained
//! - **Codec**: converts between wire rows and localized text records
//! - **Culture**: maps engine cultures (`en-US`) to Gridly's (`enUS`)
//! - **Tasks**: ready-made import/export operations over the above
//!
//! # Concurrency model
//!
//! Every operation is a plain `async fn` returning a [`GridlyResult`].
//! Progress is reported out-of-band over an unbounded channel; attach
//! one with the `with_progress` builders and drain [`ProgressEvent`]s
//! from the receiving side.
//!
//! # Example
//!
//! ```no_run
//! use gridly_sync::tasks::DownloadLocalizedTexts;
//! use gridly_types::GridlySettings;
//!
//! # async fn run() -> gridly_sync::GridlyResult<()> {
//! let settings = GridlySettings {
//!     import_api_key: "key".to_string(),
//!     import_from_view_ids: vec!["view1".to_string()],
//!     ..Default::default()
//! };
//!
//! let records = DownloadLocalizedTexts::new(
//!     settings,
//!     vec!["en".to_string(), "de".to_string()],
//! )
//! .run()
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod culture;
pub mod data_table;
mod error;
mod exporter;
mod fetcher;
pub mod po;
mod progress;
pub mod tasks;

pub use error::{GridlyError, GridlyResult};
pub use exporter::{ChunkedExporter, ExportMethod};
pub use fetcher::{
    DEFAULT_THROTTLE, LocalizedTextAccumulator, PageConsumer, PaginatedFetcher, RowAccumulator,
};
pub use progress::{ProgressEvent, ProgressSender};
pub use tasks::{
    DownloadLocalizedTexts, ExportDataTable, ExportLocalizedTexts, ImportDataTable,
};
