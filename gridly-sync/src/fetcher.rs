//! Paginated record download.
//!
//! One fetcher walks an ordered list of views page by page,
//! accumulating rows through a [`PageConsumer`]. Requests are strictly
//! sequential: the next page is never requested before the previous
//! response has been consumed. A fixed throttle delay precedes every
//! request to respect the API's rate limit.

use crate::codec;
use crate::error::{GridlyError, GridlyResult};
use crate::progress::{ProgressSender, emit};
use gridly_types::{GridlySettings, LocalizedText, TableRow};
use indexmap::IndexMap;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Default delay before each page request.
pub const DEFAULT_THROTTLE: Duration = Duration::from_secs(1);

/// Folds downloaded pages into an accumulator.
///
/// The fetcher owns pagination and transport; the consumer decides
/// what a page of rows means. A consume error fails the whole fetch.
pub trait PageConsumer: Send {
    type Output: Send;

    /// Folds one page of rows into the accumulator.
    fn consume_page(&mut self, rows: Vec<TableRow>) -> GridlyResult<()>;

    /// Records accumulated so far, for progress estimation.
    fn accumulated(&self) -> usize;

    /// Consumes the accumulator once all views are exhausted.
    fn into_output(self) -> Self::Output;
}

/// Accumulates pages as localized text records keyed by record key.
/// Later duplicates overwrite earlier ones, within and across views.
pub struct LocalizedTextAccumulator {
    settings: GridlySettings,
    available_cultures: Vec<String>,
    records: IndexMap<String, LocalizedText>,
}

impl LocalizedTextAccumulator {
    #[must_use]
    pub fn new(settings: GridlySettings, available_cultures: Vec<String>) -> Self {
        Self {
            settings,
            available_cultures,
            records: IndexMap::new(),
        }
    }
}

impl PageConsumer for LocalizedTextAccumulator {
    type Output = IndexMap<String, LocalizedText>;

    fn consume_page(&mut self, rows: Vec<TableRow>) -> GridlyResult<()> {
        // A page that yields no usable record at all is treated as
        // unparseable, matching the download task's validation.
        let page =
            codec::table_rows_to_localized_texts(&rows, &self.available_cultures, &self.settings)?;
        self.records.extend(page);
        Ok(())
    }

    fn accumulated(&self) -> usize {
        self.records.len()
    }

    fn into_output(self) -> Self::Output {
        self.records
    }
}

/// Accumulates pages as raw wire rows, in arrival order.
#[derive(Default)]
pub struct RowAccumulator {
    rows: Vec<TableRow>,
}

impl PageConsumer for RowAccumulator {
    type Output = Vec<TableRow>;

    fn consume_page(&mut self, rows: Vec<TableRow>) -> GridlyResult<()> {
        self.rows.extend(rows);
        Ok(())
    }

    fn accumulated(&self) -> usize {
        self.rows.len()
    }

    fn into_output(self) -> Self::Output {
        self.rows
    }
}

/// Sequential, throttled download across one or more views.
pub struct PaginatedFetcher<C> {
    client: Client,
    base_url: String,
    api_key: String,
    view_ids: Vec<String>,
    limit: usize,
    throttle: Duration,
    progress: Option<ProgressSender>,
    consumer: C,
}

impl<C: PageConsumer> PaginatedFetcher<C> {
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        view_ids: Vec<String>,
        limit: usize,
        consumer: C,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            view_ids,
            limit: limit.max(1),
            throttle: DEFAULT_THROTTLE,
            progress: None,
            consumer,
        }
    }

    /// Overrides the per-request throttle delay.
    #[must_use]
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }

    /// Attaches a progress channel.
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressSender) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Downloads every page of every view, in order, and returns the
    /// consumer's accumulated output.
    ///
    /// An empty view list fails before any request is sent. The first
    /// page of each view establishes that view's total row count from
    /// the `X-Total-Count` header; pagination advances `offset` by
    /// `limit` until the view is exhausted, then moves to the next
    /// view. The first transport, status, or parse failure aborts the
    /// fetch and discards nothing already accumulated — the error
    /// carries no partial commit.
    pub async fn run(mut self) -> GridlyResult<C::Output> {
        if self.view_ids.is_empty() {
            let error = GridlyError::Config("no view IDs were specified".to_string());
            warn!("unable to fetch records: {error}");
            return Err(error);
        }

        let view_count = self.view_ids.len();
        let view_ids = std::mem::take(&mut self.view_ids);
        // Running total over all views seen so far; progress only.
        let mut total_count = 0usize;

        for (view_index, view_id) in view_ids.iter().enumerate() {
            let mut offset = 0usize;
            let mut view_total = 0usize;

            loop {
                emit(self.progress.as_ref(), 0.1, self.consumer.accumulated());
                tokio::time::sleep(self.throttle).await;

                debug!(
                    "requesting view ID: {view_id}, with offset: {offset}, limit: {}",
                    self.limit
                );
                let response = self.request_page(view_id, offset).await?;

                if !response.status().is_success() {
                    return Err(GridlyError::Network("Failed to connect to Gridly".to_string()));
                }

                let page_total = response
                    .headers()
                    .get("X-Total-Count")
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.parse::<usize>().ok())
                    .unwrap_or(0);

                let rows: Vec<TableRow> = response.json().await.map_err(|error| {
                    debug!("response body rejected: {error}");
                    GridlyError::Parse("Failed to parse downloaded content".to_string())
                })?;

                self.consumer.consume_page(rows)?;

                if offset == 0 {
                    view_total = page_total;
                    total_count += page_total;
                }

                let views_fraction = view_index as f32 / view_count.max(1) as f32;
                let rows_fraction =
                    self.consumer.accumulated() as f32 / total_count.max(1) as f32;
                emit(
                    self.progress.as_ref(),
                    (views_fraction + rows_fraction) / 2.0,
                    self.consumer.accumulated(),
                );

                if offset + self.limit < view_total {
                    offset += self.limit;
                } else {
                    break;
                }
            }
        }

        emit(self.progress.as_ref(), 1.0, self.consumer.accumulated());
        Ok(self.consumer.into_output())
    }

    async fn request_page(&self, view_id: &str, offset: usize) -> GridlyResult<reqwest::Response> {
        // The page parameter is itself URL-encoded JSON.
        let page = format!("{{\"offset\":{},\"limit\":{}}}", offset, self.limit);
        let url = format!(
            "{}/v1/views/{}/records?page={}",
            self.base_url,
            view_id,
            urlencoding::encode(&page)
        );

        self.client
            .get(url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json")
            .header("Authorization", format!("ApiKey {}", self.api_key))
            .send()
            .await
            .map_err(|error| {
                debug!("page request failed: {error}");
                GridlyError::Network("Failed to connect to Gridly".to_string())
            })
    }
}
