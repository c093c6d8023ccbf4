//! Chunked record export.
//!
//! A potentially large record set is split into fixed-size chunks,
//! one fully-formed HTTP request per chunk, all built before the
//! first send. The queue then drains strictly sequentially: each
//! completion triggers the next send, a failure abandons everything
//! still queued. No throttle — each request is gated only by the
//! previous one's completion.

use crate::error::{GridlyError, GridlyResult};
use crate::progress::{ProgressSender, emit};
use gridly_types::TableRow;
use reqwest::Client;
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, info};

/// How exported rows are applied on the remote side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMethod {
    /// `POST` — create/append records (localized text export).
    Create,
    /// `PATCH` — upsert records by id (data table export).
    Upsert,
}

impl ExportMethod {
    fn http(self) -> reqwest::Method {
        match self {
            Self::Create => reqwest::Method::POST,
            Self::Upsert => reqwest::Method::PATCH,
        }
    }
}

/// Sequential chunked upload to a single view.
pub struct ChunkedExporter {
    client: Client,
    base_url: String,
    api_key: String,
    view_id: String,
    method: ExportMethod,
    max_records_per_request: usize,
    progress: Option<ProgressSender>,
}

impl ChunkedExporter {
    #[must_use]
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        view_id: impl Into<String>,
        method: ExportMethod,
        max_records_per_request: usize,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
            view_id: view_id.into(),
            method,
            max_records_per_request: max_records_per_request.max(1),
            progress: None,
        }
    }

    /// Attaches a progress channel; one event per completed chunk.
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressSender) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Exports all rows and returns the total number of entries the
    /// remote side reported as updated.
    ///
    /// Exactly `ceil(rows / max_records_per_request)` requests are
    /// sent, in chunk order, one at a time. A transport failure or a
    /// status other than 200/201 aborts the export; queued requests
    /// are never sent.
    pub async fn export(&self, rows: &[TableRow]) -> GridlyResult<u64> {
        if self.view_id.is_empty() {
            return Err(GridlyError::Config("no view ID was specified".to_string()));
        }

        let url = format!("{}/v1/views/{}/records", self.base_url, self.view_id);

        // Build phase: enqueue every request before sending any.
        let mut queue = VecDeque::new();
        for chunk in rows.chunks(self.max_records_per_request) {
            let body = serde_json::to_string(chunk)?;
            debug!("creating export request with {} entries", chunk.len());
            let request = self
                .client
                .request(self.method.http(), &url)
                .header("Accept", "application/json")
                .header("Content-Type", "application/json")
                .header("Authorization", format!("ApiKey {}", self.api_key))
                .body(body)
                .build()
                .map_err(|error| {
                    GridlyError::Network(format!("failed to build export request: {error}"))
                })?;
            queue.push_back(request);
        }

        let total_requests = queue.len();
        info!(
            "exporting {} records to view {} in {} requests",
            rows.len(),
            self.view_id,
            total_requests
        );

        // Drain phase: strictly one request in flight.
        let mut updated = 0u64;
        let mut sent = 0usize;

        while let Some(request) = queue.pop_front() {
            let response = self.client.execute(request).await.map_err(|error| {
                debug!("export request failed: {error}");
                GridlyError::Network("Failed to connect to Gridly".to_string())
            })?;

            let status = response.status().as_u16();
            if status != 200 && status != 201 {
                let content = response.text().await.unwrap_or_default();
                return Err(GridlyError::Network(format!(
                    "Error: {status}, reason: {content}"
                )));
            }

            // The response body is a JSON array whose length is the
            // number of entries affected.
            let entries: Vec<serde_json::Value> = response.json().await.map_err(|error| {
                debug!("export response rejected: {error}");
                GridlyError::Parse("Failed to parse export response".to_string())
            })?;
            updated += entries.len() as u64;

            sent += 1;
            emit(
                self.progress.as_ref(),
                sent as f32 / total_requests.max(1) as f32,
                sent,
            );
        }

        info!("number of entries updated: {updated}");
        Ok(updated)
    }
}
