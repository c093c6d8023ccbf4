use gridly_sync::{ChunkedExporter, ExportMethod, GridlyError, ProgressEvent};
use gridly_types::{TableCell, TableRow};
use serde_json::json;
use tokio::sync::mpsc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rows(count: usize) -> Vec<TableRow> {
    (0..count)
        .map(|i| {
            TableRow::new(
                format!("KEY_{i}"),
                vec![TableCell::text("src_enUS", format!("text {i}"))],
            )
        })
        .collect()
}

fn exporter(server: &MockServer, method: ExportMethod, limit: usize) -> ChunkedExporter {
    ChunkedExporter::new(server.uri(), "export-key", "view1", method, limit)
}

// ── request shape ───────────────────────────────────────────────

#[tokio::test]
async fn create_posts_serialized_rows() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/views/view1/records"))
        .and(header("Authorization", "ApiKey export-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!([{
            "id": "KEY_0",
            "cells": [{ "columnId": "src_enUS", "value": "text 0" }]
        }])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}])))
        .expect(1)
        .mount(&server)
        .await;

    let updated = exporter(&server, ExportMethod::Create, 1000)
        .export(&rows(1))
        .await
        .unwrap();
    assert_eq!(updated, 1);
}

#[tokio::test]
async fn upsert_uses_patch() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1/views/view1/records"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}, {}])))
        .expect(1)
        .mount(&server)
        .await;

    let updated = exporter(&server, ExportMethod::Upsert, 1000)
        .export(&rows(2))
        .await
        .unwrap();
    assert_eq!(updated, 2);
}

#[tokio::test]
async fn accepts_201() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{}])))
        .mount(&server)
        .await;

    let updated = exporter(&server, ExportMethod::Create, 1000)
        .export(&rows(1))
        .await
        .unwrap();
    assert_eq!(updated, 1);
}

// ── chunking ────────────────────────────────────────────────────

#[tokio::test]
async fn splits_rows_into_chunks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}])))
        .expect(3)
        .mount(&server)
        .await;

    // 2500 rows at 1000 per request: 1000 + 1000 + 500.
    exporter(&server, ExportMethod::Create, 1000)
        .export(&rows(2500))
        .await
        .unwrap();
}

#[tokio::test]
async fn sums_updated_entries_across_chunks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}, {}])))
        .expect(2)
        .mount(&server)
        .await;

    let updated = exporter(&server, ExportMethod::Create, 2)
        .export(&rows(4))
        .await
        .unwrap();
    assert_eq!(updated, 4);
}

#[tokio::test]
async fn failure_abandons_queued_chunks() {
    let server = MockServer::start().await;
    // First chunk succeeds, second fails; the third must never go out.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let error = exporter(&server, ExportMethod::Create, 1)
        .export(&rows(3))
        .await
        .unwrap_err();

    assert!(matches!(error, GridlyError::Network(_)));
    assert!(error.to_string().contains("Error: 500, reason: internal error"));
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

// ── configuration and progress ──────────────────────────────────

#[tokio::test]
async fn fails_without_view_id() {
    let server = MockServer::start().await;

    let error = ChunkedExporter::new(server.uri(), "key", "", ExportMethod::Create, 1000)
        .export(&rows(1))
        .await
        .unwrap_err();

    assert!(matches!(error, GridlyError::Config(_)));
    assert!(error.to_string().contains("no view ID was specified"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_row_set_sends_nothing() {
    let server = MockServer::start().await;

    let updated = exporter(&server, ExportMethod::Create, 1000)
        .export(&[])
        .await
        .unwrap();
    assert_eq!(updated, 0);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn reports_one_progress_event_per_chunk() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{}])))
        .mount(&server)
        .await;

    let (sender, mut receiver) = mpsc::unbounded_channel();
    exporter(&server, ExportMethod::Create, 1)
        .with_progress(sender)
        .export(&rows(3))
        .await
        .unwrap();

    let mut events: Vec<ProgressEvent> = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }

    assert_eq!(events.len(), 3);
    assert_eq!(events[2].fraction, 1.0);
    assert_eq!(events[2].accumulated, 3);
}
