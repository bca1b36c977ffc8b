//! JSON REST API for launchlog.
//!
//! Exposes an axum [`Router`] backed by any [`launchlog_core::store::LaunchStore`].
//! Every route is a read; the table is written only by ingestion. TLS,
//! tracing and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(launchlog_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod launches;
pub mod meta;
pub mod params;
pub mod stats;

use std::sync::Arc;

use axum::{Router, routing::get};
use launchlog_core::store::LaunchStore;

pub use error::ApiError;
pub use launches::LaunchSummary;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: LaunchStore + 'static,
{
  Router::new()
    .route("/health", get(meta::health))
    // Stats
    .route("/stats/orbital_attempts", get(stats::orbital_attempts::<S>))
    .route("/stats/attempts_by_year", get(stats::attempts_by_year::<S>))
    // Launches
    .route("/launches", get(launches::list::<S>))
    .route("/launches/{tag}", get(launches::get_one::<S>))
    // Metadata
    .route("/meta/schema", get(meta::schema::<S>))
    .route("/meta/filters", get(meta::filters::<S>))
    .with_state(store)
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
  };
  use chrono::{TimeZone, Utc};
  use launchlog_core::launch::{NewLaunch, RawRow};
  use launchlog_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  use super::*;

  fn row(tag: &str, piece: &str, day: Option<(i32, u32, u32)>, agency: &str) -> NewLaunch {
    NewLaunch {
      launch_tag: Some(tag.into()),
      piece: Some(piece.into()),
      launch_datetime_utc: day.map(|(y, m, d)| Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()),
      launch_date_raw: Some("raw".into()),
      launch_agency: Some(agency.into()),
      lv_state: Some("US".into()),
      ..NewLaunch::gcat(RawRow::new())
    }
  }

  async fn seeded() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let rows = vec![
      row("2023-050", "A", Some((2023, 5, 1)), "NASA"),
      row("2024-001", "A", Some((2024, 1, 1)), "SPX"),
      row("2024-001", "B", Some((2024, 1, 2)), "SPX"),
      row("2024-100", "A", Some((2024, 6, 1)), "NASA"),
      row("2025-001", "A", Some((2025, 1, 1)), "SPX"),
      row("TBD-1", "A", None, "SPX"),
    ];
    store
      .insert_batch(rows.into_iter().enumerate().collect())
      .await
      .unwrap();
    api_router(Arc::new(store))
  }

  async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
  }

  // ── Health / meta ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn health_is_ok() {
    let (status, body) = get_json(seeded().await, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
  }

  #[tokio::test]
  async fn schema_reports_row_and_launch_counts() {
    let (status, body) = get_json(seeded().await, "/meta/schema").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ingestion_version"], "v1");
    assert_eq!(body["row_count"], 6);
    assert_eq!(body["distinct_launch_count"], 5);
    assert!(body["last_ingest_time"].is_string());
  }

  #[tokio::test]
  async fn filters_lists_distinct_values() {
    let (_, body) = get_json(seeded().await, "/meta/filters").await;
    assert_eq!(body["agencies"], json!(["NASA", "SPX"]));
    assert_eq!(body["states"], json!(["US"]));
    assert_eq!(body["lv_types"], json!([]));
    assert_eq!(body["sites"], json!([]));
  }

  // ── Stats ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn orbital_attempts_counts_distinct_launches() {
    let (status, body) = get_json(seeded().await, "/stats/orbital_attempts").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "count": 5 }));
  }

  #[tokio::test]
  async fn orbital_attempts_honours_the_time_window() {
    let (_, body) = get_json(
      seeded().await,
      "/stats/orbital_attempts?since=2024-01-01&until=2025-01-01",
    )
    .await;
    assert_eq!(body, json!({ "count": 2 }));
  }

  #[tokio::test]
  async fn unparseable_dates_are_ignored() {
    let (status, body) =
      get_json(seeded().await, "/stats/orbital_attempts?since=whenever").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "count": 5 }));
  }

  #[tokio::test]
  async fn attempts_by_year_skips_undated_launches() {
    let (_, body) = get_json(seeded().await, "/stats/attempts_by_year?agency=SPX").await;
    assert_eq!(
      body,
      json!([
        { "year": 2024, "count": 1 },
        { "year": 2025, "count": 1 }
      ])
    );
  }

  // ── Launches ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn launches_are_deduplicated_and_ordered() {
    let (status, body) = get_json(seeded().await, "/launches").await;
    assert_eq!(status, StatusCode::OK);

    let tags: Vec<_> = body
      .as_array()
      .unwrap()
      .iter()
      .map(|l| l["launch_tag"].as_str().unwrap().to_owned())
      .collect();
    assert_eq!(tags, ["2025-001", "2024-100", "2024-001", "2023-050", "TBD-1"]);

    let first_2024 = &body[2];
    assert_eq!(first_2024["launch_datetime_utc"], "2024-01-02T00:00:00Z");
    assert_eq!(first_2024["launch_agency"], "SPX");
    assert!(first_2024.get("piece").is_none());
    assert!(first_2024.get("raw").is_none());
  }

  #[tokio::test]
  async fn launches_paginate_with_clamped_limit() {
    let (_, body) = get_json(seeded().await, "/launches?limit=2&offset=1").await;
    let page = body.as_array().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0]["launch_tag"], "2024-100");

    let (_, body) = get_json(seeded().await, "/launches?limit=0&offset=-5").await;
    let page = body.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["launch_tag"], "2025-001");
  }

  #[tokio::test]
  async fn launch_detail_returns_every_piece() {
    let (status, body) = get_json(seeded().await, "/launches/2024-001").await;
    assert_eq!(status, StatusCode::OK);
    let pieces = body.as_array().unwrap();
    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0]["piece"], "A");
    assert_eq!(pieces[1]["piece"], "B");
    assert_eq!(pieces[0]["source"], "gcat");
  }

  #[tokio::test]
  async fn unknown_launch_is_404() {
    let (status, body) = get_json(seeded().await, "/launches/1900-001").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("1900-001"));
  }
}
