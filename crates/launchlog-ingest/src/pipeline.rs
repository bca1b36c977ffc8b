//! Fetch → validate → normalize → insert.

use launchlog_core::{query::RowFailure, store::LaunchStore};
use launchlog_gcat::{FeedReader, normalize};
use serde::Serialize;

use crate::{Error, FeedSource, Result};

/// Summary of one ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
  /// Data rows seen in the feed, comment lines excluded.
  pub rows_read: usize,
  pub inserted:  usize,
  /// Rows whose (`launch_tag`, `piece`) was already stored.
  pub ignored:   usize,
  pub failed:    Vec<RowFailure>,
}

/// Load the feed from `source` and ingest it into `store`.
pub async fn run<S: LaunchStore>(store: &S, source: &FeedSource) -> Result<IngestReport> {
  tracing::info!(%source, "loading feed");
  let feed = source.load().await?;
  ingest(store, &feed).await
}

/// Ingest an already-loaded feed.
///
/// The header is validated before any row is read, so a structurally wrong
/// feed writes nothing. All accepted rows are committed in a single batch.
pub async fn ingest<S: LaunchStore>(store: &S, feed: &[u8]) -> Result<IngestReport> {
  let reader = FeedReader::new(feed)?;

  let mut report = IngestReport::default();
  let mut candidates = Vec::new();
  for (row, result) in reader {
    report.rows_read += 1;
    match result {
      Ok(raw) => candidates.push((row, normalize(raw))),
      Err(e) => report.failed.push(RowFailure {
        row,
        message: e.to_string(),
      }),
    }
  }

  let outcome = store
    .insert_batch(candidates)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  report.inserted = outcome.inserted;
  report.ignored = outcome.ignored;
  report.failed.extend(outcome.failed);
  report.failed.sort_by_key(|f| f.row);

  for failure in &report.failed {
    tracing::warn!(row = failure.row, "row skipped: {}", failure.message);
  }
  tracing::info!(
    rows_read = report.rows_read,
    inserted = report.inserted,
    ignored = report.ignored,
    failed = report.failed.len(),
    "ingestion complete"
  );

  Ok(report)
}
