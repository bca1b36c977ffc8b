//! Ingestion pipeline for launchlog.
//!
//! Loads the GCAT launch log (over HTTP or from disk), validates its header,
//! normalises every row and inserts the rows into a [`LaunchStore`] in one
//! batch. Rows whose (`launch_tag`, `piece`) is already stored are skipped,
//! so a run can be repeated at any time.
//!
//! [`LaunchStore`]: launchlog_core::store::LaunchStore

pub mod error;
pub mod fetch;
pub mod pipeline;

use std::path::PathBuf;

use serde::Deserialize;

pub use error::{Error, FetchError, Result};
pub use fetch::{DEFAULT_FEED_URL, FeedSource, fetch_feed};
pub use pipeline::{IngestReport, ingest, run};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Settings for one `ingest` run, deserialised from `launchlog.toml`,
/// `LAUNCHLOG_*` environment variables and command-line flags.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
  pub database_path: PathBuf,
  pub feed_url:      String,
  /// Read this file instead of fetching `feed_url`.
  #[serde(default)]
  pub feed_file:     Option<PathBuf>,
}

impl IngestConfig {
  pub fn source(&self) -> FeedSource {
    match &self.feed_file {
      Some(path) => FeedSource::File(path.clone()),
      None => FeedSource::Url(self.feed_url.clone()),
    }
  }
}
