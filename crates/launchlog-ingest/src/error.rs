//! Error types for `launchlog-ingest`.

use std::path::PathBuf;

use launchlog_gcat::SchemaError;
use thiserror::Error;

/// The feed could not be obtained. Nothing has been written when this is
/// returned.
#[derive(Debug, Error)]
pub enum FetchError {
  /// Connection failure, timeout, or an unreadable response body.
  #[error("feed request failed: {0}")]
  Http(#[from] reqwest::Error),

  #[error("{url} returned {status}")]
  Status {
    url:    String,
    status: reqwest::StatusCode,
  },

  #[error("failed to read {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },
}

/// A fatal ingestion failure. Row-level problems are reported in
/// [`IngestReport`](crate::IngestReport) instead.
#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Fetch(#[from] FetchError),

  #[error("feed rejected: {0}")]
  Schema(#[from] SchemaError),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
