//! Structural errors for the GCAT feed codec.
//!
//! These are fatal to an ingestion run and are raised before any data row is
//! read. Per-row problems never surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
  #[error("feed has no header row")]
  EmptyFeed,

  /// Every absent required column, sorted by name.
  #[error("missing required columns: {}", .0.join(", "))]
  MissingColumns(Vec<String>),

  #[error("unreadable header row: {0}")]
  Csv(#[from] csv::Error),
}

pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
