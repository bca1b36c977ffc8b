//! Query parameters and read-model types for [`LaunchStore`](crate::store::LaunchStore).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::parse_lenient;

/// Reported by the schema metadata endpoint so clients can tell which
/// normalisation rules produced the stored rows.
pub const INGESTION_VERSION: &str = "v1";

pub const DEFAULT_PAGE_LIMIT: u32 = 20;
pub const MAX_PAGE_LIMIT: u32 = 100;

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Predicate shared by every launch-level read. All fields are optional and
/// AND-combined; rows with a null `launch_tag` are always excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchFilter {
  /// Inclusive lower bound on `launch_datetime_utc`.
  pub since:   Option<DateTime<Utc>>,
  /// Exclusive upper bound on `launch_datetime_utc`.
  pub until:   Option<DateTime<Utc>>,
  pub agency:  Option<String>,
  pub state:   Option<String>,
  pub lv_type: Option<String>,
  pub site:    Option<String>,
}

impl LaunchFilter {
  /// Build a filter from untrusted text parameters.
  ///
  /// Dates that fail to parse are dropped rather than rejected, and empty
  /// strings are treated as absent.
  pub fn from_params(
    since: Option<&str>,
    until: Option<&str>,
    agency: Option<&str>,
    state: Option<&str>,
    lv_type: Option<&str>,
    site: Option<&str>,
  ) -> Self {
    Self {
      since:   since.and_then(parse_lenient),
      until:   until.and_then(parse_lenient),
      agency:  non_empty(agency),
      state:   non_empty(state),
      lv_type: non_empty(lv_type),
      site:    non_empty(site),
    }
  }
}

fn non_empty(value: Option<&str>) -> Option<String> {
  value.filter(|v| !v.is_empty()).map(str::to_owned)
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// Limit/offset window over the deduplicated listing.
///
/// Construction clamps out-of-range values instead of failing: `limit` into
/// `1..=MAX_PAGE_LIMIT`, `offset` to non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
  limit:  u32,
  offset: u64,
}

impl Page {
  pub fn new(limit: Option<i64>, offset: Option<i64>) -> Self {
    let limit = limit
      .unwrap_or(DEFAULT_PAGE_LIMIT as i64)
      .clamp(1, MAX_PAGE_LIMIT as i64) as u32;
    let offset = offset.unwrap_or(0).max(0) as u64;
    Self { limit, offset }
  }

  pub fn limit(&self) -> u32 { self.limit }

  pub fn offset(&self) -> u64 { self.offset }
}

impl Default for Page {
  fn default() -> Self { Self::new(None, None) }
}

// ─── Aggregates ──────────────────────────────────────────────────────────────

/// Distinct launches whose date falls in one UTC calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCount {
  pub year:  i32,
  pub count: u64,
}

/// Table-level freshness and size counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
  pub ingestion_version:     String,
  /// Most recent `created_at`; `None` when the table is empty.
  pub last_ingest_time:      Option<DateTime<Utc>>,
  pub row_count:             u64,
  pub distinct_launch_count: u64,
}

/// Sorted distinct non-null values for each filterable column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
  pub agencies: Vec<String>,
  pub states:   Vec<String>,
  pub lv_types: Vec<String>,
  pub sites:    Vec<String>,
}

// ─── Write outcome ───────────────────────────────────────────────────────────

/// A row that could not be stored. Other rows of the batch are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowFailure {
  /// 1-based position among the feed's data rows.
  pub row:     usize,
  pub message: String,
}

/// Result of [`LaunchStore::insert_batch`](crate::store::LaunchStore::insert_batch).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
  pub inserted: usize,
  /// Rows whose key already existed; left untouched.
  pub ignored:  usize,
  pub failed:   Vec<RowFailure>,
}
