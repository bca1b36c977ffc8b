//! The `LaunchStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `launchlog-store-sqlite`).
//! Higher layers (`launchlog-api`, `launchlog-ingest`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  launch::{LaunchRecord, NewLaunch},
  query::{BatchOutcome, FilterOptions, LaunchFilter, Page, TableStats, YearCount},
};

/// Abstraction over a launch table backend.
///
/// The table holds one row per (`launch_tag`, `piece`). Every launch-level
/// read deduplicates by `launch_tag` and skips rows whose tag is null.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait LaunchStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert every candidate whose (`launch_tag`, `piece`) key is not yet
  /// stored, as one unit of work. Existing keys are left untouched.
  ///
  /// Each candidate is paired with its feed row number, which is what
  /// [`RowFailure::row`](crate::query::RowFailure) reports.
  fn insert_batch(
    &self,
    rows: Vec<(usize, NewLaunch)>,
  ) -> impl Future<Output = Result<BatchOutcome, Self::Error>> + Send + '_;

  // ── Launch-level reads ────────────────────────────────────────────────

  /// Number of distinct launch tags among rows matching `filter`.
  fn count_launches<'a>(
    &'a self,
    filter: &'a LaunchFilter,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + 'a;

  /// Distinct launches per UTC calendar year, ascending. Undated rows are
  /// left out.
  fn launches_by_year<'a>(
    &'a self,
    filter: &'a LaunchFilter,
  ) -> impl Future<Output = Result<Vec<YearCount>, Self::Error>> + Send + 'a;

  /// One representative row per launch, newest first, undated launches last.
  ///
  /// The representative is the launch's row with the latest datetime; undated
  /// rows are chosen only when no dated row matches.
  fn list_launches<'a>(
    &'a self,
    filter: &'a LaunchFilter,
    page: Page,
  ) -> impl Future<Output = Result<Vec<LaunchRecord>, Self::Error>> + Send + 'a;

  /// Every stored piece of one launch. Empty if the tag is unknown.
  fn launch_pieces<'a>(
    &'a self,
    launch_tag: &'a str,
  ) -> impl Future<Output = Result<Vec<LaunchRecord>, Self::Error>> + Send + 'a;

  // ── Metadata ──────────────────────────────────────────────────────────

  fn table_stats(
    &self,
  ) -> impl Future<Output = Result<TableStats, Self::Error>> + Send + '_;

  fn filter_options(
    &self,
  ) -> impl Future<Output = Result<FilterOptions, Self::Error>> + Send + '_;
}
