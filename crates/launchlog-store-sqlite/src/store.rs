//! [`SqliteStore`]: the SQLite implementation of [`LaunchStore`].

use std::path::Path;

use chrono::Utc;
use launchlog_core::{
  launch::{LaunchRecord, NewLaunch},
  query::{
    BatchOutcome, FilterOptions, INGESTION_VERSION, LaunchFilter, Page, RowFailure,
    TableStats, YearCount,
  },
  store::LaunchStore,
};
use rusqlite::ToSql;

use crate::{
  encode::{EncodedLaunch, LAUNCH_COLUMNS, RawLaunch, decode_dt, encode_dt},
  schema::{BUSY_TIMEOUT, SCHEMA, SCHEMA_VERSION},
  Result,
};

// ─── Shared filter ───────────────────────────────────────────────────────────

/// WHERE clause applied by every launch-level read. Parameters `?1`–`?6` are
/// bound from [`FilterParams`]; a NULL parameter disables its condition.
const FILTER_SQL: &str = "launch_tag IS NOT NULL
  AND (?1 IS NULL OR launch_datetime_utc >= ?1)
  AND (?2 IS NULL OR launch_datetime_utc <  ?2)
  AND (?3 IS NULL OR launch_agency = ?3)
  AND (?4 IS NULL OR lv_state      = ?4)
  AND (?5 IS NULL OR lv_type       = ?5)
  AND (?6 IS NULL OR launch_site   = ?6)";

/// Owned, encoded copy of a [`LaunchFilter`] that can move into the database
/// thread.
struct FilterParams {
  since:   Option<String>,
  until:   Option<String>,
  agency:  Option<String>,
  state:   Option<String>,
  lv_type: Option<String>,
  site:    Option<String>,
}

impl FilterParams {
  fn new(filter: &LaunchFilter) -> Self {
    Self {
      since:   filter.since.map(encode_dt),
      until:   filter.until.map(encode_dt),
      agency:  filter.agency.clone(),
      state:   filter.state.clone(),
      lv_type: filter.lv_type.clone(),
      site:    filter.site.clone(),
    }
  }

  fn bind(&self) -> Vec<&dyn ToSql> {
    vec![
      &self.since,
      &self.until,
      &self.agency,
      &self.state,
      &self.lv_type,
      &self.site,
    ]
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A launch table backed by a single SQLite file.
///
/// Cloning is cheap; the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, mostly for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        let version: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version < SCHEMA_VERSION {
          conn.execute_batch(SCHEMA)?;
        }
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run `sql` (which must select [`LAUNCH_COLUMNS`]) and decode every row.
  async fn select_launches(
    &self,
    sql: String,
    filter: Option<FilterParams>,
    extra: Vec<i64>,
  ) -> Result<Vec<LaunchRecord>> {
    let raws: Vec<RawLaunch> = self
      .conn
      .call(move |conn| {
        let mut params: Vec<&dyn ToSql> =
          filter.as_ref().map(FilterParams::bind).unwrap_or_default();
        params.extend(extra.iter().map(|v| v as &dyn ToSql));

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(params.as_slice(), RawLaunch::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLaunch::into_record).collect()
  }

  async fn distinct_values(&self, column: &'static str) -> Result<Vec<String>> {
    let sql = format!(
      "SELECT DISTINCT {column} FROM launches
       WHERE {column} IS NOT NULL
       ORDER BY {column}"
    );

    let values = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map([], |row| row.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(values)
  }
}

// ─── LaunchStore impl ────────────────────────────────────────────────────────

impl LaunchStore for SqliteStore {
  type Error = crate::Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert_batch(&self, rows: Vec<(usize, NewLaunch)>) -> Result<BatchOutcome> {
    let now = encode_dt(Utc::now());
    let mut outcome = BatchOutcome::default();

    let mut encoded = Vec::with_capacity(rows.len());
    for (row, launch) in rows {
      match EncodedLaunch::encode(launch) {
        Ok(e) => encoded.push((row, e)),
        Err(e) => outcome.failed.push(RowFailure {
          row,
          message: e.to_string(),
        }),
      }
    }

    let mut outcome = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        {
          let mut stmt = tx.prepare(
            "INSERT INTO launches (
               source, launch_tag, piece, launch_datetime_utc, launch_date_raw,
               lv_type, launch_site, launch_agency, lv_state, launch_code,
               name, plname, sat_owner, sat_state,
               is_orbital, is_launch_attempt, raw, created_at, updated_at
             ) VALUES (
               ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10,
               ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?18
             )
             ON CONFLICT DO NOTHING",
          )?;

          for (row, e) in &encoded {
            let result = stmt.execute(rusqlite::params![
              e.source,
              e.launch_tag,
              e.piece,
              e.launch_datetime_utc,
              e.launch_date_raw,
              e.lv_type,
              e.launch_site,
              e.launch_agency,
              e.lv_state,
              e.launch_code,
              e.name,
              e.plname,
              e.sat_owner,
              e.sat_state,
              e.is_orbital,
              e.is_launch_attempt,
              e.raw,
              now,
            ]);
            match result {
              Ok(0) => outcome.ignored += 1,
              Ok(_) => outcome.inserted += 1,
              Err(err) => outcome.failed.push(RowFailure {
                row:     *row,
                message: err.to_string(),
              }),
            }
          }
        }
        tx.commit()?;
        Ok(outcome)
      })
      .await?;

    outcome.failed.sort_by_key(|f| f.row);
    tracing::debug!(
      inserted = outcome.inserted,
      ignored = outcome.ignored,
      failed = outcome.failed.len(),
      "batch committed"
    );
    Ok(outcome)
  }

  // ── Launch-level reads ────────────────────────────────────────────────────

  async fn count_launches(&self, filter: &LaunchFilter) -> Result<u64> {
    let params = FilterParams::new(filter);

    let count: i64 = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT COUNT(DISTINCT launch_tag) FROM launches WHERE {FILTER_SQL}");
        Ok(conn.query_row(&sql, params.bind().as_slice(), |row| row.get(0))?)
      })
      .await?;

    Ok(count as u64)
  }

  async fn launches_by_year(&self, filter: &LaunchFilter) -> Result<Vec<YearCount>> {
    let params = FilterParams::new(filter);

    let years = self
      .conn
      .call(move |conn| {
        // Stored timestamps are fixed-width RFC 3339, so the year is the
        // first four characters.
        let sql = format!(
          "SELECT CAST(substr(launch_datetime_utc, 1, 4) AS INTEGER) AS year,
                  COUNT(DISTINCT launch_tag)
           FROM launches
           WHERE {FILTER_SQL}
             AND launch_datetime_utc IS NOT NULL
           GROUP BY year
           ORDER BY year"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(params.bind().as_slice(), |row| {
            Ok(YearCount {
              year:  row.get(0)?,
              count: row.get::<_, i64>(1)? as u64,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(years)
  }

  async fn list_launches(&self, filter: &LaunchFilter, page: Page) -> Result<Vec<LaunchRecord>> {
    // Per launch: latest datetime wins, undated rows last, first-ingested row
    // breaks ties. Then newest launch first, tag order for a stable page.
    let sql = format!(
      "SELECT {LAUNCH_COLUMNS} FROM (
         SELECT {LAUNCH_COLUMNS},
                ROW_NUMBER() OVER (
                  PARTITION BY launch_tag
                  ORDER BY launch_datetime_utc DESC NULLS LAST, id ASC
                ) AS rn
         FROM launches
         WHERE {FILTER_SQL}
       )
       WHERE rn = 1
       ORDER BY launch_datetime_utc DESC NULLS LAST, launch_tag ASC
       LIMIT ?7 OFFSET ?8"
    );

    self
      .select_launches(
        sql,
        Some(FilterParams::new(filter)),
        vec![i64::from(page.limit()), page.offset() as i64],
      )
      .await
  }

  async fn launch_pieces(&self, launch_tag: &str) -> Result<Vec<LaunchRecord>> {
    let sql = format!(
      "SELECT {LAUNCH_COLUMNS} FROM launches
       WHERE launch_tag = ?1
       ORDER BY piece ASC NULLS LAST, id ASC"
    );
    let tag = launch_tag.to_owned();

    let raws: Vec<RawLaunch> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params![tag], RawLaunch::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawLaunch::into_record).collect()
  }

  // ── Metadata ──────────────────────────────────────────────────────────────

  async fn table_stats(&self) -> Result<TableStats> {
    let (row_count, distinct, last): (i64, i64, Option<String>) = self
      .conn
      .call(|conn| {
        Ok(conn.query_row(
          "SELECT COUNT(*), COUNT(DISTINCT launch_tag), MAX(created_at) FROM launches",
          [],
          |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?)
      })
      .await?;

    Ok(TableStats {
      ingestion_version:     INGESTION_VERSION.to_owned(),
      last_ingest_time:      last.as_deref().map(decode_dt).transpose()?,
      row_count:             row_count as u64,
      distinct_launch_count: distinct as u64,
    })
  }

  async fn filter_options(&self) -> Result<FilterOptions> {
    Ok(FilterOptions {
      agencies: self.distinct_values("launch_agency").await?,
      states:   self.distinct_values("lv_state").await?,
      lv_types: self.distinct_values("lv_type").await?,
      sites:    self.distinct_values("launch_site").await?,
    })
  }
}
