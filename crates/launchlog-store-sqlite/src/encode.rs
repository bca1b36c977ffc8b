//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as fixed-width RFC 3339 UTC strings
//! (`2024-01-01T00:00:00.000000Z`) so that text comparison and `ORDER BY`
//! agree with chronological order. The raw feed row is stored as a JSON
//! object.

use chrono::{DateTime, SecondsFormat, Utc};
use launchlog_core::launch::{LaunchRecord, NewLaunch, RawRow};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Column list shared by every query that returns whole rows. Order must match
/// [`RawLaunch::from_row`].
pub const LAUNCH_COLUMNS: &str = "id, source, launch_tag, piece, \
  launch_datetime_utc, launch_date_raw, lv_type, launch_site, launch_agency, \
  lv_state, launch_code, name, plname, sat_owner, sat_state, is_orbital, \
  is_launch_attempt, raw, created_at, updated_at";

/// Owned, encoded column values for one insert. Built on the async side and
/// moved into the database thread.
pub struct EncodedLaunch {
  pub source:              String,
  pub launch_tag:          Option<String>,
  pub piece:               Option<String>,
  pub launch_datetime_utc: Option<String>,
  pub launch_date_raw:     Option<String>,
  pub lv_type:             Option<String>,
  pub launch_site:         Option<String>,
  pub launch_agency:       Option<String>,
  pub lv_state:            Option<String>,
  pub launch_code:         Option<String>,
  pub name:                Option<String>,
  pub plname:              Option<String>,
  pub sat_owner:           Option<String>,
  pub sat_state:           Option<String>,
  pub is_orbital:          bool,
  pub is_launch_attempt:   bool,
  pub raw:                 String,
}

impl EncodedLaunch {
  pub fn encode(launch: NewLaunch) -> Result<Self> {
    Ok(Self {
      raw:                 launch.raw.to_json()?,
      source:              launch.source,
      launch_tag:          launch.launch_tag,
      piece:               launch.piece,
      launch_datetime_utc: launch.launch_datetime_utc.map(encode_dt),
      launch_date_raw:     launch.launch_date_raw,
      lv_type:             launch.lv_type,
      launch_site:         launch.launch_site,
      launch_agency:       launch.launch_agency,
      lv_state:            launch.lv_state,
      launch_code:         launch.launch_code,
      name:                launch.name,
      plname:              launch.plname,
      sat_owner:           launch.sat_owner,
      sat_state:           launch.sat_state,
      is_orbital:          launch.is_orbital,
      is_launch_attempt:   launch.is_launch_attempt,
    })
  }
}

/// Raw values read directly from a `launches` row.
pub struct RawLaunch {
  pub id:                  i64,
  pub source:              String,
  pub launch_tag:          Option<String>,
  pub piece:               Option<String>,
  pub launch_datetime_utc: Option<String>,
  pub launch_date_raw:     Option<String>,
  pub lv_type:             Option<String>,
  pub launch_site:         Option<String>,
  pub launch_agency:       Option<String>,
  pub lv_state:            Option<String>,
  pub launch_code:         Option<String>,
  pub name:                Option<String>,
  pub plname:              Option<String>,
  pub sat_owner:           Option<String>,
  pub sat_state:           Option<String>,
  pub is_orbital:          bool,
  pub is_launch_attempt:   bool,
  pub raw:                 Option<String>,
  pub created_at:          String,
  pub updated_at:          String,
}

impl RawLaunch {
  /// Read a row selected with [`LAUNCH_COLUMNS`].
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:                  row.get(0)?,
      source:              row.get(1)?,
      launch_tag:          row.get(2)?,
      piece:               row.get(3)?,
      launch_datetime_utc: row.get(4)?,
      launch_date_raw:     row.get(5)?,
      lv_type:             row.get(6)?,
      launch_site:         row.get(7)?,
      launch_agency:       row.get(8)?,
      lv_state:            row.get(9)?,
      launch_code:         row.get(10)?,
      name:                row.get(11)?,
      plname:              row.get(12)?,
      sat_owner:           row.get(13)?,
      sat_state:           row.get(14)?,
      is_orbital:          row.get(15)?,
      is_launch_attempt:   row.get(16)?,
      raw:                 row.get(17)?,
      created_at:          row.get(18)?,
      updated_at:          row.get(19)?,
    })
  }

  pub fn into_record(self) -> Result<LaunchRecord> {
    let launch_datetime_utc = self
      .launch_datetime_utc
      .as_deref()
      .map(decode_dt)
      .transpose()?;

    let raw = self
      .raw
      .as_deref()
      .map(RawRow::from_json)
      .transpose()?
      .unwrap_or_default();

    Ok(LaunchRecord {
      id: self.id,
      source: self.source,
      launch_tag: self.launch_tag,
      piece: self.piece,
      launch_datetime_utc,
      launch_date_raw: self.launch_date_raw,
      lv_type: self.lv_type,
      launch_site: self.launch_site,
      launch_agency: self.launch_agency,
      lv_state: self.lv_state,
      launch_code: self.launch_code,
      name: self.name,
      plname: self.plname,
      sat_owner: self.sat_owner,
      sat_state: self.sat_state,
      is_orbital: self.is_orbital,
      is_launch_attempt: self.is_launch_attempt,
      raw,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}
