//! Launch records: one stored row per (launch, piece).
//!
//! A launch is identified by its `launch_tag`; each tracked payload or object
//! of that launch is a separate row distinguished by `piece`. Rows are written
//! once by ingestion and never updated afterwards.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{
  Deserialize, Deserializer, Serialize, Serializer,
  de::{MapAccess, Visitor},
};

use crate::Result;

/// Provenance tag for rows ingested from the GCAT launch log.
pub const SOURCE_GCAT: &str = "gcat";

// ─── Raw row ─────────────────────────────────────────────────────────────────

/// The verbatim source row: column names mapped to cell text, in the order
/// the feed declared them.
///
/// Serialises as a JSON object; deserialisation keeps document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow(Vec<(String, String)>);

impl RawRow {
  pub fn new() -> Self { Self::default() }

  pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
    self.0.push((column.into(), value.into()));
  }

  /// The cell for `column`, if the feed supplied one. The first occurrence
  /// wins when a header repeats a name.
  pub fn get(&self, column: &str) -> Option<&str> {
    self
      .0
      .iter()
      .find(|(k, _)| k == column)
      .map(|(_, v)| v.as_str())
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  /// Compact JSON object text for the `raw` database column.
  pub fn to_json(&self) -> Result<String> { Ok(serde_json::to_string(self)?) }

  pub fn from_json(s: &str) -> Result<Self> { Ok(serde_json::from_str(s)?) }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self(
      iter
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect(),
    )
  }
}

impl Serialize for RawRow {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(self.0.iter().map(|(k, v)| (k, v)))
  }
}

impl<'de> Deserialize<'de> for RawRow {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_map(RawRowVisitor)
  }
}

struct RawRowVisitor;

impl<'de> Visitor<'de> for RawRowVisitor {
  type Value = RawRow;

  fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str("a map of column names to cell text")
  }

  fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawRow, A::Error> {
    let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
    while let Some((k, v)) = map.next_entry::<String, String>()? {
      pairs.push((k, v));
    }
    Ok(RawRow(pairs))
  }
}

// ─── NewLaunch ───────────────────────────────────────────────────────────────

/// A normalised candidate row, ready for an idempotent insert.
/// `id`, `created_at` and `updated_at` are always assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLaunch {
  pub source:              String,
  pub launch_tag:          Option<String>,
  pub piece:               Option<String>,
  pub launch_datetime_utc: Option<DateTime<Utc>>,
  /// Original date text, kept whether or not it parsed.
  pub launch_date_raw:     Option<String>,
  pub lv_type:             Option<String>,
  pub launch_site:         Option<String>,
  pub launch_agency:       Option<String>,
  pub lv_state:            Option<String>,
  pub launch_code:         Option<String>,
  /// Mission name.
  pub name:                Option<String>,
  /// Payload name.
  pub plname:              Option<String>,
  pub sat_owner:           Option<String>,
  pub sat_state:           Option<String>,
  pub is_orbital:          bool,
  pub is_launch_attempt:   bool,
  pub raw:                 RawRow,
}

impl NewLaunch {
  /// A GCAT-sourced candidate with every descriptive field empty.
  pub fn gcat(raw: RawRow) -> Self {
    Self {
      source: SOURCE_GCAT.to_owned(),
      launch_tag: None,
      piece: None,
      launch_datetime_utc: None,
      launch_date_raw: None,
      lv_type: None,
      launch_site: None,
      launch_agency: None,
      lv_state: None,
      launch_code: None,
      name: None,
      plname: None,
      sat_owner: None,
      sat_state: None,
      is_orbital: true,
      is_launch_attempt: true,
      raw,
    }
  }
}

// ─── LaunchRecord ────────────────────────────────────────────────────────────

/// A persisted row. Never updated after insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
  pub id:                  i64,
  pub source:              String,
  pub launch_tag:          Option<String>,
  pub piece:               Option<String>,
  pub launch_datetime_utc: Option<DateTime<Utc>>,
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
  pub raw:                 RawRow,
  pub created_at:          DateTime<Utc>,
  pub updated_at:          DateTime<Utc>,
}
