//! Lenient date/time parsing shared by ingestion and query filters.
//!
//! Every successful parse yields a UTC instant. Values without an offset are
//! taken to be UTC. Unparseable text yields `None`; callers decide whether
//! that means "unknown date" (ingestion) or "no filter" (queries).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Date-times carrying a numeric UTC offset that RFC 3339 rejects.
const OFFSET_FORMATS: &[&str] = &[
  "%Y-%m-%d %H:%M:%S%.f%#z",
  "%Y-%m-%dT%H:%M:%S%.f%#z",
  "%Y-%m-%d %H:%M%#z",
];

/// Date-times without an offset. The GCAT entries write the time as `HHMM:SS`.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M",
  "%Y %b %d %H%M:%S%.f",
  "%Y %b %d %H%M",
  "%Y %b %d %H:%M:%S%.f",
  "%Y %b %d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
  "%Y-%m-%d",
  "%Y/%m/%d",
  "%Y %b %d",
  "%d %b %Y",
  "%b %d %Y",
];

/// Parse `text` into a UTC instant, accepting the shapes found in the feed and
/// the common ISO/RFC forms clients send.
///
/// Partial GCAT dates resolve to the start of the period they name: `1957 Oct`
/// is 1 October 1957 and `1957` is 1 January 1957.
pub fn parse_lenient(text: &str) -> Option<DateTime<Utc>> {
  let trimmed = text.trim();
  if trimmed.is_empty() {
    return None;
  }

  if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
    return Some(dt.with_timezone(&Utc));
  }
  if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
    return Some(dt.with_timezone(&Utc));
  }

  let normalized = normalize(trimmed);
  let s = normalized.as_str();

  for fmt in OFFSET_FORMATS {
    if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
      return Some(dt.with_timezone(&Utc));
    }
  }

  for fmt in NAIVE_DATETIME_FORMATS {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
      return Some(naive.and_utc());
    }
  }

  for fmt in DATE_FORMATS {
    if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
      return date.and_hms_opt(0, 0, 0).map(|n| n.and_utc());
    }
  }

  // `1957 Oct`
  if let Ok(date) = NaiveDate::parse_from_str(&format!("{s} 1"), "%Y %b %d") {
    return date.and_hms_opt(0, 0, 0).map(|n| n.and_utc());
  }

  // `1957`
  if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
    let year: i32 = s.parse().ok()?;
    return NaiveDate::from_ymd_opt(year, 1, 1)
      .and_then(|d| d.and_hms_opt(0, 0, 0))
      .map(|n| n.and_utc());
  }

  None
}

/// Collapse whitespace runs, then drop GCAT's trailing `?` uncertainty marker
/// and a trailing `UTC`/`GMT` designator.
fn normalize(s: &str) -> String {
  let mut out = s.split_whitespace().collect::<Vec<_>>().join(" ");

  while out.ends_with('?') {
    out.pop();
  }

  for zone in [" UTC", " GMT", "UTC", "Z"] {
    if out.len() > zone.len() && out.to_ascii_uppercase().ends_with(zone) {
      out.truncate(out.len() - zone.len());
      break;
    }
  }

  out.trim_end().to_owned()
}
