//! Raw feed row → [`NewLaunch`].
//!
//! The feed writes an empty cell where it means "no value". That convention
//! ends here: every canonical field is either trimmed non-empty text or `None`.

use launchlog_core::{
  launch::{NewLaunch, RawRow},
  time::parse_lenient,
};

use crate::{
  LAUNCH_AGENCY, LAUNCH_CODE, LAUNCH_DATE, LAUNCH_SITE, LAUNCH_TAG, LV_STATE,
  LV_TYPE, NAME, PIECE, PL_NAME, SAT_OWNER, SAT_STATE,
};

/// Map one feed row to a canonical candidate. Never fails: a missing or
/// unparseable cell degrades to `None` and the row is still usable.
///
/// The row itself is attached unchanged as the provenance payload.
pub fn normalize(raw: RawRow) -> NewLaunch {
  let field = |column: &str| clean(raw.get(column));

  // The date text is kept as written; only blank cells are dropped.
  let launch_date_raw = raw
    .get(LAUNCH_DATE)
    .filter(|v| !v.trim().is_empty())
    .map(str::to_owned);
  let launch_datetime_utc = launch_date_raw.as_deref().and_then(parse_lenient);

  let mut launch = NewLaunch {
    launch_tag: field(LAUNCH_TAG),
    piece: field(PIECE),
    launch_datetime_utc,
    launch_date_raw,
    lv_type: field(LV_TYPE),
    launch_site: field(LAUNCH_SITE),
    launch_agency: field(LAUNCH_AGENCY),
    lv_state: field(LV_STATE),
    launch_code: field(LAUNCH_CODE),
    name: field(NAME),
    plname: field(PL_NAME),
    sat_owner: field(SAT_OWNER),
    sat_state: field(SAT_STATE),
    ..NewLaunch::gcat(RawRow::new())
  };
  launch.raw = raw;
  launch
}

fn clean(value: Option<&str>) -> Option<String> {
  value
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .map(str::to_owned)
}

#[cfg(test)]
mod tests {
  use chrono::{TimeZone, Utc};
  use launchlog_core::launch::SOURCE_GCAT;

  use super::*;

  fn row(cells: &[(&str, &str)]) -> RawRow { cells.iter().copied().collect() }

  #[test]
  fn full_row_maps_every_column() {
    let raw = row(&[
      ("Launch_Tag", "1957-001"),
      ("Launch_Date", "1957 Oct  4 1928:34"),
      ("Launch_Code", "1A"),
      ("Piece", "A"),
      ("LV_Type", "Sputnik 8K71PS"),
      ("Launch_Site", "NIIP-5"),
      ("Launch_Agency", "OKB1"),
      ("LV_State", "SU"),
      ("Name", "PS-1"),
      ("PLName", "Sputnik"),
      ("Sat_Owner", "OKB1"),
      ("Sat_State", "SU"),
    ]);

    let launch = normalize(raw.clone());

    assert_eq!(launch.source, SOURCE_GCAT);
    assert_eq!(launch.launch_tag.as_deref(), Some("1957-001"));
    assert_eq!(launch.piece.as_deref(), Some("A"));
    assert_eq!(
      launch.launch_datetime_utc,
      Some(Utc.with_ymd_and_hms(1957, 10, 4, 19, 28, 34).unwrap())
    );
    assert_eq!(launch.launch_date_raw.as_deref(), Some("1957 Oct  4 1928:34"));
    assert_eq!(launch.lv_type.as_deref(), Some("Sputnik 8K71PS"));
    assert_eq!(launch.launch_site.as_deref(), Some("NIIP-5"));
    assert_eq!(launch.launch_agency.as_deref(), Some("OKB1"));
    assert_eq!(launch.lv_state.as_deref(), Some("SU"));
    assert_eq!(launch.launch_code.as_deref(), Some("1A"));
    assert_eq!(launch.name.as_deref(), Some("PS-1"));
    assert_eq!(launch.plname.as_deref(), Some("Sputnik"));
    assert_eq!(launch.sat_owner.as_deref(), Some("OKB1"));
    assert_eq!(launch.sat_state.as_deref(), Some("SU"));
    assert!(launch.is_orbital);
    assert!(launch.is_launch_attempt);
    assert_eq!(launch.raw, raw);
  }

  #[test]
  fn empty_and_blank_cells_become_none() {
    let launch = normalize(row(&[
      ("Launch_Tag", ""),
      ("Piece", "   "),
      ("Launch_Agency", "\t"),
      ("Launch_Date", " "),
    ]));
    assert_eq!(launch.launch_tag, None);
    assert_eq!(launch.piece, None);
    assert_eq!(launch.launch_agency, None);
    assert_eq!(launch.launch_datetime_utc, None);
    assert_eq!(launch.launch_date_raw, None);
  }

  #[test]
  fn padded_values_are_trimmed_but_raw_is_verbatim() {
    let raw = row(&[("Launch_Tag", "2024-001  "), ("LV_State", " US ")]);
    let launch = normalize(raw);
    assert_eq!(launch.launch_tag.as_deref(), Some("2024-001"));
    assert_eq!(launch.lv_state.as_deref(), Some("US"));
    assert_eq!(launch.raw.get("Launch_Tag"), Some("2024-001  "));
  }

  #[test]
  fn padded_date_is_parsed_but_stored_untrimmed() {
    let launch = normalize(row(&[
      ("Launch_Tag", "1957-001"),
      ("Launch_Date", " 1957 Oct  4 1928:34 "),
    ]));
    assert_eq!(launch.launch_date_raw.as_deref(), Some(" 1957 Oct  4 1928:34 "));
    assert_eq!(
      launch.launch_datetime_utc,
      Some(Utc.with_ymd_and_hms(1957, 10, 4, 19, 28, 34).unwrap())
    );
  }

  #[test]
  fn unparseable_date_keeps_raw_text() {
    let launch = normalize(row(&[("Launch_Tag", "2024-999"), ("Launch_Date", "TBD")]));
    assert_eq!(launch.launch_datetime_utc, None);
    assert_eq!(launch.launch_date_raw.as_deref(), Some("TBD"));
    assert_eq!(launch.launch_tag.as_deref(), Some("2024-999"));
  }

  #[test]
  fn absent_columns_are_none() {
    let launch = normalize(row(&[("Piece", "B")]));
    assert_eq!(launch.launch_tag, None);
    assert_eq!(launch.launch_date_raw, None);
    assert_eq!(launch.piece.as_deref(), Some("B"));
  }
}
