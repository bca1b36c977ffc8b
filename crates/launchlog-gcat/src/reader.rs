//! Header validation and row iteration over a tab-separated feed.

use std::io;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter};
use launchlog_core::launch::RawRow;

use crate::{REQUIRED_COLUMNS, Result, SchemaError};

/// Iterator over the data rows of a validated feed.
///
/// Yields `(row_number, row)` where `row_number` is 1-based over data rows
/// only (the header and `#` comment lines are not counted). A row the CSV
/// layer cannot decode is yielded as `Err` without stopping iteration.
pub struct FeedReader<R> {
  headers: Vec<String>,
  records: StringRecordsIntoIter<R>,
  row:     usize,
}

impl<R: io::Read> FeedReader<R> {
  /// Read and validate the header line.
  ///
  /// Fails with [`SchemaError::MissingColumns`] naming every absent required
  /// column before a single data row is consumed.
  pub fn new(input: R) -> Result<Self> {
    let mut records = ReaderBuilder::new()
      .delimiter(b'\t')
      .quoting(false)
      .has_headers(false)
      .flexible(true)
      .from_reader(input)
      .into_records();

    let header = records.next().ok_or(SchemaError::EmptyFeed)??;
    let headers = header_names(&header);

    let mut missing: Vec<String> = REQUIRED_COLUMNS
      .iter()
      .filter(|col| !headers.iter().any(|h| h == *col))
      .map(|col| (*col).to_owned())
      .collect();
    if !missing.is_empty() {
      missing.sort();
      return Err(SchemaError::MissingColumns(missing));
    }

    Ok(Self { headers, records, row: 0 })
  }

  pub fn headers(&self) -> &[String] { &self.headers }

  fn to_raw(&self, record: &StringRecord) -> RawRow {
    record
      .iter()
      .enumerate()
      .map(|(i, cell)| {
        let column = self
          .headers
          .get(i)
          .cloned()
          .unwrap_or_else(|| format!("column_{}", i + 1));
        (column, cell)
      })
      .collect()
  }
}

impl<R: io::Read> Iterator for FeedReader<R> {
  type Item = (usize, Result<RawRow, csv::Error>);

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let record = self.records.next()?;
      if let Ok(r) = &record
        && is_comment(r)
      {
        continue;
      }
      self.row += 1;
      return Some((self.row, record.map(|r| self.to_raw(&r))));
    }
  }
}

/// GCAT prefixes its header line with `#`, e.g. `#Launch_Tag`.
fn header_names(header: &StringRecord) -> Vec<String> {
  header
    .iter()
    .enumerate()
    .map(|(i, name)| {
      let name = name.trim();
      let name = if i == 0 { name.trim_start_matches('#').trim_start() } else { name };
      name.to_owned()
    })
    .collect()
}

/// Lines such as `# Updated 2024 Sep 20` carry no data.
fn is_comment(record: &StringRecord) -> bool {
  record
    .get(0)
    .is_some_and(|first| first.trim_start().starts_with('#'))
}
