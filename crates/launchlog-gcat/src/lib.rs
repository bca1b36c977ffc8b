//! GCAT launch-log codec for launchlog.
//!
//! Reads the tab-separated `launchlog.tsv` published by GCAT and turns each
//! row into a [`NewLaunch`](launchlog_core::launch::NewLaunch). Pure
//! synchronous; no HTTP or database dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use launchlog_gcat::{FeedReader, normalize};
//!
//! let tsv = std::fs::read_to_string("launchlog.tsv").unwrap();
//! let reader = FeedReader::new(tsv.as_bytes()).unwrap();
//! for (row, raw) in reader {
//!   let launch = normalize(raw.unwrap());
//!   println!("row {row}: {:?}", launch.launch_tag);
//! }
//! ```

pub mod error;
mod normalize;
mod reader;

pub use error::{Result, SchemaError};
pub use normalize::normalize;
pub use reader::FeedReader;

// ─── Columns ─────────────────────────────────────────────────────────────────

pub const LAUNCH_TAG: &str = "Launch_Tag";
pub const LAUNCH_DATE: &str = "Launch_Date";
pub const LAUNCH_CODE: &str = "Launch_Code";
pub const PIECE: &str = "Piece";
pub const LV_TYPE: &str = "LV_Type";
pub const LAUNCH_SITE: &str = "Launch_Site";
pub const LAUNCH_AGENCY: &str = "Launch_Agency";
pub const LV_STATE: &str = "LV_State";
pub const NAME: &str = "Name";
pub const PL_NAME: &str = "PLName";
pub const SAT_OWNER: &str = "Sat_Owner";
pub const SAT_STATE: &str = "Sat_State";

/// Columns a feed must declare before any of its rows are accepted.
pub const REQUIRED_COLUMNS: [&str; 12] = [
  LAUNCH_TAG,
  LAUNCH_DATE,
  LAUNCH_CODE,
  PIECE,
  LV_TYPE,
  LAUNCH_SITE,
  LAUNCH_AGENCY,
  LV_STATE,
  NAME,
  PL_NAME,
  SAT_OWNER,
  SAT_STATE,
];
