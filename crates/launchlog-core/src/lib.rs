//! Core types and trait definitions for the launchlog dataset.
//!
//! Launch records, query parameters, lenient date parsing, path helpers and
//! the [`LaunchStore`](store::LaunchStore) abstraction. No HTTP or database
//! dependencies; every other crate in the workspace builds on this one.

pub mod error;
pub mod launch;
pub mod paths;
pub mod query;
pub mod store;
pub mod time;

pub use error::{Error, Result};
