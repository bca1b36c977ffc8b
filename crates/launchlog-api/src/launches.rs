//! Handlers for `/launches` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/launches` | One summary per launch; filter + `limit`/`offset` |
//! | `GET`  | `/launches/{tag}` | Every stored piece; 404 if none |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use chrono::{DateTime, Utc};
use launchlog_core::{launch::LaunchRecord, store::LaunchStore};
use serde::Serialize;

use crate::{error::ApiError, params::LaunchParams};

/// The public view of a launch's representative row.
#[derive(Debug, Serialize)]
pub struct LaunchSummary {
  pub launch_tag:          Option<String>,
  pub launch_datetime_utc: Option<DateTime<Utc>>,
  pub launch_date_raw:     Option<String>,
  pub launch_agency:       Option<String>,
  pub lv_state:            Option<String>,
  pub lv_type:             Option<String>,
  pub launch_site:         Option<String>,
  pub launch_code:         Option<String>,
  pub name:                Option<String>,
  pub plname:              Option<String>,
}

impl From<LaunchRecord> for LaunchSummary {
  fn from(r: LaunchRecord) -> Self {
    Self {
      launch_tag:          r.launch_tag,
      launch_datetime_utc: r.launch_datetime_utc,
      launch_date_raw:     r.launch_date_raw,
      launch_agency:       r.launch_agency,
      lv_state:            r.lv_state,
      lv_type:             r.lv_type,
      launch_site:         r.launch_site,
      launch_code:         r.launch_code,
      name:                r.name,
      plname:              r.plname,
    }
  }
}

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /launches[?since=..&limit=..]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<LaunchParams>,
) -> Result<Json<Vec<LaunchSummary>>, ApiError>
where
  S: LaunchStore,
{
  let records = store
    .list_launches(&params.filter(), params.page())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(records.into_iter().map(LaunchSummary::from).collect()))
}

// ─── Get one ─────────────────────────────────────────────────────────────────

/// `GET /launches/{tag}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(tag): Path<String>,
) -> Result<Json<Vec<LaunchRecord>>, ApiError>
where
  S: LaunchStore,
{
  let pieces = store
    .launch_pieces(&tag)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if pieces.is_empty() {
    return Err(ApiError::NotFound(format!("launch {tag}")));
  }
  Ok(Json(pieces))
}
