//! Handlers for `/stats` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/stats/orbital_attempts` | Distinct launches matching the filter |
//! | `GET`  | `/stats/attempts_by_year` | Same, bucketed by UTC year |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use launchlog_core::{query::YearCount, store::LaunchStore};
use serde::Serialize;

use crate::{error::ApiError, params::LaunchParams};

#[derive(Debug, Serialize)]
pub struct CountBody {
  pub count: u64,
}

/// `GET /stats/orbital_attempts`
pub async fn orbital_attempts<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<LaunchParams>,
) -> Result<Json<CountBody>, ApiError>
where
  S: LaunchStore,
{
  let count = store
    .count_launches(&params.filter())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(CountBody { count }))
}

/// `GET /stats/attempts_by_year`
pub async fn attempts_by_year<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<LaunchParams>,
) -> Result<Json<Vec<YearCount>>, ApiError>
where
  S: LaunchStore,
{
  let years = store
    .launches_by_year(&params.filter())
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(years))
}
