//! Liveness and table metadata.

use std::sync::Arc;

use axum::{Json, extract::State};
use launchlog_core::{
  query::{FilterOptions, TableStats},
  store::LaunchStore,
};
use serde_json::{Value, json};

use crate::error::ApiError;

/// `GET /health`
pub async fn health() -> Json<Value> { Json(json!({ "ok": true })) }

/// `GET /meta/schema`
pub async fn schema<S>(State(store): State<Arc<S>>) -> Result<Json<TableStats>, ApiError>
where
  S: LaunchStore,
{
  let stats = store
    .table_stats()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(stats))
}

/// `GET /meta/filters`
pub async fn filters<S>(State(store): State<Arc<S>>) -> Result<Json<FilterOptions>, ApiError>
where
  S: LaunchStore,
{
  let options = store
    .filter_options()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(options))
}
