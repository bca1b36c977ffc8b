//! HTTP server assembly for launchlog.
//!
//! Wraps [`launchlog_api::api_router`] with request tracing. The binary in
//! `main.rs` adds configuration, the SQLite store and the listener.

use std::{path::PathBuf, sync::Arc};

use axum::Router;
use launchlog_core::store::LaunchStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `launchlog.toml`,
/// `LAUNCHLOG_*` environment variables and command-line flags.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub database_path: PathBuf,
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// The full application: every API route, traced.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: LaunchStore + 'static,
{
  launchlog_api::api_router(store).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use launchlog_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  use super::*;

  #[tokio::test]
  async fn app_serves_the_api() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let resp = app(Arc::new(store)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }

  #[tokio::test]
  async fn unknown_route_is_404() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let req = Request::builder().uri("/nope").body(Body::empty()).unwrap();

    let resp = app(Arc::new(store)).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[test]
  fn address_joins_host_and_port() {
    let cfg = ServerConfig {
      host:          "0.0.0.0".into(),
      port:          8000,
      database_path: PathBuf::from("launchlog.db"),
    };
    assert_eq!(cfg.address(), "0.0.0.0:8000");
  }
}
