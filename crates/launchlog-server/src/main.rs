//! launchlog server binary.
//!
//! Reads `launchlog.toml` (or the path specified with `--config`), then
//! `LAUNCHLOG_*` environment variables, then flags. Opens the SQLite store
//! written by `ingest` and serves the JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use launchlog_core::paths::expand_tilde;
use launchlog_server::ServerConfig;
use launchlog_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "launchlog query API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "launchlog.toml")]
  config: PathBuf,

  /// Address to bind.
  #[arg(long)]
  host: Option<String>,

  #[arg(long)]
  port: Option<u16>,

  /// SQLite database to serve.
  #[arg(long)]
  database_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .set_default("host", "127.0.0.1")?
    .set_default("port", 8000)?
    .set_default("database_path", "launchlog.db")?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("LAUNCHLOG"))
    .set_override_option("host", cli.host)?
    .set_override_option("port", cli.port.map(i64::from))?
    .set_override_option(
      "database_path",
      cli.database_path.map(|p| p.to_string_lossy().into_owned()),
    )?
    .build()
    .context("failed to read config file")?;

  let server_cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Expand `~` in database path.
  let database_path = expand_tilde(&server_cfg.database_path);

  // Open SQLite store.
  let store = SqliteStore::open(&database_path)
    .await
    .with_context(|| format!("failed to open store at {database_path:?}"))?;

  let app = launchlog_server::app(Arc::new(store));
  let address = server_cfg.address();

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
