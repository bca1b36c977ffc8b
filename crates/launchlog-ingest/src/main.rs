//! launchlog ingestion binary.
//!
//! Reads `launchlog.toml` (or the path given with `--config`), then
//! `LAUNCHLOG_*` environment variables, then flags. Loads the feed into the
//! SQLite database and exits non-zero if the run could not complete.
//!
//! ```text
//! ingest --database-path ~/launchlog.db
//! ingest --file saved/launchlog.tsv
//! ```

use std::{path::PathBuf, process::ExitCode};

use anyhow::Context as _;
use clap::Parser;
use launchlog_core::paths::expand_tilde;
use launchlog_ingest::{DEFAULT_FEED_URL, IngestConfig};
use launchlog_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Load the GCAT launch log into SQLite")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "launchlog.toml")]
  config: PathBuf,

  /// SQLite database to write to.
  #[arg(long)]
  database_path: Option<PathBuf>,

  /// Feed URL to fetch.
  #[arg(long)]
  feed_url: Option<String>,

  /// Ingest a local TSV file instead of fetching.
  #[arg(long)]
  file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  match run(Cli::parse()).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!("ingestion failed: {e:#}");
      ExitCode::FAILURE
    }
  }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
  // Load configuration.
  let settings = config::Config::builder()
    .set_default("database_path", "launchlog.db")?
    .set_default("feed_url", DEFAULT_FEED_URL)?
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("LAUNCHLOG"))
    .set_override_option("database_path", cli.database_path.map(path_string))?
    .set_override_option("feed_url", cli.feed_url)?
    .set_override_option("feed_file", cli.file.map(path_string))?
    .build()
    .context("failed to read config file")?;

  let cfg: IngestConfig = settings
    .try_deserialize()
    .context("failed to deserialise IngestConfig")?;

  // Expand `~` in database path.
  let database_path = expand_tilde(&cfg.database_path);

  let store = SqliteStore::open(&database_path)
    .await
    .with_context(|| format!("failed to open store at {database_path:?}"))?;

  launchlog_ingest::run(&store, &cfg.source()).await?;
  Ok(())
}

fn path_string(path: PathBuf) -> String { path.to_string_lossy().into_owned() }
