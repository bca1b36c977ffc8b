//! Obtaining the raw feed bytes.

use std::{fmt, path::PathBuf, time::Duration};

use reqwest::Client;

use crate::error::FetchError;

/// The GCAT launch log, derived TSV edition.
pub const DEFAULT_FEED_URL: &str =
  "https://planet4589.org/space/gcat/tsv/derived/launchlog.tsv";

pub const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Where a run reads its feed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
  Url(String),
  /// A previously downloaded copy on disk.
  File(PathBuf),
}

impl FeedSource {
  pub async fn load(&self) -> Result<Vec<u8>, FetchError> {
    match self {
      FeedSource::Url(url) => fetch_feed(url).await,
      FeedSource::File(path) => tokio::fs::read(path).await.map_err(|source| FetchError::Io {
        path: path.clone(),
        source,
      }),
    }
  }
}

impl fmt::Display for FeedSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      FeedSource::Url(url) => f.write_str(url),
      FeedSource::File(path) => write!(f, "{}", path.display()),
    }
  }
}

/// `GET url` and return the body. Any non-2xx status is an error.
pub async fn fetch_feed(url: &str) -> Result<Vec<u8>, FetchError> {
  let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;

  let resp = client.get(url).send().await?;
  if !resp.status().is_success() {
    return Err(FetchError::Status {
      url:    url.to_owned(),
      status: resp.status(),
    });
  }

  let body = resp.bytes().await?;
  tracing::debug!(bytes = body.len(), "feed downloaded");
  Ok(body.to_vec())
}
