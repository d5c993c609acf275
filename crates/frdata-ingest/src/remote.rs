//! HTTP download of remote datasets.

use std::path::Path;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use tracing::{debug, info};

use frdata_model::{DataError, Result};

/// HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Fetches the raw bytes behind a URL.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// Blocking `reqwest` fetcher.
pub struct HttpFetcher {
    client: Client,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::unknown(format!("failed to build HTTP client: {e}")))?;
        let user_agent = user_agent
            .unwrap_or_else(|| format!("frdata/{}", env!("CARGO_PKG_VERSION")));
        Ok(Self { client, user_agent })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!(url, "fetching remote dataset");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    DataError::NotFound {
                        source_name: url.to_string(),
                    }
                } else {
                    DataError::unknown(format!("request to {url} failed: {e}"))
                }
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(DataError::NotFound {
                source_name: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(DataError::unknown(format!(
                "request to {url} returned HTTP {}",
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .map_err(|e| DataError::unknown(format!("failed to read body of {url}: {e}")))?;
        info!(url, bytes = bytes.len(), "remote dataset fetched");
        Ok(bytes.to_vec())
    }
}

/// Writes fetched content verbatim to `path`, creating parent directories.
///
/// The cache is write-only: loads always go back to the remote source.
pub fn write_cache(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| DataError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, bytes).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "cached remote dataset");
    Ok(())
}
