//! Dataset loading for the frdata pipeline.
//!
//! Reads a delimited dataset from a file under the raw-data directory or from
//! a URL into a [`RawTable`], with the source's column names untouched.
//!
//! # Example
//!
//! ```ignore
//! use frdata_ingest::{DataSource, LoadOptions, load};
//! use frdata_model::DatasetKind;
//!
//! let kind = DatasetKind::Deaths;
//! let table = load(&DataSource::default_for(kind), &LoadOptions::for_kind(kind))?;
//! ```

mod reader;
mod remote;
mod source;

use std::time::Instant;

use tracing::{info, info_span};

pub use frdata_model::{DataError, RawTable, Result};
pub use reader::{parse_bytes, read_file};
pub use remote::{DEFAULT_TIMEOUT, Fetch, HttpFetcher, write_cache};
pub use source::{DEFAULT_RAW_DIR, DataSource, FOOD_SERVICE_URL, LoadOptions};

/// Loads `source` with a default HTTP client for remote sources.
pub fn load(source: &DataSource, options: &LoadOptions) -> Result<RawTable> {
    match source {
        DataSource::Local(_) => load_with(source, options, &NoFetch),
        DataSource::Remote(_) => {
            let fetcher = HttpFetcher::new(DEFAULT_TIMEOUT, None)?;
            load_with(source, options, &fetcher)
        }
    }
}

/// Loads `source`, using `fetcher` for remote sources.
///
/// After a successful remote fetch the bytes are written to
/// `options.cache_path` (when set) before being parsed.
pub fn load_with(
    source: &DataSource,
    options: &LoadOptions,
    fetcher: &dyn Fetch,
) -> Result<RawTable> {
    let span = info_span!("load", source = %source);
    let _guard = span.enter();
    let start = Instant::now();

    let table = match source {
        DataSource::Local(path) => {
            let path = DataSource::resolve_local(path, &options.raw_dir);
            read_file(&path, options.delimiter, &options.encoding)?
        }
        DataSource::Remote(url) => {
            let bytes = fetcher.fetch(url)?;
            if let Some(cache_path) = &options.cache_path {
                write_cache(cache_path, &bytes)?;
            }
            parse_bytes(&bytes, options.delimiter, &options.encoding, url)?
        }
    };

    info!(
        columns = table.headers.len(),
        rows = table.row_count(),
        skipped_rows = table.skipped_rows,
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(table)
}

/// Stand-in fetcher for local-only loads.
struct NoFetch;

impl Fetch for NoFetch {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        Err(DataError::unknown(format!(
            "no HTTP client configured for {url}"
        )))
    }
}
