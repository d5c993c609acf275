//! Writing the cleaned table to disk.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use polars::prelude::{CsvWriter, SerWriter};
use tracing::{info, info_span};

use frdata_model::{DataError, Result};

use crate::frame::CleanedTable;

/// Default directory for cleaned datasets.
pub const DEFAULT_CLEANED_DIR: &str = "data/cleaned";

/// Field separator of persisted files.
pub const CLEANED_DELIMITER: u8 = b';';

/// Writes `cleaned` to `cleaned_dir/destination_name` with a header row and
/// `;` separators, creating the directory and overwriting any existing file.
///
/// Returns the path written.
///
/// # Errors
///
/// [`DataError::Io`] when the directory or file cannot be created or written.
pub fn persist(
    cleaned: &CleanedTable,
    destination_name: &str,
    cleaned_dir: &Path,
) -> Result<PathBuf> {
    let path = cleaned_dir.join(destination_name);
    let span = info_span!("persist", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    fs::create_dir_all(cleaned_dir).map_err(|source| io_error(cleaned_dir, source))?;
    let file = File::create(&path).map_err(|source| io_error(&path, source))?;
    let mut writer = BufWriter::new(file);

    let mut data = cleaned.data.clone();
    CsvWriter::new(&mut writer)
        .include_header(true)
        .with_separator(CLEANED_DELIMITER)
        .finish(&mut data)
        .map_err(|e| io_error(&path, io::Error::other(e.to_string())))?;
    writer.flush().map_err(|source| io_error(&path, source))?;

    info!(
        rows = cleaned.record_count(),
        columns = data.width(),
        duration_ms = start.elapsed().as_millis(),
        "persist complete"
    );
    Ok(path)
}

fn io_error(path: &Path, source: io::Error) -> DataError {
    DataError::Io {
        path: path.to_path_buf(),
        source,
    }
}
