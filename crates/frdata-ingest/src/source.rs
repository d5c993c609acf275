//! Where a dataset comes from and how to read it.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use frdata_model::{DataError, DatasetKind, Result};

/// Default raw-data directory, relative to the working directory.
pub const DEFAULT_RAW_DIR: &str = "data/raw";

/// Public export of the OpenStreetMap food-service extract (`;`-delimited).
pub const FOOD_SERVICE_URL: &str = "https://public.opendatasoft.com/api/explore/v2.1/catalog/datasets/osm-france-food-service/exports/csv?delimiter=%3B";

/// A local file or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// File name (resolved under the raw-data directory) or absolute path.
    Local(PathBuf),
    /// `http://` or `https://` URL.
    Remote(String),
}

impl DataSource {
    /// Classifies a command-line source: URLs become `Remote`, anything else `Local`.
    pub fn parse(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            reqwest::Url::parse(trimmed)
                .map_err(|e| DataError::unknown(format!("invalid URL '{trimmed}': {e}")))?;
            Ok(Self::Remote(trimmed.to_string()))
        } else if trimmed.is_empty() {
            Err(DataError::unknown("empty data source"))
        } else {
            Ok(Self::Local(PathBuf::from(trimmed)))
        }
    }

    /// Conventional source for a dataset kind.
    pub fn default_for(kind: DatasetKind) -> Self {
        match kind {
            DatasetKind::Deaths => Self::Local(PathBuf::from(kind.raw_file_name())),
            DatasetKind::FoodService => Self::Remote(FOOD_SERVICE_URL.to_string()),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Resolves a local source against `raw_dir`; absolute paths are kept.
    pub fn resolve_local(path: &Path, raw_dir: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            raw_dir.join(path)
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => f.write_str(url),
        }
    }
}

/// How to read the delimited content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field separator (`,` by default, `;` for most French open-data exports).
    pub delimiter: u8,
    /// WHATWG encoding label (`utf-8`, `latin1`, `windows-1252`, ...).
    pub encoding: String,
    /// Directory local file names are resolved against.
    pub raw_dir: PathBuf,
    /// When set, remote content is written here verbatim after a successful fetch.
    pub cache_path: Option<PathBuf>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            encoding: "utf-8".to_string(),
            raw_dir: PathBuf::from(DEFAULT_RAW_DIR),
            cache_path: None,
        }
    }
}

impl LoadOptions {
    /// Defaults for a dataset kind: food-service exports are `;`-delimited and
    /// cached next to the other raw files.
    pub fn for_kind(kind: DatasetKind) -> Self {
        let defaults = Self::default();
        match kind {
            DatasetKind::Deaths => defaults,
            DatasetKind::FoodService => {
                let cache_path = Some(defaults.raw_dir.join(kind.raw_file_name()));
                Self {
                    delimiter: b';',
                    cache_path,
                    ..defaults
                }
            }
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Changes the raw-data directory, moving a cache path that lived in the old one.
    #[must_use]
    pub fn with_raw_dir(mut self, raw_dir: impl Into<PathBuf>) -> Self {
        let raw_dir = raw_dir.into();
        if let Some(cache) = &self.cache_path
            && let Ok(relative) = cache.strip_prefix(&self.raw_dir)
        {
            self.cache_path = Some(raw_dir.join(relative));
        }
        self.raw_dir = raw_dir;
        self
    }

    #[must_use]
    pub fn with_cache_path(mut self, cache_path: Option<PathBuf>) -> Self {
        self.cache_path = cache_path;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_urls() {
        assert_eq!(
            DataSource::parse("https://example.org/data.csv").unwrap(),
            DataSource::Remote("https://example.org/data.csv".to_string())
        );
        assert_eq!(
            DataSource::parse("deces.csv").unwrap(),
            DataSource::Local(PathBuf::from("deces.csv"))
        );
        assert!(DataSource::parse("   ").is_err());
        assert!(DataSource::parse("http://").is_err());
    }

    #[test]
    fn local_names_resolve_under_raw_dir() {
        let raw_dir = Path::new("data/raw");
        assert_eq!(
            DataSource::resolve_local(Path::new("deces.csv"), raw_dir),
            PathBuf::from("data/raw/deces.csv")
        );
        let absolute = std::env::temp_dir().join("deces.csv");
        assert_eq!(DataSource::resolve_local(&absolute, raw_dir), absolute);
    }

    #[test]
    fn food_service_defaults_cache_under_raw_dir() {
        let options = LoadOptions::for_kind(DatasetKind::FoodService).with_raw_dir("/srv/raw");
        assert_eq!(options.delimiter, b';');
        assert_eq!(
            options.cache_path,
            Some(PathBuf::from("/srv/raw/restaurants_france_raw.csv"))
        );
        assert!(LoadOptions::for_kind(DatasetKind::Deaths).cache_path.is_none());
    }
}
