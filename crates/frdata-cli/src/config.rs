//! Run settings from command-line flags and an optional TOML file.
//!
//! Precedence is command-line flag, then configuration file, then the
//! defaults of the dataset kind.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use frdata_ingest::{DEFAULT_RAW_DIR, DEFAULT_TIMEOUT, DataSource, LoadOptions};
use frdata_model::DatasetKind;
use frdata_transform::DEFAULT_CLEANED_DIR;

use crate::cli::RunArgs;

/// Contents of a `frdata.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub raw_dir: Option<PathBuf>,
    pub cleaned_dir: Option<PathBuf>,
    pub delimiter: Option<char>,
    pub encoding: Option<String>,
    pub cache_remote: Option<bool>,
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read configuration {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("in {}", path.display()))
    }
}

/// Fully resolved settings for one `run`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSettings {
    pub kind: DatasetKind,
    pub source: DataSource,
    pub load: LoadOptions,
    pub cleaned_dir: PathBuf,
    pub output_name: String,
    pub metrics_out: Option<PathBuf>,
    pub user_agent: Option<String>,
    pub timeout: Duration,
    pub top: usize,
}

impl RunSettings {
    /// Resolves `args`, reading `--config` when given.
    pub fn from_args(args: &RunArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(args, &file)
    }

    pub fn resolve(args: &RunArgs, file: &FileConfig) -> Result<Self> {
        let kind = DatasetKind::from(args.kind);
        let source = match &args.input {
            Some(input) => DataSource::parse(input).context("parse --input")?,
            None => DataSource::default_for(kind),
        };

        let raw_dir = args
            .raw_dir
            .clone()
            .or_else(|| file.raw_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RAW_DIR));
        let mut load = LoadOptions::for_kind(kind).with_raw_dir(raw_dir);
        if let Some(delimiter) = args.delimiter.or(file.delimiter) {
            load = load.with_delimiter(delimiter_byte(delimiter)?);
        }
        if let Some(encoding) = args.encoding.as_ref().or(file.encoding.as_ref()) {
            load = load.with_encoding(encoding.clone());
        }
        let cache_remote = !args.no_cache && file.cache_remote.unwrap_or(true);
        if !cache_remote {
            load = load.with_cache_path(None);
        }

        let timeout = args
            .timeout_secs
            .or(file.timeout_secs)
            .map_or(DEFAULT_TIMEOUT, Duration::from_secs);

        Ok(Self {
            kind,
            source,
            load,
            cleaned_dir: args
                .cleaned_dir
                .clone()
                .or_else(|| file.cleaned_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CLEANED_DIR)),
            output_name: args
                .output_name
                .clone()
                .unwrap_or_else(|| kind.cleaned_file_name().to_string()),
            metrics_out: args.metrics_out.clone(),
            user_agent: args.user_agent.clone().or_else(|| file.user_agent.clone()),
            timeout,
            top: args.top,
        })
    }
}

fn delimiter_byte(delimiter: char) -> Result<u8> {
    if !delimiter.is_ascii() || delimiter == '"' || delimiter == '\n' || delimiter == '\r' {
        bail!("unsupported delimiter {delimiter:?}: expected a single ASCII character");
    }
    Ok(delimiter as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiter_must_be_ascii() {
        assert_eq!(delimiter_byte(';').unwrap(), b';');
        assert_eq!(delimiter_byte('\t').unwrap(), b'\t');
        assert!(delimiter_byte('§').is_err());
        assert!(delimiter_byte('"').is_err());
    }
}
