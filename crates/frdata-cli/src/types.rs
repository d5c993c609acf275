use std::path::PathBuf;

use frdata_model::{CommuneCount, DatasetKind, MetricsMap};

/// Outcome of one `run`.
#[derive(Debug)]
pub struct RunResult {
    pub kind: DatasetKind,
    pub source: String,
    pub loaded_rows: usize,
    pub skipped_rows: usize,
    pub cleaned_rows: usize,
    pub dropped_rows: usize,
    pub cleaned_path: PathBuf,
    pub metrics_path: Option<PathBuf>,
    pub metrics: MetricsMap,
    /// Largest communes by establishment count (food service only).
    pub top_communes: Vec<CommuneCount>,
}
