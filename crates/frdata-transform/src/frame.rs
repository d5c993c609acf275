//! The cleaned table handed from the cleaner to the metrics builder.

use polars::prelude::DataFrame;

use frdata_model::DatasetKind;

/// A cleaned dataset with the kind it was cleaned for.
///
/// Every column listed by [`DatasetKind::derived_columns`] is present, and
/// every field listed by [`DatasetKind::required_fields`] is non-null on every
/// row.
#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub kind: DatasetKind,
    pub data: DataFrame,
    /// Rows in the raw table before filtering.
    pub source_rows: usize,
}

impl CleanedTable {
    pub fn new(kind: DatasetKind, data: DataFrame, source_rows: usize) -> Self {
        Self {
            kind,
            data,
            source_rows,
        }
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// Rows removed because a required field was missing.
    pub fn dropped_rows(&self) -> usize {
        self.source_rows.saturating_sub(self.data.height())
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }
}
