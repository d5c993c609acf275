//! Aggregate views over cleaned datasets.
//!
//! [`aggregate`] computes the fixed set of views for the table's dataset
//! kind. The [`query`] functions answer drill-down questions against a
//! finished snapshot.

mod deaths;
mod food;
mod group;
pub mod query;

use std::time::Instant;

use tracing::{info, info_span};

use frdata_model::{DatasetKind, MetricsMap, Result};
use frdata_transform::CleanedTable;

pub use query::{
    department_breakdown, departments, names_for, search_url, top_by_count, types_in_department,
};

/// Builds every view for `cleaned`.
///
/// Pure: the same cleaned table always yields the same map.
///
/// # Errors
///
/// [`DataError::Schema`](frdata_model::DataError::Schema) when a grouping
/// column is missing from the table.
pub fn aggregate(cleaned: &CleanedTable) -> Result<MetricsMap> {
    let span = info_span!("aggregate", kind = %cleaned.kind);
    let _guard = span.enter();
    let start = Instant::now();

    let metrics = match cleaned.kind {
        DatasetKind::Deaths => MetricsMap::Deaths(deaths::death_metrics(&cleaned.data)?),
        DatasetKind::FoodService => {
            MetricsMap::FoodService(food::food_service_metrics(&cleaned.data)?)
        }
    };

    info!(
        rows = cleaned.record_count(),
        views = metrics.view_names().len(),
        duration_ms = start.elapsed().as_millis(),
        "aggregate complete"
    );
    Ok(metrics)
}
