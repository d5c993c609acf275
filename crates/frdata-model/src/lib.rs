//! Shared data model for the frdata pipeline.
//!
//! - **dataset**: dataset kinds and their column contracts
//! - **table**: the raw table produced by the loader
//! - **metrics**: typed aggregate views and the metrics map
//! - **error**: the error type every stage returns

pub mod dataset;
pub mod error;
pub mod metrics;
pub mod table;

pub use dataset::{DatasetKind, columns};
pub use error::{DataError, Result};
pub use metrics::{
    AgeByDepartment, AgeByYear, CommuneCount, Counted, DeathMetrics, DeathsByYearRegion,
    DepartmentTypeCount, DepartmentTypeNames, DepartmentTypes, FoodServiceMetrics, GeoPoint,
    MetricsMap, RegionCount, SexCount, TypeCount,
};
pub use table::RawTable;
