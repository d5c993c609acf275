//! Cleaning and persistence of loaded datasets.
//!
//! [`clean`] turns a [`RawTable`](frdata_model::RawTable) into a
//! [`CleanedTable`] for one dataset kind; [`persist`] writes it as a
//! `;`-delimited file.

mod clean;
mod frame;
pub mod normalization;
mod persist;

pub use clean::clean;
pub use frame::CleanedTable;
pub use persist::{CLEANED_DELIMITER, DEFAULT_CLEANED_DIR, persist};
