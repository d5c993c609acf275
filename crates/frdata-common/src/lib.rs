//! Shared utilities for the frdata crates.
//!
//! Polars cell conversions and the column read/write helpers the cleaner and
//! the metrics builder use to work on a `DataFrame` row by row.

pub mod frame;

pub use frame::{
    any_to_f64, any_to_i64, any_to_string, f64_column, filter_rows, format_numeric, has_column,
    i64_column, parse_f64, parse_i64, require_columns, set_categorical_column, set_f64_column,
    set_i64_column, set_string_column, string_column,
};
