//! Cell- and header-level normalization rules used by the cleaner.

mod columns;
mod coords;
mod datetime;

pub use columns::{normalize_column_name, normalize_column_names};
pub use coords::parse_point;
pub use datetime::{age_in_years, format_iso, parse_date, year_of};
