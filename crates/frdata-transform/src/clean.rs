//! Raw table to cleaned table.

use std::collections::BTreeSet;
use std::time::Instant;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::{debug, info, info_span};

use frdata_common::{
    f64_column, filter_rows, i64_column, set_categorical_column, set_f64_column, set_i64_column,
    set_string_column, string_column,
};
use frdata_model::{DataError, DatasetKind, RawTable, Result, columns};

use crate::frame::CleanedTable;
use crate::normalization::{
    age_in_years, format_iso, normalize_column_names, parse_date, parse_point, year_of,
};

/// Cleans `raw` for `kind`.
///
/// Normalizes column names, checks the kind's required source columns,
/// derives the kind's columns and drops rows missing a required field.
/// The input is not modified.
///
/// # Errors
///
/// [`DataError::Schema`] when a required source column is absent (all of them
/// are named) or when two headers normalize to the same name.
pub fn clean(raw: &RawTable, kind: DatasetKind) -> Result<CleanedTable> {
    let span = info_span!("clean", kind = %kind);
    let _guard = span.enter();
    let start = Instant::now();

    let headers = normalize_column_names(&raw.headers);
    check_duplicates(&headers)?;
    check_required(&headers, kind)?;

    let mut data = build_frame(&headers, raw)?;
    match kind {
        DatasetKind::Deaths => derive_death_columns(&mut data, &headers)?,
        DatasetKind::FoodService => derive_food_service_columns(&mut data)?,
    }

    let keep = rows_with_required_fields(&data, kind)?;
    filter_rows(&mut data, &keep)?;

    let cleaned = CleanedTable::new(kind, data, raw.row_count());
    info!(
        input_rows = cleaned.source_rows,
        output_rows = cleaned.record_count(),
        dropped_rows = cleaned.dropped_rows(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(cleaned)
}

fn check_duplicates(headers: &[String]) -> Result<()> {
    let mut seen = BTreeSet::new();
    let mut duplicates = Vec::new();
    for header in headers.iter().filter(|h| !h.is_empty()) {
        if !seen.insert(header.as_str()) && !duplicates.contains(header) {
            duplicates.push(header.clone());
        }
    }
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(DataError::Schema {
            columns: duplicates,
        })
    }
}

fn check_required(headers: &[String], kind: DatasetKind) -> Result<()> {
    let mut missing = Vec::new();
    if kind == DatasetKind::Deaths && death_date_source(headers).is_none() {
        missing.push(columns::DEATH_DATE.to_string());
    }
    for required in kind.required_source_columns() {
        if !headers.iter().any(|h| h == required) {
            missing.push((*required).to_string());
        }
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DataError::Schema { columns: missing })
    }
}

/// The exact `Date Décès` header when present, otherwise the first header
/// matching the death-date pattern.
fn death_date_source(headers: &[String]) -> Option<&str> {
    headers
        .iter()
        .find(|h| h.as_str() == columns::DEATH_DATE)
        .or_else(|| headers.iter().find(|h| DatasetKind::is_death_date_column(h)))
        .map(String::as_str)
}

/// String frame with one column per named header. Blank cells become null;
/// columns with a blank header are left out.
fn build_frame(headers: &[String], raw: &RawTable) -> Result<DataFrame> {
    let mut frame_columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (idx, name) in headers.iter().enumerate() {
        if name.is_empty() {
            debug!(position = idx, "ignoring column without a name");
            continue;
        }
        let values: Vec<Option<&str>> = raw
            .rows
            .iter()
            .map(|row| row.get(idx).map(String::as_str).filter(|v| !v.trim().is_empty()))
            .collect();
        frame_columns.push(Series::new(name.as_str().into(), values).into_column());
    }
    Ok(DataFrame::new(frame_columns)?)
}

fn derive_death_columns(data: &mut DataFrame, headers: &[String]) -> Result<()> {
    let death_source = death_date_source(headers)
        .ok_or_else(|| DataError::missing_column(columns::DEATH_DATE))?;
    debug!(column = death_source, "death date source column");

    let death_dates: Vec<_> = string_column(data, death_source)?
        .iter()
        .map(|v| v.as_deref().and_then(parse_date))
        .collect();
    let birth_dates: Vec<_> = string_column(data, columns::BIRTH_DATE)?
        .iter()
        .map(|v| v.as_deref().and_then(parse_date))
        .collect();

    let ages = death_dates
        .iter()
        .zip(&birth_dates)
        .map(|(death, birth)| match (death, birth) {
            (Some(death), Some(birth)) => Some(age_in_years(*birth, *death)),
            _ => None,
        })
        .collect();
    let years = death_dates.iter().map(|d| d.map(year_of)).collect();

    set_string_column(
        data,
        columns::DEATH_DATE,
        death_dates.iter().map(|d| d.map(format_iso)).collect(),
    )?;
    set_string_column(
        data,
        columns::BIRTH_DATE,
        birth_dates.iter().map(|d| d.map(format_iso)).collect(),
    )?;
    set_i64_column(data, columns::AGE, ages)?;
    set_i64_column(data, columns::DEATH_YEAR, years)?;
    Ok(())
}

fn derive_food_service_columns(data: &mut DataFrame) -> Result<()> {
    let points: Vec<_> = string_column(data, columns::OSM_POINT)?
        .iter()
        .map(|v| v.as_deref().and_then(parse_point))
        .collect();
    let names = string_column(data, columns::NAME)?;
    let communes = string_column(data, columns::COMMUNE)?;

    let full_names = names
        .iter()
        .zip(&communes)
        .map(|(name, commune)| {
            Some(format!(
                "{} - {}",
                name.as_deref().unwrap_or_default(),
                commune.as_deref().unwrap_or_default()
            ))
        })
        .collect();

    let latitudes = points.iter().map(|p| p.map(|(lat, _)| lat)).collect();
    let longitudes = points.iter().map(|p| p.map(|(_, lon)| lon)).collect();
    set_f64_column(data, columns::LATITUDE, latitudes)?;
    set_f64_column(data, columns::LONGITUDE, longitudes)?;
    set_string_column(data, columns::FULL_NAME, full_names)?;

    for name in [columns::REGION, columns::DEPARTMENT] {
        let trimmed = string_column(data, name)?;
        set_categorical_column(data, name, trimmed)?;
    }
    Ok(())
}

/// Row mask: `true` where every required field of `kind` is present.
fn rows_with_required_fields(data: &DataFrame, kind: DatasetKind) -> Result<Vec<bool>> {
    let mut keep = vec![true; data.height()];
    for field in kind.required_fields() {
        let present: Vec<bool> = match *field {
            columns::AGE | columns::DEATH_YEAR => {
                i64_column(data, field)?.iter().map(Option::is_some).collect()
            }
            columns::LATITUDE | columns::LONGITUDE => {
                f64_column(data, field)?.iter().map(Option::is_some).collect()
            }
            _ => string_column(data, field)?.iter().map(Option::is_some).collect(),
        };
        let mut dropped = 0usize;
        for (slot, ok) in keep.iter_mut().zip(present) {
            if *slot && !ok {
                *slot = false;
                dropped += 1;
            }
        }
        if dropped > 0 {
            debug!(field = *field, dropped, "rows missing required field");
        }
    }
    Ok(keep)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn duplicate_normalized_names_are_rejected() {
        let result = check_duplicates(&headers(&["Nom", "Commune", "Nom"]));
        match result {
            Err(DataError::Schema { columns }) => assert_eq!(columns, vec!["Nom"]),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(check_duplicates(&headers(&["", "", "Nom"])).is_ok());
    }

    #[test]
    fn death_date_column_is_found_by_pattern() {
        let names = headers(&["Date de Décès", "Date Naissance"]);
        assert_eq!(death_date_source(&names), Some("Date de Décès"));

        let exact = headers(&["Date de Décès", "Date Décès"]);
        assert_eq!(death_date_source(&exact), Some("Date Décès"));

        assert_eq!(death_date_source(&headers(&["Date Naissance"])), None);
    }

    #[test]
    fn missing_columns_are_all_named() {
        match check_required(&headers(&["Date Naissance"]), DatasetKind::Deaths) {
            Err(DataError::Schema { columns }) => {
                assert_eq!(columns, vec!["Date Décès", "Nom Actuel Région Décès"]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
