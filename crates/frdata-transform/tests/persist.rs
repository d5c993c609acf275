//! Tests for writing cleaned tables and reading them back.

use std::fs;
use std::path::PathBuf;

use frdata_ingest::{DataError, DataSource, LoadOptions, load};
use frdata_model::{DatasetKind, RawTable};
use frdata_transform::{CLEANED_DELIMITER, clean, persist};
use tempfile::TempDir;

fn food_table() -> RawTable {
    let mut table = RawTable::new(
        ["Nom", "Type", "Commune", "Région", "Département", "OSM Point"]
            .iter()
            .map(|h| (*h).to_string())
            .collect(),
    );
    for row in [
        ["Le Zinc", "Bar", "Paris", "Île-de-France", "Paris", "48.85,2.35"],
        ["Da Marco", "Pizzeria", "Nice", "PACA", "Alpes-Maritimes", "43.7,7.26"],
        ["Sans Lieu", "Café", "Lyon", "ARA", "Rhône", ""],
    ] {
        table.push_row(row.iter().map(|c| (*c).to_string()).collect());
    }
    table
}

#[test]
fn persisted_table_loads_back_with_same_shape() {
    let dir = TempDir::new().expect("create temp dir");
    let cleaned_dir = dir.path().join("cleaned");
    let cleaned = clean(&food_table(), DatasetKind::FoodService).expect("clean");

    let path = persist(&cleaned, "restaurants_cleaned.csv", &cleaned_dir).expect("persist");
    assert_eq!(path, cleaned_dir.join("restaurants_cleaned.csv"));

    let options = LoadOptions::default()
        .with_raw_dir(&cleaned_dir)
        .with_delimiter(CLEANED_DELIMITER);
    let reloaded = load(
        &DataSource::Local(PathBuf::from("restaurants_cleaned.csv")),
        &options,
    )
    .expect("reload");

    assert_eq!(reloaded.row_count(), cleaned.record_count());
    assert_eq!(reloaded.headers, cleaned.column_names());
    assert_eq!(reloaded.value(0, "nom_complet"), Some("Le Zinc - Paris"));
    assert!(reloaded.value(1, "latitude").is_some());
}

#[test]
fn persist_overwrites_existing_file() {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join("out.csv"), "stale contents\n").expect("write stale file");
    let cleaned = clean(&food_table(), DatasetKind::FoodService).expect("clean");

    let path = persist(&cleaned, "out.csv", dir.path()).expect("persist");

    let written = fs::read_to_string(path).expect("read output");
    assert!(written.starts_with("Nom;Type;Commune;"));
    assert!(!written.contains("stale"));
}

#[test]
fn unwritable_destination_is_an_io_error() {
    let dir = TempDir::new().expect("create temp dir");
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").expect("write blocker file");
    let cleaned = clean(&food_table(), DatasetKind::FoodService).expect("clean");

    let result = persist(&cleaned, "out.csv", &blocker.join("nested"));

    assert!(matches!(result, Err(DataError::Io { .. })));
}
