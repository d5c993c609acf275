//! Tests for loading local and remote sources.

use std::cell::Cell;
use std::fs;
use std::path::PathBuf;

use frdata_ingest::{DataError, DataSource, Fetch, LoadOptions, Result, load, load_with};
use tempfile::TempDir;

struct StubFetcher {
    body: &'static str,
    calls: Cell<usize>,
}

impl Fetch for StubFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.body.as_bytes().to_vec())
    }
}

struct UnreachableFetcher;

impl Fetch for UnreachableFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        Err(DataError::NotFound {
            source_name: url.to_string(),
        })
    }
}

fn raw_dir_with(name: &str, contents: &str) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    fs::write(dir.path().join(name), contents).expect("write file");
    dir
}

#[test]
fn loads_local_file_under_raw_dir() {
    let dir = raw_dir_with(
        "deces.csv",
        "Nom,Date Naissance,Date Décès\nMARTIN,1940-01-01,2020-03-01\nDUPONT,1930-05-02,2020-04-01\n",
    );
    let options = LoadOptions::default().with_raw_dir(dir.path());
    let source = DataSource::Local(PathBuf::from("deces.csv"));

    let table = load(&source, &options).expect("load");

    assert_eq!(table.headers, vec!["Nom", "Date Naissance", "Date Décès"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.value(1, "Nom"), Some("DUPONT"));
}

#[test]
fn headers_are_kept_verbatim() {
    let dir = raw_dir_with("raw.csv", " Date   Décès ;Sexe\n2020-01-01;F\n");
    let options = LoadOptions::default()
        .with_raw_dir(dir.path())
        .with_delimiter(b';');

    let table = load(&DataSource::Local(PathBuf::from("raw.csv")), &options).expect("load");

    assert_eq!(table.headers, vec![" Date   Décès ", "Sexe"]);
}

#[test]
fn malformed_rows_do_not_abort_the_load() {
    let dir = raw_dir_with("ragged.csv", "A;B\n1;2\n3;4;5\n6;7\n");
    let options = LoadOptions::default()
        .with_raw_dir(dir.path())
        .with_delimiter(b';');

    let table = load(&DataSource::Local(PathBuf::from("ragged.csv")), &options).expect("load");

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.skipped_rows, 1);
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().expect("create temp dir");
    let options = LoadOptions::default().with_raw_dir(dir.path());

    let result = load(&DataSource::Local(PathBuf::from("absent.csv")), &options);

    assert!(matches!(result, Err(DataError::NotFound { .. })));
}

#[test]
fn remote_fetch_writes_through_to_cache() {
    let dir = TempDir::new().expect("create temp dir");
    let cache = dir.path().join("cache").join("restaurants.csv");
    let body = "Nom;Type;OSM Point\nLe Zinc;Bar;48.85,2.35\n";
    let fetcher = StubFetcher {
        body,
        calls: Cell::new(0),
    };
    let options = LoadOptions::default()
        .with_delimiter(b';')
        .with_cache_path(Some(cache.clone()));
    let source = DataSource::Remote("https://example.org/restaurants.csv".to_string());

    let table = load_with(&source, &options, &fetcher).expect("load remote");
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.value(0, "OSM Point"), Some("48.85,2.35"));
    assert_eq!(fs::read_to_string(&cache).expect("read cache"), body);

    // The cache is never read back: a second load fetches again.
    load_with(&source, &options, &fetcher).expect("reload remote");
    assert_eq!(fetcher.calls.get(), 2);
}

#[test]
fn unreachable_remote_leaves_no_cache() {
    let dir = TempDir::new().expect("create temp dir");
    let cache = dir.path().join("restaurants.csv");
    let options = LoadOptions::default().with_cache_path(Some(cache.clone()));
    let source = DataSource::Remote("https://unreachable.invalid/data.csv".to_string());

    let result = load_with(&source, &options, &UnreachableFetcher);

    assert!(matches!(result, Err(DataError::NotFound { .. })));
    assert!(!cache.exists());
}
