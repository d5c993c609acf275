//! End-to-end runs over local files.

use std::fs;
use std::path::Path;

use clap::Parser;
use frdata_cli::cli::{Cli, Command};
use frdata_cli::config::{FileConfig, RunSettings};
use frdata_cli::pipeline::run_pipeline;
use tempfile::TempDir;

const RESTAURANTS: &str = "\
Nom;Type;Commune;Région;Département;OSM Point
Napoli;Pizzeria;Brest;Bretagne;Finistère;48.39,-4.48
Le Temps;Café;Brest;Bretagne;Finistère;48.39,-4.49
Roma;Pizzeria;Quimper;Bretagne;Finistère;47.99,-4.10
Nulle Part;Bar;Rennes;Bretagne;Ille-et-Vilaine;
";

fn settings_for(dir: &Path, extra: &[&str]) -> RunSettings {
    let raw_dir = dir.join("raw");
    let cleaned_dir = dir.join("cleaned");
    let mut argv = vec![
        "frdata".to_string(),
        "run".to_string(),
        "--kind".to_string(),
        "food-service".to_string(),
        "--input".to_string(),
        "restaurants.csv".to_string(),
        "--raw-dir".to_string(),
        raw_dir.display().to_string(),
        "--cleaned-dir".to_string(),
        cleaned_dir.display().to_string(),
    ];
    argv.extend(extra.iter().map(|a| (*a).to_string()));
    let cli = Cli::try_parse_from(argv).expect("parse arguments");
    let Command::Run(args) = cli.command else {
        panic!("expected the run command");
    };
    RunSettings::resolve(&args, &FileConfig::default()).expect("resolve settings")
}

#[test]
fn food_service_run_writes_cleaned_file_and_metrics() {
    let dir = TempDir::new().expect("create temp dir");
    fs::create_dir_all(dir.path().join("raw")).expect("create raw dir");
    fs::write(dir.path().join("raw").join("restaurants.csv"), RESTAURANTS).expect("write raw");
    let metrics_out = dir.path().join("out").join("metrics.json");
    let metrics_arg = metrics_out.display().to_string();

    let result = run_pipeline(&settings_for(
        dir.path(),
        &["--metrics-out", &metrics_arg, "--top", "1"],
    ))
    .expect("run pipeline");

    assert_eq!(result.loaded_rows, 4);
    assert_eq!(result.cleaned_rows, 3);
    assert_eq!(result.dropped_rows, 1);
    assert!(result.cleaned_path.ends_with("restaurants_cleaned.csv"));
    assert!(result.cleaned_path.exists());
    assert_eq!(result.top_communes.len(), 1);
    assert_eq!(result.top_communes[0].commune, "Brest");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&metrics_out).expect("read metrics"))
            .expect("parse metrics");
    insta::assert_json_snapshot!(json["restaurants_par_type"], @r#"
    [
      {
        "Count": 2,
        "Type": "Pizzeria"
      },
      {
        "Count": 1,
        "Type": "Café"
      }
    ]
    "#);
}

#[test]
fn missing_input_fails_with_context() {
    let dir = TempDir::new().expect("create temp dir");

    let error = run_pipeline(&settings_for(dir.path(), &[])).expect_err("run should fail");

    let message = format!("{error:#}");
    assert!(message.contains("load"), "{message}");
    assert!(message.contains("source not found"), "{message}");
    assert!(!dir.path().join("cleaned").exists());
}
