//! Stage orchestration for `frdata run`.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, trace};

use frdata_common::{has_column, string_column};
use frdata_ingest::{HttpFetcher, RawTable, load, load_with};
use frdata_metrics::{aggregate, top_by_count};
use frdata_model::{MetricsMap, columns};
use frdata_transform::{CleanedTable, clean, persist};

use crate::config::RunSettings;
use crate::logging::redact_value;
use crate::types::RunResult;

/// Rows echoed at trace level after cleaning.
const PREVIEW_ROWS: usize = 5;

/// Load, clean, persist and aggregate, stopping at the first failing stage.
pub fn run_pipeline(settings: &RunSettings) -> Result<RunResult> {
    let run_span = info_span!("run", kind = %settings.kind);
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let raw = load_stage(settings)?;
    let cleaned = clean(&raw, settings.kind).context("clean dataset")?;
    preview(&cleaned);

    let cleaned_path = persist(&cleaned, &settings.output_name, &settings.cleaned_dir)
        .with_context(|| format!("persist {}", settings.output_name))?;

    let metrics = aggregate(&cleaned).context("aggregate metrics")?;
    let metrics_path = match &settings.metrics_out {
        Some(path) => {
            write_metrics(&metrics, path)?;
            Some(path.clone())
        }
        None => None,
    };
    let top_communes = metrics
        .as_food_service()
        .map(|food| top_by_count(&food.restaurants_par_commune, settings.top))
        .unwrap_or_default();

    info!(
        loaded_rows = raw.row_count(),
        cleaned_rows = cleaned.record_count(),
        duration_ms = start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunResult {
        kind: settings.kind,
        source: settings.source.to_string(),
        loaded_rows: raw.row_count(),
        skipped_rows: raw.skipped_rows,
        cleaned_rows: cleaned.record_count(),
        dropped_rows: cleaned.dropped_rows(),
        cleaned_path,
        metrics_path,
        metrics,
        top_communes,
    })
}

fn load_stage(settings: &RunSettings) -> Result<RawTable> {
    let table = if settings.source.is_remote() {
        let fetcher = HttpFetcher::new(settings.timeout, settings.user_agent.clone())
            .context("create HTTP client")?;
        load_with(&settings.source, &settings.load, &fetcher)
    } else {
        load(&settings.source, &settings.load)
    };
    table.with_context(|| format!("load {}", settings.source))
}

fn preview(cleaned: &CleanedTable) {
    if !has_column(&cleaned.data, columns::NAME) {
        return;
    }
    let Ok(names) = string_column(&cleaned.data, columns::NAME) else {
        return;
    };
    for (row, name) in names.iter().take(PREVIEW_ROWS).enumerate() {
        trace!(row, name = redact_value(name.as_deref().unwrap_or_default()), "cleaned record");
    }
}

/// Writes the metrics map as pretty JSON, creating parent directories.
pub fn write_metrics(metrics: &MetricsMap, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let value = metrics.to_json_value()?;
    let json = serde_json::to_string_pretty(&value).context("serialize metrics")?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), views = metrics.view_names().len(), "metrics written");
    Ok(())
}
