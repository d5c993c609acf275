use anyhow::Result;
use comfy_table::Table;

use frdata_cli::cli::{RunArgs, ViewsArgs};
use frdata_cli::config::RunSettings;
use frdata_cli::pipeline::run_pipeline;
use frdata_cli::types::RunResult;
use frdata_model::{DatasetKind, DeathMetrics, FoodServiceMetrics};

use crate::summary::apply_table_style;

pub fn run(args: &RunArgs) -> Result<RunResult> {
    let settings = RunSettings::from_args(args)?;
    run_pipeline(&settings)
}

pub fn run_views(args: &ViewsArgs) {
    let kind = DatasetKind::from(args.kind);
    let names: &[&str] = match kind {
        DatasetKind::Deaths => &DeathMetrics::VIEW_NAMES,
        DatasetKind::FoodService => &FoodServiceMetrics::VIEW_NAMES,
    };
    let mut table = Table::new();
    table.set_header(vec!["View"]);
    apply_table_style(&mut table);
    for name in names {
        table.add_row(vec![*name]);
    }
    println!("{table}");
}
