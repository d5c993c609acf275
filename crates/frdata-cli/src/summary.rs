use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use frdata_cli::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Dataset: {}", result.kind.label());
    println!("Source: {}", result.source);
    println!("Cleaned: {}", result.cleaned_path.display());
    if let Some(path) = &result.metrics_path {
        println!("Metrics: {}", path.display());
    }
    println!("{}", stage_table(result));
    println!("{}", view_table(result));
    if !result.top_communes.is_empty() {
        println!("{}", commune_table(result));
    }
}

fn stage_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows"), header_cell("Removed")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("load"),
        Cell::new(result.loaded_rows),
        removed_cell(result.skipped_rows),
    ]);
    table.add_row(vec![
        Cell::new("clean"),
        Cell::new(result.cleaned_rows),
        removed_cell(result.dropped_rows),
    ]);
    table
}

fn view_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("View"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for name in result.metrics.view_names() {
        let len = result.metrics.view_len(name).unwrap_or_default();
        table.add_row(vec![Cell::new(name), Cell::new(len)]);
    }
    table
}

fn commune_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Commune"), header_cell("Establishments")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for commune in &result.top_communes {
        table.add_row(vec![Cell::new(&commune.commune), Cell::new(commune.count)]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn removed_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(count).fg(Color::Yellow)
    }
}
