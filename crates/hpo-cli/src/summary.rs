use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hpo_cli::types::{ConvertResult, InspectResult};

pub fn print_convert_summary(result: &ConvertResult) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.add_row(vec![label_cell("Source"), Cell::new(&result.source.locator)]);
    table.add_row(vec![label_cell("SHA-256"), dim_cell(&result.source.sha256)]);
    table.add_row(vec![label_cell("CodeSystem"), Cell::new(&result.url)]);
    table.add_row(vec![label_cell("Version"), Cell::new(&result.version)]);
    table.add_row(vec![label_cell("Date"), Cell::new(&result.date)]);
    table.add_row(vec![label_cell("Count"), Cell::new(result.count)]);
    table.add_row(vec![
        label_cell("Concepts"),
        count_cell(result.concepts, result.concepts == result.count),
    ]);
    let output = match &result.output {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("dry run, not written"),
    };
    table.add_row(vec![label_cell("Output"), output]);
    table.add_row(vec![
        label_cell("Duration"),
        Cell::new(format!("{} ms", result.duration_ms)),
    ]);
    println!("{table}");
}

pub fn print_inspect_summary(result: &InspectResult) {
    let stats = &result.stats;
    println!("Source: {}", result.source.locator);
    println!(
        "Data version: {}",
        stats.data_version.as_deref().unwrap_or("-")
    );

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Terms"), Cell::new(stats.terms)]);
    table.add_row(vec![Cell::new("Obsolete"), Cell::new(stats.obsolete)]);
    table.add_row(vec![
        Cell::new("With definition"),
        Cell::new(stats.with_definition),
    ]);
    for (scope, count) in &stats.synonyms {
        table.add_row(vec![
            Cell::new(format!("{scope} synonyms")),
            Cell::new(count),
        ]);
    }
    table.add_row(vec![Cell::new("Xrefs"), Cell::new(stats.xrefs)]);
    table.add_row(vec![Cell::new("Roots"), Cell::new(stats.roots.join(", "))]);
    println!("{table}");

    if !stats.subsets.is_empty() {
        let mut subsets = Table::new();
        subsets.set_header(vec![header_cell("Subset"), header_cell("Terms")]);
        apply_table_style(&mut subsets);
        align_column(&mut subsets, 1, CellAlignment::Right);
        for (subset, count) in &stats.subsets {
            subsets.add_row(vec![Cell::new(subset), Cell::new(count)]);
        }
        println!("{subsets}");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn count_cell(value: usize, matches_header: bool) -> Cell {
    if matches_header {
        Cell::new(value)
    } else {
        Cell::new(value).fg(Color::Yellow).add_attribute(Attribute::Bold)
    }
}
