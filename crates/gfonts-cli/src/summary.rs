use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use gfonts_cli::AnnotationResult;
use gfonts_model::ColumnGroup;

pub fn print_summary(result: &AnnotationResult) {
    let table = &result.table;
    println!("Source: {}", result.source);
    println!("Output: {}", result.output_path.display());
    println!("Families: {}", table.record_count());

    let mut summary = Table::new();
    summary.set_header(vec![
        header_cell("Group"),
        header_cell("Columns"),
        header_cell("Flags set"),
    ]);
    apply_summary_table_style(&mut summary);
    align_column(&mut summary, 1, CellAlignment::Right);
    align_column(&mut summary, 2, CellAlignment::Right);

    let mut total_columns = 0usize;
    let mut total_flags = 0i64;
    for group in ColumnGroup::ALL {
        let columns = table.schema.columns(group);
        let flags: i64 = columns
            .iter()
            .filter_map(|name| table.column_total(name).ok())
            .sum();
        total_columns += columns.len();
        total_flags += flags;
        summary.add_row(vec![
            Cell::new(group.label()),
            Cell::new(columns.len()),
            Cell::new(flags),
        ]);
    }
    summary.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_columns).add_attribute(Attribute::Bold),
        Cell::new(total_flags).add_attribute(Attribute::Bold),
    ]);
    println!("{summary}");

    let unrenamed = &table.schema.unrenamed_variants;
    if !unrenamed.is_empty() {
        eprintln!("Variant codes without a style name (columns keep the raw code):");
        for code in unrenamed {
            eprintln!("- {code}");
        }
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
