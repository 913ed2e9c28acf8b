use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sheetwise_model::WorkbookResult;

pub fn print_summary(result: &WorkbookResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Records"),
        header_cell("Errors"),
    ]);
    apply_table_style(&mut table);
    for sheet in &result.sheets {
        table.add_row(vec![
            Cell::new(&sheet.name),
            Cell::new(sheet.data.len()).set_alignment(CellAlignment::Right),
            count_cell(sheet.errors.len()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(result.record_count())
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
        count_cell(result.error_count()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_error_table(result);
}

fn print_error_table(result: &WorkbookResult) {
    if !result.has_errors {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Row"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    for sheet in &result.sheets {
        for error in &sheet.errors {
            table.add_row(vec![
                Cell::new(&error.sheet),
                Cell::new(error.row).set_alignment(CellAlignment::Right),
                Cell::new(&error.message).fg(Color::Red),
            ]);
        }
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    let cell = Cell::new(count).set_alignment(CellAlignment::Right);
    if count > 0 {
        cell.fg(Color::Red)
    } else {
        cell.fg(Color::Green)
    }
}
