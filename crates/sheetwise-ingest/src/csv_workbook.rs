//! CSV files decoded as single-sheet workbooks.
//!
//! The sheet is named after the file stem. Cells stay textual; numeric and
//! boolean coercion happens downstream in validation, same as for text cells
//! coming out of a spreadsheet container.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use sheetwise_model::{CellValue, Workbook};

use crate::error::Result;
use crate::workbook::build_sheet;

pub fn read_csv_workbook(path: &Path) -> Result<Workbook> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<CellValue> = record
            .iter()
            .map(|cell| {
                let cleaned = cell.trim().trim_matches('\u{feff}');
                if cleaned.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::Text(cleaned.to_string())
                }
            })
            .collect();
        if row.iter().all(CellValue::is_empty) {
            continue;
        }
        rows.push(row);
    }
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Sheet1".to_string());
    debug!(sheet = %name, rows = rows.len(), "decoded csv workbook");
    Ok(Workbook {
        sheets: vec![build_sheet(name, rows)],
    })
}
