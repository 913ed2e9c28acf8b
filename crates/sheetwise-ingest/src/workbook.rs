//! Spreadsheet container decoding via `calamine`.
//!
//! Sheets come out in the container's declared order. The first non-empty row
//! of each sheet is the header; later rows become [`RawRow`]s keyed by header.
//! Numeric date cells are surfaced as raw serial numbers so the date
//! normalizer owns the epoch conversion.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{Data, Reader, Sheets, open_workbook_auto, open_workbook_auto_from_rs};
use tracing::debug;

use sheetwise_model::{CellValue, RawRow, Sheet, Workbook};

use crate::error::{IngestError, Result};

/// Decode a workbook from an in-memory byte buffer.
///
/// This is the upload-boundary entry point: a buffer that is not a
/// well-formed spreadsheet container fails with
/// [`IngestError::InvalidWorkbook`] and nothing else.
pub fn decode_workbook_bytes(bytes: &[u8]) -> Result<Workbook> {
    let cursor = Cursor::new(bytes);
    let mut container = open_workbook_auto_from_rs(cursor)
        .map_err(|error| IngestError::InvalidWorkbook(error.to_string()))?;
    decode_container(&mut container)
}

/// Decode a workbook from a spreadsheet file on disk.
pub fn read_spreadsheet(path: &Path) -> Result<Workbook> {
    let mut container = open_workbook_auto(path)
        .map_err(|error| IngestError::InvalidWorkbook(error.to_string()))?;
    decode_container(&mut container)
}

fn decode_container<RS: Read + Seek>(container: &mut Sheets<RS>) -> Result<Workbook> {
    let mut workbook = Workbook::default();
    for name in container.sheet_names() {
        let range = container
            .worksheet_range(&name)
            .map_err(|error| IngestError::InvalidWorkbook(error.to_string()))?;
        let rows: Vec<Vec<CellValue>> = range
            .rows()
            .map(|cells| cells.iter().map(decode_cell).collect())
            .filter(|row: &Vec<CellValue>| !row.iter().all(CellValue::is_empty))
            .collect();
        workbook.sheets.push(build_sheet(name, rows));
    }
    debug!(sheets = workbook.sheets.len(), "decoded workbook");
    Ok(workbook)
}

/// Assemble a sheet from decoded cell rows: first row is the header, the
/// rest become raw rows keyed by cleaned header names.
pub(crate) fn build_sheet(name: String, rows: Vec<Vec<CellValue>>) -> Sheet {
    let mut iter = rows.into_iter();
    let headers: Vec<String> = match iter.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| clean_header(&cell.to_string()))
            .collect(),
        None => Vec::new(),
    };
    let mut decoded = Vec::new();
    for cells in iter {
        let mut row = RawRow::new();
        for (index, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            match cells.get(index) {
                Some(CellValue::Empty) | None => {}
                Some(value) => row.insert(header.clone(), value.clone()),
            }
        }
        decoded.push(row);
    }
    Sheet {
        name,
        rows: decoded,
    }
}

fn decode_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Bool(*value),
        // Keep the raw serial so the normalizer applies the epoch offset.
        Data::DateTime(datetime) => CellValue::Number(datetime.as_f64()),
        Data::DateTimeIso(text) | Data::DurationIso(text) => CellValue::Text(text.clone()),
    }
}

pub(crate) fn clean_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}
