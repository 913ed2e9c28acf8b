//! Pipeline output: accepted records and per-row diagnostics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One field failure on one row. A row with several failing fields yields
/// several of these sharing the same row number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub sheet: String,
    /// 1-based display row; the first data row is row 2 (row 1 is the header).
    pub row: usize,
    pub message: String,
}

/// A validated, typed row accepted into the output dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

/// Per-sheet outcome. Every input row contributes to exactly one of `data`
/// (one record) or `errors` (one or more diagnostics), never both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetResult {
    pub name: String,
    pub data: Vec<Record>,
    pub errors: Vec<ValidationError>,
}

impl SheetResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Whole-run outcome, sheets in workbook order. Constructed once per upload
/// and discarded after it is returned; no state survives the run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkbookResult {
    pub sheets: Vec<SheetResult>,
    #[serde(rename = "hasErrors")]
    pub has_errors: bool,
}

impl WorkbookResult {
    pub fn record_count(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.data.len()).sum()
    }

    pub fn error_count(&self) -> usize {
        self.sheets.iter().map(|sheet| sheet.errors.len()).sum()
    }
}
