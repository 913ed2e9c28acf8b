pub mod csv_workbook;
pub mod error;
pub mod workbook;

use std::path::Path;

use sheetwise_model::Workbook;

pub use csv_workbook::read_csv_workbook;
pub use error::{IngestError, Result};
pub use workbook::{decode_workbook_bytes, read_spreadsheet};

/// Decode a workbook file, dispatching on its extension.
pub fn read_workbook(path: &Path) -> Result<Workbook> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("csv") => read_csv_workbook(path),
        Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => read_spreadsheet(path),
        _ => Err(IngestError::UnsupportedExtension(path.to_path_buf())),
    }
}
