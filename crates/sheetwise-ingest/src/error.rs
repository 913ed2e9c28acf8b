use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The byte buffer or file is not a well-formed spreadsheet container.
    #[error("not a valid workbook: {0}")]
    InvalidWorkbook(String),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(PathBuf),
}

pub type Result<T> = std::result::Result<T, IngestError>;
