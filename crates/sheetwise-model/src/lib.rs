pub mod cell;
pub mod error;
pub mod report;
pub mod schema;

pub use cell::{CellValue, RawRow, Sheet, Workbook};
pub use error::ModelError;
pub use report::{Record, SheetResult, ValidationError, WorkbookResult};
pub use schema::{BusinessRule, FieldKind, FieldRule, FieldSchema};
