//! Sheet and workbook orchestration.
//!
//! Iterates a decoded workbook sheet by sheet and row by row, partitioning
//! every row into exactly one record or one-or-more validation errors. The
//! pipeline is pure given its inputs: the reference date and the id sequence
//! are both injected, and nothing here performs I/O or can fail once the
//! workbook is decoded.

use chrono::NaiveDate;
use tracing::{debug, info, info_span, warn};

use sheetwise_model::{FieldSchema, Sheet, SheetResult, ValidationError, Workbook, WorkbookResult};
use sheetwise_validate::{SchemaRegistry, validate_row};

use crate::ids::IdGenerator;

/// Display row number for the header line; used for sheet-level diagnostics.
const HEADER_ROW: usize = 1;

/// Offset from 0-based data index to the 1-based display row: row 1 is the
/// header, data starts at row 2.
const ROW_DISPLAY_OFFSET: usize = 2;

/// Process one sheet's rows against a schema.
pub fn process_sheet(
    sheet: &Sheet,
    schema: &FieldSchema,
    reference: NaiveDate,
    ids: &mut dyn IdGenerator,
) -> SheetResult {
    let span = info_span!("sheet", name = %sheet.name);
    let _guard = span.enter();
    let mut result = SheetResult {
        name: sheet.name.clone(),
        data: Vec::new(),
        errors: Vec::new(),
    };
    for (index, raw) in sheet.rows.iter().enumerate() {
        let row_number = index + ROW_DISPLAY_OFFSET;
        let check = validate_row(raw, schema, reference);
        if check.is_valid() {
            match check.into_record(ids.next_id()) {
                Some(record) => result.data.push(record),
                // Only reachable with a schema that does not describe a full
                // record; the row still has to land on the error side of the
                // partition.
                None => result.errors.push(ValidationError {
                    sheet: sheet.name.clone(),
                    row: row_number,
                    message: "Row did not yield a complete record".to_string(),
                }),
            }
        } else {
            for message in check.errors {
                result.errors.push(ValidationError {
                    sheet: sheet.name.clone(),
                    row: row_number,
                    message,
                });
            }
        }
    }
    debug!(
        rows = sheet.rows.len(),
        records = result.data.len(),
        errors = result.errors.len(),
        "processed sheet"
    );
    result
}

/// Process every sheet of a workbook, in declared order.
///
/// Failures are isolated per sheet and per row; one sheet's errors never
/// affect another's processing. With a strict registry, sheets without a
/// registered schema are skipped and reported as a single diagnostic.
pub fn process_workbook(
    workbook: &Workbook,
    registry: &SchemaRegistry,
    reference: NaiveDate,
    ids: &mut dyn IdGenerator,
) -> WorkbookResult {
    let mut sheets = Vec::with_capacity(workbook.sheets.len());
    for sheet in &workbook.sheets {
        match registry.schema_for(&sheet.name) {
            Some(schema) => sheets.push(process_sheet(sheet, schema, reference, ids)),
            None => {
                warn!(sheet = %sheet.name, "no schema registered, skipping sheet");
                sheets.push(SheetResult {
                    name: sheet.name.clone(),
                    data: Vec::new(),
                    errors: vec![ValidationError {
                        sheet: sheet.name.clone(),
                        row: HEADER_ROW,
                        message: format!("No schema configured for sheet: {}", sheet.name),
                    }],
                });
            }
        }
    }
    let has_errors = sheets.iter().any(SheetResult::has_errors);
    let result = WorkbookResult { sheets, has_errors };
    info!(
        sheets = result.sheets.len(),
        records = result.record_count(),
        errors = result.error_count(),
        "workbook processed"
    );
    result
}
