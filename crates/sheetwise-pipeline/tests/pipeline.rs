//! End-to-end pipeline tests over in-memory workbooks.

use chrono::NaiveDate;
use sheetwise_model::{CellValue, FieldSchema, RawRow, Sheet, Workbook};
use sheetwise_pipeline::{SequentialIdGenerator, process_sheet, process_workbook};
use sheetwise_validate::SchemaRegistry;

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn intake_row(name: &str, amount: f64, date: &str) -> RawRow {
    let mut row = RawRow::new();
    if !name.is_empty() {
        row.insert("Name", CellValue::Text(name.to_string()));
    }
    row.insert("Amount", CellValue::Number(amount));
    row.insert("Date", CellValue::Text(date.to_string()));
    row
}

fn sample_workbook() -> Workbook {
    Workbook {
        sheets: vec![Sheet {
            name: "Sheet1".to_string(),
            rows: vec![
                intake_row("Bob", 100.0, "2024-06-01"),
                intake_row("", 50.0, "2024-06-02"),
            ],
        }],
    }
}

#[test]
fn accepted_and_rejected_rows_partition() {
    let mut ids = SequentialIdGenerator::default();
    let result = process_workbook(
        &sample_workbook(),
        &SchemaRegistry::default(),
        reference(),
        &mut ids,
    );
    assert!(result.has_errors);
    let sheet = &result.sheets[0];
    assert_eq!(sheet.data.len(), 1);
    assert_eq!(sheet.data[0].name, "Bob");
    assert_eq!(sheet.data[0].amount, 100.0);
    assert_eq!(sheet.errors.len(), 1);
    assert_eq!(sheet.errors[0].row, 3);
    assert_eq!(sheet.errors[0].sheet, "Sheet1");
    assert_eq!(sheet.errors[0].message, "Name is missing or invalid");
}

#[test]
fn first_data_row_is_row_two() {
    let sheet = Sheet {
        name: "Sheet1".to_string(),
        rows: vec![intake_row("", 1.0, "2024-06-01")],
    };
    let mut ids = SequentialIdGenerator::default();
    let result = process_sheet(
        &sheet,
        &FieldSchema::default_intake(),
        reference(),
        &mut ids,
    );
    assert_eq!(result.errors[0].row, 2);
}

#[test]
fn multiple_failures_share_the_row_number() {
    let mut row = RawRow::new();
    row.insert("Amount", CellValue::Text("-5".to_string()));
    row.insert("Date", CellValue::Text("2024-05-31".to_string()));
    let sheet = Sheet {
        name: "Sheet1".to_string(),
        rows: vec![row],
    };
    let mut ids = SequentialIdGenerator::default();
    let result = process_sheet(
        &sheet,
        &FieldSchema::default_intake(),
        reference(),
        &mut ids,
    );
    assert!(result.data.is_empty());
    let messages: Vec<&str> = result
        .errors
        .iter()
        .map(|error| error.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "Name is missing or invalid",
            "Invalid amount: -5",
            "Date is not within the current month",
        ]
    );
    assert!(result.errors.iter().all(|error| error.row == 2));
}

#[test]
fn ids_are_unique_within_a_run() {
    let workbook = Workbook {
        sheets: vec![
            Sheet {
                name: "A".to_string(),
                rows: vec![intake_row("Ann", 1.0, "2024-06-01")],
            },
            Sheet {
                name: "B".to_string(),
                rows: vec![intake_row("Ben", 2.0, "2024-06-02")],
            },
        ],
    };
    let mut ids = SequentialIdGenerator::default();
    let result = process_workbook(&workbook, &SchemaRegistry::default(), reference(), &mut ids);
    assert_eq!(result.sheets[0].data[0].id, "row-1");
    assert_eq!(result.sheets[1].data[0].id, "row-2");
    assert!(!result.has_errors);
}

#[test]
fn sheet_failures_are_isolated() {
    let workbook = Workbook {
        sheets: vec![
            Sheet {
                name: "Broken".to_string(),
                rows: vec![intake_row("", -1.0, "junk")],
            },
            Sheet {
                name: "Clean".to_string(),
                rows: vec![intake_row("Cleo", 3.0, "2024-06-03")],
            },
        ],
    };
    let mut ids = SequentialIdGenerator::default();
    let result = process_workbook(&workbook, &SchemaRegistry::default(), reference(), &mut ids);
    assert!(result.has_errors);
    assert!(result.sheets[0].data.is_empty());
    assert_eq!(result.sheets[1].data.len(), 1);
    assert!(result.sheets[1].errors.is_empty());
}

#[test]
fn strict_registry_skips_unregistered_sheets() {
    let registry = SchemaRegistry::strict().with_schema("Sheet1", FieldSchema::default_intake());
    let workbook = Workbook {
        sheets: vec![
            Sheet {
                name: "Sheet1".to_string(),
                rows: vec![intake_row("Bob", 100.0, "2024-06-01")],
            },
            Sheet {
                name: "Scratch".to_string(),
                rows: vec![intake_row("Eve", 5.0, "2024-06-01")],
            },
        ],
    };
    let mut ids = SequentialIdGenerator::default();
    let result = process_workbook(&workbook, &registry, reference(), &mut ids);
    assert_eq!(result.sheets[0].data.len(), 1);
    let skipped = &result.sheets[1];
    assert!(skipped.data.is_empty());
    assert_eq!(skipped.errors.len(), 1);
    assert_eq!(
        skipped.errors[0].message,
        "No schema configured for sheet: Scratch"
    );
    assert!(result.has_errors);
}

#[test]
fn report_matches_upload_response_shape() {
    let mut ids = SequentialIdGenerator::default();
    let result = process_workbook(
        &sample_workbook(),
        &SchemaRegistry::default(),
        reference(),
        &mut ids,
    );
    let json = serde_json::to_value(&result).expect("serialize report");
    assert_eq!(json["hasErrors"], serde_json::Value::Bool(true));
    assert_eq!(json["sheets"][0]["name"], "Sheet1");
    assert_eq!(json["sheets"][0]["data"][0]["id"], "row-1");
    assert_eq!(json["sheets"][0]["data"][0]["date"], "2024-06-01");
    assert_eq!(json["sheets"][0]["errors"][0]["row"], 3);
}
