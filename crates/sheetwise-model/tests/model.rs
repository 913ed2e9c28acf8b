//! Wire-shape tests for the report types.

use chrono::NaiveDate;
use sheetwise_model::{Record, SheetResult, ValidationError, WorkbookResult};

fn sample_result() -> WorkbookResult {
    WorkbookResult {
        sheets: vec![SheetResult {
            name: "Sheet1".to_string(),
            data: vec![Record {
                id: "a1".to_string(),
                name: "Bob".to_string(),
                amount: 100.0,
                date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                verified: None,
            }],
            errors: vec![ValidationError {
                sheet: "Sheet1".to_string(),
                row: 3,
                message: "Name is missing or invalid".to_string(),
            }],
        }],
        has_errors: true,
    }
}

#[test]
fn has_errors_serializes_camel_case() {
    let json = serde_json::to_value(sample_result()).expect("serialize result");
    assert_eq!(json["hasErrors"], serde_json::Value::Bool(true));
    assert!(json.get("has_errors").is_none());
}

#[test]
fn verified_is_omitted_when_absent() {
    let json = serde_json::to_value(sample_result()).expect("serialize result");
    let record = &json["sheets"][0]["data"][0];
    assert!(record.get("verified").is_none());
    assert_eq!(record["date"], "2024-06-01");
    assert_eq!(record["amount"], 100.0);
}

#[test]
fn verified_survives_round_trip() {
    let mut result = sample_result();
    result.sheets[0].data[0].verified = Some(true);
    let json = serde_json::to_string(&result).expect("serialize result");
    let round: WorkbookResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);
}

#[test]
fn errors_carry_sheet_row_message() {
    let json = serde_json::to_value(sample_result()).expect("serialize result");
    let error = &json["sheets"][0]["errors"][0];
    assert_eq!(error["sheet"], "Sheet1");
    assert_eq!(error["row"], 3);
    assert_eq!(error["message"], "Name is missing or invalid");
}
