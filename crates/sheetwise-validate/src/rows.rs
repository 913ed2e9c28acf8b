//! Schema-driven row validation.
//!
//! Every field in the schema is checked independently and every applicable
//! error is collected; there is no cross-field short-circuit. Coerced values
//! are captured during validation so the sheet processor never re-parses a
//! cell, and malformed input can only ever become a message, not a fault.

use chrono::NaiveDate;

use sheetwise_model::{CellValue, FieldKind, FieldRule, FieldSchema, RawRow, Record};

use crate::dates;

/// Outcome of validating one row: collected messages plus the coerced record
/// slots. One slot per record field; the first schema field of each kind
/// feeds the matching slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowCheck {
    pub errors: Vec<String>,
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub verified: Option<bool>,
}

impl RowCheck {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Build the accepted record, if every mandatory slot was filled.
    pub fn into_record(self, id: String) -> Option<Record> {
        Some(Record {
            id,
            name: self.name?,
            amount: self.amount?,
            date: self.date?,
            verified: self.verified,
        })
    }
}

/// Validate one decoded row against a field schema.
///
/// `reference` is the injected clock for date business rules; it is never
/// read from the ambient system time here.
pub fn validate_row(row: &RawRow, schema: &FieldSchema, reference: NaiveDate) -> RowCheck {
    let mut check = RowCheck::default();
    for (field, rule) in schema.iter() {
        let value = row.get(field);
        match rule.kind {
            FieldKind::Text => check_text(&mut check, field, rule, value),
            FieldKind::Number => check_number(&mut check, field, rule, value),
            FieldKind::Date => check_date(&mut check, rule, value, reference),
            FieldKind::Boolean => check_boolean(&mut check, field, rule, value),
        }
    }
    check
}

fn is_absent(value: Option<&CellValue>) -> bool {
    value.is_none_or(CellValue::is_empty)
}

fn check_text(check: &mut RowCheck, field: &str, rule: &FieldRule, value: Option<&CellValue>) {
    if is_absent(value) && !rule.required {
        return;
    }
    let trimmed = value
        .and_then(CellValue::as_text)
        .map(str::trim)
        .filter(|text| !text.is_empty());
    match trimmed {
        Some(text) => {
            if check.name.is_none() {
                check.name = Some(text.to_string());
            }
        }
        None => check.errors.push(format!("{field} is missing or invalid")),
    }
}

fn check_number(check: &mut RowCheck, field: &str, rule: &FieldRule, value: Option<&CellValue>) {
    if is_absent(value) && !rule.required {
        return;
    }
    let parsed = value
        .and_then(CellValue::as_number)
        .filter(|number| rule.min.is_none_or(|floor| *number > floor));
    match parsed {
        Some(number) => {
            if check.amount.is_none() {
                check.amount = Some(number);
            }
        }
        None => check
            .errors
            .push(invalid_value_message(field, value)),
    }
}

fn check_date(
    check: &mut RowCheck,
    rule: &FieldRule,
    value: Option<&CellValue>,
    reference: NaiveDate,
) {
    if is_absent(value) && !rule.required {
        return;
    }
    match dates::normalize(value) {
        Ok(date) => {
            if let Some(business_rule) = rule.business_rule
                && dates::check_within_month(date, reference).is_err()
            {
                check.errors.push(business_rule.message().to_string());
                return;
            }
            if check.date.is_none() {
                check.date = Some(date);
            }
        }
        Err(message) => check.errors.push(message),
    }
}

fn check_boolean(check: &mut RowCheck, field: &str, rule: &FieldRule, value: Option<&CellValue>) {
    if is_absent(value) {
        if rule.required {
            check.errors.push(format!("{field} is missing or invalid"));
        }
        return;
    }
    match value.and_then(CellValue::as_bool) {
        Some(flag) => {
            if check.verified.is_none() {
                check.verified = Some(flag);
            }
        }
        None => check
            .errors
            .push(invalid_value_message(field, value)),
    }
}

fn invalid_value_message(field: &str, value: Option<&CellValue>) -> String {
    let raw = value.map(ToString::to_string).unwrap_or_default();
    format!("Invalid {}: {raw}", field.to_lowercase())
}
