//! Declarative per-sheet field schemas.
//!
//! One schema drives all row validation; there is no second, hardcoded rule
//! path. Field order in a schema is the order error messages are emitted in.

use crate::error::ModelError;

/// The value family a field is validated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Boolean,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Date => "date",
            Self::Boolean => "boolean",
        }
    }
}

/// A business rule attached to a date field, checked after the date decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessRule {
    /// Month and year must match the injected reference date.
    WithinReferenceMonth,
}

impl BusinessRule {
    pub fn message(self) -> &'static str {
        match self {
            Self::WithinReferenceMonth => "Date is not within the current month",
        }
    }
}

/// Validation rule for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub required: bool,
    pub kind: FieldKind,
    /// Exclusive numeric floor: values must be strictly greater.
    pub min: Option<f64>,
    pub business_rule: Option<BusinessRule>,
}

impl FieldRule {
    pub fn text() -> Self {
        Self::of(FieldKind::Text)
    }

    pub fn number() -> Self {
        Self::of(FieldKind::Number)
    }

    pub fn date() -> Self {
        Self::of(FieldKind::Date)
    }

    pub fn boolean() -> Self {
        Self::of(FieldKind::Boolean)
    }

    fn of(kind: FieldKind) -> Self {
        Self {
            required: false,
            kind,
            min: None,
            business_rule: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_business_rule(mut self, rule: BusinessRule) -> Self {
        self.business_rule = Some(rule);
        self
    }
}

/// An ordered set of named field rules for one sheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSchema {
    fields: Vec<(String, FieldRule)>,
}

impl FieldSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field rule, rejecting malformed combinations.
    pub fn push(&mut self, name: impl Into<String>, rule: FieldRule) -> Result<(), ModelError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ModelError::EmptyFieldName);
        }
        if self.fields.iter().any(|(existing, _)| *existing == name) {
            return Err(ModelError::DuplicateField(name));
        }
        if rule.min.is_some() && rule.kind != FieldKind::Number {
            return Err(ModelError::MinOnNonNumber(name));
        }
        if rule.business_rule.is_some() && rule.kind != FieldKind::Date {
            return Err(ModelError::BusinessRuleOnNonDate(name));
        }
        self.fields.push((name, rule));
        Ok(())
    }

    /// Chainable variant of [`push`](Self::push).
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        rule: FieldRule,
    ) -> Result<Self, ModelError> {
        self.push(name, rule)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&FieldRule> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, rule)| rule)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRule)> {
        self.fields.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The intake schema the pipeline falls back to: required Name, a
    /// strictly-positive Amount, a Date constrained to the reference month,
    /// and an optional Verified flag.
    pub fn default_intake() -> Self {
        Self {
            fields: vec![
                ("Name".to_string(), FieldRule::text().required()),
                (
                    "Amount".to_string(),
                    FieldRule::number().required().with_min(0.0),
                ),
                (
                    "Date".to_string(),
                    FieldRule::date()
                        .required()
                        .with_business_rule(BusinessRule::WithinReferenceMonth),
                ),
                ("Verified".to_string(), FieldRule::boolean()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_intake_shape() {
        let schema = FieldSchema::default_intake();
        assert_eq!(schema.len(), 4);
        let amount = schema.get("Amount").unwrap();
        assert_eq!(amount.kind, FieldKind::Number);
        assert_eq!(amount.min, Some(0.0));
        assert!(amount.required);
        let verified = schema.get("Verified").unwrap();
        assert!(!verified.required);
    }

    #[test]
    fn push_rejects_misuse() {
        let mut schema = FieldSchema::new();
        assert!(matches!(
            schema.push("  ", FieldRule::text()),
            Err(ModelError::EmptyFieldName)
        ));
        assert!(matches!(
            schema.push("Name", FieldRule::text().with_min(1.0)),
            Err(ModelError::MinOnNonNumber(_))
        ));
        assert!(matches!(
            schema.push("Name", FieldRule::text().with_business_rule(BusinessRule::WithinReferenceMonth)),
            Err(ModelError::BusinessRuleOnNonDate(_))
        ));
        schema.push("Name", FieldRule::text().required()).unwrap();
        assert!(matches!(
            schema.push("Name", FieldRule::text()),
            Err(ModelError::DuplicateField(_))
        ));
    }

    #[test]
    fn field_order_is_preserved() {
        let schema = FieldSchema::new()
            .with_field("B", FieldRule::text())
            .unwrap()
            .with_field("A", FieldRule::number())
            .unwrap();
        let names: Vec<&str> = schema.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
