use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("field name must not be empty")]
    EmptyFieldName,
    #[error("duplicate field in schema: {0}")]
    DuplicateField(String),
    #[error("min is only valid on number fields: {0}")]
    MinOnNonNumber(String),
    #[error("business rule is only valid on date fields: {0}")]
    BusinessRuleOnNonDate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
