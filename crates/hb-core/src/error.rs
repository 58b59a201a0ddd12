use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HbError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Division by zero in {what}")]
    DivisionByZero { what: &'static str },

    #[error("Key not found: {key}")]
    KeyNotFound { key: String },
}
