use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid amount '{value}': {reason}")]
    InvalidAmount {
        value: String,
        reason: String
    },
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate {
        value: String,
        reason: String
    }
}

impl ParseError {
    pub fn invalid_amount(value: &str, reason: impl ToString) -> Self {
        Self::InvalidAmount { value: value.to_string(), reason: reason.to_string() }
    }

    pub fn invalid_date(value: &str, reason: impl ToString) -> Self {
        Self::InvalidDate { value: value.to_string(), reason: reason.to_string() }
    }
}
