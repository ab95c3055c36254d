use crate::types::ParseError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("Column [{column}]: {source}")]
    Field {
        column: &'static str,
        #[source]
        source: ParseError
    }
}

impl RecordError {
    pub fn field(column: &'static str, source: ParseError) -> Self {
        Self::Field { column, source }
    }
}
