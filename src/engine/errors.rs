use crate::models::RecordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input is not valid {encoding} text")]
    Decode {
        encoding: &'static str
    },
    #[error("CSV read error: {0}")]
    Read(#[from] csv::Error),
    #[error("Header is missing column [{0}]")]
    MissingColumn(&'static str),
    #[error("Line [{line}]: {source}")]
    Parse {
        line: u64,
        #[source]
        source: RecordError
    },
    #[error("Line [{line}]: {source}")]
    Row {
        line: u64,
        #[source]
        source: csv::Error
    },
    #[error("CSV write error: {0}")]
    Serialize(String)
}

impl ConvertError {
    pub fn decode(encoding: &'static encoding_rs::Encoding) -> Self {
        Self::Decode { encoding: encoding.name() }
    }

    pub fn parse(line: u64, source: RecordError) -> Self {
        Self::Parse { line, source }
    }

    pub fn row(line: u64, source: csv::Error) -> Self {
        Self::Row { line, source }
    }

    pub fn serialize(error: impl ToString) -> Self {
        Self::Serialize(error.to_string())
    }
}
