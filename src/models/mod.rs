mod destination_record;
mod errors;
mod source_record;

pub use destination_record::DestinationRecord;
pub use errors::RecordError;
pub use source_record::{SourceRecord, SourceRow};

/// Column names of the bank export, in the bank's own language.
pub mod source_columns {
    pub const ACCOUNT_TYPE: &str = "Тип счёта";
    pub const ACCOUNT_NUMBER: &str = "Номер счета";
    pub const CURRENCY: &str = "Валюта";
    pub const DATE: &str = "Дата операции";
    pub const REFERENCE: &str = "Референс проводки";
    pub const DESCRIPTION: &str = "Описание операции";
    pub const INFLOW: &str = "Приход";
    pub const OUTFLOW: &str = "Расход";
}

/// Every column the bank export must carry. Order in the file does not matter.
pub const SOURCE_COLUMNS: [&str; 8] = [
    source_columns::ACCOUNT_TYPE,
    source_columns::ACCOUNT_NUMBER,
    source_columns::CURRENCY,
    source_columns::DATE,
    source_columns::REFERENCE,
    source_columns::DESCRIPTION,
    source_columns::INFLOW,
    source_columns::OUTFLOW
];

/// Header of the budgeting import file, in output order.
pub const DESTINATION_COLUMNS: [&str; 5] = ["Date", "Payee", "Memo", "Outflow", "Inflow"];
