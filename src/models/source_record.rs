use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::errors::RecordError;
use crate::models::source_columns;
use crate::types::{parse_source_date, Amount};

/// A statement row exactly as it appears in the bank export, keyed by the
/// bank's own column names.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceRow {
    #[serde(rename = "Тип счёта")]
    pub account_type: String,
    #[serde(rename = "Номер счета")]
    pub account_number: String,
    #[serde(rename = "Валюта")]
    pub currency: String,
    #[serde(rename = "Дата операции")]
    pub date: String,
    #[serde(rename = "Референс проводки")]
    pub reference: String,
    #[serde(rename = "Описание операции")]
    pub description: String,
    #[serde(rename = "Приход")]
    pub inflow: String,
    #[serde(rename = "Расход")]
    pub outflow: String
}

/// A decoded statement row.
///
/// Account type, number and currency are carried along but play no part in classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub account_type: String,
    pub account_number: String,
    pub currency: String,
    /// Operation date, no time of day.
    pub date: NaiveDate,
    /// Transaction type code. Its prefix drives classification.
    pub reference: String,
    /// Free-text narrative the payee is extracted from.
    pub description: String,
    pub inflow: Amount,
    pub outflow: Amount
}

impl SourceRecord {
    /// Decodes the textual fields of a raw row into typed values.
    ///
    /// # Errors
    /// Returns `RecordError` naming the column if:
    /// - The operation date is not `DD.MM.YY`.
    /// - An amount is neither empty nor a decimal number with `,` as the separator.
    pub fn decode(row: SourceRow) -> Result<Self, RecordError> {
        let date = parse_source_date(&row.date)
            .map_err(|error| RecordError::field(source_columns::DATE, error))?;

        let inflow = Amount::parse_local(&row.inflow)
            .map_err(|error| RecordError::field(source_columns::INFLOW, error))?;

        let outflow = Amount::parse_local(&row.outflow)
            .map_err(|error| RecordError::field(source_columns::OUTFLOW, error))?;

        Ok(Self {
            account_type: row.account_type,
            account_number: row.account_number,
            currency: row.currency,
            date,
            reference: row.reference,
            description: row.description,
            inflow,
            outflow
        })
    }
}
