use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::types::{format_destination_date, Amount};

/// A row of the budgeting import file.
///
/// Field order is the column order of the output: Date, Payee, Memo, Outflow, Inflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationRecord {
    #[serde(rename = "Date", serialize_with = "serialize_date")]
    pub date: NaiveDate,
    /// Counterparty, never empty once classified.
    #[serde(rename = "Payee")]
    pub payee: String,
    #[serde(rename = "Memo")]
    pub memo: String,
    #[serde(rename = "Outflow")]
    pub outflow: Amount,
    #[serde(rename = "Inflow")]
    pub inflow: Amount
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_destination_date(date))
}
