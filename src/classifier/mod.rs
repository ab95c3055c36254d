mod patterns;
#[cfg(test)]
mod tests;

use tracing::{debug, trace};

use crate::models::{DestinationRecord, SourceRecord};

pub use patterns::{extract_card_payee, extract_hold_payee};

pub const NOTIFICATION_FEE_PAYEE: &str = "Плата за оповещения об операциях";
pub const TRANSFER_PAYEE: &str = "Перевод";

/// Transaction kind derived from the reference code.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ReferenceKind {
    /// `HOLD`: card authorization not yet settled.
    Hold,
    /// `CRD_…`: settled card operation.
    Card,
    /// `MOPJ…`: fee for operation notifications.
    NotificationFee,
    /// `C…` or `B…`: transfer.
    Transfer,
    Other
}

impl ReferenceKind {
    /// Classifies a reference code. Rules are tried in order and the first match wins.
    pub fn from_reference(reference: &str) -> Self {
        if reference == "HOLD" {
            Self::Hold
        } else if reference.starts_with("CRD_") {
            Self::Card
        } else if reference.starts_with("MOPJ") {
            Self::NotificationFee
        } else if reference.starts_with('C') || reference.starts_with('B') {
            Self::Transfer
        } else {
            Self::Other
        }
    }
}

/// Maps a decoded statement row onto a budgeting import row.
///
/// Never fails and never drops a row: when no rule yields a payee, the raw
/// description becomes the payee.
pub fn classify(record: &SourceRecord) -> DestinationRecord {
    let kind = ReferenceKind::from_reference(&record.reference);

    debug!("Reference [{}] classified as [{:?}]", record.reference, kind);

    let (payee, memo) = match kind {
        ReferenceKind::Hold => (extract_hold_payee(&record.description), None),
        ReferenceKind::Card => (extract_card_payee(&record.description), None),
        ReferenceKind::NotificationFee => (Some(NOTIFICATION_FEE_PAYEE), Some(record.description.as_str())),
        ReferenceKind::Transfer => (Some(TRANSFER_PAYEE), Some(record.description.as_str())),
        ReferenceKind::Other => (None, None)
    };

    let payee = match payee {
        Some(payee) if !payee.is_empty() => payee,
        _ => {
            trace!("No payee for reference [{}], falling back to the description", record.reference);
            record.description.as_str()
        }
    };

    DestinationRecord {
        date: record.date,
        payee: payee.to_string(),
        memo: memo.unwrap_or_default().to_string(),
        outflow: record.outflow,
        inflow: record.inflow
    }
}
