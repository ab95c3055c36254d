use crate::types::errors::ParseError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// An exact monetary amount as found in a bank statement.
///
/// Parsing accepts the source dialect (`,` as the decimal separator) and
/// `Display` renders the destination dialect (`.` and exactly two fractional digits,
/// midpoint rounded away from zero).
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Amount(Decimal);

impl Amount {
    pub fn zero() -> Self {
        Amount(Decimal::ZERO)
    }

    /// Parses an amount written with `,` as the decimal separator, e.g. `1234,56`.
    ///
    /// An empty field is a zero amount. Anything else that is not a decimal number fails.
    pub fn parse_local(text: &str) -> Result<Self, ParseError> {
        if text.is_empty() {
            return Ok(Amount::zero());
        }

        // Decimal::from_str takes digit separators, the bank never writes them
        if text.contains('_') {
            return Err(ParseError::invalid_amount(text, "unexpected character '_'"));
        }

        let normalized = text.replace(',', ".");

        Decimal::from_str(&normalized)
            .map(Amount)
            .map_err(|error| ParseError::invalid_amount(text, error))
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        let rounded = self.0.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        write!(formatter, "{:.width$}", rounded, width = DECIMAL_PLACES as usize)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
