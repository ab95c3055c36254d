use crate::types::errors::ParseError;
use chrono::NaiveDate;

const SOURCE_DATE_FORMAT: &str = "%d.%m.%y";
const DESTINATION_DATE_FORMAT: &str = "%m/%d/%Y";

/// Parses an operation date in the bank's `DD.MM.YY` form.
///
/// Two-digit years below 69 land in the 2000s, the rest in the 1900s.
pub fn parse_source_date(text: &str) -> Result<NaiveDate, ParseError> {
    if !has_source_shape(text) {
        return Err(ParseError::invalid_date(text, "expected DD.MM.YY"));
    }

    NaiveDate::parse_from_str(text, SOURCE_DATE_FORMAT)
        .map_err(|error| ParseError::invalid_date(text, error))
}

/// Renders a date as `MM/DD/YYYY`.
pub fn format_destination_date(date: &NaiveDate) -> String {
    date.format(DESTINATION_DATE_FORMAT).to_string()
}

// chrono accepts single-digit fields, so the exact two-digit layout is checked up front.
fn has_source_shape(text: &str) -> bool {
    let bytes = text.as_bytes();

    bytes.len() == 8
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit()
        })
}
