mod amount;
mod date;
mod errors;

pub use amount::Amount;
pub use date::{format_destination_date, parse_source_date};
pub use errors::ParseError;
