mod converter;
mod errors;

pub use converter::Converter;
pub use errors::ConvertError;
