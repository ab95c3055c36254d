use crate::classifier::classify;
use crate::engine::ConvertError;
use crate::models::{DestinationRecord, SourceRecord, SourceRow, DESTINATION_COLUMNS, SOURCE_COLUMNS};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use encoding_rs::{Encoding, WINDOWS_1251};
use std::borrow::Cow;
use std::io::{Read, Write};
use tracing::{debug, info};

/// Batch converter from the bank statement export to the budgeting import format.
///
/// The whole input is decoded and classified before any output is produced, so a
/// failing row never leaves a truncated file behind.
pub struct Converter {
    encoding: &'static Encoding,
    delimiter: u8
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self {
            encoding: WINDOWS_1251,
            delimiter: b';'
        }
    }

    /// Reads `input` to the end, converts it and writes the result to `output`.
    ///
    /// Returns the number of converted rows.
    pub fn run<R: Read, W: Write>(&self, mut input: R, mut output: W) -> Result<usize, ConvertError> {
        let mut bytes = Vec::new();
        input.read_to_end(&mut bytes)?;

        let (rendered, count) = self.convert(&bytes)?;

        output.write_all(&rendered)?;
        output.flush()?;

        Ok(count)
    }

    /// Converts a complete statement into the rendered import file and its row count.
    pub fn convert(&self, bytes: &[u8]) -> Result<(Vec<u8>, usize), ConvertError> {
        let text = self.decode_stream(bytes)?;
        let records = self.read_records(&text)?;

        info!("Decoded {} statement rows", records.len());

        let destinations: Vec<DestinationRecord> = records.iter().map(classify).collect();
        let rendered = self.write_records(&destinations)?;

        Ok((rendered, destinations.len()))
    }

    fn decode_stream(&self, bytes: &[u8]) -> Result<String, ConvertError> {
        self.encoding.decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or_else(|| ConvertError::decode(self.encoding))
    }

    fn read_records(&self, text: &str) -> Result<Vec<SourceRecord>, ConvertError> {
        //NOTE: The export does not escape quotes in descriptions, so the csv grammar is off and quotes are resolved per field
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .quoting(false)
            .from_reader(text.as_bytes());

        let headers = unquote_record(reader.headers()?);
        check_headers(&headers)?;

        let mut records = Vec::new();

        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|position| position.line()).unwrap_or_default();

            let row: SourceRow = unquote_record(&record).deserialize(Some(&headers))
                .map_err(|error| ConvertError::row(line, error))?;

            let source = SourceRecord::decode(row)
                .map_err(|error| ConvertError::parse(line, error))?;

            debug!(
                "Line [{line}]: [{}] account [{}]:[{}] reference [{}]",
                source.account_type, source.account_number, source.currency, source.reference
            );

            records.push(source);
        }

        Ok(records)
    }

    fn write_records(&self, records: &[DestinationRecord]) -> Result<Vec<u8>, ConvertError> {
        //NOTE: The header is written by hand so an empty statement still yields a valid import file
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer.write_record(DESTINATION_COLUMNS)
            .map_err(ConvertError::serialize)?;

        for record in records {
            writer.serialize(record)
                .map_err(ConvertError::serialize)?;
        }

        writer.into_inner().map_err(ConvertError::serialize)
    }
}

fn unquote_record(record: &StringRecord) -> StringRecord {
    record.iter().map(unquote_field).collect()
}

/// Strips the quotes enclosing a whole field and collapses doubled quotes inside it.
///
/// Any other quote is part of the text: `"ООО "Ромашка" оплата"` reads as
/// `ООО "Ромашка" оплата` and `"Ромашка" оплата` is kept as is.
pub fn unquote_field(field: &str) -> Cow<'_, str> {
    match field.strip_prefix('"').and_then(|inner| inner.strip_suffix('"')) {
        Some(inner) if inner.contains("\"\"") => Cow::Owned(inner.replace("\"\"", "\"")),
        Some(inner) => Cow::Borrowed(inner),
        None => Cow::Borrowed(field)
    }
}

fn check_headers(headers: &StringRecord) -> Result<(), ConvertError> {
    for column in SOURCE_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(ConvertError::MissingColumn(column));
        }
    }

    Ok(())
}
