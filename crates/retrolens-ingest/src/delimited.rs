use csv::ReaderBuilder;
use retrolens_core::{CellValue, RawRow};
use tracing::debug;

use crate::errors::DecodeError;
use crate::model::{is_blank_row, DecodedTable};
use crate::registry::RowDecoder;

const NAME: &str = "delimited";

/// Decodes CSV payloads. Every field stays textual; the normalizer decides
/// later what is numeric. Fields that are empty strings remain present under
/// their column, since presence is what column resolution tests.
pub struct DelimitedDecoder;

impl RowDecoder for DelimitedDecoder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn decode(&self, bytes: &[u8]) -> Result<DecodedTable, DecodeError> {
        let text = std::str::from_utf8(bytes).map_err(|_| DecodeError::FormatMismatch {
            decoder: NAME,
            reason: "payload is not valid UTF-8 text".to_string(),
        })?;

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|source| DecodeError::Csv {
                decoder: NAME,
                source,
            })?
            .iter()
            .map(|header| header.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|source| DecodeError::Csv {
                decoder: NAME,
                source,
            })?;

            let mut row = RawRow::new();
            for (index, field) in record.iter().enumerate() {
                let Some(header) = headers.get(index) else {
                    continue;
                };
                if header.is_empty() {
                    continue;
                }
                row.insert(header.clone(), CellValue::Text(field.trim().to_string()));
            }
            if is_blank_row(&row) {
                continue;
            }
            rows.push(row);
        }

        debug!(rows = rows.len(), "decoded delimited rows");
        Ok(DecodedTable {
            decoder: NAME,
            sheet: None,
            rows,
        })
    }
}
