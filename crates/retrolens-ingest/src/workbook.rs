use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use retrolens_core::{CellValue, RawRow};
use tracing::debug;

use crate::errors::DecodeError;
use crate::model::{is_blank_row, DecodedTable};
use crate::registry::RowDecoder;

const NAME: &str = "workbook";

/// Decodes .xlsx/.xls payloads via calamine's container auto-detection. Only
/// the first worksheet is read; its first row is the header row.
pub struct WorkbookDecoder;

impl RowDecoder for WorkbookDecoder {
    fn name(&self) -> &'static str {
        NAME
    }

    fn decode(&self, bytes: &[u8]) -> Result<DecodedTable, DecodeError> {
        let mut workbook =
            open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|err| {
                DecodeError::FormatMismatch {
                    decoder: NAME,
                    reason: err.to_string(),
                }
            })?;

        let sheet = workbook
            .sheet_names()
            .into_iter()
            .next()
            .ok_or_else(|| DecodeError::Workbook {
                decoder: NAME,
                message: "workbook contains no worksheets".to_string(),
            })?;

        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|err| DecodeError::Workbook {
                decoder: NAME,
                message: err.to_string(),
            })?;

        let mut sheet_rows = range.rows();
        let headers: Vec<String> = match sheet_rows.next() {
            Some(header_row) => header_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect(),
            None => Vec::new(),
        };

        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let mut row = RawRow::new();
            for (index, cell) in data_row.iter().enumerate() {
                let Some(header) = headers.get(index) else {
                    continue;
                };
                if header.is_empty() {
                    continue;
                }
                if let Some(value) = cell_value(cell) {
                    row.insert(header.clone(), value);
                }
            }
            if is_blank_row(&row) {
                continue;
            }
            rows.push(row);
        }

        debug!(sheet = %sheet, rows = rows.len(), "decoded workbook rows");
        Ok(DecodedTable {
            decoder: NAME,
            sheet: Some(sheet),
            rows,
        })
    }
}

/// Blank and error cells read as absent; everything else keeps its scalar
/// shape. Date cells carry the spreadsheet serial number, the same value the
/// source tools export.
fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) => Some(CellValue::Text(text.trim().to_string())),
        Data::Float(value) => Some(CellValue::Number(*value)),
        Data::Int(value) => Some(CellValue::Number(*value as f64)),
        Data::Bool(value) => Some(CellValue::Bool(*value)),
        Data::DateTime(value) => Some(CellValue::Number(value.as_f64())),
        Data::DateTimeIso(text) | Data::DurationIso(text) => {
            Some(CellValue::Text(text.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_payload_is_a_format_mismatch() {
        let decoder = WorkbookDecoder;
        match decoder.decode(b"Epic,Story Points\nA,3\n") {
            Err(DecodeError::FormatMismatch { decoder, .. }) => {
                assert_eq!(decoder, "workbook");
            }
            other => panic!("expected FormatMismatch error, got {other:?}"),
        }
    }

    #[test]
    fn date_cells_keep_their_serial_value() {
        // 45000.0 is an ordinary spreadsheet date serial.
        let value = cell_value(&Data::Float(45000.0)).expect("float cell dropped");
        assert_eq!(value, CellValue::Number(45000.0));
        assert!(cell_value(&Data::Empty).is_none());
    }
}
