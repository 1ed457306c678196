use crate::delimited::DelimitedDecoder;
use crate::errors::{DecodeAttempt, DecodeError};
use crate::model::DecodedTable;
use crate::workbook::WorkbookDecoder;

pub trait RowDecoder {
    fn name(&self) -> &'static str;
    fn decode(&self, bytes: &[u8]) -> Result<DecodedTable, DecodeError>;
}

/// Decodes an uploaded export with the default decoder set: spreadsheet
/// workbooks first (detected by content, not extension), delimited text as
/// the fallback.
pub fn decode_rows(bytes: &[u8]) -> Result<DecodedTable, DecodeError> {
    let workbook = WorkbookDecoder;
    let delimited = DelimitedDecoder;
    let decoders: [&dyn RowDecoder; 2] = [&workbook, &delimited];
    decode_with_decoders(bytes, &decoders)
}

/// The decoder slice is the explicit readiness state: only decoders handed
/// in here are ever consulted. A format mismatch moves on to the next
/// candidate; any other failure is final.
pub fn decode_with_decoders(
    bytes: &[u8],
    decoders: &[&dyn RowDecoder],
) -> Result<DecodedTable, DecodeError> {
    let mut attempts = Vec::new();

    for decoder in decoders {
        match decoder.decode(bytes) {
            Ok(decoded) => return Ok(decoded),
            Err(DecodeError::FormatMismatch { reason, .. }) => {
                attempts.push(DecodeAttempt::new(decoder.name(), reason));
            }
            Err(err) => return Err(err),
        }
    }

    Err(DecodeError::NoMatchingDecoder { attempts })
}
