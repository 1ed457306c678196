mod delimited;
pub mod errors;
pub mod model;
mod registry;
mod workbook;

pub use delimited::DelimitedDecoder;
pub use errors::{DecodeAttempt, DecodeError};
pub use model::DecodedTable;
pub use registry::{decode_rows, decode_with_decoders, RowDecoder};
pub use workbook::WorkbookDecoder;
