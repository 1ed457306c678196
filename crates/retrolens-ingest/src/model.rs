use retrolens_core::{CellValue, RawRow};

/// The flat row-set a decoder produced, plus enough provenance for
/// operator-facing logs (which decoder matched, which worksheet was read).
#[derive(Debug, Clone)]
pub struct DecodedTable {
    pub decoder: &'static str,
    pub sheet: Option<String>,
    pub rows: Vec<RawRow>,
}

/// A row with no cells, or only empty text cells, carries no data and is
/// dropped during decoding.
pub(crate) fn is_blank_row(row: &RawRow) -> bool {
    row.values()
        .all(|value| matches!(value, CellValue::Text(text) if text.is_empty()))
}
