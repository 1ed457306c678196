use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One decoded cell. Decoders keep whatever scalar shape the source format
/// carried; nothing here is interpreted until normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(value) => f.write_str(value),
            // Integral floats render without the trailing ".0" so a ticket
            // number decoded as 1234.0 reads back as "1234".
            CellValue::Number(value) => {
                if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
                    write!(f, "{}", *value as i64)
                } else {
                    write!(f, "{}", value)
                }
            }
            CellValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// One row as exported by the source tool: arbitrary column names, arbitrary
/// shape, possibly empty. A key holding a falsy value (empty text, zero) is
/// still present.
pub type RawRow = HashMap<String, CellValue>;

/// Canonical normalized representation of one ticket. Every field is always
/// populated; normalization defaults whatever the row did not carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub epic: String,
    pub ticket_id: String,
    pub module: String,
    pub assignee: String,
    pub points: f64,
    pub release: String,
    pub sprint_count: u32,
}
