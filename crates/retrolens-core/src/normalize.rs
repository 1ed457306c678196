use tracing::debug;

use crate::columns::{
    ASSIGNEE_ALIASES, DEFAULT_ASSIGNEE, DEFAULT_EPIC, DEFAULT_MODULE, DEFAULT_RELEASE,
    DEFAULT_TICKET_ID, EPIC_ALIASES, MODULE_ALIASES, POINTS_ALIASES, RELEASE_ALIASES,
    SPRINT_COUNT_ALIASES, TICKET_ID_ALIASES,
};
use crate::errors::NormalizeError;
use crate::model::{CellValue, RawRow, WorkItem};

/// Maps loosely-typed export rows onto canonical work items. The only fatal
/// condition is an empty input; every per-row defect degrades into the
/// field's default instead of rejecting the row.
pub fn normalize(rows: &[RawRow]) -> Result<Vec<WorkItem>, NormalizeError> {
    if rows.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }

    let items: Vec<WorkItem> = rows.iter().map(normalize_row).collect();
    debug!(rows = rows.len(), "normalized work items");
    Ok(items)
}

fn normalize_row(row: &RawRow) -> WorkItem {
    WorkItem {
        epic: resolve_text(row, EPIC_ALIASES, DEFAULT_EPIC),
        ticket_id: resolve_text(row, TICKET_ID_ALIASES, DEFAULT_TICKET_ID),
        module: resolve_text(row, MODULE_ALIASES, DEFAULT_MODULE),
        assignee: resolve_text(row, ASSIGNEE_ALIASES, DEFAULT_ASSIGNEE),
        points: first_present(row, POINTS_ALIASES)
            .map(points_value)
            .unwrap_or(0.0),
        release: resolve_text(row, RELEASE_ALIASES, DEFAULT_RELEASE),
        sprint_count: first_present(row, SPRINT_COUNT_ALIASES)
            .map(sprint_count_value)
            .unwrap_or(0),
    }
}

/// First alias whose key exists in the row. Presence is what matters: an
/// empty string or a zero still wins over later aliases.
fn first_present<'a>(row: &'a RawRow, aliases: &[&str]) -> Option<&'a CellValue> {
    aliases.iter().find_map(|alias| row.get(*alias))
}

fn resolve_text(row: &RawRow, aliases: &[&str], default: &str) -> String {
    match first_present(row, aliases) {
        Some(cell) => cell.to_string(),
        None => default.to_string(),
    }
}

fn points_value(cell: &CellValue) -> f64 {
    parse_numeric(cell).unwrap_or(0.0)
}

fn sprint_count_value(cell: &CellValue) -> u32 {
    match parse_numeric(cell) {
        Some(value) if value > 0.0 => value.trunc() as u32,
        _ => 0,
    }
}

/// Silent numeric coercion: unparsable or non-finite values read as absent
/// and fall back to zero at the call sites above.
fn parse_numeric(cell: &CellValue) -> Option<f64> {
    let parsed = match cell {
        CellValue::Number(value) => Some(*value),
        CellValue::Text(value) => value.trim().parse::<f64>().ok(),
        CellValue::Bool(_) => None,
    };
    parsed.filter(|value| value.is_finite())
}
