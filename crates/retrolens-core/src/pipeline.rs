use crate::aggregate::Dashboard;
use crate::errors::NormalizeError;
use crate::model::RawRow;
use crate::normalize::normalize;

/// Runs both pipeline stages: raw rows in, dashboard datasets out.
pub fn analyze(rows: &[RawRow]) -> Result<Dashboard, NormalizeError> {
    let items = normalize(rows)?;
    Dashboard::from_items(&items).ok_or(NormalizeError::EmptyInput)
}
