pub mod aggregate;
pub mod columns;
pub mod errors;
pub mod model;
pub mod normalize;
mod pipeline;

pub use aggregate::{
    burn_up, efficiency_points, effort_matrix, summary_stats, velocity_by_release, BurnUpPoint,
    Dashboard, EfficiencyPoint, EffortMatrix, EffortRow, SummaryStats, VelocityPoint,
};
pub use errors::NormalizeError;
pub use model::{CellValue, RawRow, WorkItem};
pub use normalize::normalize;
pub use pipeline::analyze;
