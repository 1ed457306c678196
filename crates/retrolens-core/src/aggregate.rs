use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::WorkItem;

/// Aggregate effort and throughput for one release cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityPoint {
    pub release: String,
    pub total_points: f64,
    pub ticket_count: usize,
}

/// A velocity point plus the running total of points delivered up to and
/// including its release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnUpPoint {
    pub release: String,
    pub total_points: f64,
    pub ticket_count: usize,
    pub cumulative_points: f64,
}

/// Points summed per (module, assignee) pair. Every row carries an entry for
/// every assignee seen anywhere in the dataset, zero when that assignee did
/// not touch the module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortMatrix {
    pub assignees: Vec<String>,
    pub rows: Vec<EffortRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortRow {
    pub module: String,
    pub points_by_assignee: BTreeMap<String, f64>,
}

/// One work item projected onto the (cycle time, effort) plane. `index` is
/// the item's position in the input sequence, kept for stable chart keying.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EfficiencyPoint {
    pub label: String,
    pub sprint_count: u32,
    pub points: f64,
    pub module: String,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_points: f64,
    pub total_items: usize,
    pub avg_complexity: f64,
    pub distinct_release_sprint_pairs: usize,
}

/// The full bundle handed to rendering collaborators. Plain serializable
/// values, recomputed wholesale from the current work-item sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub summary: SummaryStats,
    pub velocity: Vec<VelocityPoint>,
    pub burn_up: Vec<BurnUpPoint>,
    pub effort: EffortMatrix,
    pub efficiency: Vec<EfficiencyPoint>,
}

impl Dashboard {
    /// `None` when `items` is empty; the summary is not computed for zero
    /// items. Upstream normalization already rejects empty inputs, so a
    /// caller going through the full pipeline never sees `None`.
    pub fn from_items(items: &[WorkItem]) -> Option<Self> {
        let summary = summary_stats(items)?;
        let velocity = velocity_by_release(items);
        let burn_up = burn_up(&velocity);
        let dashboard = Dashboard {
            summary,
            burn_up,
            effort: effort_matrix(items),
            efficiency: efficiency_points(items),
            velocity,
        };
        debug!(
            releases = dashboard.velocity.len(),
            modules = dashboard.effort.rows.len(),
            "derived dashboard datasets"
        );
        Some(dashboard)
    }
}

/// Groups by exact release string and emits one point per distinct release,
/// ascending by plain lexicographic order ("R10" sorts before "R2"; release
/// names are not parsed for version semantics).
pub fn velocity_by_release(items: &[WorkItem]) -> Vec<VelocityPoint> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for item in items {
        let entry = groups.entry(item.release.as_str()).or_insert((0.0, 0));
        entry.0 += item.points;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(release, (total_points, ticket_count))| VelocityPoint {
            release: release.to_string(),
            total_points,
            ticket_count,
        })
        .collect()
}

/// Prefix-sums the velocity sequence in its sorted order. The first point's
/// cumulative value equals its own total.
pub fn burn_up(velocity: &[VelocityPoint]) -> Vec<BurnUpPoint> {
    let mut running_total = 0.0;
    velocity
        .iter()
        .map(|point| {
            running_total += point.total_points;
            BurnUpPoint {
                release: point.release.clone(),
                total_points: point.total_points,
                ticket_count: point.ticket_count,
                cumulative_points: running_total,
            }
        })
        .collect()
}

/// Two-level grouping, module outer and assignee inner. Modules and
/// assignees keep first-seen order.
pub fn effort_matrix(items: &[WorkItem]) -> EffortMatrix {
    let mut modules: Vec<String> = Vec::new();
    let mut assignees: Vec<String> = Vec::new();
    let mut sums: HashMap<(&str, &str), f64> = HashMap::new();

    for item in items {
        if !modules.contains(&item.module) {
            modules.push(item.module.clone());
        }
        if !assignees.contains(&item.assignee) {
            assignees.push(item.assignee.clone());
        }
        *sums
            .entry((item.module.as_str(), item.assignee.as_str()))
            .or_insert(0.0) += item.points;
    }

    let rows = modules
        .iter()
        .map(|module| {
            let points_by_assignee = assignees
                .iter()
                .map(|assignee| {
                    let points = sums
                        .get(&(module.as_str(), assignee.as_str()))
                        .copied()
                        .unwrap_or(0.0);
                    (assignee.clone(), points)
                })
                .collect();
            EffortRow {
                module: module.clone(),
                points_by_assignee,
            }
        })
        .collect();

    EffortMatrix { assignees, rows }
}

/// One-to-one projection preserving input order; no grouping, no sorting.
pub fn efficiency_points(items: &[WorkItem]) -> Vec<EfficiencyPoint> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| EfficiencyPoint {
            label: item.ticket_id.clone(),
            sprint_count: item.sprint_count,
            points: item.points,
            module: item.module.clone(),
            index,
        })
        .collect()
}

/// Single pass over all items. `None` for an empty slice: the average is
/// undefined with zero items.
pub fn summary_stats(items: &[WorkItem]) -> Option<SummaryStats> {
    if items.is_empty() {
        return None;
    }

    let total_points: f64 = items.iter().map(|item| item.points).sum();
    let average = total_points / items.len() as f64;
    let pairs: HashSet<(&str, u32)> = items
        .iter()
        .map(|item| (item.release.as_str(), item.sprint_count))
        .collect();

    Some(SummaryStats {
        total_points,
        total_items: items.len(),
        avg_complexity: (average * 10.0).round() / 10.0,
        distinct_release_sprint_pairs: pairs.len(),
    })
}
