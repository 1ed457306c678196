use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use retrolens_core::{Dashboard, EffortMatrix};
use serde_json::{json, Map, Value};

/// The JSON shape handed to chart frontends. The effort matrix flattens into
/// radar rows here, at the rendering boundary: one object per module with
/// one dynamic field per assignee.
pub fn dashboard_json(dashboard: &Dashboard) -> Value {
    json!({
        "summary": dashboard.summary,
        "velocity": dashboard.velocity,
        "burn_up": dashboard.burn_up,
        "radar": radar_rows(&dashboard.effort),
        "efficiency": dashboard.efficiency,
    })
}

pub fn radar_rows(matrix: &EffortMatrix) -> Vec<Value> {
    matrix
        .rows
        .iter()
        .map(|row| {
            let mut object = Map::new();
            object.insert("subject".to_string(), Value::from(row.module.clone()));
            for (assignee, points) in &row.points_by_assignee {
                object.insert(assignee.clone(), json!(points));
            }
            Value::Object(object)
        })
        .collect()
}

pub fn print_dashboard(dashboard: &Dashboard) {
    let mut summary = new_table(vec![
        "Total Points",
        "Tickets Done",
        "Avg Complexity",
        "Release Cycles",
    ]);
    summary.add_row(vec![
        format_number(dashboard.summary.total_points),
        dashboard.summary.total_items.to_string(),
        dashboard.summary.avg_complexity.to_string(),
        dashboard.velocity.len().to_string(),
    ]);
    println!("Summary");
    println!("{summary}");

    let mut velocity = new_table(vec!["Release", "Points", "Tickets", "Cumulative"]);
    for point in &dashboard.burn_up {
        velocity.add_row(vec![
            point.release.clone(),
            format_number(point.total_points),
            point.ticket_count.to_string(),
            format_number(point.cumulative_points),
        ]);
    }
    println!("Release velocity and burn-up");
    println!("{velocity}");

    let mut header: Vec<String> = vec!["Module".to_string()];
    header.extend(dashboard.effort.assignees.iter().cloned());
    let mut effort = new_table(header.iter().map(String::as_str).collect());
    for row in &dashboard.effort.rows {
        let mut cells = vec![row.module.clone()];
        for assignee in &dashboard.effort.assignees {
            let points = row.points_by_assignee.get(assignee).copied().unwrap_or(0.0);
            cells.push(format_number(points));
        }
        effort.add_row(cells);
    }
    println!("Effort by module and assignee");
    println!("{effort}");

    let mut efficiency = new_table(vec!["Ticket", "Module", "Sprints", "Points"]);
    for point in &dashboard.efficiency {
        efficiency.add_row(vec![
            point.label.clone(),
            point.module.clone(),
            point.sprint_count.to_string(),
            format_number(point.points),
        ]);
    }
    println!("Per-ticket efficiency");
    println!("{efficiency}");
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
