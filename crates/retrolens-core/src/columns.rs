//! Column alias tables for the source tools we accept exports from. Each
//! canonical field resolves from the first alias present in a row, in the
//! order listed here.

pub const EPIC_ALIASES: &[&str] = &["Epic Link", "Epic", "epic"];
pub const TICKET_ID_ALIASES: &[&str] = &["JIRA No", "Issue key", "jira"];
pub const MODULE_ALIASES: &[&str] = &["Module", "Component", "module"];
pub const ASSIGNEE_ALIASES: &[&str] = &["Assignee", "assignee"];
pub const POINTS_ALIASES: &[&str] = &["Story Points", "Points", "points"];
pub const RELEASE_ALIASES: &[&str] = &["Release Name", "Fix Version", "release"];
pub const SPRINT_COUNT_ALIASES: &[&str] = &["Sprint Count", "Sprints"];

pub const DEFAULT_EPIC: &str = "N/A";
pub const DEFAULT_TICKET_ID: &str = "N/A";
pub const DEFAULT_MODULE: &str = "General";
pub const DEFAULT_ASSIGNEE: &str = "Unassigned";
pub const DEFAULT_RELEASE: &str = "Unknown";
