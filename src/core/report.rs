//! Daily report: group billed time by (customer, project) and by task.

use crate::core::calculator::billing::{round_to_block, whole_minutes};
use crate::models::report::NO_DESCRIPTION;
use crate::models::{DailyReport, DailyState, ProjectGroup, TaskLine};
use crate::utils::time::epoch_seconds;
use chrono::{DateTime, Local};

pub struct ReportLogic;

impl ReportLogic {
    /// Build the report, billing a running timer as if stopped at `now`.
    pub fn build(state: &DailyState, now: DateTime<Local>) -> DailyReport {
        let mut groups: Vec<ProjectGroup> = Vec::new();

        for entry in &state.history {
            add_to_group(
                &mut groups,
                &entry.customer,
                &entry.project,
                entry.duration_seconds,
                &entry.notes,
            );
        }

        if let Some(current) = &state.current {
            let raw = epoch_seconds(now) - current.start_timestamp;
            add_to_group(
                &mut groups,
                &current.customer,
                &current.project,
                round_to_block(raw),
                &current.notes,
            );
        }

        // stable: equal keys keep first-seen order
        groups.sort_by_cached_key(|g| (g.customer.to_lowercase(), g.project.to_lowercase()));

        DailyReport {
            total_seconds: groups
                .iter()
                .fold(0u64, |acc, g| acc.saturating_add(g.total_seconds)),
            groups,
            includes_running: state.is_running(),
        }
    }

    /// One line per project, suitable for pasting into a timesheet.
    pub fn clipboard_summary(report: &DailyReport) -> String {
        let mut out = String::new();

        for g in &report.groups {
            let details: Vec<String> = g
                .tasks
                .iter()
                .filter(|t| t.is_described())
                .map(|t| format!("{} ({}m)", t.name, whole_minutes(t.seconds)))
                .collect();

            let total = whole_minutes(g.total_seconds);
            if details.is_empty() {
                out.push_str(&format!("{} - {}: {} min\n", g.customer, g.project, total));
            } else {
                out.push_str(&format!(
                    "{} - {}: {} min [{}]\n",
                    g.customer,
                    g.project,
                    total,
                    details.join(", ")
                ));
            }
        }

        out
    }
}

fn task_name(notes: &[String]) -> String {
    if notes.is_empty() {
        NO_DESCRIPTION.to_string()
    } else {
        notes.join(", ")
    }
}

fn add_to_group(
    groups: &mut Vec<ProjectGroup>,
    customer: &str,
    project: &str,
    seconds: u64,
    notes: &[String],
) {
    let idx = match groups
        .iter()
        .position(|g| g.customer == customer && g.project == project)
    {
        Some(i) => i,
        None => {
            groups.push(ProjectGroup {
                customer: customer.to_string(),
                project: project.to_string(),
                total_seconds: 0,
                tasks: Vec::new(),
            });
            groups.len() - 1
        }
    };

    let group = &mut groups[idx];
    group.total_seconds = group.total_seconds.saturating_add(seconds);

    let name = task_name(notes);
    match group.tasks.iter_mut().find(|t| t.name == name) {
        Some(task) => task.seconds = task.seconds.saturating_add(seconds),
        None => group.tasks.push(TaskLine { name, seconds }),
    }
}
