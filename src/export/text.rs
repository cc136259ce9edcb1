use crate::core::calculator::billing::whole_minutes;
use crate::models::DailyReport;
use crate::utils::formatting::{hhmm, minutes_label, pad_right};

const RULE_WIDTH: usize = 75;
const TASK_WIDTH: usize = 25;
const TASK_WRAP: usize = 40;

/// Terminal rendering of the daily report.
pub fn render_text(report: &DailyReport) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str("\n--- DAILY REPORT (15min blocks, grouped) ---\n");
    out.push_str(&format!(
        "{} | {} | {} | DETAILS\n",
        pad_right("CUSTOMER", 15),
        pad_right("PROJECT", 15),
        pad_right("TOTAL", 8)
    ));
    out.push_str(&rule);
    out.push('\n');

    for group in &report.groups {
        out.push_str(&format!(
            "{} | {} | {} | {}\n",
            pad_right(&group.customer, 15),
            pad_right(&group.project, 15),
            pad_right(&hhmm(group.total_seconds), 8),
            minutes_label(group.total_seconds)
        ));

        for task in &group.tasks {
            let indent = " ".repeat(35);
            let mut lines = textwrap::wrap(&task.name, TASK_WRAP).into_iter();
            let first = lines.next().unwrap_or_default();
            out.push_str(&format!(
                "{indent}  - {} | {}\n",
                pad_right(&first, TASK_WIDTH),
                minutes_label(task.seconds)
            ));
            for cont in lines {
                out.push_str(&format!("{indent}    {cont}\n"));
            }
        }
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "TOTAL: {} ({} min)\n",
        hhmm(report.total_seconds),
        whole_minutes(report.total_seconds)
    ));

    if report.includes_running {
        out.push_str("\n(⚠️  Includes currently running timer)\n");
    }

    out
}
