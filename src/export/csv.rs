use crate::core::calculator::billing::whole_minutes;
use crate::errors::AppResult;
use crate::models::DailyReport;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct TaskRow<'a> {
    customer: &'a str,
    project: &'a str,
    task: &'a str,
    minutes: u64,
    project_minutes: u64,
}

/// One CSV row per task; the header comes from the row struct.
pub(crate) fn write_csv<W: Write>(report: &DailyReport, out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for group in &report.groups {
        for task in &group.tasks {
            wtr.serialize(TaskRow {
                customer: &group.customer,
                project: &group.project,
                task: &task.name,
                minutes: whole_minutes(task.seconds),
                project_minutes: whole_minutes(group.total_seconds),
            })?;
        }
    }

    wtr.flush()?;
    Ok(())
}
