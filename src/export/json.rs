use crate::errors::AppResult;
use crate::models::DailyReport;
use std::io::Write;

/// Pretty-printed JSON of the whole report.
pub(crate) fn write_json<W: Write>(report: &DailyReport, mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}
