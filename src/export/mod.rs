//! Rendering of the daily report: terminal text, JSON and CSV.

mod csv;
mod fs_utils;
mod json;
mod text;

pub use text::render_text;

use crate::errors::AppResult;
use crate::models::DailyReport;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }
}

fn write_to<W: Write>(report: &DailyReport, format: ReportFormat, out: &mut W) -> AppResult<()> {
    match format {
        ReportFormat::Text => out.write_all(render_text(report).as_bytes())?,
        ReportFormat::Json => json::write_json(report, &mut *out)?,
        ReportFormat::Csv => csv::write_csv(report, &mut *out)?,
    }
    out.flush()?;
    Ok(())
}

/// Write the report to `file`, or to stdout when no file is given.
pub fn write_report(
    report: &DailyReport,
    format: ReportFormat,
    file: Option<&Path>,
    force: bool,
) -> AppResult<()> {
    match file {
        None => write_to(report, format, &mut io::stdout().lock()),
        Some(path) => {
            if !fs_utils::ensure_writable(path, force)? {
                return Ok(());
            }
            let mut out = BufWriter::new(File::create(path)?);
            write_to(report, format, &mut out)?;
            success(format!(
                "{} report written to {}",
                format.as_str().to_uppercase(),
                path.display()
            ));
            Ok(())
        }
    }
}
