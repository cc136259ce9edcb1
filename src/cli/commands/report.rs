use crate::cli::parser::Commands;
use crate::config::AppPaths;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::export::write_report;
use crate::models::DailyState;
use crate::store;
use crate::utils::path::expand_tilde;
use chrono::Local;

pub fn handle(cmd: &Commands, paths: &AppPaths) -> AppResult<()> {
    if let Commands::Report {
        format,
        file,
        force,
    } = cmd
    {
        let state: DailyState = store::load_or_default(&paths.data_file);
        let report = ReportLogic::build(&state, Local::now());

        let file = file.as_deref().map(expand_tilde);
        write_report(&report, *format, file.as_deref(), *force)?;
    }
    Ok(())
}
