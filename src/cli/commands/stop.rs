use crate::cli::parser::Commands;
use crate::config::AppPaths;
use crate::core::timer::TimerLogic;
use crate::errors::AppResult;
use crate::models::{DailyState, HistoryEntry};
use crate::store;
use crate::ui::messages::{event, info};
use crate::utils::formatting::hours_minutes;
use chrono::Local;

pub(crate) fn print_stopped(entry: &HistoryEntry) {
    event(
        "⏹",
        format!(
            "Stopped: {} - {} (Billed: {})",
            entry.customer,
            entry.project,
            hours_minutes(entry.duration_seconds)
        ),
    );
}

pub fn handle(cmd: &Commands, paths: &AppPaths) -> AppResult<()> {
    if matches!(cmd, Commands::Stop) {
        let mut state: DailyState = store::load_or_default(&paths.data_file);

        match TimerLogic::stop(&mut state, Local::now()) {
            Some(entry) => {
                store::save(&paths.data_file, &state)?;
                print_stopped(&entry);
            }
            None => info("No timer running."),
        }
    }
    Ok(())
}
