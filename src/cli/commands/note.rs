use crate::cli::parser::Commands;
use crate::config::AppPaths;
use crate::core::timer::TimerLogic;
use crate::errors::AppResult;
use crate::models::DailyState;
use crate::store;
use crate::ui::messages::event;

pub fn handle(cmd: &Commands, paths: &AppPaths) -> AppResult<()> {
    if let Commands::Note { text } = cmd {
        let text = text.join(" ");
        let mut state: DailyState = store::load_or_default(&paths.data_file);

        TimerLogic::add_note(&mut state, &text)?;
        store::save(&paths.data_file, &state)?;

        event("📝", format!("Note added: \"{}\"", text.trim()));
    }
    Ok(())
}
