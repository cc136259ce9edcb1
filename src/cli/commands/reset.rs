use crate::cli::parser::Commands;
use crate::config::AppPaths;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{event, info, warning};
use crate::ui::prompt::Prompt;

pub fn handle(cmd: &Commands, paths: &AppPaths) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes {
            warning("WARNING: This will delete all time entries for today.");
            if !Prompt::stdio().confirm("Are you sure? (y/N): ")? {
                info("Cancelled.");
                return Ok(());
            }
        }

        store::remove(&paths.data_file)?;
        event("🗑️", "Daily data cleared.");
    }
    Ok(())
}
