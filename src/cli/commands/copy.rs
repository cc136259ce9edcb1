use crate::cli::parser::Commands;
use crate::config::AppPaths;
use crate::core::report::ReportLogic;
use crate::errors::AppResult;
use crate::export::render_text;
use crate::models::DailyState;
use crate::store;
use crate::ui::clipboard::copy_to_clipboard;
use crate::ui::messages::{event, warning};
use chrono::Local;

pub fn handle(cmd: &Commands, paths: &AppPaths) -> AppResult<()> {
    if let Commands::Copy { print } = cmd {
        let state: DailyState = store::load_or_default(&paths.data_file);
        let report = ReportLogic::build(&state, Local::now());
        let summary = ReportLogic::clipboard_summary(&report);

        print!("{}", render_text(&report));

        if *print {
            println!();
            print!("{summary}");
            return Ok(());
        }

        // a missing clipboard is not worth failing the command
        match copy_to_clipboard(&summary) {
            Ok(()) => event("📋", "Detailed summary copied to clipboard!"),
            Err(e) => warning(format!(
                "{e}. Use 'tt copy --print' to print the summary instead."
            )),
        }
    }
    Ok(())
}
