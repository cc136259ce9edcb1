use crate::cli::commands::stop::print_stopped;
use crate::cli::parser::Commands;
use crate::config::{AppPaths, Config};
use crate::core::resolve::{StartRequest, resolve_target};
use crate::core::shortcut::ShortcutLogic;
use crate::core::timer::TimerLogic;
use crate::errors::AppResult;
use crate::models::DailyState;
use crate::store;
use crate::ui::messages::event;
use crate::ui::prompt::Prompt;
use chrono::Local;

/// Start a timer, from explicit arguments, a shortcut, or the menus.
pub fn handle(cmd: &Commands, paths: &AppPaths) -> AppResult<()> {
    let request = match cmd {
        Commands::Start { shortcut, args } => StartRequest::parse(shortcut.as_deref(), args),
        Commands::Quick(args) => StartRequest::parse(None, args),
        _ => return Ok(()),
    };

    let config = Config::load(&paths.config_file);

    //
    // 1. Resolve what to track before touching the running timer,
    //    so a cancelled prompt leaves the day untouched
    //
    let target = match &request {
        StartRequest::Shortcut { name, extra } => {
            let target = ShortcutLogic::resolve(&config, name, extra)?;
            event(
                "📌",
                format!("Using shortcut '@{}'", ShortcutLogic::normalize(name)),
            );
            target
        }
        StartRequest::Args(args) => resolve_target(&config, args, &mut Prompt::stdio())?,
    };

    //
    // 2. Stop the previous timer and start the new one
    //
    let mut state: DailyState = store::load_or_default(&paths.data_file);
    if let Some(stopped) = TimerLogic::start(&mut state, &target, Local::now()) {
        print_stopped(&stopped);
    }
    store::save(&paths.data_file, &state)?;

    let mut msg = format!("Started: {} - {}", target.customer, target.project);
    if let Some(note) = &target.note {
        msg.push_str(&format!(" ('{note}')"));
    }
    event("▶️", msg);

    Ok(())
}
