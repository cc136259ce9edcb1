//! tt library root.
//! Exposes the CLI parser, the high-level run() function and the
//! modules behind each command.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::{CommandFactory, Parser};
use cli::parser::{Cli, Commands};
use config::AppPaths;
use errors::AppResult;
use std::ffi::OsString;
use tracing::debug;

/// Central command dispatcher
pub fn dispatch(command: &Commands, paths: &AppPaths) -> AppResult<()> {
    match command {
        Commands::Start { .. } | Commands::Quick(_) => cli::commands::start::handle(command, paths),
        Commands::Note { .. } => cli::commands::note::handle(command, paths),
        Commands::Stop => cli::commands::stop::handle(command, paths),
        Commands::Report { .. } => cli::commands::report::handle(command, paths),
        Commands::Copy { .. } => cli::commands::copy::handle(command, paths),
        Commands::Add { .. } => cli::commands::add::handle(command, paths),
        Commands::List => cli::commands::list::handle(command, paths),
        Commands::Shortcut { .. } => cli::commands::shortcut::handle(command, paths),
        Commands::Reset { .. } => cli::commands::reset::handle(command, paths),
        Commands::Config { .. } => cli::commands::config::handle(command, paths),
    }
}

/// Global options that consume the following argument.
const VALUE_FLAGS: [&str; 2] = ["--config", "--data"];

fn is_global_flag(arg: &str) -> bool {
    arg == "--verbose"
        || (arg.len() > 1 && arg.starts_with('-') && arg[1..].bytes().all(|b| b == b'v'))
        || VALUE_FLAGS
            .iter()
            .any(|f| arg.strip_prefix(f).is_some_and(|rest| rest.starts_with('=')))
}

fn is_shortcut_flag(arg: &str) -> bool {
    arg == "-s" || arg == "--shortcut" || arg.starts_with("--shortcut=")
}

/// Rewrites the command word before clap sees it: command names are
/// accepted in any case (`tt STOP`), and `tt -s name` means
/// `tt start -s name`. Global options in front are skipped; everything
/// else is passed through untouched.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().collect();

    let mut pos = 1;
    while let Some(arg) = args.get(pos).and_then(|a| a.to_str()) {
        if VALUE_FLAGS.contains(&arg) {
            pos += 2;
        } else if is_global_flag(arg) {
            pos += 1;
        } else {
            break;
        }
    }

    let Some(word) = args.get(pos).and_then(|a| a.to_str()) else {
        return args;
    };

    if is_shortcut_flag(word) {
        args.insert(pos, OsString::from("start"));
        return args;
    }

    let lower = word.to_lowercase();
    if lower != word {
        // `help` only exists once the command is built
        let mut cmd = Cli::command();
        cmd.build();
        if cmd.find_subcommand(&lower).is_some() {
            args[pos] = OsString::from(lower);
        }
    }
    args
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    // 2️⃣ diagnostics on stderr
    utils::logging::enable_logging(cli.verbose);

    // 3️⃣ resolve the two JSON files
    let paths = AppPaths::resolve(cli.config.as_deref(), cli.data.as_deref());
    debug!(config = %paths.config_file.display(), data = %paths.data_file.display(), "paths");

    // 4️⃣ no command → interactive start
    let command = cli.command.unwrap_or(Commands::Start {
        shortcut: None,
        args: Vec::new(),
    });

    dispatch(&command, &paths)
}
