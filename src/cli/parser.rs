use crate::export::ReportFormat;
use clap::{ArgAction, Parser, Subcommand};

const AFTER_HELP: &str = "\
All times are rounded up to the nearest 15 minutes per session.

Quick forms:
  tt                          Interactive start
  tt 1 2 [TASK...]            Same as 'tt start 1 2 [TASK...]'
  tt @daily [NOTE...]         Start using a saved shortcut

Example workflow:
  tt shortcut add daily \"Acme\" \"Mgmt\" \"Daily standup\"
  tt start @daily
  tt note \"Discussed sprint goals\"
  tt stop
  tt report";

/// Command-line interface definition for tt
#[derive(Parser)]
#[command(
    name = "tt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track time against customers and projects, billed in 15-minute blocks",
    long_about = None,
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Override the configuration file (customers, projects, shortcuts)
    #[arg(global = true, long = "config", env = "TT_CONFIG", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the daily data file (running timer and history)
    #[arg(global = true, long = "data", env = "TT_DATA", value_name = "FILE")]
    pub data: Option<String>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start a timer (a running timer is stopped first)
    Start {
        /// Start from a saved shortcut (same as '@NAME')
        #[arg(short = 's', long = "shortcut", value_name = "NAME")]
        shortcut: Option<String>,

        /// [CUSTOMER [PROJECT [TASK...]]] by number or name, or @SHORTCUT [NOTE...]
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Add a note to the running timer
    Note {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Stop the running timer
    #[command(visible_alias = "pause")]
    Stop,

    /// Show today's report grouped by customer and project
    #[command(visible_alias = "status")]
    Report {
        #[arg(long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite FILE without asking
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the report and copy a one-line-per-project summary to the clipboard
    Copy {
        /// Print the summary instead of using the clipboard
        #[arg(long)]
        print: bool,
    },

    /// Add a customer and its projects (prompts when no arguments are given)
    Add {
        customer: Option<String>,
        projects: Vec<String>,
    },

    /// List customers and projects with the numbers used by 'start'
    List,

    /// Manage shortcuts for recurring tasks
    #[command(visible_alias = "shortcuts")]
    Shortcut {
        /// Print '@name' per line (for shell completion)
        #[arg(long)]
        complete: bool,

        #[command(subcommand)]
        action: Option<ShortcutAction>,
    },

    /// Clear today's data
    Reset {
        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show file locations and configuration, or edit the configuration
    Config {
        #[arg(long = "print", help = "Print paths and the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Anything else is treated as arguments to 'start'
    #[command(external_subcommand)]
    Quick(Vec<String>),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutAction {
    /// List all saved shortcuts
    List,

    /// Create or overwrite a shortcut
    Add {
        name: String,
        customer: String,
        project: String,
        #[arg(trailing_var_arg = true)]
        note: Vec<String>,
    },

    /// Remove a shortcut
    #[command(visible_aliases = ["remove", "rm"])]
    Delete { name: String },

    /// Print 'name<TAB>customer<TAB>project<TAB>note' lines for fzf
    Pick,
}
