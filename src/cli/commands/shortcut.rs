use crate::cli::parser::{Commands, ShortcutAction};
use crate::config::{AppPaths, Config};
use crate::core::shortcut::ShortcutLogic;
use crate::errors::AppResult;
use crate::models::Shortcut;
use crate::ui::messages::{event, header, success, warning};
use ansi_term::Colour;

pub fn handle(cmd: &Commands, paths: &AppPaths) -> AppResult<()> {
    if let Commands::Shortcut { complete, action } = cmd {
        let mut config = Config::load(&paths.config_file);

        // ---- SHELL COMPLETION ----
        if *complete {
            for name in config.shortcuts.keys() {
                println!("@{name}");
            }
            return Ok(());
        }

        match action {
            None | Some(ShortcutAction::List) => print_list(&config),
            Some(ShortcutAction::Pick) => {
                for (name, s) in &config.shortcuts {
                    println!("{name}\t{}\t{}\t{}", s.customer, s.project, s.note);
                }
            }
            Some(ShortcutAction::Add {
                name,
                customer,
                project,
                note,
            }) => {
                let key = ShortcutLogic::normalize(name);
                let shortcut = Shortcut {
                    customer: customer.clone(),
                    project: project.clone(),
                    note: note.join(" "),
                };

                if ShortcutLogic::add(&mut config, name, shortcut)? {
                    warning(format!("Shortcut '@{key}' already exists. Overwriting..."));
                }
                config.save(&paths.config_file)?;

                success(format!("Shortcut '@{key}' created."));
                println!("   Use with: tt start @{key}");
            }
            Some(ShortcutAction::Delete { name }) => {
                let key = ShortcutLogic::delete(&mut config, name)?;
                config.save(&paths.config_file)?;
                event("🗑️", format!("Shortcut '@{key}' deleted."));
            }
        }
    }
    Ok(())
}

fn print_list(config: &Config) {
    if config.shortcuts.is_empty() {
        println!("No shortcuts defined.");
        println!("Create one with: tt shortcut add <name> <customer> <project> [note]");
        return;
    }

    header("SHORTCUTS");
    for (name, s) in &config.shortcuts {
        let note = if s.note.is_empty() {
            String::new()
        } else {
            format!(" - {}", s.note)
        };
        println!(
            "  {} → {} / {}{}",
            Colour::Yellow.paint(format!("@{name:<12}")),
            s.customer,
            s.project,
            note
        );
    }
    println!("\nTotal: {} shortcut(s)", config.shortcuts.len());
    println!("Usage: tt start @{{name}} or tt start -s {{name}}");
}
