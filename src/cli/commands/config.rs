use crate::cli::parser::Commands;
use crate::config::{AppPaths, Config};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, header, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, paths: &AppPaths) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config || !*edit_config {
            let config = Config::load(&paths.config_file);
            header("CONFIGURATION");
            println!("📄 Config file : {}", paths.config_file.display());
            println!("🗂️  Data file   : {}", paths.data_file.display());
            println!();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            // the editor needs something to open
            if !paths.config_file.exists() {
                Config::default().save(&paths.config_file)?;
            }
            edit(paths, editor.as_deref())?;
        }
    }

    Ok(())
}

fn edit(paths: &AppPaths, requested: Option<&str>) -> AppResult<()> {
    let path = &paths.config_file;

    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or(&default_editor);

    match Command::new(editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{editor_to_use}'"
            ));
            return Ok(());
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));
        }
    }

    match Command::new(&default_editor).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using fallback '{default_editor}'"
            ));
            Ok(())
        }
        Ok(_) | Err(_) => {
            error(format!(
                "Failed to edit configuration file using fallback '{default_editor}'"
            ));
            Err(AppError::Config(format!(
                "could not open {} in an editor",
                path.display()
            )))
        }
    }
}
