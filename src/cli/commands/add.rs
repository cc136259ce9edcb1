use crate::cli::parser::Commands;
use crate::config::{AppPaths, Config};
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::ui::prompt::Prompt;

/// Add a customer and projects to the configuration.
///
/// With a customer argument everything is taken from the command line;
/// otherwise the customer and its projects are asked interactively.
pub fn handle(cmd: &Commands, paths: &AppPaths) -> AppResult<()> {
    if let Commands::Add { customer, projects } = cmd {
        let mut config = Config::load(&paths.config_file);
        let mut prompt = Prompt::stdio();

        let name = match customer {
            Some(c) => c.trim().to_string(),
            None => {
                header("ADD NEW ENTRY");
                prompt.ask("Customer Name: ")?.unwrap_or_default()
            }
        };

        if AddLogic::ensure_customer(&mut config, &name)? {
            info(format!("Created customer '{name}'."));
        }

        let add_one = |config: &mut Config, project: &str| -> AppResult<()> {
            if AddLogic::add_project(config, &name, project)? {
                println!(" + Added project '{}'", project.trim());
            }
            Ok(())
        };

        if customer.is_some() {
            for p in projects {
                add_one(&mut config, p.as_str())?;
            }
        } else {
            let question = format!("Add Project for '{name}' (Enter to finish): ");
            while let Some(p) = prompt.ask(&question)? {
                if p.is_empty() {
                    break;
                }
                add_one(&mut config, p.as_str())?;
            }
        }

        config.save(&paths.config_file)?;
        success("Saved.");
    }
    Ok(())
}
