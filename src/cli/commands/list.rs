use crate::cli::parser::Commands;
use crate::config::{AppPaths, Config};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::dim;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, paths: &AppPaths) -> AppResult<()> {
    if matches!(cmd, Commands::List) {
        let config = Config::load(&paths.config_file);

        if config.customers.is_empty() {
            info("No customers configured. Add one with: tt add");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("#", 3),
            Column::new("CUSTOMER", 20),
            Column::new("PROJECTS", 0),
        ]);

        for (i, customer) in config.customers.iter().enumerate() {
            let projects = if customer.projects.is_empty() {
                dim("(none)")
            } else {
                customer
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(j, p)| format!("[{}] {}", j + 1, p))
                    .collect::<Vec<_>>()
                    .join("  ")
            };
            table.add_row(vec![(i + 1).to_string(), customer.name.clone(), projects]);
        }

        print!("{}", table.render());
        println!("\nStart with: tt start <customer#> <project#> [task]");
    }
    Ok(())
}
