use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Customer;

/// Maintenance of the customer/project catalogue.
pub struct AddLogic;

impl AddLogic {
    /// Make sure `name` exists as a customer. Returns `true` if created.
    pub fn ensure_customer(config: &mut Config, name: &str) -> AppResult<bool> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput("Customer name cannot be empty.".into()));
        }
        if config.customers.iter().any(|c| c.name == name) {
            return Ok(false);
        }
        config.customers.push(Customer::new(name));
        Ok(true)
    }

    /// Add a project to an existing customer. Returns `true` if it was new.
    pub fn add_project(config: &mut Config, customer: &str, project: &str) -> AppResult<bool> {
        let project = project.trim();
        if project.is_empty() {
            return Ok(false);
        }
        let customer = config
            .find_customer_mut(customer.trim())
            .ok_or_else(|| AppError::Config(format!("unknown customer '{customer}'")))?;
        Ok(customer.add_project(project))
    }
}
