//! Turn `start` arguments into a (customer, project, note) target.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Customer, Target};
use crate::ui::prompt::{Choice, Prompt};
use std::io::{BufRead, Write};

/// How the `start` command was invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartRequest {
    /// `-s name [extra...]` or `@name [extra...]`
    Shortcut { name: String, extra: String },
    /// Customer / project given by index or name, or nothing at all.
    Args(Vec<String>),
}

impl StartRequest {
    pub fn parse(shortcut: Option<&str>, args: &[String]) -> Self {
        if let Some(name) = shortcut {
            return Self::Shortcut {
                name: name.to_string(),
                extra: args.join(" "),
            };
        }

        match args.split_first() {
            Some((first, rest)) if first.starts_with('@') => Self::Shortcut {
                name: first[1..].to_string(),
                extra: rest.join(" "),
            },
            _ => Self::Args(args.to_vec()),
        }
    }
}

fn as_index(raw: &str) -> Option<Option<usize>> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // numeric but too large to be an index
    Some(raw.parse::<usize>().ok())
}

/// Resolve positional `start` arguments, prompting for whatever is missing.
pub fn resolve_target<R: BufRead, W: Write>(
    config: &Config,
    args: &[String],
    prompt: &mut Prompt<R, W>,
) -> AppResult<Target> {
    let target = match args {
        [] => interactive(config, prompt)?,
        [customer] => from_customer_only(config, customer, prompt)?,
        [customer, project, note @ ..] => {
            let note = (!note.is_empty()).then(|| note.join(" "));
            Some(from_full_args(config, customer, project).with_note(note))
        }
    };

    match target {
        Some(t) if !t.customer.trim().is_empty() && !t.project.trim().is_empty() => Ok(t),
        _ => Err(AppError::Cancelled),
    }
}

fn interactive<R: BufRead, W: Write>(
    config: &Config,
    prompt: &mut Prompt<R, W>,
) -> AppResult<Option<Target>> {
    prompt.say("\n--- SELECT CUSTOMER ---")?;

    match prompt.select(&config.customers, |c| c.name.as_str(), "Select Customer")? {
        Some(Choice::Picked(customer)) => pick_project(customer, prompt),
        Some(Choice::Typed(name)) => {
            let project = ask_project_name(prompt)?;
            Ok(Some(Target::new(name, project)))
        }
        None => Ok(None),
    }
}

fn from_customer_only<R: BufRead, W: Write>(
    config: &Config,
    raw: &str,
    prompt: &mut Prompt<R, W>,
) -> AppResult<Option<Target>> {
    match as_index(raw) {
        Some(index) => {
            let customer = index
                .and_then(|i| config.customer_at(i))
                .ok_or_else(|| AppError::CustomerNotFound(raw.to_string()))?;
            pick_project(customer, prompt)
        }
        None => {
            let project = ask_project_name(prompt)?;
            Ok(Some(Target::new(raw, project)))
        }
    }
}

/// Indices that do not match anything fall back to the literal text.
fn from_full_args(config: &Config, raw_customer: &str, raw_project: &str) -> Target {
    let customer = as_index(raw_customer)
        .flatten()
        .and_then(|i| config.customer_at(i));

    let Some(customer) = customer else {
        return Target::new(raw_customer, raw_project);
    };

    let project = as_index(raw_project)
        .flatten()
        .and_then(|i| customer.project_at(i))
        .unwrap_or(raw_project);

    Target::new(customer.name.clone(), project)
}

fn pick_project<R: BufRead, W: Write>(
    customer: &Customer,
    prompt: &mut Prompt<R, W>,
) -> AppResult<Option<Target>> {
    prompt.say(format!("\n--- SELECT PROJECT FOR '{}' ---", customer.name))?;

    let project = match prompt.select(&customer.projects, |p| p.as_str(), "Select Project")? {
        Some(Choice::Picked(p)) => p.clone(),
        Some(Choice::Typed(p)) => p,
        None => return Ok(None),
    };
    Ok(Some(Target::new(customer.name.clone(), project)))
}

fn ask_project_name<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> AppResult<String> {
    match prompt.ask("Enter Project Name: ")? {
        Some(p) if !p.is_empty() => Ok(p),
        _ => Err(AppError::InvalidInput("Project name cannot be empty.".into())),
    }
}
