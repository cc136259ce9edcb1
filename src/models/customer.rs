use serde::{Deserialize, Serialize};

/// A customer with its ordered list of projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    #[serde(default)]
    pub projects: Vec<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            projects: Vec::new(),
        }
    }

    /// Append a project unless it is already present.
    /// Returns `true` when the project was added.
    pub fn add_project(&mut self, project: &str) -> bool {
        if self.projects.iter().any(|p| p == project) {
            return false;
        }
        self.projects.push(project.to_string());
        true
    }

    /// 1-based lookup, as shown in the numbered menus.
    pub fn project_at(&self, index: usize) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.projects.get(i))
            .map(String::as_str)
    }
}
