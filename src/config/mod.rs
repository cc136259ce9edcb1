//! Permanent configuration: customers, their projects and shortcuts.

pub mod paths;

use crate::errors::AppResult;
use crate::models::{Customer, Shortcut};
use crate::store;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

pub use paths::AppPaths;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub customers: Vec<Customer>,
    /// Keyed by lowercased name; BTreeMap keeps listings sorted.
    #[serde(default)]
    pub shortcuts: BTreeMap<String, Shortcut>,
}

impl Config {
    /// Load configuration from file, or return an empty one if not found.
    pub fn load(path: &Path) -> Self {
        store::load_or_default(path)
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        store::save(path, self)
    }

    /// 1-based lookup, as shown in the numbered menus.
    pub fn customer_at(&self, index: usize) -> Option<&Customer> {
        index.checked_sub(1).and_then(|i| self.customers.get(i))
    }

    pub fn find_customer_mut(&mut self, name: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.name == name)
    }
}
