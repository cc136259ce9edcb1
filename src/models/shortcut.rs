use serde::{Deserialize, Serialize};

/// Named preset for a recurring (customer, project, note) start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    pub customer: String,
    pub project: String,
    #[serde(default)]
    pub note: String,
}
