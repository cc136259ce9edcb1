/// What a `start` command resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub customer: String,
    pub project: String,
    pub note: Option<String>,
}

impl Target {
    pub fn new(customer: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            project: project.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: Option<String>) -> Self {
        self.note = note.filter(|n| !n.trim().is_empty());
        self
    }
}
