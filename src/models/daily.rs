//! Daily state persisted in the data file: the running timer and the
//! entries completed so far today.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningTimer {
    pub customer: String,
    pub project: String,
    /// Unix epoch seconds.
    pub start_timestamp: f64,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub customer: String,
    pub project: String,
    /// Billed seconds, always a multiple of 900.
    pub duration_seconds: u64,
    pub raw_seconds: f64,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub start_str: String,
    #[serde(default)]
    pub end_str: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyState {
    #[serde(default)]
    pub current: Option<RunningTimer>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl DailyState {
    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }
}
