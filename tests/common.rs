#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, Local};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An isolated pair of config/data files inside a temp dir.
pub struct TestEnv {
    pub dir: TempDir,
    pub config: PathBuf,
    pub data: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config = dir.path().join("tt_config.json");
        let data = dir.path().join("tt_data.json");
        Self { dir, config, data }
    }

    /// Environment with two customers and one shortcut.
    pub fn seeded() -> Self {
        let env = Self::new();
        env.write_config(json!({
            "customers": [
                { "name": "Acme", "projects": ["Web", "Mobile"] },
                { "name": "Globex", "projects": ["Ops"] }
            ],
            "shortcuts": {
                "daily": {
                    "customer": "Acme Corp",
                    "project": "Management",
                    "note": "Daily standup"
                }
            }
        }));
        env
    }

    /// `tt` bound to this environment's files.
    pub fn tt(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("tt");
        cmd.arg("--config")
            .arg(&self.config)
            .arg("--data")
            .arg(&self.data)
            .env_remove("TT_LOG");
        cmd
    }

    pub fn write_config(&self, value: Value) {
        fs::write(&self.config, value.to_string()).expect("write config");
    }

    pub fn write_data(&self, value: Value) {
        fs::write(&self.data, value.to_string()).expect("write data");
    }

    pub fn read_config(&self) -> Value {
        read_json(&self.config)
    }

    pub fn read_data(&self) -> Value {
        read_json(&self.data)
    }

    /// Data file with a timer started `minutes` ago.
    pub fn running_since(&self, minutes: i64, customer: &str, project: &str, notes: &[&str]) {
        self.write_data(json!({
            "current": {
                "customer": customer,
                "project": project,
                "start_timestamp": minutes_ago(minutes),
                "notes": notes
            },
            "history": []
        }));
    }
}

pub fn read_json(path: &Path) -> Value {
    let raw = fs::read_to_string(path).expect("read json file");
    serde_json::from_str(&raw).expect("valid json")
}

pub fn minutes_ago(minutes: i64) -> f64 {
    let t = Local::now() - Duration::minutes(minutes);
    t.timestamp_millis() as f64 / 1000.0
}

pub fn history_entry(customer: &str, project: &str, minutes: u64, notes: &[&str]) -> Value {
    json!({
        "customer": customer,
        "project": project,
        "duration_seconds": minutes * 60,
        "raw_seconds": (minutes * 60) as f64 - 30.0,
        "notes": notes,
        "start_str": "09:00",
        "end_str": "10:00"
    })
}
