//! Time utilities: epoch timestamps and local wall-clock labels.

use chrono::{DateTime, Local, TimeZone};

/// Fractional Unix timestamp for `now`.
pub fn epoch_seconds(now: DateTime<Local>) -> f64 {
    now.timestamp_millis() as f64 / 1000.0
}

/// Local `HH:MM` for an epoch timestamp; `--:--` if out of range.
pub fn local_hhmm(epoch: f64) -> String {
    let secs = epoch.floor() as i64;
    let nanos = ((epoch - epoch.floor()) * 1e9) as u32;
    match Local.timestamp_opt(secs, nanos).single() {
        Some(dt) => dt.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
