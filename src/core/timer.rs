use crate::core::calculator::billing::round_to_block;
use crate::errors::{AppError, AppResult};
use crate::models::{DailyState, HistoryEntry, RunningTimer, Target};
use crate::utils::time::{epoch_seconds, local_hhmm};
use chrono::{DateTime, Local};
use tracing::debug;

/// Business logic for the running timer.
pub struct TimerLogic;

impl TimerLogic {
    /// Move the running timer (if any) into history.
    pub fn stop(state: &mut DailyState, now: DateTime<Local>) -> Option<HistoryEntry> {
        let current = state.current.take()?;

        let end = epoch_seconds(now);
        // clock moved backwards → bill nothing
        let raw = (end - current.start_timestamp).max(0.0);
        let billed = round_to_block(raw);

        let entry = HistoryEntry {
            customer: current.customer,
            project: current.project,
            duration_seconds: billed,
            raw_seconds: raw,
            notes: current.notes,
            start_str: local_hhmm(current.start_timestamp),
            end_str: local_hhmm(end),
        };
        debug!(
            customer = %entry.customer,
            project = %entry.project,
            raw, billed, "timer stopped"
        );

        state.history.push(entry.clone());
        Some(entry)
    }

    /// Start a timer for `target`, stopping the running one first.
    /// Returns the entry of the stopped timer.
    pub fn start(
        state: &mut DailyState,
        target: &Target,
        now: DateTime<Local>,
    ) -> Option<HistoryEntry> {
        let stopped = Self::stop(state, now);

        let notes = target
            .note
            .iter()
            .filter(|n| !n.trim().is_empty())
            .cloned()
            .collect();

        state.current = Some(RunningTimer {
            customer: target.customer.clone(),
            project: target.project.clone(),
            start_timestamp: epoch_seconds(now),
            notes,
        });
        debug!(customer = %target.customer, project = %target.project, "timer started");

        stopped
    }

    pub fn add_note(state: &mut DailyState, text: &str) -> AppResult<()> {
        let current = state.current.as_mut().ok_or(AppError::NoTimerRunning)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::InvalidInput("Note cannot be empty.".into()));
        }

        current.notes.push(text.to_string());
        Ok(())
    }
}
