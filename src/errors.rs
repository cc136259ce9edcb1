//! Unified application error type.
//! All modules (store, core, cli, ui) return AppError so that `main`
//! has a single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("{0}")]
    InvalidInput(String),

    #[error("Customer ID {0} not found.")]
    CustomerNotFound(String),

    #[error("Shortcut '@{0}' not found. Run 'tt shortcut list' to see available shortcuts.")]
    ShortcutNotFound(String),

    // ---------------------------
    // Timer state
    // ---------------------------
    #[error("No timer running.")]
    NoTimerRunning,

    #[error("Cancelled or Invalid Input.")]
    Cancelled,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
