//! System clipboard access.
//!
//! The clipboard may be missing (SSH sessions, headless machines); callers
//! get an error they can downgrade to a warning.

use crate::errors::{AppError, AppResult};
use arboard::Clipboard;
use tracing::debug;

pub fn copy_to_clipboard(text: &str) -> AppResult<()> {
    let mut clipboard = Clipboard::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_owned())
        .map_err(|e| AppError::Clipboard(e.to_string()))?;
    debug!(bytes = text.len(), "copied to clipboard");
    Ok(())
}
