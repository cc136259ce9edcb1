use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::ui::prompt::Prompt;
use std::path::Path;

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → true
/// - file exists and `force` → true
/// - otherwise ask the user; a refusal returns false.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<bool> {
    if !path.exists() || force {
        return Ok(true);
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if Prompt::stdio().confirm("Overwrite? [y/N]: ")? {
        info("Existing file will be overwritten.");
        Ok(true)
    } else {
        info("Export cancelled: existing file not overwritten.");
        Ok(false)
    }
}
