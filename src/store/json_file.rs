use crate::errors::AppResult;
use crate::ui::messages::warning;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Load a JSON document, falling back to `T::default()`.
///
/// - Missing file → default, silently.
/// - Unreadable or malformed file → default, with a warning to the user.
pub fn load_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        debug!(path = %path.display(), "file not found, using defaults");
        return T::default();
    }

    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|content| serde_json::from_str::<T>(&content).map_err(|e| e.to_string()));

    match parsed {
        Ok(value) => {
            trace!(path = %path.display(), "loaded");
            value
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "load failed");
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            warning(format!(
                "Warning: Could not load {name}. Starting with empty data."
            ));
            T::default()
        }
    }
}

/// Write `value` as pretty JSON.
///
/// The document goes to a sibling temp file first and is renamed over the
/// target, so an interrupted write never leaves half a file behind.
pub fn save<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');

    let tmp = path.with_extension("json.tmp");
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;

    debug!(path = %path.display(), bytes = json.len(), "saved");
    Ok(())
}

/// Delete a file; a missing file is not an error.
/// Returns `true` when something was removed.
pub fn remove(path: &Path) -> AppResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "removed");
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}
