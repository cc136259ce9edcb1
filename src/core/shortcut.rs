use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Shortcut, Target};

pub struct ShortcutLogic;

impl ShortcutLogic {
    /// Shortcut names are case-insensitive and may be typed with `@`.
    pub fn normalize(name: &str) -> String {
        name.trim().trim_start_matches('@').to_lowercase()
    }

    /// Insert or overwrite a shortcut. Returns `true` when one was replaced.
    pub fn add(config: &mut Config, name: &str, shortcut: Shortcut) -> AppResult<bool> {
        let key = Self::normalize(name);
        if key.is_empty() {
            return Err(AppError::InvalidInput("Shortcut name cannot be empty.".into()));
        }
        Ok(config.shortcuts.insert(key, shortcut).is_some())
    }

    /// Remove a shortcut, returning its normalized name.
    pub fn delete(config: &mut Config, name: &str) -> AppResult<String> {
        let key = Self::normalize(name);
        match config.shortcuts.remove(&key) {
            Some(_) => Ok(key),
            None => Err(AppError::ShortcutNotFound(key)),
        }
    }

    /// Expand a shortcut into a start target; `extra` is appended to the
    /// shortcut's own note.
    pub fn resolve(config: &Config, name: &str, extra: &str) -> AppResult<Target> {
        let key = Self::normalize(name);
        let shortcut = config
            .shortcuts
            .get(&key)
            .ok_or_else(|| AppError::ShortcutNotFound(key.clone()))?;

        let extra = extra.trim();
        let note = match (shortcut.note.is_empty(), extra.is_empty()) {
            (_, true) => shortcut.note.clone(),
            (true, false) => extra.to_string(),
            (false, false) => format!("{}, {}", shortcut.note, extra),
        };

        Ok(Target::new(shortcut.customer.clone(), shortcut.project.clone()).with_note(Some(note)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standup() -> Shortcut {
        Shortcut {
            customer: "Acme Corp".into(),
            project: "Management".into(),
            note: "Daily standup".into(),
        }
    }

    #[test]
    fn add_lowercases_and_reports_overwrite() {
        let mut cfg = Config::default();
        assert!(!ShortcutLogic::add(&mut cfg, "Daily", standup()).unwrap());
        assert!(cfg.shortcuts.contains_key("daily"));
        assert!(ShortcutLogic::add(&mut cfg, "@DAILY", standup()).unwrap());
        assert_eq!(cfg.shortcuts.len(), 1);
    }

    #[test]
    fn add_rejects_empty_name() {
        let mut cfg = Config::default();
        assert!(ShortcutLogic::add(&mut cfg, "@", standup()).is_err());
    }

    #[test]
    fn delete_missing_is_an_error() {
        let mut cfg = Config::default();
        ShortcutLogic::add(&mut cfg, "daily", standup()).unwrap();
        assert_eq!(ShortcutLogic::delete(&mut cfg, "Daily").unwrap(), "daily");
        assert!(matches!(
            ShortcutLogic::delete(&mut cfg, "daily"),
            Err(AppError::ShortcutNotFound(_))
        ));
    }

    #[test]
    fn resolve_merges_notes() {
        let mut cfg = Config::default();
        ShortcutLogic::add(&mut cfg, "daily", standup()).unwrap();
        ShortcutLogic::add(
            &mut cfg,
            "bare",
            Shortcut {
                note: String::new(),
                ..standup()
            },
        )
        .unwrap();

        let t = ShortcutLogic::resolve(&cfg, "DAILY", "").unwrap();
        assert_eq!(t.customer, "Acme Corp");
        assert_eq!(t.note.as_deref(), Some("Daily standup"));

        let t = ShortcutLogic::resolve(&cfg, "daily", "sprint goals").unwrap();
        assert_eq!(t.note.as_deref(), Some("Daily standup, sprint goals"));

        let t = ShortcutLogic::resolve(&cfg, "bare", "").unwrap();
        assert_eq!(t.note, None);

        let t = ShortcutLogic::resolve(&cfg, "bare", "ad hoc").unwrap();
        assert_eq!(t.note.as_deref(), Some("ad hoc"));
    }

    #[test]
    fn resolve_unknown_shortcut() {
        let err = ShortcutLogic::resolve(&Config::default(), "nope", "").unwrap_err();
        assert!(err.to_string().contains("'@nope' not found"));
    }
}
