//! Light/dark theme preference.

use serde::{Deserialize, Serialize};

use crate::preferences::{PreferenceError, PreferenceStore};

/// Preference key holding the theme.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored value wins; otherwise follow the system preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
        match stored {
            Some("dark") => Theme::Dark,
            Some("light") => Theme::Light,
            _ if prefers_dark => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn load(store: &impl PreferenceStore, prefers_dark: bool) -> Result<Theme, PreferenceError> {
        let stored = store.get(THEME_KEY)?;
        Ok(Theme::resolve(stored.as_deref(), prefers_dark))
    }

    pub fn persist(self, store: &mut impl PreferenceStore) -> Result<(), PreferenceError> {
        store.set(THEME_KEY, self.as_str())
    }
}

impl core::fmt::Display for Theme {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preferences::InMemoryPreferences;

    #[test]
    fn stored_theme_overrides_system_preference() {
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_system_preference() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn persist_then_load() {
        let mut prefs = InMemoryPreferences::new();
        Theme::Dark.persist(&mut prefs).unwrap();

        assert_eq!(Theme::load(&prefs, false).unwrap(), Theme::Dark);
        assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }
}
