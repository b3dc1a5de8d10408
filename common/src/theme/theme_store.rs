use std::str::FromStr;

use crate::config::KeyValueStore;
use crate::log_warn;
use super::types::{AccentColor, Theme};

pub const THEME_KEY: &str = "theme";
pub const ACCENT_COLOR_KEY: &str = "accentColor";

/// Theme and accent colour with write-through persistence.
///
/// Mutations update memory first, then write to the store; a failed write is returned
/// but the new value stays in effect for the rest of the process.
pub struct ThemeStore<S: KeyValueStore> {
    store: S,
    theme: Theme,
    accent_color: AccentColor,
}

impl<S: KeyValueStore> ThemeStore<S> {
    /// Reads persisted values, falling back to defaults for missing or unknown ones.
    pub fn load(store: S) -> Self {
        let theme = read_or_default(&store, THEME_KEY);
        let accent_color = read_or_default(&store, ACCENT_COLOR_KEY);
        Self {
            store,
            theme,
            accent_color,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn accent_color(&self) -> AccentColor {
        self.accent_color
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, String> {
        self.theme = self.theme.toggled();
        self.store.set(THEME_KEY, self.theme.as_str())?;
        Ok(self.theme)
    }

    pub fn set_accent_color(&mut self, color: AccentColor) -> Result<(), String> {
        self.accent_color = color;
        self.store.set(ACCENT_COLOR_KEY, color.as_str())
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn read_or_default<T>(store: &impl KeyValueStore, key: &str) -> T
where
    T: FromStr<Err = String> + Default,
{
    match store.get(key) {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: String| {
            log_warn!("Ignoring stored {}: {}", key, e);
            T::default()
        }),
        Ok(None) => T::default(),
        Err(e) => {
            log_warn!("Failed to read {}: {}", key, e);
            T::default()
        }
    }
}
