mod theme_store;
mod types;

pub use theme_store::{ACCENT_COLOR_KEY, THEME_KEY, ThemeStore};
pub use types::{AccentColor, Theme};
