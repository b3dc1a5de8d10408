use common::theme::{AccentColor, Theme};
use ratatui::style::{Color, Style};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub accent: Color,
}

impl Palette {
    pub fn new(theme: Theme, accent: AccentColor) -> Self {
        let (r, g, b) = accent.rgb();
        let accent = Color::Rgb(r, g, b);
        match theme {
            Theme::Dark => Self {
                background: Color::Rgb(10, 10, 10),
                foreground: Color::Rgb(229, 229, 229),
                muted: Color::Rgb(115, 115, 115),
                accent,
            },
            Theme::Light => Self {
                background: Color::Rgb(250, 250, 250),
                foreground: Color::Rgb(23, 23, 23),
                muted: Color::Rgb(140, 140, 140),
                accent,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::new().fg(self.foreground).bg(self.background)
    }

    pub fn accent(&self) -> Style {
        Style::new().fg(self.accent).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::new().fg(self.muted).bg(self.background)
    }
}
