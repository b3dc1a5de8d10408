use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("Unknown theme '{}'", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccentColor {
    #[default]
    Emerald,
    Cyan,
    Indigo,
    Rose,
    Amber,
}

impl AccentColor {
    pub const ALL: [AccentColor; 5] = [
        AccentColor::Emerald,
        AccentColor::Cyan,
        AccentColor::Indigo,
        AccentColor::Rose,
        AccentColor::Amber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Emerald => "emerald",
            AccentColor::Cyan => "cyan",
            AccentColor::Indigo => "indigo",
            AccentColor::Rose => "rose",
            AccentColor::Amber => "amber",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccentColor::Emerald => "Emerald",
            AccentColor::Cyan => "Cyan",
            AccentColor::Indigo => "Indigo",
            AccentColor::Rose => "Rose",
            AccentColor::Amber => "Amber",
        }
    }

    /// Next colour in picker order, wrapping around.
    pub fn next(&self) -> AccentColor {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// 400-shade RGB used when drawing with the accent.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            AccentColor::Emerald => (52, 211, 153),
            AccentColor::Cyan => (34, 211, 238),
            AccentColor::Indigo => (129, 140, 248),
            AccentColor::Rose => (251, 113, 133),
            AccentColor::Amber => (251, 191, 36),
        }
    }
}

impl FromStr for AccentColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| format!("Unknown accent color '{}'", s))
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
