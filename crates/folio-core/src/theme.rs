//! Theme flag and the two fixed palettes.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// The page theme. Every effect receives it by value and never mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Flip between dark and light.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Lowercase name, as used in the config file.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Get the palette for this theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette::DARK,
            Theme::Light => Palette::LIGHT,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(format!("unknown theme '{other}' (expected 'dark' or 'light')")),
        }
    }
}

/// Colors used by the page and the effects for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Page background, also the blend target for translucent effects.
    pub background: Color,
    /// Accent used for particles, the pointer trail and links.
    pub accent: Color,
    /// Body text.
    pub text: Color,
    /// Secondary text.
    pub muted: Color,
    /// Section headings.
    pub heading: Color,
    /// Active navigation item.
    pub highlight: Color,
    /// Overall opacity of the particle surface.
    pub surface_opacity: f32,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::Rgb(10, 12, 22),
        accent: Color::Rgb(0, 245, 255),
        text: Color::Rgb(224, 224, 224),
        muted: Color::Rgb(176, 176, 176),
        heading: Color::Rgb(0, 245, 255),
        highlight: Color::Rgb(0, 245, 255),
        surface_opacity: 0.9,
    };

    pub const LIGHT: Palette = Palette {
        background: Color::Rgb(250, 247, 255),
        accent: Color::Rgb(124, 58, 237),
        text: Color::Rgb(31, 41, 55),
        muted: Color::Rgb(55, 65, 81),
        heading: Color::Rgb(153, 27, 27),
        highlight: Color::Rgb(220, 38, 38),
        surface_opacity: 0.8,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ_by_accent() {
        assert_eq!(Theme::Dark.palette().accent, Color::Rgb(0, 245, 255));
        assert_eq!(Theme::Light.palette().accent, Color::Rgb(124, 58, 237));
    }

    #[test]
    fn test_parse_theme() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert!("sepia".parse::<Theme>().is_err());
    }
}
