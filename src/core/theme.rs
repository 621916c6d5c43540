//! Light/dark theming.
//!
//! The theme is a presentation attribute held in application state for the
//! lifetime of the session; it is not persisted. Each theme maps to a
//! fixed palette applied across all widgets.

use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Rgb(32, 44, 55),
                surface: Color::Rgb(43, 57, 69),
                text: Color::White,
                muted: Color::Rgb(133, 153, 170),
                accent: Color::Rgb(255, 203, 107),
            },
            Theme::Light => Palette {
                background: Color::Rgb(250, 250, 250),
                surface: Color::White,
                text: Color::Rgb(17, 21, 23),
                muted: Color::Rgb(110, 110, 110),
                accent: Color::Rgb(180, 120, 0),
            },
        }
    }
}

/// Resolved widget colors for the active theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_both_ways() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
    }

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
    }
}
