//! Light and dark display themes.

use serde::{Deserialize, Serialize};

use crate::Rgb;

/// Display theme. The user's choice is persisted between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Switch to the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Canvas background color.
    pub fn background(self) -> Rgb {
        match self {
            Theme::Dark => Rgb::new(11, 15, 25),
            Theme::Light => Rgb::new(244, 246, 250),
        }
    }

    /// Primary text color.
    pub fn foreground(self) -> Rgb {
        match self {
            Theme::Dark => Rgb::new(230, 237, 243),
            Theme::Light => Rgb::new(24, 28, 40),
        }
    }

    /// Color for secondary text such as the help line.
    pub fn muted(self) -> Rgb {
        match self {
            Theme::Dark => Rgb::new(110, 118, 129),
            Theme::Light => Rgb::new(120, 126, 138),
        }
    }

    /// Accent color for key hints and titles.
    pub fn accent(self) -> Rgb {
        match self {
            Theme::Dark => Rgb::new(0, 245, 212),
            Theme::Light => Rgb::new(0, 150, 136),
        }
    }

    /// Short symbol shown next to the theme key hint.
    pub fn symbol(self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀️",
        }
    }
}
