//! Persisted light/dark theme preference model.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Preference key holding the persisted theme token.
pub const THEME_PREFERENCE_KEY: &str = "theme-preference";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// User-selected display theme.
pub enum ThemePreference {
    /// Light display mode.
    #[default]
    Light,
    /// Dark display mode.
    Dark,
}

impl ThemePreference {
    /// Stable storage and `data-theme` token.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark theme.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized theme token `{0}`")]
/// Raised when a stored theme token is neither `light` nor `dark`.
pub struct ParseThemeError(pub String);

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}
