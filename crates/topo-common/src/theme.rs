//! Light/dark theme selection.
//!
//! The theme is owned by an external collaborator (a settings toggle, a
//! cookie, the OS preference). The renderer only consumes it to pick a stroke
//! color; geometry never depends on it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{TopoError, TopoResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse `"light"` or `"dark"`, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> TopoResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(TopoError::InvalidTheme(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Pick the active theme: an explicitly stored choice wins, otherwise the
    /// system color-scheme preference.
    pub fn resolve(initial: Option<Theme>, prefers_dark: bool) -> Self {
        initial.unwrap_or(if prefers_dark { Theme::Dark } else { Theme::Light })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = TopoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
