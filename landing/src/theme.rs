//! Theme capability.
//!
//! The page never decides its own theme. Callers hand a [`ThemeSource`] to
//! [`crate::render_page`], the page reads it once and exposes the result on
//! its root element as `data-theme`, where the stylesheet picks the palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`EnvTheme`].
pub const THEME_ENV_VAR: &str = "LANDING_THEME";

/// A color scheme the stylesheet knows how to paint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette
    Light,
    /// Dark palette
    Dark,
    /// Follow `prefers-color-scheme`
    #[default]
    System,
}

impl Theme {
    /// Value written to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}' (expected light, dark or system)")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" | "auto" => Ok(Theme::System),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// Anything that can tell the page which theme is current.
///
/// Reads must be cheap and side-effect free; the page calls
/// [`ThemeSource::current_theme`] once per render.
pub trait ThemeSource {
    /// The theme in effect right now.
    fn current_theme(&self) -> Theme;
}

impl ThemeSource for Theme {
    fn current_theme(&self) -> Theme {
        *self
    }
}

/// Theme taken from [`THEME_ENV_VAR`] at read time, [`Theme::System`] when
/// unset or unrecognised.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvTheme;

impl EnvTheme {
    fn resolve(value: Option<&str>) -> Theme {
        match value {
            Some(raw) => raw.parse().unwrap_or_else(|err: UnknownTheme| {
                tracing::warn!("{err}; falling back to {}", Theme::System);
                Theme::System
            }),
            None => Theme::System,
        }
    }
}

impl ThemeSource for EnvTheme {
    fn current_theme(&self) -> Theme {
        Self::resolve(std::env::var(THEME_ENV_VAR).ok().as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_case_insensitively() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("auto".parse::<Theme>(), Ok(Theme::System));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "sepia".parse::<Theme>().unwrap_err();
        assert_eq!(err, UnknownTheme("sepia".into()));
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn theme_is_its_own_source() {
        assert_eq!(Theme::Dark.current_theme(), Theme::Dark);
    }

    #[test]
    fn env_theme_falls_back_to_system() {
        assert_eq!(EnvTheme::resolve(None), Theme::System);
        assert_eq!(EnvTheme::resolve(Some("neon")), Theme::System);
        assert_eq!(EnvTheme::resolve(Some("light")), Theme::Light);
    }
}
