use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme `{0}`")]
pub struct ThemeParseError(String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀️",
            Self::Dark => "🌙",
        }
    }
}

pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// Stored preference first, then the system color-scheme signal, then dark.
pub fn resolve_theme(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(|value| value.parse().ok()) {
        return theme;
    }

    match system_prefers_dark {
        Some(true) | None => Theme::Dark,
        Some(false) => Theme::Light,
    }
}

pub struct ThemePreference<S> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemePreference<S> {
    pub fn load(store: S, system_prefers_dark: Option<bool>) -> Self {
        let current = resolve_theme(store.load().as_deref(), system_prefers_dark);
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.save(self.current.as_str());
        self.current
    }
}
