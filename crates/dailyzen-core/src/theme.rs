//! Theme preference, persisted under the `@theme` key.
//!
//! Outside the habit core proper; rendering is the front end's business.
//! The library only remembers which appearance the user asked for.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, Result};
use crate::storage::{Storage, THEME_KEY};

/// Which appearance the user asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the platform's color scheme.
    #[default]
    System,
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        };
        f.write_str(name)
    }
}

impl FromStr for ThemePreference {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(CoreError::InvalidValue {
                field: "theme".to_string(),
                message: format!("'{other}' is not a theme (light, dark, system)"),
            }),
        }
    }
}

/// Loads the stored preference; absent means [`ThemePreference::System`].
pub fn load_theme(storage: &dyn Storage) -> Result<ThemePreference> {
    match storage.get(THEME_KEY)? {
        Some(raw) => raw.parse(),
        None => Ok(ThemePreference::default()),
    }
}

/// Persists the preference under the `@theme` key.
pub fn save_theme(storage: &dyn Storage, theme: ThemePreference) -> Result<()> {
    storage.set(THEME_KEY, &theme.to_string())?;
    Ok(())
}
