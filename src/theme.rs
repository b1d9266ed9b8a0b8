//! The two theme variants and their persisted string form.

use std::fmt;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Color theme applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Document default; also used when nothing is stored.
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other variant.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Decode a stored preference.
    ///
    /// Only the exact string `"dark"` selects [`Theme::Dark`]. Absent values
    /// and anything unrecognized fall back to [`Theme::Light`].
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Self::Dark,
            Some("light") | None => Self::Light,
            Some(other) => {
                log::debug!("theme: ignoring unrecognized stored value {other:?}");
                Self::Light
            }
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
