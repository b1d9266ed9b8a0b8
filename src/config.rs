//! Toggle configuration: storage key, stylesheet URLs, and DOM anchors.
//!
//! Every field has a default matching the stock page markup, so an empty JSON
//! object (or no config at all) yields a working setup.

use serde::Deserialize;

use crate::error::ToggleError;
use crate::theme::Theme;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Key under which the preference is persisted.
pub const DEFAULT_STORAGE_KEY: &str = "data-theme";
pub const DEFAULT_LIGHT_HREF: &str = "css/light.css";
pub const DEFAULT_DARK_HREF: &str = "css/dark.css";
pub const DEFAULT_LINK_SELECTOR: &str = "#theme-link";
pub const DEFAULT_TO_DARK_SELECTOR: &str = ".to-dark";
pub const DEFAULT_TO_LIGHT_SELECTOR: &str = ".to-light";
/// Attribute set on `<html>` to expose the applied theme to CSS and scripts.
pub const DEFAULT_MARKER_ATTRIBUTE: &str = "data-theme";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    pub storage_key: String,
    pub light_href: String,
    pub dark_href: String,
    pub link_selector: String,
    pub to_dark_selector: String,
    pub to_light_selector: String,
    pub marker_attribute: String,
    /// Use `prefers-color-scheme` when nothing is stored.
    pub follow_system: bool,
    pub log_level: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            light_href: DEFAULT_LIGHT_HREF.to_owned(),
            dark_href: DEFAULT_DARK_HREF.to_owned(),
            link_selector: DEFAULT_LINK_SELECTOR.to_owned(),
            to_dark_selector: DEFAULT_TO_DARK_SELECTOR.to_owned(),
            to_light_selector: DEFAULT_TO_LIGHT_SELECTOR.to_owned(),
            marker_attribute: DEFAULT_MARKER_ATTRIBUTE.to_owned(),
            follow_system: false,
            log_level: "info".to_owned(),
        }
    }
}

impl ToggleConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Config`] for malformed JSON, unknown fields, or
    /// values rejected by [`ToggleConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ToggleError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the config for values that would break the toggle.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Config`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ToggleError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("light_href", &self.light_href),
            ("dark_href", &self.dark_href),
            ("link_selector", &self.link_selector),
            ("to_dark_selector", &self.to_dark_selector),
            ("to_light_selector", &self.to_light_selector),
            ("marker_attribute", &self.marker_attribute),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ToggleError::Config(format!("{name} must not be empty")));
            }
        }
        if self.light_href == self.dark_href {
            return Err(ToggleError::Config("light_href and dark_href must differ".to_owned()));
        }
        if self.to_dark_selector == self.to_light_selector {
            return Err(ToggleError::Config(
                "to_dark_selector and to_light_selector must differ".to_owned(),
            ));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ToggleError::Config(format!("unknown log_level {:?}", self.log_level)));
        }
        Ok(())
    }

    /// Stylesheet URL for `theme`.
    #[must_use]
    pub fn href_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light_href,
            Theme::Dark => &self.dark_href,
        }
    }

    /// Reverse lookup of [`ToggleConfig::href_for`]. `None` for foreign URLs.
    #[must_use]
    pub fn theme_for_href(&self, href: &str) -> Option<Theme> {
        if href == self.light_href {
            Some(Theme::Light)
        } else if href == self.dark_href {
            Some(Theme::Dark)
        } else {
            None
        }
    }

    /// Parsed `log_level`, falling back to `Info`.
    #[must_use]
    pub fn level(&self) -> log::Level {
        match self.log_level.as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}
