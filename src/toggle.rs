//! Theme toggle controller.
//!
//! Owns the authoritative [`Theme`] together with the page and the preference
//! store. The stylesheet link, button visibility, and marker attribute are
//! always re-derived from `current`; they hold no state of their own.
//!
//! DESIGN
//! ======
//! The enum field is the single source of truth. If something else rewrites
//! the stylesheet link, the next toggle logs the drift and flips relative to
//! the field, overwriting the foreign `href`.

use crate::config::ToggleConfig;
use crate::page::{ThemePage, ToggleButton};
use crate::store::PreferenceStore;
use crate::theme::Theme;

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

/// Controller state: current theme plus the page and store it drives.
pub struct ThemeToggle<P, S> {
    current: Theme,
    page: P,
    store: S,
    config: ToggleConfig,
}

impl<P: ThemePage, S: PreferenceStore> ThemeToggle<P, S> {
    /// Restore the stored preference and bring the page in line with it.
    ///
    /// A stored `dark` is applied without writing it back. Otherwise the page
    /// is already in its light default, so only the "switch to light" button
    /// is hidden and the stylesheet is left alone.
    pub fn init(page: P, store: S, config: ToggleConfig) -> Self {
        let stored = match store.load(&config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("toggle: {err}; starting from the default theme");
                None
            }
        };

        let initial = match stored.as_deref() {
            None if config.follow_system && page.prefers_dark() => {
                log::debug!("toggle: no stored preference, following system dark scheme");
                Theme::Dark
            }
            raw => Theme::from_stored(raw),
        };

        let mut toggle = Self { current: initial, page, store, config };
        match initial {
            Theme::Dark => toggle.apply(Theme::Dark),
            Theme::Light => toggle.page.set_button_visible(ToggleButton::ToLight, false),
        }
        log::info!("toggle: initialized with {initial} theme");
        toggle
    }

    /// Flip to the other theme, apply it, and persist it. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.check_drift();
        let next = self.current.toggled();
        self.commit(next);
        log::info!("toggle: switched to {next} theme");
        next
    }

    /// Apply and persist an explicit theme.
    ///
    /// The page is only touched when `theme` differs from the current one;
    /// the value is persisted either way.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme == self.current {
            self.persist(theme);
            return;
        }
        self.commit(theme);
    }

    /// The authoritative current theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn page(&self) -> &P {
        &self.page
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    /// Theme implied by the page's current stylesheet link, if recognizable.
    #[must_use]
    pub fn stylesheet_theme(&self) -> Option<Theme> {
        self.config.theme_for_href(&self.page.stylesheet_href())
    }

    fn commit(&mut self, theme: Theme) {
        self.apply(theme);
        self.current = theme;
        self.persist(theme);
    }

    /// Derive marker, stylesheet, and button visibility from `theme`.
    fn apply(&mut self, theme: Theme) {
        log::debug!("toggle: applying {theme} theme");
        self.page.set_marker(&self.config.marker_attribute, theme.as_str());
        self.page.set_stylesheet_href(self.config.href_for(theme));
        // Show the button for the theme the user would switch to.
        self.page.set_button_visible(ToggleButton::ToDark, !theme.is_dark());
        self.page.set_button_visible(ToggleButton::ToLight, theme.is_dark());
    }

    fn persist(&mut self, theme: Theme) {
        if let Err(err) = self.store.save(&self.config.storage_key, theme.as_str()) {
            log::warn!("toggle: {err}; {theme} theme will not survive a reload");
        }
    }

    fn check_drift(&self) {
        let href = self.page.stylesheet_href();
        match self.config.theme_for_href(&href) {
            Some(theme) if theme == self.current => {}
            Some(theme) => {
                log::warn!("toggle: stylesheet shows {theme} but state is {}; state wins", self.current);
            }
            // The link still carries the markup's own href until the first apply.
            None if self.current == Theme::Light => {}
            None => log::warn!("toggle: unrecognized stylesheet href {href:?}; state is {}", self.current),
        }
    }
}
