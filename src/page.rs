//! DOM seam for the toggle.
//!
//! [`crate::toggle::ThemeToggle`] drives the page only through [`ThemePage`],
//! so its behavior can be tested without a browser. `dom::DomPage` is the
//! `web-sys` implementation.

/// One of the two mutually exclusive toggle buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleButton {
    /// "Switch to dark"; shown while the light theme is applied.
    ToDark,
    /// "Switch to light"; shown while the dark theme is applied.
    ToLight,
}

/// The page elements a theme change touches.
pub trait ThemePage {
    /// Current `href` of the theme stylesheet link.
    fn stylesheet_href(&self) -> String;

    fn set_stylesheet_href(&mut self, href: &str);

    fn set_button_visible(&mut self, button: ToggleButton, visible: bool);

    /// Set the document-level marker attribute (on `<html>`) to `value`.
    fn set_marker(&mut self, attribute: &str, value: &str);

    /// Whether the user agent reports `prefers-color-scheme: dark`.
    fn prefers_dark(&self) -> bool {
        false
    }
}
