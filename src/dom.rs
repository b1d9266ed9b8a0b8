//! `web-sys` implementations of [`ThemePage`] and [`PreferenceStore`].
//!
//! Requires a browser environment; compiled only with the `hydrate` feature.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlLinkElement, Storage, Window};

use crate::config::ToggleConfig;
use crate::error::{StorageError, ToggleError};
use crate::page::{ThemePage, ToggleButton};
use crate::store::PreferenceStore;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub(crate) fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// The live page: stylesheet link, both button groups, and `<html>`.
pub struct DomPage {
    window: Window,
    document: Document,
    link: HtmlLinkElement,
    to_dark: Vec<HtmlElement>,
    to_light: Vec<HtmlElement>,
}

impl DomPage {
    /// Resolve every anchor named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::MissingElement`] if the link or either button
    /// group is absent, and [`ToggleError::Dom`] for invalid selectors or a
    /// link selector matching something other than `<link>`.
    pub fn locate(window: Window, config: &ToggleConfig) -> Result<Self, ToggleError> {
        let document = window
            .document()
            .ok_or_else(|| ToggleError::Dom("window has no document".to_owned()))?;

        let link = document
            .query_selector(&config.link_selector)
            .map_err(|e| ToggleError::Dom(js_reason(&e)))?
            .ok_or_else(|| ToggleError::MissingElement { selector: config.link_selector.clone() })?
            .dyn_into::<HtmlLinkElement>()
            .map_err(|_| ToggleError::Dom(format!("{} is not a <link> element", config.link_selector)))?;

        let to_dark = query_buttons(&document, &config.to_dark_selector)?;
        let to_light = query_buttons(&document, &config.to_light_selector)?;

        Ok(Self { window, document, link, to_dark, to_light })
    }

    /// Every toggle button element, both groups.
    pub fn buttons(&self) -> impl Iterator<Item = &HtmlElement> {
        self.to_dark.iter().chain(self.to_light.iter())
    }

    fn group(&self, button: ToggleButton) -> &[HtmlElement] {
        match button {
            ToggleButton::ToDark => &self.to_dark,
            ToggleButton::ToLight => &self.to_light,
        }
    }
}

fn query_buttons(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, ToggleError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|e| ToggleError::Dom(js_reason(&e)))?;
    let mut buttons = Vec::new();
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else {
            continue;
        };
        match node.dyn_into::<HtmlElement>() {
            Ok(el) => buttons.push(el),
            Err(_) => log::debug!("dom: skipping non-HTML match for {selector}"),
        }
    }
    if buttons.is_empty() {
        return Err(ToggleError::MissingElement { selector: selector.to_owned() });
    }
    Ok(buttons)
}

impl ThemePage for DomPage {
    fn stylesheet_href(&self) -> String {
        // Raw attribute, not the resolved absolute `href` property.
        self.link.get_attribute("href").unwrap_or_default()
    }

    fn set_stylesheet_href(&mut self, href: &str) {
        self.link.set_href(href);
    }

    fn set_button_visible(&mut self, button: ToggleButton, visible: bool) {
        for el in self.group(button) {
            let style = el.style();
            let result = if visible {
                style.remove_property("display").map(|_| ())
            } else {
                style.set_property("display", "none")
            };
            if let Err(err) = result {
                log::warn!("dom: failed to update {button:?} visibility: {}", js_reason(&err));
            }
        }
    }

    fn set_marker(&mut self, attribute: &str, value: &str) {
        let Some(root) = self.document.document_element() else {
            log::warn!("dom: document has no root element for {attribute}");
            return;
        };
        if let Err(err) = root.set_attribute(attribute, value) {
            log::warn!("dom: failed to set {attribute}: {}", js_reason(&err));
        }
    }

    fn prefers_dark(&self) -> bool {
        match self.window.match_media(DARK_SCHEME_QUERY) {
            Ok(Some(mq)) => mq.matches(),
            Ok(None) => false,
            Err(err) => {
                log::debug!("dom: match_media failed: {}", js_reason(&err));
                false
            }
        }
    }
}

/// `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Open the origin's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when storage is disabled or
    /// access throws (e.g. blocked third-party context).
    pub fn open(window: &Window) -> Result<Self, StorageError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable("localStorage is disabled".to_owned())),
            Err(err) => Err(StorageError::Unavailable(js_reason(&err))),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Read { key: key.to_owned(), reason: js_reason(&e) })
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_owned(), reason: js_reason(&e) })
    }
}
