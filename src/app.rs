//! WASM entry point.
//!
//! Installs logging, reads the optional page config, restores the stored
//! theme, and binds every toggle button to one shared controller.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use crate::config::ToggleConfig;
use crate::dom::{DomPage, LocalStore, js_reason};
use crate::error::ToggleError;
use crate::store::FallbackStore;
use crate::toggle::ThemeToggle;

/// Id of an optional `<script type="application/json">` holding a [`ToggleConfig`].
pub const CONFIG_ELEMENT_ID: &str = "theme-toggle-config";

type SharedToggle = Rc<RefCell<ThemeToggle<DomPage, FallbackStore<LocalStore>>>>;

/// Runs once when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let config = read_config(&document);
    let level = config.as_ref().map_or(log::Level::Info, ToggleConfig::level);
    if console_log::init_with_level(level).is_err() {
        log::debug!("app: logger already installed");
    }
    let config = config.unwrap_or_else(|err| {
        log::error!("app: {err}; using default theme config");
        ToggleConfig::default()
    });

    if let Err(err) = mount(window, config) {
        log::error!("app: theme toggle disabled: {err}");
    }
}

fn read_config(document: &Document) -> Result<ToggleConfig, ToggleError> {
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(ToggleConfig::default());
    };
    ToggleConfig::from_json(&el.text_content().unwrap_or_default())
}

fn mount(window: web_sys::Window, config: ToggleConfig) -> Result<(), ToggleError> {
    let store = match LocalStore::open(&window) {
        Ok(local) => FallbackStore::new(local),
        Err(err) => {
            log::warn!("app: {err}; theme preference will last for this session only");
            FallbackStore::memory_only()
        }
    };
    let page = DomPage::locate(window, &config)?;
    let toggle: SharedToggle = Rc::new(RefCell::new(ThemeToggle::init(page, store, config)));
    wire_buttons(&toggle)
}

fn wire_buttons(toggle: &SharedToggle) -> Result<(), ToggleError> {
    let handler = Closure::<dyn FnMut(Event)>::new({
        let toggle = Rc::clone(toggle);
        move |_event: Event| match toggle.try_borrow_mut() {
            Ok(mut toggle) => {
                toggle.toggle();
            }
            Err(_) => log::warn!("app: toggle still running; click ignored"),
        }
    });

    for button in toggle.borrow().page().buttons() {
        button
            .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
            .map_err(|e| ToggleError::Dom(js_reason(&e)))?;
    }

    // Listeners live for the page lifetime.
    handler.forget();
    Ok(())
}
