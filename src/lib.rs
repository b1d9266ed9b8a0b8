//! # theme-toggle
//!
//! Light/dark theme switcher for static pages, compiled to WebAssembly.
//!
//! The page ships one stylesheet `<link>` and two buttons ("switch to dark",
//! "switch to light"). On load the stored preference is restored; each click
//! swaps the stylesheet, flips which button is shown, and persists the choice
//! to `localStorage`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The two theme variants and their storage encoding |
//! | [`config`] | Storage key, stylesheet URLs, and DOM anchors |
//! | [`error`] | Error types for storage, DOM lookup, and config |
//! | [`store`] | Preference persistence seam with an in-memory fallback |
//! | [`page`] | DOM seam: stylesheet link, buttons, marker attribute |
//! | [`toggle`] | The [`toggle::ThemeToggle`] controller |
//! | `dom` | `web-sys` implementations of the seams (feature `hydrate`) |
//! | `app` | WASM entry point and click wiring (feature `hydrate`) |

pub mod config;
pub mod error;
pub mod page;
pub mod store;
pub mod theme;
pub mod toggle;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod dom;
