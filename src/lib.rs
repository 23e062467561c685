//! Page enhancements for the static site.
//!
//! This crate is compiled to WebAssembly and loaded by every page. On start
//! it waits for the document to finish parsing, then installs six
//! independent behaviors. Each owns its own elements and listeners; if one
//! cannot install (missing markup, a rejected DOM call) the rest still do.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark toggle persisted in `localStorage` |
//! | [`year`] | Current year in footer placeholders |
//! | [`anchor`] | Smooth scrolling for in-page links |
//! | [`collapsible`] | Accordion groups of expandable panels |
//! | [`tooltip`] | Shared hover/focus tooltip bubble |
//! | [`counter`] | Count-up animation for stat numbers |
//! | [`config`] | Selectors and constants, overridable per page |
//! | [`dom`] | `web-sys` helpers shared by the behaviors |
//! | [`error`] | Installation error types |
//! | [`consts`] | Default markup contract and timing constants |

pub mod anchor;
pub mod collapsible;
pub mod config;
pub mod consts;
pub mod counter;
pub mod dom;
pub mod error;
pub mod theme;
pub mod tooltip;
pub mod year;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::EnhanceConfig;
use crate::error::EnhanceError;

/// Module entry point, run by the wasm-bindgen glue on instantiation.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::debug!("logger already installed");
    }
    if let Err(err) = boot() {
        log::warn!("site-enhance: not started: {err}");
    }
}

fn boot() -> Result<(), EnhanceError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;
    if !still_parsing(&document.ready_state()) {
        enhance(&window, &document);
        return Ok(());
    }

    let target = document.clone();
    dom::listen(&target, "DOMContentLoaded", move |_| enhance(&window, &document))
}

/// Whether a `document.readyState` value means `DOMContentLoaded` is still ahead.
fn still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Install every behavior on `document`.
fn enhance(window: &Window, document: &Document) {
    let config = EnhanceConfig::from_page(document);
    log::set_max_level(config.level_filter());

    report("theme", theme::install(window, document, &config));
    report("year", year::install(document, &config));
    report("anchor", anchor::install(window, document, &config));
    report("collapsible", collapsible::install(document, &config));
    report("tooltip", tooltip::install(document, &config));
    report("counter", counter::install(window, document, &config));
}

fn report(behavior: &str, result: Result<usize, EnhanceError>) {
    match result {
        Ok(count) => log::debug!("{behavior}: attached to {count} element(s)"),
        Err(err) => log::warn!("{behavior}: not installed: {err}"),
    }
}
