//! `web-sys` bindings for the site behaviours.

pub mod api;
pub mod app;
pub mod document;
pub mod effects;
pub mod form;
pub mod history;
pub mod timer;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::error::SiteError;

/// WASM entry point.
/// This is called automatically when the WASM module loads; the page is wired
/// up once the document has been parsed.
#[wasm_bindgen(start)]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if document.ready_state() == "loading" {
        let target = document.clone();
        let on_ready = Closure::once_into_js(move || app::start(window, document));
        let _ = target
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref());
    } else {
        app::start(window, document);
    }
}

/// All elements matching `selector`, in document order.
pub(crate) fn elements(document: &Document, selector: &str) -> Result<Vec<Element>, SiteError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}
