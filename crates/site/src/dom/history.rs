//! Back/forward navigation and the entry points called from page markup.

use std::rc::Rc;

use js_sys::Reflect;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{PopStateEvent, Window};

use crate::error::SiteError;
use crate::sections::{HistoryState, SectionController};
use crate::shortcut::ProductShortcut;

/// Re-show the section recorded in a history entry when the visitor goes back
/// or forward. Entries without a page are ignored.
pub fn listen_popstate(
    window: &Window,
    sections: Rc<SectionController>,
) -> Result<(), SiteError> {
    let handler = Closure::<dyn FnMut(PopStateEvent)>::new(move |event: PopStateEvent| {
        match serde_wasm_bindgen::from_value::<HistoryState>(event.state()) {
            Ok(state) => {
                sections.restore(&state);
            }
            Err(_) => debug!("history entry without a page ignored"),
        }
    });
    window.add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// Install `window.showPage(name)` and `window.handleProductInquiry(product)`
/// for inline `onclick` handlers. Non-string arguments are ignored.
pub fn install_globals(
    window: &Window,
    sections: Rc<SectionController>,
    shortcut: Rc<ProductShortcut>,
) -> Result<(), SiteError> {
    let show_page = Closure::<dyn Fn(JsValue)>::new(move |name: JsValue| {
        if let Some(name) = name.as_string() {
            sections.show(&name);
        }
    });
    Reflect::set(window, &JsValue::from_str("showPage"), show_page.as_ref())?;
    show_page.forget();

    let handle_inquiry = Closure::<dyn Fn(JsValue)>::new(move |product: JsValue| {
        if let Some(product) = product.as_string() {
            shortcut.request(&product);
        }
    });
    Reflect::set(
        window,
        &JsValue::from_str("handleProductInquiry"),
        handle_inquiry.as_ref(),
    )?;
    handle_inquiry.forget();

    Ok(())
}
