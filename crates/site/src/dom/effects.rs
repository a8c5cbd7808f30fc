//! Cosmetic effects: smooth anchors, navbar shadow, fade-ins, counters.

use std::rc::Rc;
use std::time::Duration;

use js_sys::Array;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    Window,
};

use aokhay_core::{CounterAnimation, NavbarStyle, anchor_target};

use crate::animation::play_counter;
use crate::dom::elements;
use crate::error::SiteError;
use crate::timer::Timer;

const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;
const NAVBAR_SELECTOR: &str = ".navbar";
const FADE_IN_SELECTOR: &str = ".product-card, .feature-box, .client-card";
const COUNTER_SELECTOR: &str = ".stat-number";

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn set_styles(el: &Element, styles: &[(&str, &str)]) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let style = html.style();
        for (property, value) in styles {
            let _ = style.set_property(property, value);
        }
    }
}

/// Elements of `entries` that just became visible.
fn intersecting(entries: &Array) -> Vec<Element> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .filter(|entry| entry.is_intersecting())
        .map(|entry| entry.target())
        .collect()
}

/// Same-page links scroll smoothly to their target instead of jumping.
pub fn smooth_scroll(document: &Document) -> Result<(), SiteError> {
    let doc = document.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Some(anchor) = event
            .current_target()
            .and_then(|target| target.dyn_into::<Element>().ok())
        else {
            return;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        let Some(selector) = anchor_target(&href) else {
            return;
        };

        event.prevent_default();
        // An invalid selector throws; treat it like a missing target.
        if let Ok(Some(target)) = doc.query_selector(selector) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    for anchor in elements(document, ANCHOR_SELECTOR)? {
        anchor.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    }
    handler.forget();
    Ok(())
}

/// Compact the navbar with a stronger shadow once the page scrolls past `threshold`.
pub fn navbar_on_scroll(
    window: &Window,
    document: &Document,
    threshold: f64,
) -> Result<(), SiteError> {
    let win = window.clone();
    let doc = document.clone();
    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let offset = win.scroll_y().unwrap_or(0.0);
        let style = NavbarStyle::for_scroll(offset, threshold);
        if let Ok(Some(navbar)) = doc.query_selector(NAVBAR_SELECTOR) {
            set_styles(&navbar, &[("padding", style.padding), ("box-shadow", style.box_shadow)]);
        }
    });

    window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

/// Cards start hidden and slide into place the first time they become visible.
pub fn fade_in(document: &Document, threshold: f64) -> Result<(), SiteError> {
    let callback: ObserverCallback =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for target in intersecting(&entries) {
                set_styles(&target, &[("opacity", "1"), ("transform", "translateY(0)")]);
                observer.unobserve(&target);
            }
        });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    for el in elements(document, FADE_IN_SELECTOR)? {
        set_styles(
            &el,
            &[
                ("opacity", "0"),
                ("transform", "translateY(20px)"),
                ("transition", "all 0.6s ease"),
            ],
        );
        observer.observe(&el);
    }
    callback.forget();
    Ok(())
}

/// Count each statistic up from zero the first time it scrolls into view.
pub fn animate_counters(
    document: &Document,
    timer: Rc<dyn Timer>,
    steps: u32,
    interval: Duration,
) -> Result<(), SiteError> {
    for el in elements(document, COUNTER_SELECTOR)? {
        let text = el.text_content().unwrap_or_default();
        let Some(counter) = CounterAnimation::parse(&text) else {
            debug!(text = %text, "stat without digits left static");
            continue;
        };

        let timer = Rc::clone(&timer);
        let callback: ObserverCallback =
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                for target in intersecting(&entries) {
                    observer.unobserve(&target);
                    let render: Rc<dyn Fn(&str)> =
                        Rc::new(move |frame: &str| target.set_text_content(Some(frame)));
                    play_counter(&counter, steps, interval, Rc::clone(&timer), render);
                }
            });

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())?;
        observer.observe(&el);
        callback.forget();
    }
    Ok(())
}
