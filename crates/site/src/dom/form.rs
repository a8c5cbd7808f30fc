//! The contact form: field access, submit button, success banner.

use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

use aokhay_core::{InquiryFields, Product, ProductSelection};

use crate::error::SiteError;
use crate::inquiry::{InquiryFlow, InquiryForm, LOADING_LABEL, ProductPicker};

const FORM_ID: &str = "contactForm";
const SUBMIT_SELECTOR: &str = r#"#contactForm button[type="submit"]"#;
const SUCCESS_ID: &str = "successMessage";
const SHOW: &str = "show";

/// Current value of an input, select or textarea; empty when missing.
fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn checkbox(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

pub struct DomInquiryForm {
    window: Window,
    document: Document,
    form: HtmlFormElement,
    button: HtmlButtonElement,
    success: Option<Element>,
}

impl DomInquiryForm {
    pub fn find(window: Window, document: Document) -> Result<Self, SiteError> {
        let form = document
            .get_element_by_id(FORM_ID)
            .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
            .ok_or_else(|| SiteError::missing(format!("#{FORM_ID}")))?;

        let button = document
            .query_selector(SUBMIT_SELECTOR)?
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
            .ok_or_else(|| SiteError::missing(SUBMIT_SELECTOR))?;

        let success = document.get_element_by_id(SUCCESS_ID);
        if success.is_none() {
            warn!("#{SUCCESS_ID} missing; successful submissions will not be announced");
        }

        Ok(Self {
            window,
            document,
            form,
            button,
            success,
        })
    }

    pub fn element(&self) -> &HtmlFormElement {
        &self.form
    }

    fn products(&self) -> ProductSelection {
        let mut selection = ProductSelection::default();
        for product in Product::ALL {
            let checked = checkbox(&self.document, product.checkbox_id())
                .map(|cb| cb.checked())
                .unwrap_or(false);
            selection.set(product, checked);
        }
        selection
    }
}

impl InquiryForm for DomInquiryForm {
    fn read(&self) -> InquiryFields {
        let value = |id| field_value(&self.document, id);
        InquiryFields {
            business_name: value("businessName"),
            contact_person: value("contactPerson"),
            email: value("email"),
            phone: value("phone"),
            location: value("location"),
            inquiry_type: value("inquiryType"),
            volume: value("volume"),
            message: value("message"),
            products: self.products(),
        }
    }

    fn lock_submit(&self) -> String {
        let original = self.button.inner_html();
        self.button.set_inner_html(LOADING_LABEL);
        self.button.set_disabled(true);
        original
    }

    fn unlock_submit(&self, label: &str) {
        self.button.set_inner_html(label);
        self.button.set_disabled(false);
    }

    fn show_success(&self) {
        if let Some(success) = &self.success {
            let _ = success.class_list().add_1(SHOW);
        }
    }

    fn hide_success(&self) {
        if let Some(success) = &self.success {
            let _ = success.class_list().remove_1(SHOW);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

/// Run `flow` on every submit of `form` instead of the native submission.
pub fn on_submit(form: &HtmlFormElement, flow: Rc<InquiryFlow>) -> Result<(), SiteError> {
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let flow = Rc::clone(&flow);
        spawn_local(async move {
            flow.submit().await;
        });
    });
    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())?;
    // Lives as long as the page.
    handler.forget();
    Ok(())
}

/// Checkbox access for the product shortcut. Elements are looked up on use.
pub struct DomProductPicker {
    document: Document,
}

impl DomProductPicker {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ProductPicker for DomProductPicker {
    fn check_product(&self, product: Product) {
        match checkbox(&self.document, product.checkbox_id()) {
            Some(cb) => cb.set_checked(true),
            None => warn!(product = %product, "product checkbox missing"),
        }
    }

    fn scroll_form_into_view(&self) {
        if let Some(form) = self.document.get_element_by_id(FORM_ID) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            form.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}
