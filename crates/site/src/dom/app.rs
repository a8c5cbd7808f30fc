//! Page start-up: read configuration, initialise logging, wire every behaviour.

use std::rc::Rc;

use tracing::{info, warn};
use web_sys::{Document, Window};

use crate::config::SiteConfig;
use crate::dom::api::FetchTransport;
use crate::dom::document::{DomSections, NavbarCollapse, read_config};
use crate::dom::form::{DomInquiryForm, DomProductPicker, on_submit};
use crate::dom::timer::WindowTimer;
use crate::dom::{effects, history};
use crate::error::SiteError;
use crate::inquiry::InquiryFlow;
use crate::sections::SectionController;
use crate::shortcut::ProductShortcut;
use crate::timer::Timer;

/// A behaviour that failed to wire is reported; the rest of the page still works.
fn wire(behaviour: &str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        warn!(behaviour, error = %err, "behaviour not wired");
    }
}

fn bind_contact_form(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
    timer: Rc<dyn Timer>,
) -> Result<(), SiteError> {
    let form = Rc::new(DomInquiryForm::find(window.clone(), document.clone())?);
    let transport = Rc::new(FetchTransport::new(window.clone(), config.endpoint.clone()));
    let flow = Rc::new(InquiryFlow::new(
        form.clone(),
        transport,
        timer,
        config.success_display(),
    ));
    on_submit(form.element(), flow)
}

pub fn start(window: Window, document: Document) {
    let (config, config_error) = match read_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    aokhay_observability::init_with_level(&config.log_level);
    if let Some(err) = config_error {
        warn!(error = %err, "using default site configuration");
    }
    info!("A-OK Hay website loaded");

    let timer: Rc<dyn Timer> = Rc::new(WindowTimer::new(window.clone()));
    let sections = Rc::new(SectionController::new(
        Box::new(DomSections::new(window.clone(), document.clone())),
        Box::new(NavbarCollapse::new(document.clone())),
    ));

    wire("smooth scroll", effects::smooth_scroll(&document));
    wire(
        "navbar scroll",
        effects::navbar_on_scroll(&window, &document, config.navbar_threshold_px),
    );
    if config.fade_in {
        wire("fade-in", effects::fade_in(&document, config.fade_in_threshold));
    }
    wire(
        "counters",
        effects::animate_counters(
            &document,
            Rc::clone(&timer),
            config.counter_steps,
            config.counter_interval(),
        ),
    );
    wire(
        "contact form",
        bind_contact_form(&window, &document, &config, Rc::clone(&timer)),
    );

    sections.show(&config.default_section);

    wire("history", history::listen_popstate(&window, Rc::clone(&sections)));

    let shortcut = Rc::new(ProductShortcut::new(
        Rc::clone(&sections),
        Rc::new(DomProductPicker::new(document.clone())),
        timer,
        config.contact_section.clone(),
        config.shortcut_delay(),
    ));
    wire("entry points", history::install_globals(&window, sections, shortcut));
}
