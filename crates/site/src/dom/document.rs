//! Section visibility, navigation highlight and the mobile menu.

use tracing::warn;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::config::{CONFIG_ELEMENT_ID, SiteConfig};
use crate::dom::elements;
use crate::error::SiteError;
use crate::sections::{CollapsiblePanel, SectionHost};

const SECTION_SELECTOR: &str = ".page";
const SECTION_CLASS: &str = "page";
const NAV_LINK_SELECTOR: &str = ".nav-link";
const ACTIVE: &str = "active";

/// Sections are `.page` elements addressed by id.
pub struct DomSections {
    window: Window,
    document: Document,
}

impl DomSections {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn for_each(&self, selector: &str, f: impl Fn(&web_sys::Element)) {
        match elements(&self.document, selector) {
            Ok(found) => found.iter().for_each(f),
            Err(err) => warn!(selector, error = %err, "query failed"),
        }
    }
}

impl SectionHost for DomSections {
    fn deactivate_all(&self) {
        self.for_each(SECTION_SELECTOR, |el| {
            let _ = el.class_list().remove_1(ACTIVE);
        });
    }

    fn activate(&self, name: &str) -> bool {
        // Only real sections; other elements sharing the id are not pages.
        match self.document.get_element_by_id(name) {
            Some(el) if el.class_list().contains(SECTION_CLASS) => {
                el.class_list().add_1(ACTIVE).is_ok()
            }
            _ => false,
        }
    }

    fn clear_nav_highlight(&self) {
        self.for_each(NAV_LINK_SELECTOR, |el| {
            let _ = el.class_list().remove_1(ACTIVE);
        });
    }

    fn highlight_nav(&self, name: &str) {
        self.for_each(NAV_LINK_SELECTOR, |el| {
            if el.get_attribute("data-page").as_deref() == Some(name) {
                let _ = el.class_list().add_1(ACTIVE);
            }
        });
    }

    fn scroll_to_top(&self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// The collapsing navbar menu; open while it carries the `show` class.
pub struct NavbarCollapse {
    document: Document,
}

impl NavbarCollapse {
    const SELECTOR: &'static str = ".navbar-collapse";
    const OPEN: &'static str = "show";

    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn panel(&self) -> Option<web_sys::Element> {
        self.document.query_selector(Self::SELECTOR).ok().flatten()
    }
}

impl CollapsiblePanel for NavbarCollapse {
    fn show(&self) {
        if let Some(panel) = self.panel() {
            let _ = panel.class_list().add_1(Self::OPEN);
        }
    }

    fn hide(&self) {
        if let Some(panel) = self.panel() {
            let _ = panel.class_list().remove_1(Self::OPEN);
        }
    }

    fn is_open(&self) -> bool {
        self.panel()
            .map(|panel| panel.class_list().contains(Self::OPEN))
            .unwrap_or(false)
    }
}

/// Configuration embedded in the page, or the defaults when there is none.
pub fn read_config(document: &Document) -> Result<SiteConfig, SiteError> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) => SiteConfig::from_json(&json),
        None => Ok(SiteConfig::default()),
    }
}
