//! "Request a quote" buttons on product cards.

use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, info};

use aokhay_core::Product;

use crate::inquiry::ProductPicker;
use crate::sections::SectionController;
use crate::timer::Timer;

pub struct ProductShortcut {
    sections: Rc<SectionController>,
    picker: Rc<dyn ProductPicker>,
    timer: Rc<dyn Timer>,
    contact_section: String,
    delay: Duration,
}

impl ProductShortcut {
    pub fn new(
        sections: Rc<SectionController>,
        picker: Rc<dyn ProductPicker>,
        timer: Rc<dyn Timer>,
        contact_section: impl Into<String>,
        delay: Duration,
    ) -> Self {
        Self {
            sections,
            picker,
            timer,
            contact_section: contact_section.into(),
            delay,
        }
    }

    /// Open the contact section, then, once it has rendered, tick the requested
    /// product and bring the form into view. Unknown products tick nothing.
    pub fn request(&self, product_name: &str) {
        info!(product = product_name, "product inquiry requested");
        self.sections.show(&self.contact_section);

        let product = Product::from_inquiry_label(product_name);
        if product.is_none() {
            debug!(product = product_name, "no checkbox for requested product");
        }

        let picker = Rc::clone(&self.picker);
        self.timer.after(
            self.delay,
            Box::new(move || {
                if let Some(product) = product {
                    picker.check_product(product);
                }
                picker.scroll_form_into_view();
            }),
        );
    }
}
