//! In-memory doubles shared by the behaviour tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::sections::{CollapsiblePanel, SectionHost};
use crate::timer::Timer;

/// Timer that holds callbacks until the test fires them.
#[derive(Default)]
pub struct ManualTimer {
    pending: RefCell<Vec<(Duration, Box<dyn FnOnce()>)>>,
}

impl ManualTimer {
    pub fn delays(&self) -> Vec<Duration> {
        self.pending.borrow().iter().map(|(d, _)| *d).collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Run every scheduled callback, including ones scheduled while firing.
    pub fn fire_all(&self) -> usize {
        let mut fired = 0;
        loop {
            let batch: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            if batch.is_empty() {
                return fired;
            }
            for (_, callback) in batch {
                callback();
                fired += 1;
            }
        }
    }
}

impl Timer for ManualTimer {
    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        self.pending.borrow_mut().push((delay, callback));
    }
}

/// Section host that records which known sections were activated.
pub struct RecordingHost {
    known: Vec<&'static str>,
    activated: Rc<RefCell<Vec<String>>>,
}

impl RecordingHost {
    pub fn new(known: Vec<&'static str>) -> (Self, Rc<RefCell<Vec<String>>>) {
        let activated = Rc::new(RefCell::new(Vec::new()));
        let host = Self {
            known,
            activated: activated.clone(),
        };
        (host, activated)
    }
}

impl SectionHost for RecordingHost {
    fn deactivate_all(&self) {}

    fn activate(&self, name: &str) -> bool {
        if self.known.contains(&name) {
            self.activated.borrow_mut().push(name.to_string());
            true
        } else {
            false
        }
    }

    fn clear_nav_highlight(&self) {}

    fn highlight_nav(&self, _name: &str) {}

    fn scroll_to_top(&self) {}
}

/// Mobile menu that is never open.
pub struct ClosedPanel;

impl CollapsiblePanel for ClosedPanel {
    fn show(&self) {}

    fn hide(&self) {}

    fn is_open(&self) -> bool {
        false
    }
}
