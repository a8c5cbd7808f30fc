//! Single-page section display.
//!
//! Exactly one `.page` section is visible at a time. Showing a section hides the
//! rest, resets the navigation highlight, scrolls to the top and folds the mobile
//! menu away.

use serde::Deserialize;
use tracing::debug;

/// A panel that can be opened and folded away (the mobile navigation overlay).
pub trait CollapsiblePanel {
    fn show(&self);
    fn hide(&self);
    fn is_open(&self) -> bool;
}

/// The page operations the section controller needs.
pub trait SectionHost {
    /// Remove the active marker from every section.
    fn deactivate_all(&self);
    /// Mark the named section active; `false` when no such section exists.
    fn activate(&self, name: &str) -> bool;
    fn clear_nav_highlight(&self);
    fn highlight_nav(&self, name: &str);
    fn scroll_to_top(&self);
}

/// State carried by a browser history entry on back/forward navigation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HistoryState {
    pub page: String,
}

impl HistoryState {
    /// The recorded section, or `None` when the entry names no page.
    pub fn section(&self) -> Option<&str> {
        (!self.page.is_empty()).then_some(self.page.as_str())
    }
}

pub struct SectionController {
    host: Box<dyn SectionHost>,
    panel: Box<dyn CollapsiblePanel>,
}

impl SectionController {
    pub fn new(host: Box<dyn SectionHost>, panel: Box<dyn CollapsiblePanel>) -> Self {
        Self { host, panel }
    }

    /// Show `name` exclusively. An unknown name leaves every section hidden.
    pub fn show(&self, name: &str) {
        self.host.deactivate_all();
        let found = self.host.activate(name);

        self.host.clear_nav_highlight();
        if found {
            self.host.highlight_nav(name);
            debug!(section = name, "section shown");
        } else {
            debug!(section = name, "unknown section ignored");
        }

        self.host.scroll_to_top();

        if self.panel.is_open() {
            self.panel.hide();
        }
    }

    /// Show the section a history entry points at. Returns `false` and leaves
    /// the page untouched when the entry has no page.
    pub fn restore(&self, state: &HistoryState) -> bool {
        match state.section() {
            Some(name) => {
                self.show(name);
                true
            }
            None => {
                debug!("history entry without a page ignored");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Default)]
    struct PageState {
        sections: Vec<(&'static str, bool)>,
        highlighted: Option<String>,
        scrolled_to_top: usize,
    }

    struct FakeHost(Rc<RefCell<PageState>>);

    impl SectionHost for FakeHost {
        fn deactivate_all(&self) {
            for (_, active) in self.0.borrow_mut().sections.iter_mut() {
                *active = false;
            }
        }

        fn activate(&self, name: &str) -> bool {
            let mut state = self.0.borrow_mut();
            match state.sections.iter_mut().find(|(id, _)| *id == name) {
                Some((_, active)) => {
                    *active = true;
                    true
                }
                None => false,
            }
        }

        fn clear_nav_highlight(&self) {
            self.0.borrow_mut().highlighted = None;
        }

        fn highlight_nav(&self, name: &str) {
            self.0.borrow_mut().highlighted = Some(name.to_string());
        }

        fn scroll_to_top(&self) {
            self.0.borrow_mut().scrolled_to_top += 1;
        }
    }

    struct FakePanel(Rc<Cell<bool>>);

    impl CollapsiblePanel for FakePanel {
        fn show(&self) {
            self.0.set(true);
        }

        fn hide(&self) {
            self.0.set(false);
        }

        fn is_open(&self) -> bool {
            self.0.get()
        }
    }

    fn controller(panel_open: bool) -> (SectionController, Rc<RefCell<PageState>>, Rc<Cell<bool>>) {
        let state = Rc::new(RefCell::new(PageState {
            sections: vec![("home", false), ("products", false), ("contact", false)],
            ..Default::default()
        }));
        let panel = Rc::new(Cell::new(panel_open));
        let controller = SectionController::new(
            Box::new(FakeHost(state.clone())),
            Box::new(FakePanel(panel.clone())),
        );
        (controller, state, panel)
    }

    fn active(state: &Rc<RefCell<PageState>>) -> Vec<&'static str> {
        state
            .borrow()
            .sections
            .iter()
            .filter(|(_, active)| *active)
            .map(|(id, _)| *id)
            .collect()
    }

    #[test]
    fn show_activates_exactly_one_section() {
        let (controller, state, _) = controller(false);

        controller.show("home");
        controller.show("products");

        assert_eq!(active(&state), vec!["products"]);
        assert_eq!(state.borrow().highlighted.as_deref(), Some("products"));
        assert_eq!(state.borrow().scrolled_to_top, 2);
    }

    #[test]
    fn unknown_section_leaves_nothing_active() {
        let (controller, state, _) = controller(false);

        controller.show("contact");
        controller.show("blog");
        controller.show("blog");

        assert!(active(&state).is_empty());
        assert_eq!(state.borrow().highlighted, None);
        assert_eq!(state.borrow().scrolled_to_top, 3);
    }

    #[test]
    fn open_mobile_menu_is_folded_away() {
        let (controller, _, panel) = controller(true);
        controller.show("contact");
        assert!(!panel.get());
    }

    #[test]
    fn closed_mobile_menu_stays_closed() {
        let (controller, _, panel) = controller(false);
        controller.show("contact");
        assert!(!panel.get());
    }

    #[test]
    fn history_entry_restores_its_section() {
        let (controller, state, panel) = controller(true);
        let entry: HistoryState = serde_json::from_str(r#"{"page":"products"}"#).unwrap();

        assert!(controller.restore(&entry));

        assert_eq!(active(&state), vec!["products"]);
        assert_eq!(state.borrow().highlighted.as_deref(), Some("products"));
        assert!(!panel.get());
    }

    #[test]
    fn history_entry_with_empty_page_changes_nothing() {
        let (controller, state, panel) = controller(true);
        controller.show("contact");
        let entry: HistoryState = serde_json::from_str(r#"{"page":""}"#).unwrap();
        panel.set(true);

        assert_eq!(entry.section(), None);
        assert!(!controller.restore(&entry));

        assert_eq!(active(&state), vec!["contact"]);
        assert_eq!(state.borrow().highlighted.as_deref(), Some("contact"));
        assert_eq!(state.borrow().scrolled_to_top, 1);
        assert!(panel.get());
    }

    #[test]
    fn history_state_shape() {
        let state: HistoryState = serde_json::from_str(r#"{"page":"about"}"#).unwrap();
        assert_eq!(state.page, "about");
        assert!(serde_json::from_str::<HistoryState>("null").is_err());
    }
}
