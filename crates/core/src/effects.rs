//! Small decisions behind the page's cosmetic effects.

/// Inline style applied to the navbar for a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub padding: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    pub const COMPACT: NavbarStyle = NavbarStyle {
        padding: "0.5rem 0",
        box_shadow: "0 4px 12px rgba(0,0,0,0.15)",
    };

    pub const RELAXED: NavbarStyle = NavbarStyle {
        padding: "1rem 0",
        box_shadow: "0 2px 10px rgba(0,0,0,0.1)",
    };

    /// Compact once the page is scrolled strictly past `threshold` pixels.
    pub fn for_scroll(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::COMPACT
        } else {
            Self::RELAXED
        }
    }
}

/// Selector of the element a same-page link points at, if the link should be
/// intercepted. A bare `#` is left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href.len() > 1 {
        Some(href)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_compacts_past_threshold() {
        assert_eq!(NavbarStyle::for_scroll(0.0, 50.0), NavbarStyle::RELAXED);
        assert_eq!(NavbarStyle::for_scroll(50.0, 50.0), NavbarStyle::RELAXED);
        assert_eq!(NavbarStyle::for_scroll(50.5, 50.0), NavbarStyle::COMPACT);
        assert_eq!(NavbarStyle::for_scroll(1200.0, 50.0), NavbarStyle::COMPACT);
    }

    #[test]
    fn only_named_fragments_are_intercepted() {
        assert_eq!(anchor_target("#products"), Some("#products"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/about#team"), None);
    }
}
