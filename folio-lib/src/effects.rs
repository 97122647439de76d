//! Page-shell effects that never touch the profile data.

use crate::document::{Document, Slot};
use crate::text::escape_html;

/// Decorative lines drifting behind the page
pub const CODE_SNIPPETS: [&str; 6] = [
    r#"const portfolio = { name: "Karibasaveshwara TG" };"#,
    r#"function buildWebApp() { return "scalable & elegant"; }"#,
    r#"import { Angular, React, Vue } from "frameworks";"#,
    r#"const experience = "4+ years";"#,
    "async function createImpact() { ... }",
    "export default FullStackDeveloper;",
];

/// Fill the code background with one positioned line per snippet.
///
/// Line `i` sits at `20 + 15i` percent from the top and starts its
/// animation `2i` seconds late.
pub fn render_code_background<D: Document + ?Sized>(doc: &mut D) {
    for (i, snippet) in CODE_SNIPPETS.iter().enumerate() {
        doc.append_html(
            Slot::CodeBackground,
            format!(
                r#"<div class="code-line" style="top: {}%; animation-delay: {}s;">{}</div>"#,
                20 + i * 15,
                i * 2,
                escape_html(snippet)
            ),
        );
    }
}

/// Viewport measurements sampled on scroll or resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub viewport_height: f64,
    /// Offset of the contact section, if the page has one
    pub contact_top: Option<f64>,
}

/// Whether the scroll-to-top button should show.
///
/// `None` when the page has no contact section: the button keeps whatever
/// state it had.
pub fn scroll_to_top_visible(metrics: ScrollMetrics) -> Option<bool> {
    metrics
        .contact_top
        .map(|top| metrics.scroll_y + metrics.viewport_height >= top)
}

/// Update the scroll-to-top button's class from fresh metrics
pub fn update_scroll_to_top<D: Document + ?Sized>(doc: &mut D, metrics: ScrollMetrics) {
    match scroll_to_top_visible(metrics) {
        Some(true) => doc.set_attribute(Slot::ScrollToTop, "class", "visible"),
        Some(false) => doc.set_attribute(Slot::ScrollToTop, "class", ""),
        None => {}
    }
}

/// Reveal state of one `.fade-in` element
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FadeIn {
    visible: bool,
}

impl FadeIn {
    /// Fraction of the element that must intersect the viewport
    pub const THRESHOLD: f64 = 0.1;
    /// Pixels trimmed off the bottom of the viewport before intersecting
    pub const BOTTOM_MARGIN: f64 = 50.0;

    /// Feed one intersection observation; once visible, stays visible
    pub fn observe(&mut self, intersection_ratio: f64) -> bool {
        if intersection_ratio >= Self::THRESHOLD {
            self.visible = true;
        }
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Intersection ratio of an element against the viewport, bottom margin applied
    pub fn intersection_ratio(
        element_top: f64,
        element_height: f64,
        scroll_y: f64,
        viewport_height: f64,
    ) -> f64 {
        if element_height <= 0.0 {
            return 0.0;
        }
        let view_top = scroll_y;
        let view_bottom = scroll_y + viewport_height - Self::BOTTOM_MARGIN;
        let overlap = (element_top + element_height).min(view_bottom) - element_top.max(view_top);
        (overlap.max(0.0) / element_height).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Page;

    #[test]
    fn test_code_background_lines() {
        let mut page = Page::new();
        render_code_background(&mut page);
        let lines = page.children(Slot::CodeBackground);
        assert_eq!(lines.len(), 6);
        assert!(lines[0].contains("top: 20%; animation-delay: 0s;"));
        assert!(lines[5].contains("top: 95%; animation-delay: 10s;"));
        assert!(lines[1].contains("scalable &amp; elegant"));
    }

    #[test]
    fn test_scroll_to_top_threshold() {
        let metrics = |scroll_y| ScrollMetrics {
            scroll_y,
            viewport_height: 800.0,
            contact_top: Some(2000.0),
        };
        assert_eq!(scroll_to_top_visible(metrics(1199.0)), Some(false));
        assert_eq!(scroll_to_top_visible(metrics(1200.0)), Some(true));
        assert_eq!(
            scroll_to_top_visible(ScrollMetrics {
                contact_top: None,
                ..metrics(5000.0)
            }),
            None
        );
    }

    #[test]
    fn test_update_scroll_to_top_keeps_state_without_contact() {
        let mut page = Page::new();
        update_scroll_to_top(
            &mut page,
            ScrollMetrics {
                scroll_y: 3000.0,
                viewport_height: 800.0,
                contact_top: Some(2000.0),
            },
        );
        assert_eq!(page.attribute(Slot::ScrollToTop, "class"), Some("visible"));

        update_scroll_to_top(
            &mut page,
            ScrollMetrics {
                scroll_y: 0.0,
                viewport_height: 800.0,
                contact_top: None,
            },
        );
        assert_eq!(page.attribute(Slot::ScrollToTop, "class"), Some("visible"));
    }

    #[test]
    fn test_fade_in_is_sticky() {
        let mut fade = FadeIn::default();
        assert!(!fade.observe(0.05));
        assert!(fade.observe(0.1));
        assert!(fade.observe(0.0));
        assert!(fade.is_visible());
    }

    #[test]
    fn test_intersection_ratio_applies_bottom_margin() {
        // Element starts exactly where the trimmed viewport ends
        assert_eq!(FadeIn::intersection_ratio(950.0, 100.0, 0.0, 1000.0), 0.0);
        assert_eq!(FadeIn::intersection_ratio(900.0, 100.0, 0.0, 1000.0), 0.5);
        assert_eq!(FadeIn::intersection_ratio(0.0, 100.0, 0.0, 1000.0), 1.0);
        assert_eq!(FadeIn::intersection_ratio(0.0, 0.0, 0.0, 1000.0), 0.0);
    }
}
