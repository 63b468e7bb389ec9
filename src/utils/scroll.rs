use web_sys::{Document, Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::error::{LandingError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollOutcome {
    Scrolled,
    MissingTarget,
}

/// Something that can locate a section by DOM id and bring it to the top of
/// the screen.
pub trait Viewport {
    type Target;

    fn find_section(&self, id: &str) -> Option<Self::Target>;

    /// Starts a smooth scroll to `target`. A newer call replaces any scroll
    /// still in flight.
    fn scroll_into_view(&self, target: &Self::Target);
}

/// Smooth-scrolls to the section with `id`. Unknown ids are ignored.
pub fn scroll_to<V: Viewport>(viewport: &V, id: &str) -> ScrollOutcome {
    match viewport.find_section(id) {
        Some(target) => {
            viewport.scroll_into_view(&target);
            ScrollOutcome::Scrolled
        }
        None => {
            log::debug!("Scroll target #{} not found, ignoring", id);
            ScrollOutcome::MissingTarget
        }
    }
}

pub struct DomViewport {
    document: Document,
}

impl DomViewport {
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(LandingError::NoWindow)?;
        let document = window.document().ok_or(LandingError::NoDocument)?;
        Ok(Self { document })
    }
}

impl Viewport for DomViewport {
    type Target = Element;

    fn find_section(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn scroll_into_view(&self, target: &Element) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::Cell;
    use std::collections::HashMap;

    use super::Viewport;

    /// In-memory page: section ids mapped to their top offset.
    pub struct FakeViewport {
        sections: HashMap<String, f64>,
        scroll_top: Cell<f64>,
        scrolls: Cell<usize>,
    }

    impl FakeViewport {
        pub fn with_sections(sections: &[(&str, f64)]) -> Self {
            Self {
                sections: sections.iter().map(|(id, top)| (id.to_string(), *top)).collect(),
                scroll_top: Cell::new(0.0),
                scrolls: Cell::new(0),
            }
        }

        pub fn scroll_top(&self) -> f64 {
            self.scroll_top.get()
        }

        pub fn scrolls(&self) -> usize {
            self.scrolls.get()
        }
    }

    impl Viewport for FakeViewport {
        type Target = f64;

        fn find_section(&self, id: &str) -> Option<f64> {
            self.sections.get(id).copied()
        }

        fn scroll_into_view(&self, target: &f64) {
            self.scroll_top.set(*target);
            self.scrolls.set(self.scrolls.get() + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::FakeViewport;
    use super::*;

    #[test]
    fn missing_target_is_a_silent_no_op() {
        let viewport = FakeViewport::with_sections(&[("hero", 0.0), ("features", 800.0)]);
        scroll_to(&viewport, "features");
        assert_eq!(scroll_to(&viewport, "nonexistent-id"), ScrollOutcome::MissingTarget);
        assert_eq!(viewport.scroll_top(), 800.0);
        assert_eq!(viewport.scrolls(), 1);
    }

    #[test]
    fn aligns_top_with_section() {
        let viewport = FakeViewport::with_sections(&[("testimonials", 1600.0)]);
        assert_eq!(scroll_to(&viewport, "testimonials"), ScrollOutcome::Scrolled);
        assert_eq!(viewport.scroll_top(), 1600.0);
    }

    #[test]
    fn last_request_wins() {
        let viewport = FakeViewport::with_sections(&[
            ("features", 800.0),
            ("testimonials", 1600.0),
            ("pricing", 2400.0),
        ]);
        for id in ["pricing", "features", "testimonials"] {
            scroll_to(&viewport, id);
        }
        assert_eq!(viewport.scroll_top(), 1600.0);
    }
}
