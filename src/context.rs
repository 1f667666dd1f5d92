//! Shared context for the portfolio shell.
//!
//! The page shell provides two pieces of context to everything below it:
//!
//! - [`ViewportFrame`]: the last measured scroll-container bounds, bumped
//!   after every scroll evaluation. Observer hooks subscribe to it.
//! - [`SectionRegistry`]: mounted section nodes, used for measuring the
//!   active section and for smooth-scrolling to a navigation target.
//!
//! ## Usage
//!
//! ```ignore
//! // In a section component
//! let sections = use_section_registry();
//! rsx! {
//!     section { id: "skills", onmounted: move |evt| sections.register(SectionId::Skills, evt.data()) }
//! }
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use dioxus::html::geometry::PixelsRect;
use dioxus::prelude::*;
use portfolio_core::{Bounds, SectionId, Theme};

/// Viewport width below which the mobile layout is used.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

/// Theme the page starts in (set via --light).
pub fn get_initial_theme() -> Theme {
    crate::get_initial_theme()
}

/// Convert a measured client rect into core bounds.
pub fn to_bounds(rect: PixelsRect) -> Bounds {
    Bounds::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height)
}

/// Latest viewport measurement.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ViewportFrame {
    pub bounds: Bounds,
    /// Incremented on every measurement; 0 means "never measured".
    pub generation: u64,
}

impl ViewportFrame {
    pub fn is_measured(&self) -> bool {
        self.generation > 0
    }

    pub fn is_mobile(&self) -> bool {
        self.is_measured() && self.bounds.width() < MOBILE_BREAKPOINT
    }

    pub fn next(&self, bounds: Bounds) -> Self {
        Self {
            bounds,
            generation: self.generation + 1,
        }
    }
}

/// Hook to access the viewport frame from context.
pub fn use_viewport() -> Signal<ViewportFrame> {
    use_context::<Signal<ViewportFrame>>()
}

/// Mounted section nodes, keyed in declaration order.
#[derive(Clone, Copy, PartialEq)]
pub struct SectionRegistry {
    nodes: Signal<BTreeMap<SectionId, Rc<MountedData>>>,
}

impl SectionRegistry {
    pub fn new(nodes: Signal<BTreeMap<SectionId, Rc<MountedData>>>) -> Self {
        Self { nodes }
    }

    pub fn register(mut self, id: SectionId, node: Rc<MountedData>) {
        tracing::trace!(section = %id, "Section mounted");
        self.nodes.write().insert(id, node);
    }

    pub fn get(&self, id: SectionId) -> Option<Rc<MountedData>> {
        self.nodes.peek().get(&id).cloned()
    }

    /// Snapshot of every mounted section, without subscribing.
    pub fn snapshot(&self) -> Vec<(SectionId, Rc<MountedData>)> {
        self.nodes
            .peek()
            .iter()
            .map(|(id, node)| (*id, Rc::clone(node)))
            .collect()
    }
}

/// Hook to access the section registry from context.
pub fn use_section_registry() -> SectionRegistry {
    use_context::<SectionRegistry>()
}

/// Navigation callback supplied by the page shell.
#[derive(Clone, Copy, PartialEq)]
pub struct Navigate(pub EventHandler<SectionId>);

impl Navigate {
    pub fn to(&self, section: SectionId) {
        self.0.call(section);
    }
}

/// Hook to scroll to a section from anywhere in the page.
pub fn use_navigate() -> Navigate {
    use_context::<Navigate>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_viewport_is_not_mobile() {
        let frame = ViewportFrame::default();
        assert!(!frame.is_measured());
        assert!(!frame.is_mobile());
    }

    #[test]
    fn narrow_viewport_is_mobile() {
        let frame = ViewportFrame::default().next(Bounds::new(0.0, 0.0, 420.0, 800.0));
        assert_eq!(frame.generation, 1);
        assert!(frame.is_mobile());

        let wide = frame.next(Bounds::new(0.0, 0.0, 1280.0, 800.0));
        assert_eq!(wide.generation, 2);
        assert!(!wide.is_mobile());
    }
}
