//! Scroll controller for the page shell.
//!
//! Owns the [`ScrollTracker`], the quiet-period [`Debouncer`] and the
//! measurement plumbing. Raw scroll events are cheap: they flip
//! `is_scrolling`, re-arm the quiet timer and, at most once per frame,
//! schedule a measurement of every registered section.

use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Instant;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use portfolio_core::scroll::{FRAME_INTERVAL, SCROLL_QUIET_PERIOD};
use portfolio_core::{Bounds, Debouncer, QuietOutcome, ScrollState, ScrollTracker, SectionId, SectionProbe};

use crate::context::{to_bounds, SectionRegistry, ViewportFrame};

/// Wait roughly one animation frame.
pub async fn next_frame() {
    tokio::time::sleep(FRAME_INTERVAL).await;
}

/// Handle to the shell's scroll machinery. Cheap to clone into handlers.
#[derive(Clone)]
pub struct ScrollController {
    tracker: CopyValue<ScrollTracker>,
    state: Signal<ScrollState>,
    viewport: Signal<ViewportFrame>,
    container: Signal<Option<Rc<MountedData>>>,
    sections: SectionRegistry,
    debouncer: Debouncer,
}

/// Create the scroll controller and provide the viewport and section
/// registry contexts to every descendant.
pub fn use_scroll_controller() -> ScrollController {
    let tracker = use_hook(|| CopyValue::new(ScrollTracker::new()));
    let state = use_signal(ScrollState::default);
    let viewport = use_signal(ViewportFrame::default);
    use_context_provider(|| viewport);
    let container = use_signal(|| None::<Rc<MountedData>>);
    let nodes = use_signal(BTreeMap::new);
    let sections = use_context_provider(|| SectionRegistry::new(nodes));
    let debouncer = use_hook(|| Debouncer::new(SCROLL_QUIET_PERIOD));

    let pending = debouncer.clone();
    use_drop(move || {
        pending.cancel();
        let mut tracker = tracker;
        if let Ok(mut tracker) = tracker.try_write() {
            tracker.reset();
        };
    });

    ScrollController {
        tracker,
        state,
        viewport,
        container,
        sections,
        debouncer,
    }
}

impl ScrollController {
    /// Current scroll state (subscribes the caller).
    pub fn state(&self) -> ScrollState {
        (self.state)()
    }

    pub fn viewport(&self) -> Signal<ViewportFrame> {
        self.viewport
    }

    /// The scroll container has mounted; take the first measurement.
    pub fn attach(&self, node: Rc<MountedData>) {
        let mut container = self.container;
        container.set(Some(node));
        let this = self.clone();
        spawn(async move {
            // Let sections mount and lay out first
            next_frame().await;
            this.evaluate(true).await;
        });
    }

    /// Raw scroll event from the container.
    pub fn on_scroll(&self) {
        let mut tracker = self.tracker;
        let schedule = tracker.write().on_scroll_event();
        self.publish();
        self.arm_quiet_timer();

        if schedule {
            self.schedule_frame();
        }
    }

    /// Window or container size changed. Shares the pending frame with
    /// scroll events, but always measures when it runs.
    pub fn on_resize(&self) {
        let mut tracker = self.tracker;
        let schedule = tracker.write().on_resize_event();
        if schedule {
            self.schedule_frame();
        }
    }

    fn schedule_frame(&self) {
        let this = self.clone();
        spawn(async move {
            next_frame().await;
            let mut tracker = this.tracker;
            let due = tracker.write().begin_frame(Instant::now());
            if due {
                this.evaluate(false).await;
            }
        });
    }

    /// Smooth-scroll to a section and highlight it immediately.
    pub fn navigate_to(&self, section: SectionId) {
        let mut tracker = self.tracker;
        tracker.write().navigate_to(section);
        self.publish();
        // The pin must expire even if the scroll produces no events
        self.arm_quiet_timer();

        let Some(node) = self.sections.get(section) else {
            tracing::debug!(%section, "Navigation target not mounted");
            return;
        };
        spawn(async move {
            if let Err(e) = node.scroll_to(ScrollBehavior::Smooth).await {
                tracing::warn!(%section, "Failed to scroll to section: {:?}", e);
            }
        });
    }

    fn arm_quiet_timer(&self) {
        let quiet = self.debouncer.trigger();
        let this = self.clone();
        spawn(async move {
            if !quiet.await {
                return;
            }
            let mut tracker = this.tracker;
            let outcome = tracker.write().on_quiet();
            this.publish();
            match outcome {
                QuietOutcome::Unpinned(section) => {
                    tracing::debug!(%section, "Navigation scroll finished");
                }
                QuietOutcome::Settle => this.evaluate(true).await,
            }
        });
    }

    /// Measure the viewport and every registered section.
    async fn measure(&self) -> Option<(Bounds, Vec<SectionProbe>)> {
        let container = self.container.peek().clone()?;
        let viewport = match container.get_client_rect().await {
            Ok(rect) => to_bounds(rect),
            Err(e) => {
                tracing::debug!("Failed to measure scroll container: {:?}", e);
                return None;
            }
        };

        let mut probes = Vec::new();
        for (id, node) in self.sections.snapshot() {
            if let Ok(rect) = node.get_client_rect().await {
                probes.push(SectionProbe::new(id, to_bounds(rect)));
            }
        }
        Some((viewport, probes))
    }

    async fn evaluate(&self, settle: bool) {
        let Some((bounds, probes)) = self.measure().await else {
            return;
        };

        let mut viewport = self.viewport;
        let next = viewport.peek().next(bounds);
        viewport.set(next);

        let mut tracker = self.tracker;
        let midpoint = bounds.midpoint_y();
        if settle {
            tracker.write().settle(&probes, midpoint);
        } else {
            tracker.write().apply_evaluation(&probes, midpoint);
        }
        self.publish();
    }

    /// Push tracker state to the reactive signal, only when it changed.
    fn publish(&self) {
        let next = self.tracker.read().state();
        let mut state = self.state;
        if *state.peek() != next {
            state.set(next);
        }
    }
}
