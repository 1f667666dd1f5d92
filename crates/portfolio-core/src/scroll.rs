//! Scroll tracking: which section owns the viewport, and whether the
//! user is currently scrolling.
//!
//! ## Event flow
//!
//! ```text
//! raw scroll event ──▶ on_scroll_event() ──▶ is_scrolling = true
//!        │                   │
//!        │                   └─ frame requested? ──▶ next frame ──▶ begin_frame(now)
//!        │                                                              │
//!        │                                    elapsed ≥ interval ──▶ apply_evaluation()
//!        │
//!        └─▶ Debouncer::trigger() ── quiet period ──▶ on_quiet()
//!                                                       ├─ Unpinned(id)  (navigation finished)
//!                                                       └─ Settle        (run one last evaluation)
//! ```
//!
//! The tracker is pure state; timing and DOM measurement live with the caller.

use std::time::{Duration, Instant};

use crate::section::{resolve_active, SectionId, SectionProbe};

/// Minimum spacing between two section evaluations.
pub const EVALUATION_INTERVAL: Duration = Duration::from_millis(200);

/// Silence required before `is_scrolling` drops back to false.
pub const SCROLL_QUIET_PERIOD: Duration = Duration::from_millis(150);

/// Stand-in for one animation frame.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Scroll-derived UI state read by navigation and the page shell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ScrollState {
    pub active: SectionId,
    pub is_scrolling: bool,
}

/// Coalesces bursts of requests into at most one evaluation per frame,
/// and at most one per `min_interval`.
#[derive(Clone, Debug)]
pub struct FrameGate {
    pending: bool,
    forced: bool,
    last_evaluation: Option<Instant>,
    min_interval: Duration,
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new(EVALUATION_INTERVAL)
    }
}

impl FrameGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            pending: false,
            forced: false,
            last_evaluation: None,
            min_interval,
        }
    }

    /// Returns `true` when the caller must schedule a frame.
    ///
    /// While a frame is already pending every further request is dropped.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Like [`request`](Self::request), but the next frame evaluates even
    /// inside `min_interval`. Still shares the single pending frame.
    pub fn request_forced(&mut self) -> bool {
        self.forced = true;
        self.request()
    }

    /// Called from the scheduled frame. Returns whether to evaluate now.
    pub fn begin_frame(&mut self, now: Instant) -> bool {
        self.pending = false;
        let forced = std::mem::take(&mut self.forced);
        match self.last_evaluation {
            Some(last) if !forced && now.saturating_duration_since(last) < self.min_interval => false,
            _ => {
                self.last_evaluation = Some(now);
                true
            }
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn reset(&mut self) {
        self.pending = false;
        self.forced = false;
        self.last_evaluation = None;
    }
}

/// What the caller must do once scrolling has been quiet for a full period.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum QuietOutcome {
    /// A navigation pin was released; the active section stays as navigated.
    Unpinned(SectionId),
    /// Run one final evaluation so the active section settles.
    Settle,
}

/// Owner of [`ScrollState`].
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    state: ScrollState,
    gate: FrameGate,
    pinned: Option<SectionId>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn active(&self) -> SectionId {
        self.state.active
    }

    pub fn is_scrolling(&self) -> bool {
        self.state.is_scrolling
    }

    pub fn pinned(&self) -> Option<SectionId> {
        self.pinned
    }

    /// Record a raw scroll event. Returns `true` when a frame must be scheduled.
    pub fn on_scroll_event(&mut self) -> bool {
        self.state.is_scrolling = true;
        self.gate.request()
    }

    /// Record a resize. Returns `true` when a frame must be scheduled.
    ///
    /// Layout changed, so the frame measures regardless of the interval,
    /// but a burst of resizes (and scrolls) still shares one frame.
    pub fn on_resize_event(&mut self) -> bool {
        self.gate.request_forced()
    }

    /// Start of a scheduled frame. Returns whether an evaluation should run.
    pub fn begin_frame(&mut self, now: Instant) -> bool {
        self.gate.begin_frame(now)
    }

    /// Apply measured section bounds. Returns the new active section if it changed.
    ///
    /// Ignored while a navigation pin is held, so a smooth scroll passing
    /// over intermediate sections never steals the highlight.
    pub fn apply_evaluation(&mut self, probes: &[SectionProbe], midpoint: f64) -> Option<SectionId> {
        if self.pinned.is_some() {
            return None;
        }
        let next = resolve_active(probes, midpoint, self.state.active);
        if next == self.state.active {
            return None;
        }
        tracing::debug!(from = %self.state.active, to = %next, "Active section changed");
        self.state.active = next;
        Some(next)
    }

    /// Optimistically activate a section chosen from navigation.
    pub fn navigate_to(&mut self, section: SectionId) {
        self.state.active = section;
        self.pinned = Some(section);
    }

    /// Scrolling has been silent for a full quiet period.
    pub fn on_quiet(&mut self) -> QuietOutcome {
        self.state.is_scrolling = false;
        match self.pinned.take() {
            Some(section) => {
                self.state.active = section;
                QuietOutcome::Unpinned(section)
            }
            None => QuietOutcome::Settle,
        }
    }

    /// Evaluate regardless of the frame gate (used when settling).
    pub fn settle(&mut self, probes: &[SectionProbe], midpoint: f64) -> Option<SectionId> {
        self.apply_evaluation(probes, midpoint)
    }

    /// Back to the initial state, as on unmount.
    pub fn reset(&mut self) {
        self.state = ScrollState::default();
        self.gate.reset();
        self.pinned = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Bounds;

    fn layout() -> Vec<SectionProbe> {
        // 800px sections stacked from y = 0
        crate::section::SECTIONS
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let top = i as f64 * 800.0;
                SectionProbe::new(*id, Bounds::vertical(top, top + 800.0))
            })
            .collect()
    }

    #[test]
    fn burst_requests_schedule_one_frame() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        for _ in 0..50 {
            assert!(!gate.request());
        }
        assert!(gate.is_pending());
        assert!(gate.begin_frame(Instant::now()));
        assert!(!gate.is_pending());
    }

    #[test]
    fn frames_closer_than_interval_are_skipped() {
        let mut gate = FrameGate::new(Duration::from_millis(200));
        let t0 = Instant::now();
        gate.request();
        assert!(gate.begin_frame(t0));
        gate.request();
        assert!(!gate.begin_frame(t0 + Duration::from_millis(100)));
        gate.request();
        assert!(gate.begin_frame(t0 + Duration::from_millis(250)));
    }

    #[test]
    fn forced_request_bypasses_interval_once() {
        let mut gate = FrameGate::new(Duration::from_millis(200));
        let t0 = Instant::now();
        gate.request();
        assert!(gate.begin_frame(t0));
        assert!(gate.request_forced());
        assert!(gate.begin_frame(t0 + Duration::from_millis(20)));
        gate.request();
        assert!(!gate.begin_frame(t0 + Duration::from_millis(40)));
    }

    #[test]
    fn resize_burst_shares_one_frame() {
        let mut tracker = ScrollTracker::new();
        let t0 = Instant::now();
        tracker.on_scroll_event();
        assert!(tracker.begin_frame(t0));

        let scheduled = (0..40).filter(|_| tracker.on_resize_event()).count();
        assert_eq!(scheduled, 1);
        // Scroll events during the burst join the same frame
        assert!(!tracker.on_scroll_event());

        assert!(tracker.begin_frame(t0 + Duration::from_millis(16)));
        assert!(!tracker.begin_frame(t0 + Duration::from_millis(32)));
    }

    #[test]
    fn scroll_event_sets_scrolling_flag() {
        let mut tracker = ScrollTracker::new();
        assert!(!tracker.is_scrolling());
        assert!(tracker.on_scroll_event());
        assert!(tracker.is_scrolling());
        assert!(!tracker.on_scroll_event());
    }

    #[test]
    fn evaluation_reports_changes_only() {
        let mut tracker = ScrollTracker::new();
        let probes = layout();
        assert_eq!(tracker.apply_evaluation(&probes, 100.0), None);
        assert_eq!(
            tracker.apply_evaluation(&probes, 900.0),
            Some(SectionId::Skills)
        );
        assert_eq!(tracker.apply_evaluation(&probes, 901.0), None);
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn navigation_pin_survives_intermediate_evaluations() {
        let mut tracker = ScrollTracker::new();
        let probes = layout();
        tracker.navigate_to(SectionId::Contact);
        assert_eq!(tracker.active(), SectionId::Contact);

        tracker.on_scroll_event();
        assert_eq!(tracker.apply_evaluation(&probes, 1700.0), None);
        assert_eq!(tracker.active(), SectionId::Contact);

        assert_eq!(tracker.on_quiet(), QuietOutcome::Unpinned(SectionId::Contact));
        assert_eq!(tracker.active(), SectionId::Contact);
        assert!(!tracker.is_scrolling());
        assert_eq!(tracker.pinned(), None);
    }

    #[test]
    fn quiet_without_pin_requests_settle() {
        let mut tracker = ScrollTracker::new();
        tracker.on_scroll_event();
        assert_eq!(tracker.on_quiet(), QuietOutcome::Settle);
        assert_eq!(
            tracker.settle(&layout(), 2500.0),
            Some(SectionId::Projects)
        );
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut tracker = ScrollTracker::new();
        tracker.on_scroll_event();
        tracker.navigate_to(SectionId::Projects);
        tracker.reset();
        assert_eq!(tracker.state(), ScrollState::default());
        assert_eq!(tracker.pinned(), None);
        assert!(tracker.on_scroll_event());
    }
}
