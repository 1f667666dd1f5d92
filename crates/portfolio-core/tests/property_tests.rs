//! Property-based tests for scroll tracking and reveal sequencing
//!
//! Uses proptest to check the section-resolution, throttling and
//! reveal-order laws over arbitrary layouts and event bursts.

use std::time::{Duration, Instant};

use portfolio_core::scroll::EVALUATION_INTERVAL;
use portfolio_core::{
    resolve_active, Bounds, FrameGate, RevealSchedule, RevealSequencer, ScrollTracker, SectionId,
    SectionProbe, SECTIONS,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn section_strategy() -> impl Strategy<Value = SectionId> {
    prop::sample::select(SECTIONS.to_vec())
}

/// Arbitrary (possibly overlapping, possibly shuffled) section bounds
fn probes_strategy() -> impl Strategy<Value = Vec<SectionProbe>> {
    prop::collection::vec(
        (section_strategy(), -2000.0..4000.0f64, 0.0..1500.0f64),
        0..8,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(id, top, height)| SectionProbe::new(id, Bounds::vertical(top, top + height)))
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The resolved section is the earliest-declared one containing the midpoint,
    /// or the previous one when nothing contains it
    #[test]
    fn active_is_first_declared_match(
        probes in probes_strategy(),
        midpoint in -2000.0..5000.0f64,
        current in section_strategy(),
    ) {
        let resolved = resolve_active(&probes, midpoint, current);
        let containing: Vec<SectionId> = probes
            .iter()
            .filter(|p| p.bounds.contains_y(midpoint))
            .map(|p| p.id)
            .collect();

        match containing.iter().min_by_key(|id| id.ordinal()) {
            Some(first) => {
                prop_assert_eq!(resolved, *first);
            }
            None => {
                prop_assert_eq!(resolved, current);
            }
        }
    }

    /// The active section is always a declared section
    #[test]
    fn active_is_always_declared(probes in probes_strategy(), midpoints in prop::collection::vec(-2000.0..5000.0f64, 1..30)) {
        let mut tracker = ScrollTracker::new();
        for mid in midpoints {
            tracker.apply_evaluation(&probes, mid);
            prop_assert!(SECTIONS.contains(&tracker.active()));
        }
    }

    /// A burst of N requests before a frame yields at most one evaluation
    #[test]
    fn burst_yields_at_most_one_evaluation(bursts in prop::collection::vec(1usize..200, 1..20)) {
        let mut gate = FrameGate::default();
        let start = Instant::now();
        for (frame, n) in bursts.iter().enumerate() {
            let scheduled = (0..*n).filter(|_| gate.request()).count();
            prop_assert_eq!(scheduled, 1);
            let now = start + EVALUATION_INTERVAL * (frame as u32 + 1);
            prop_assert!(gate.begin_frame(now));
            prop_assert!(!gate.is_pending());
        }
    }

    /// Mixed scroll and resize bursts still schedule a single frame each
    #[test]
    fn mixed_burst_schedules_one_frame(
        bursts in prop::collection::vec(prop::collection::vec(any::<bool>(), 1..100), 1..20)
    ) {
        let mut tracker = ScrollTracker::new();
        let mut now = Instant::now();
        for events in bursts {
            let scheduled = events
                .iter()
                .filter(|resize| if **resize { tracker.on_resize_event() } else { tracker.on_scroll_event() })
                .count();
            prop_assert_eq!(scheduled, 1);
            now += Duration::from_millis(16);
            let evaluated = tracker.begin_frame(now);
            // A resize in the burst always measures
            if events.iter().any(|resize| *resize) {
                prop_assert!(evaluated);
            }
        }
    }

    /// Evaluations are never closer together than the interval
    #[test]
    fn evaluations_respect_interval(frame_gaps in prop::collection::vec(0u64..400, 1..50)) {
        let mut gate = FrameGate::default();
        let mut now = Instant::now();
        let mut last: Option<Instant> = None;
        for gap in frame_gaps {
            now += Duration::from_millis(gap);
            gate.request();
            if gate.begin_frame(now) {
                if let Some(prev) = last {
                    prop_assert!(now.duration_since(prev) >= EVALUATION_INTERVAL);
                }
                last = Some(now);
            }
        }
    }

    /// Navigation wins over any evaluation made while its pin is held
    #[test]
    fn navigation_target_becomes_active(
        target in section_strategy(),
        probes in probes_strategy(),
        midpoints in prop::collection::vec(-2000.0..5000.0f64, 0..20),
    ) {
        let mut tracker = ScrollTracker::new();
        tracker.navigate_to(target);
        for mid in midpoints {
            tracker.on_scroll_event();
            tracker.apply_evaluation(&probes, mid);
            prop_assert_eq!(tracker.active(), target);
        }
        tracker.on_quiet();
        prop_assert_eq!(tracker.active(), target);
    }

    /// Reveal offsets are monotonic and each child is revealed exactly once, in order
    #[test]
    fn reveal_order_is_monotonic(count in 0usize..40, step_ms in 1u64..500) {
        let schedule = RevealSchedule::new(Duration::ZERO, Duration::from_millis(step_ms));
        let offsets = schedule.offsets(count);
        prop_assert!(offsets.windows(2).all(|w| w[0] < w[1]));

        let mut seq = RevealSequencer::new();
        prop_assert!(seq.start(count));
        let order: Vec<usize> = std::iter::from_fn(|| seq.advance()).collect();
        prop_assert_eq!(order, (0..count).collect::<Vec<_>>());
        prop_assert!(!seq.start(count));
        prop_assert_eq!(seq.advance(), None);
    }
}

/// Example from the page layout: skills and experience overlap at the midpoint
#[test]
fn overlapping_skills_and_experience_resolves_to_skills() {
    let probes = [
        SectionProbe::new(SectionId::Home, Bounds::vertical(-1600.0, -800.0)),
        SectionProbe::new(SectionId::Skills, Bounds::vertical(-400.0, 500.0)),
        SectionProbe::new(SectionId::Experience, Bounds::vertical(300.0, 1200.0)),
        SectionProbe::new(SectionId::Projects, Bounds::vertical(1200.0, 2400.0)),
        SectionProbe::new(SectionId::Contact, Bounds::vertical(2400.0, 3000.0)),
    ];
    assert_eq!(resolve_active(&probes, 400.0, SectionId::Home), SectionId::Skills);
}
