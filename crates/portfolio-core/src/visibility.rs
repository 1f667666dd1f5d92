//! Viewport intersection state machines.
//!
//! The caller measures a target and the viewport, then feeds the
//! intersection ratio to an observer. Two flavours:
//!
//! - [`VisibilityObserver::once`]: fires a single `Entered` and disengages
//!   (reveal-once effects).
//! - [`VisibilityObserver::continuous`]: reports every transition
//!   (slideshow auto-advance, particle animation).

use crate::section::Bounds;

/// Threshold and pre-trigger margin.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ObserverOptions {
    /// Fraction of the target's area that must be visible (`0.0..=1.0`).
    pub threshold: f64,
    /// Pixels added to every side of the viewport before intersecting.
    pub margin: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            margin: 0.0,
        }
    }
}

impl ObserverOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            margin: 0.0,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Whether `target` counts as visible inside `viewport`.
    pub fn is_visible(&self, target: &Bounds, viewport: &Bounds) -> bool {
        let viewport = viewport.expand(self.margin);
        if target.intersection(&viewport).is_none() {
            return false;
        }
        let ratio = target.intersection_ratio(&viewport);
        if self.threshold <= 0.0 {
            return true;
        }
        ratio >= self.threshold
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ObserverMode {
    Once,
    Continuous,
}

/// A visibility change worth reporting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Transition {
    Entered,
    Left,
}

#[derive(Clone, Debug)]
pub struct VisibilityObserver {
    options: ObserverOptions,
    mode: ObserverMode,
    visible: bool,
    disengaged: bool,
}

impl VisibilityObserver {
    pub fn once(options: ObserverOptions) -> Self {
        Self::new(options, ObserverMode::Once)
    }

    pub fn continuous(options: ObserverOptions) -> Self {
        Self::new(options, ObserverMode::Continuous)
    }

    fn new(options: ObserverOptions, mode: ObserverMode) -> Self {
        Self {
            options,
            mode,
            visible: false,
            disengaged: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// A one-shot observer that already fired.
    pub fn is_disengaged(&self) -> bool {
        self.disengaged
    }

    /// Feed a new measurement.
    pub fn observe(&mut self, target: &Bounds, viewport: &Bounds) -> Option<Transition> {
        if self.disengaged {
            return None;
        }
        let now_visible = self.options.is_visible(target, viewport);
        let transition = match (self.visible, now_visible) {
            (false, true) => Some(Transition::Entered),
            (true, false) => Some(Transition::Left),
            _ => None,
        };
        self.visible = now_visible;

        match (self.mode, transition) {
            (ObserverMode::Once, Some(Transition::Entered)) => {
                self.disengaged = true;
                transition
            }
            (ObserverMode::Once, _) => None,
            (ObserverMode::Continuous, t) => t,
        }
    }

    /// Stop reporting (teardown).
    pub fn disconnect(&mut self) {
        self.disengaged = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Bounds {
        Bounds::new(0.0, 0.0, 1000.0, 800.0)
    }

    fn card_at(top: f64) -> Bounds {
        Bounds::new(100.0, top, 300.0, 200.0)
    }

    #[test]
    fn once_fires_a_single_time() {
        let mut observer = VisibilityObserver::once(ObserverOptions::new(0.5));
        assert_eq!(observer.observe(&card_at(1200.0), &viewport()), None);
        assert_eq!(
            observer.observe(&card_at(500.0), &viewport()),
            Some(Transition::Entered)
        );
        assert!(observer.is_disengaged());
        assert_eq!(observer.observe(&card_at(1200.0), &viewport()), None);
        assert_eq!(observer.observe(&card_at(500.0), &viewport()), None);
    }

    #[test]
    fn threshold_gates_partial_visibility() {
        let mut observer = VisibilityObserver::once(ObserverOptions::new(0.5));
        // 25% visible
        assert_eq!(observer.observe(&card_at(750.0), &viewport()), None);
        // 50% visible
        assert_eq!(
            observer.observe(&card_at(700.0), &viewport()),
            Some(Transition::Entered)
        );
    }

    #[test]
    fn margin_pre_triggers_before_viewport_edge() {
        let opts = ObserverOptions::new(0.1).with_margin(100.0);
        let mut observer = VisibilityObserver::once(opts);
        assert_eq!(
            observer.observe(&card_at(850.0), &viewport()),
            Some(Transition::Entered)
        );
    }

    #[test]
    fn continuous_reports_every_transition() {
        let mut observer = VisibilityObserver::continuous(ObserverOptions::new(0.1));
        assert_eq!(
            observer.observe(&card_at(100.0), &viewport()),
            Some(Transition::Entered)
        );
        assert_eq!(observer.observe(&card_at(120.0), &viewport()), None);
        assert_eq!(
            observer.observe(&card_at(-900.0), &viewport()),
            Some(Transition::Left)
        );
        assert_eq!(
            observer.observe(&card_at(100.0), &viewport()),
            Some(Transition::Entered)
        );
        assert!(!observer.is_disengaged());
    }

    #[test]
    fn disconnect_silences_observer() {
        let mut observer = VisibilityObserver::continuous(ObserverOptions::default());
        observer.disconnect();
        assert_eq!(observer.observe(&card_at(100.0), &viewport()), None);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(ObserverOptions::new(4.0).threshold, 1.0);
        assert_eq!(ObserverOptions::new(-1.0).threshold, 0.0);
    }
}
