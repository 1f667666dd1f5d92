//! Viewport observers bound to a mounted node.
//!
//! Each observed region re-measures its node whenever the shell publishes
//! a new [`ViewportFrame`](crate::context::ViewportFrame). One-shot
//! regions stop measuring after their first entry.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::visibility::ObserverMode;
use portfolio_core::{Bounds, ObserverOptions, Transition, VisibilityObserver};

use crate::context::{to_bounds, use_viewport, ViewportFrame};

/// A node plus its reactive visibility flag and last measured bounds.
#[derive(Clone, Copy, PartialEq)]
pub struct ObservedRegion {
    target: Signal<Option<Rc<MountedData>>>,
    visible: Signal<bool>,
    bounds: Signal<Option<Bounds>>,
}

impl ObservedRegion {
    /// Bind the region to its node (call from `onmounted`).
    pub fn attach(mut self, node: Rc<MountedData>) {
        self.target.set(Some(node));
    }

    pub fn is_visible(&self) -> bool {
        (self.visible)()
    }

    /// The node's rect from the latest measurement, if any.
    pub fn bounds(&self) -> Option<Bounds> {
        (self.bounds)()
    }
}

/// The node to measure for this frame, if any.
///
/// Nothing happens until the region is attached and the shell has
/// measured the viewport; a one-shot region that already fired (or a
/// disconnected one) is never measured again.
fn measurement_target<T>(target: Option<T>, frame: &ViewportFrame, observer: &VisibilityObserver) -> Option<T> {
    if !frame.is_measured() || observer.is_disengaged() {
        return None;
    }
    target
}

/// Latches true the first time the node enters the viewport.
pub fn use_reveal_once(options: ObserverOptions) -> ObservedRegion {
    use_observed_region(ObserverMode::Once, options)
}

/// Tracks the node entering and leaving the viewport.
pub fn use_visibility(options: ObserverOptions) -> ObservedRegion {
    use_observed_region(ObserverMode::Continuous, options)
}

fn use_observed_region(mode: ObserverMode, options: ObserverOptions) -> ObservedRegion {
    let viewport = use_viewport();
    let target = use_signal(|| None::<Rc<MountedData>>);
    let mut visible = use_signal(|| false);
    let mut bounds = use_signal(|| None::<Bounds>);
    let observer = use_hook(|| {
        CopyValue::new(match mode {
            ObserverMode::Once => VisibilityObserver::once(options),
            ObserverMode::Continuous => VisibilityObserver::continuous(options),
        })
    });

    use_effect(move || {
        let frame = viewport();
        let Some(node) = measurement_target(target(), &frame, &observer.peek()) else {
            return;
        };
        spawn(async move {
            let Ok(rect) = node.get_client_rect().await else {
                return;
            };
            let rect = to_bounds(rect);
            if *bounds.peek() != Some(rect) {
                bounds.set(Some(rect));
            }
            let mut observer = observer;
            let transition = observer.write().observe(&rect, &frame.bounds);
            match transition {
                Some(Transition::Entered) => visible.set(true),
                Some(Transition::Left) => visible.set(false),
                None => {}
            }
        });
    });

    use_drop(move || {
        let mut observer = observer;
        if let Ok(mut observer) = observer.try_write() {
            observer.disconnect();
        };
    });

    ObservedRegion { target, visible, bounds }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(generation: u64) -> ViewportFrame {
        ViewportFrame {
            bounds: Bounds::new(0.0, 0.0, 1280.0, 860.0),
            generation,
        }
    }

    #[test]
    fn unattached_region_is_never_measured() {
        let mut observer = VisibilityObserver::continuous(ObserverOptions::default());
        for generation in 1..20 {
            assert_eq!(measurement_target(None::<u8>, &measured(generation), &observer), None);
        }
        assert!(!observer.is_visible());
        // Nothing was fed in, so the first real measurement still reports entry
        let card = Bounds::new(100.0, 100.0, 300.0, 200.0);
        assert_eq!(
            observer.observe(&card, &measured(20).bounds),
            Some(Transition::Entered)
        );
    }

    #[test]
    fn waits_for_first_viewport_measurement() {
        let observer = VisibilityObserver::once(ObserverOptions::default());
        assert!(!ViewportFrame::default().is_measured());
        assert_eq!(measurement_target(Some(7u8), &ViewportFrame::default(), &observer), None);
        assert_eq!(measurement_target(Some(7u8), &measured(1), &observer), Some(7));
    }

    #[test]
    fn fired_once_region_stops_measuring() {
        let mut observer = VisibilityObserver::once(ObserverOptions::default());
        let frame = measured(1);
        observer.observe(&Bounds::new(0.0, 0.0, 100.0, 100.0), &frame.bounds);
        assert!(observer.is_disengaged());
        assert_eq!(measurement_target(Some(7u8), &measured(2), &observer), None);
    }

    #[test]
    fn disconnected_region_stops_measuring() {
        let mut observer = VisibilityObserver::continuous(ObserverOptions::default());
        observer.disconnect();
        assert_eq!(measurement_target(Some(7u8), &measured(1), &observer), None);
    }
}
