//! Staggered reveal of a group of items.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{ObserverOptions, RevealSchedule, RevealSequencer};

use super::visibility::{use_reveal_once, ObservedRegion};

/// A one-shot region whose items appear one after another.
#[derive(Clone, Copy, PartialEq)]
pub struct RevealCascade {
    pub region: ObservedRegion,
    revealed: Signal<usize>,
}

impl RevealCascade {
    /// Whether item `index` has been revealed (subscribes the caller).
    pub fn is_revealed(&self, index: usize) -> bool {
        index < (self.revealed)()
    }

    /// Class list for item `index`: `base` plus `revealed` once shown.
    pub fn class(&self, base: &str, index: usize) -> String {
        if self.is_revealed(index) {
            format!("{base} revealed")
        } else {
            base.to_string()
        }
    }
}

/// Reveal `count` items at the default 100ms step once the region is seen.
pub fn use_reveal_cascade(count: usize, options: ObserverOptions) -> RevealCascade {
    use_reveal_cascade_with(count, options, RevealSchedule::default())
}

/// Reveal `count` items on a custom schedule once the region is seen.
pub fn use_reveal_cascade_with(
    count: usize,
    options: ObserverOptions,
    schedule: RevealSchedule,
) -> RevealCascade {
    let region = use_reveal_once(options);
    let sequencer = use_hook(|| CopyValue::new(RevealSequencer::new()));
    let mut revealed = use_signal(|| 0usize);

    use_effect(move || {
        if !region.is_visible() {
            return;
        }
        let mut sequencer = sequencer;
        if !sequencer.write().start(count) {
            return;
        }
        tracing::trace!(count, "Reveal cascade started");
        spawn(async move {
            let mut step = 0;
            loop {
                let gap = schedule.gap_before(step);
                if gap > Duration::ZERO {
                    tokio::time::sleep(gap).await;
                }
                let Some(index) = sequencer.write().advance() else {
                    break;
                };
                revealed.set(index + 1);
                step += 1;
            }
        });
    });

    RevealCascade { region, revealed }
}
