use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{ObserverOptions, RevealSchedule, SectionId, PROJECTS};
use portfolio_ui::SectionHeader;

use crate::components::ProjectCard;
use crate::context::use_section_registry;
use crate::observers::reveal::use_reveal_cascade_with;

/// Cards fade in 200ms apart, the first one after 200ms.
const CARD_SCHEDULE: RevealSchedule = RevealSchedule {
    base: Duration::from_millis(200),
    step: Duration::from_millis(200),
};

/// Project gallery.
#[component]
pub fn Projects() -> Element {
    let sections = use_section_registry();
    let cascade = use_reveal_cascade_with(PROJECTS.len(), ObserverOptions::new(0.1), CARD_SCHEDULE);

    rsx! {
        section {
            id: SectionId::Projects.anchor(),
            class: "section projects",
            onmounted: move |evt| sections.register(SectionId::Projects, evt.data()),

            SectionHeader {
                title: "Featured Projects".to_string(),
                subtitle: "A few things I've built recently".to_string(),
            }

            div {
                class: "projects-grid",
                onmounted: move |evt| cascade.region.attach(evt.data()),
                for (i, entry) in PROJECTS.iter().enumerate() {
                    ProjectCard {
                        key: "{entry.title}",
                        entry: *entry,
                        revealed: cascade.is_revealed(i),
                    }
                }
            }
        }
    }
}
