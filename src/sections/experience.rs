//! Experience Section
//!
//! Work timeline next to the education timeline. Entries and their
//! bullets are steps of a single reveal cascade, in DOM order.

use dioxus::prelude::*;
use portfolio_core::content::{TimelineEntry, EDUCATION, EXPERIENCE};
use portfolio_core::{ObserverOptions, SectionId};
use portfolio_ui::{Icon, IconName, SectionHeader};

use crate::context::use_section_registry;
use crate::observers::{use_reveal_cascade, RevealCascade};

#[component]
pub fn Experience() -> Element {
    let sections = use_section_registry();
    let total = reveal_steps(EXPERIENCE) + reveal_steps(EDUCATION);
    let cascade = use_reveal_cascade(total, ObserverOptions::new(0.1));

    rsx! {
        section {
            id: SectionId::Experience.anchor(),
            class: "section experience",
            onmounted: move |evt| sections.register(SectionId::Experience, evt.data()),

            SectionHeader {
                title: "Experience & Education".to_string(),
            }

            div {
                class: "timeline-grid",
                onmounted: move |evt| cascade.region.attach(evt.data()),

                div { class: "timeline-column",
                    h3 { class: "timeline-heading",
                        Icon { name: IconName::Briefcase, size: 20 }
                        "Experience"
                    }
                    {timeline(EXPERIENCE, cascade, 0)}
                }
                div { class: "timeline-column",
                    h3 { class: "timeline-heading",
                        Icon { name: IconName::BookOpen, size: 20 }
                        "Education"
                    }
                    {timeline(EDUCATION, cascade, reveal_steps(EXPERIENCE))}
                }
            }
        }
    }
}

/// Cascade steps used by a timeline: one per entry plus one per bullet.
fn reveal_steps(entries: &[TimelineEntry]) -> usize {
    entries.iter().map(|e| 1 + e.bullets.len()).sum()
}

/// Cascade index of each entry, starting at `offset`.
fn entry_starts(entries: &[TimelineEntry], offset: usize) -> Vec<usize> {
    let mut next = offset;
    entries
        .iter()
        .map(|e| {
            let start = next;
            next += 1 + e.bullets.len();
            start
        })
        .collect()
}

fn timeline(entries: &'static [TimelineEntry], cascade: RevealCascade, offset: usize) -> Element {
    let starts = entry_starts(entries, offset);

    rsx! {
        ol { class: "timeline",
            for (entry, start) in entries.iter().zip(starts) {
                li {
                    key: "{entry.title}",
                    class: cascade.class("timeline-entry glass reveal", start),

                    span { class: "timeline-marker" }
                    div { class: "timeline-entry__header",
                        h4 { class: "timeline-entry__title", "{entry.title}" }
                        span { class: "timeline-entry__period",
                            Icon { name: IconName::Clock, size: 14 }
                            "{entry.period}"
                        }
                    }
                    p { class: "timeline-entry__place", "{entry.place}" }
                    if !entry.bullets.is_empty() {
                        ul { class: "timeline-entry__bullets",
                            for (b, bullet) in entry.bullets.iter().enumerate() {
                                li {
                                    key: "{bullet}",
                                    class: cascade.class("reveal", start + 1 + b),
                                    "{bullet}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_count_entries_and_bullets() {
        assert_eq!(reveal_steps(EXPERIENCE), 4);
        assert_eq!(reveal_steps(EDUCATION), 2);
    }

    #[test]
    fn entries_start_after_previous_bullets() {
        assert_eq!(entry_starts(EXPERIENCE, 0), vec![0]);
        assert_eq!(entry_starts(EDUCATION, 4), vec![4, 5]);
    }
}
