use dioxus::prelude::*;
use portfolio_core::content::SKILL_GROUPS;
use portfolio_core::{ObserverOptions, SectionId};
use portfolio_ui::{Icon, IconName, SectionHeader, SkillBar};

use crate::context::use_section_registry;
use crate::observers::use_reveal_cascade;

/// Skill groups with animated proficiency bars.
#[component]
pub fn Skills() -> Element {
    let sections = use_section_registry();
    let total: usize = SKILL_GROUPS.iter().map(|g| g.skills.len()).sum();
    // Bars only fill once half the grid is on screen
    let bars = use_reveal_cascade(total, ObserverOptions::new(0.5));
    let cards = use_reveal_cascade(SKILL_GROUPS.len(), ObserverOptions::new(0.1));

    rsx! {
        section {
            id: SectionId::Skills.anchor(),
            class: "section skills",
            onmounted: move |evt| sections.register(SectionId::Skills, evt.data()),

            SectionHeader {
                title: "Technical Skills".to_string(),
                subtitle: "Tools I reach for every day".to_string(),
            }

            div {
                class: "skills-grid",
                onmounted: move |evt| {
                    let node = evt.data();
                    cards.region.attach(node.clone());
                    bars.region.attach(node);
                },
                for (g, group) in SKILL_GROUPS.iter().enumerate() {
                    div {
                        key: "{group.title}",
                        class: cards.class(&format!("skill-card glass reveal {}", group.accent.class()), g),

                        h3 { class: "skill-card__title",
                            if g == 0 {
                                Icon { name: IconName::Layout, size: 20 }
                            } else {
                                Icon { name: IconName::Server, size: 20 }
                            }
                            "{group.title}"
                        }
                        for (s, skill) in group.skills.iter().enumerate() {
                            SkillBar {
                                key: "{skill.name}",
                                skill: *skill,
                                accent: group.accent,
                                revealed: bars.is_revealed(skill_index(g, s)),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Flat index of skill `s` in group `g`, in DOM order.
fn skill_index(g: usize, s: usize) -> usize {
    SKILL_GROUPS[..g].iter().map(|group| group.skills.len()).sum::<usize>() + s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_indices_follow_dom_order() {
        let mut expected = 0;
        for (g, group) in SKILL_GROUPS.iter().enumerate() {
            for s in 0..group.skills.len() {
                assert_eq!(skill_index(g, s), expected);
                expected += 1;
            }
        }
    }
}
