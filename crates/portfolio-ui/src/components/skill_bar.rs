//! Skill Bar Component
//!
//! Labelled progress bar that stays empty until revealed, then widens to
//! its level via a CSS width transition.

use dioxus::prelude::*;
use portfolio_core::content::Skill;
use portfolio_core::Accent;

/// Inline style for the bar fill.
pub fn skill_fill_style(skill: &Skill, revealed: bool) -> String {
    if revealed {
        format!("width: {};", skill.width())
    } else {
        "width: 0%;".to_string()
    }
}

#[component]
pub fn SkillBar(skill: Skill, accent: Accent, revealed: bool) -> Element {
    let style = skill_fill_style(&skill, revealed);

    rsx! {
        div { class: "skill-item",
            div { class: "skill-item__header",
                span { class: "skill-item__name", "{skill.name}" }
                span { class: "skill-item__level {accent.class()}", "{skill.level}%" }
            }
            div { class: "skill-track",
                div {
                    class: if revealed { "skill-bar {accent.class()} revealed" } else { "skill-bar {accent.class()}" },
                    style: "{style}",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_empty_until_revealed() {
        let skill = Skill { name: "GraphQL", level: 80 };
        assert_eq!(skill_fill_style(&skill, false), "width: 0%;");
        assert_eq!(skill_fill_style(&skill, true), "width: 80%;");
    }
}
