//! Technology tag pills shown on project cards.

use dioxus::prelude::*;

#[component]
pub fn TechTag(label: String) -> Element {
    rsx! {
        span { class: "tech-tag", "{label}" }
    }
}

/// Wrapping row of [`TechTag`]s.
#[component]
pub fn TechTagList(tags: Vec<String>) -> Element {
    if tags.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "tech-tags",
            for tag in tags.into_iter() {
                TechTag { key: "{tag}", label: tag.clone() }
            }
        }
    }
}
