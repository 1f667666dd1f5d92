//! Section Header Component
//!
//! Gradient section title with an optional subtitle line.

use dioxus::prelude::*;

#[component]
pub fn SectionHeader(
    /// Title text
    title: String,
    /// Muted line under the title
    #[props(default)]
    subtitle: Option<String>,
) -> Element {
    rsx! {
        header { class: "section-header",
            h2 { class: "section-title text-gradient", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
