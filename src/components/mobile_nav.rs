//! Mobile Navigation Component
//!
//! Bottom navigation bar for mobile devices (< 768px).

use dioxus::prelude::*;
use portfolio_core::{SectionId, SECTIONS};
use portfolio_ui::Icon;

use crate::components::navigation::section_icon;

#[derive(Props, Clone, PartialEq)]
pub struct MobileNavProps {
    /// Section currently owning the viewport
    pub active: SectionId,
    pub on_navigate: EventHandler<SectionId>,
}

/// Mobile bottom navigation bar
///
/// Icons for every section; the label is only shown on the active one.
#[component]
pub fn MobileNav(props: MobileNavProps) -> Element {
    let on_navigate = props.on_navigate;

    rsx! {
        nav { class: "mobile-nav",
            for section in SECTIONS {
                button {
                    key: "{section.anchor()}",
                    r#type: "button",
                    class: if section == props.active { "mobile-nav-item active" } else { "mobile-nav-item" },
                    "aria-label": "{section.label()}",
                    onclick: move |_| on_navigate.call(section),

                    span { class: "mobile-nav-icon",
                        Icon { name: section_icon(section), size: 22 }
                    }
                    span { class: "mobile-nav-label", "{section.label()}" }
                }
            }
        }
    }
}
