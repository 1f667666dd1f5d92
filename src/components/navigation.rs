//! Navigation Highlighter
//!
//! Top bar with section links, the mobile slide-in drawer and the resume
//! download. Highlighting is a pure function of [`ScrollState`]: exactly
//! one link (the active section) carries the `active` class.

use dioxus::prelude::*;
use portfolio_core::{ScrollState, SectionId, Theme, PROFILE, SECTIONS};
use portfolio_ui::{ButtonVariant, Icon, IconName, LinkButton};

use crate::components::ThemeToggle;

/// Class for a navigation link given the active section.
pub fn nav_link_class(section: SectionId, active: SectionId) -> &'static str {
    if section == active {
        "nav-link active"
    } else {
        "nav-link"
    }
}

/// Class for the top bar; it slides away while the page is scrolling.
pub fn nav_bar_class(state: ScrollState) -> &'static str {
    if state.is_scrolling {
        "nav-bar nav-bar--scrolling"
    } else {
        "nav-bar"
    }
}

/// Lucide icon for a section.
pub fn section_icon(section: SectionId) -> IconName {
    match section {
        SectionId::Home => IconName::Home,
        SectionId::Skills => IconName::Code,
        SectionId::Experience => IconName::Award,
        SectionId::Projects => IconName::FolderOpen,
        SectionId::Contact => IconName::Send,
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavigationProps {
    pub state: ScrollState,
    pub theme: Theme,
    pub on_navigate: EventHandler<SectionId>,
    pub on_toggle_theme: EventHandler<()>,
}

#[component]
pub fn Navigation(props: NavigationProps) -> Element {
    let mut menu_open = use_signal(|| false);
    let state = props.state;
    let on_navigate = props.on_navigate;

    rsx! {
        header { class: "{nav_bar_class(state)}",
            div { class: "nav-inner",
                a {
                    class: "nav-brand",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_navigate.call(SectionId::Home);
                    },
                    span { class: "nav-brand__prompt", ">" }
                    span { class: "nav-brand__name", "{PROFILE.short_name}" }
                }

                nav { class: "nav-links",
                    for section in SECTIONS {
                        a {
                            key: "{section.anchor()}",
                            class: nav_link_class(section, state.active),
                            href: "#{section.anchor()}",
                            "aria-current": if section == state.active { "page" },
                            onclick: move |evt| {
                                evt.prevent_default();
                                on_navigate.call(section);
                            },
                            "{section.label()}"
                        }
                    }
                }

                div { class: "nav-actions",
                    ThemeToggle { theme: props.theme, on_toggle: props.on_toggle_theme }
                    LinkButton {
                        variant: ButtonVariant::Ghost,
                        href: PROFILE.resume_path.to_string(),
                        download: true,
                        class: "nav-resume".to_string(),
                        Icon { name: IconName::Download, size: 16 }
                        span { "Resume" }
                    }
                    button {
                        class: "nav-menu-toggle",
                        r#type: "button",
                        "aria-label": if menu_open() { "Close menu" } else { "Open menu" },
                        "aria-expanded": if menu_open() { "true" } else { "false" },
                        onclick: move |_| menu_open.set(!menu_open()),
                        if menu_open() {
                            Icon { name: IconName::Close, size: 22 }
                        } else {
                            Icon { name: IconName::Menu, size: 22 }
                        }
                    }
                }
            }
        }

        if menu_open() {
            div {
                class: "nav-drawer-backdrop",
                onclick: move |_| menu_open.set(false),
            }
            aside { class: "nav-drawer",
                for section in SECTIONS {
                    a {
                        key: "{section.anchor()}",
                        class: nav_link_class(section, state.active),
                        href: "#{section.anchor()}",
                        onclick: move |evt| {
                            evt.prevent_default();
                            menu_open.set(false);
                            on_navigate.call(section);
                        },
                        Icon { name: section_icon(section), size: 18 }
                        span { "{section.label()}" }
                    }
                }
                LinkButton {
                    variant: ButtonVariant::Primary,
                    href: PROFILE.resume_path.to_string(),
                    download: true,
                    class: "nav-drawer__resume".to_string(),
                    Icon { name: IconName::Download, size: 16 }
                    span { "Download Resume" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_link_is_active() {
        for active in SECTIONS {
            let highlighted: Vec<_> = SECTIONS
                .into_iter()
                .filter(|s| nav_link_class(*s, active).contains("active"))
                .collect();
            assert_eq!(highlighted, vec![active]);
        }
    }

    #[test]
    fn bar_hides_while_scrolling() {
        let idle = ScrollState::default();
        assert_eq!(nav_bar_class(idle), "nav-bar");

        let scrolling = ScrollState {
            is_scrolling: true,
            ..idle
        };
        assert!(nav_bar_class(scrolling).contains("nav-bar--scrolling"));
    }

    #[test]
    fn every_section_has_a_distinct_icon() {
        let icons: Vec<_> = SECTIONS.into_iter().map(section_icon).collect();
        for (i, icon) in icons.iter().enumerate() {
            assert!(!icons[i + 1..].contains(icon));
        }
    }
}
