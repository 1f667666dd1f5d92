//! Project Card
//!
//! One configurable card: image slideshow, hover/touch detail overlay,
//! tech tags and links. The slideshow only auto-advances while the card
//! is on screen.

use dioxus::prelude::*;
use portfolio_core::project::SLIDE_INTERVAL;
use portfolio_core::{Carousel, ObserverOptions, ProjectEntry};
use portfolio_ui::{Button, ButtonVariant, Icon, IconName, LinkButton, TechTagList};

use crate::components::ProjectImage;
use crate::observers::use_visibility;

#[derive(Props, Clone, PartialEq)]
pub struct ProjectCardProps {
    pub entry: ProjectEntry,
    /// Set by the surrounding reveal cascade
    #[props(default)]
    pub revealed: bool,
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let entry = props.entry;
    let region = use_visibility(ObserverOptions::new(0.1));
    let mut carousel = use_signal(|| Carousel::new(entry.media.len()));
    let mut overlay = use_signal(|| false);
    let ticker = use_hook(|| CopyValue::new(None::<Task>));

    // (Re)start the slideshow timer whenever visibility flips
    use_effect(move || {
        let visible = region.is_visible();
        let mut ticker = ticker;
        if let Some(task) = ticker.write().take() {
            task.cancel();
        }
        if !visible || !carousel.peek().can_advance() {
            return;
        }
        let task = spawn(async move {
            loop {
                tokio::time::sleep(SLIDE_INTERVAL).await;
                carousel.write().next();
            }
        });
        *ticker.write() = Some(task);
    });

    let slide = carousel();
    let src = entry.image(slide.index()).to_string();
    let tech: Vec<String> = entry.tech.iter().map(|t| t.to_string()).collect();
    let card_class = if props.revealed {
        format!("project-card {} revealed", entry.accent.class())
    } else {
        format!("project-card {}", entry.accent.class())
    };

    rsx! {
        article {
            class: "{card_class}",
            onmounted: move |evt| region.attach(evt.data()),

            div {
                class: "project-media",
                onmouseenter: move |_| overlay.set(true),
                onmouseleave: move |_| overlay.set(false),
                ontouchstart: move |_| overlay.set(!overlay()),

                ProjectImage { key: "{src}", src: src.clone(), alt: entry.title.to_string() }

                if let Some(badge) = entry.badge {
                    span { class: "project-badge", "{badge}" }
                }

                if entry.has_slideshow() {
                    Button {
                        variant: ButtonVariant::Icon,
                        class: "carousel-prev".to_string(),
                        aria_label: "Previous image".to_string(),
                        onclick: move |_| { carousel.write().prev(); },
                        Icon { name: IconName::ChevronLeft, size: 18 }
                    }
                    Button {
                        variant: ButtonVariant::Icon,
                        class: "carousel-next".to_string(),
                        aria_label: "Next image".to_string(),
                        onclick: move |_| { carousel.write().next(); },
                        Icon { name: IconName::ChevronRight, size: 18 }
                    }
                    div { class: "carousel-dots",
                        for i in 0..slide.len() {
                            button {
                                key: "{i}",
                                r#type: "button",
                                class: if i == slide.index() { "carousel-dot active" } else { "carousel-dot" },
                                "aria-label": format!("Show image {}", i + 1),
                                onclick: move |evt| {
                                    evt.stop_propagation();
                                    carousel.write().select(i);
                                },
                            }
                        }
                    }
                    span { class: "carousel-counter", "{slide.counter()}" }
                }

                div { class: if overlay() { "project-overlay visible" } else { "project-overlay" },
                    if overlay() {
                        p { class: "project-overlay__text", "{entry.description}" }
                        div { class: "project-overlay__links",
                            if entry.has_live_link() {
                                LinkButton {
                                    variant: ButtonVariant::Primary,
                                    href: entry.link.to_string(),
                                    external: true,
                                    Icon { name: IconName::Globe, size: 16 }
                                    span { "Live Demo" }
                                }
                            }
                            if let Some(source) = entry.source {
                                LinkButton {
                                    variant: ButtonVariant::Secondary,
                                    href: source.to_string(),
                                    external: true,
                                    Icon { name: IconName::Github, size: 16 }
                                    span { "Source" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "project-body",
                h3 { class: "project-title", "{entry.title}" }
                p { class: "project-description", "{entry.description}" }

                if !entry.highlights.is_empty() {
                    ul { class: "project-highlights",
                        for highlight in entry.highlights {
                            li { key: "{highlight.title}", class: "project-highlight",
                                strong { "{highlight.title}" }
                                span { "{highlight.caption}" }
                            }
                        }
                    }
                }

                TechTagList { tags: tech }

                div { class: "project-links",
                    if entry.has_live_link() {
                        a {
                            class: "project-link",
                            href: "{entry.link}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { name: IconName::ExternalLink, size: 16 }
                            span { "Visit" }
                        }
                    }
                    if let Some(source) = entry.source {
                        a {
                            class: "project-link",
                            href: "{source}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            Icon { name: IconName::Github, size: 16 }
                            span { "Code" }
                        }
                    }
                }
            }
        }
    }
}
