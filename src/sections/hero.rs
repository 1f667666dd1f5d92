//! Hero Section
//!
//! Name, headline and calls to action over the particle backdrop, plus
//! the headline stats strip.

use dioxus::prelude::*;
use portfolio_core::content::STATS;
use portfolio_core::{Bounds, ObserverOptions, SectionId, PROFILE};
use portfolio_ui::{ButtonVariant, Icon, IconName, LinkButton};

use crate::components::ParticleCanvas;
use crate::context::{use_navigate, use_section_registry, use_viewport, ViewportFrame};
use crate::observers::{use_reveal_cascade, use_reveal_once, use_visibility};

#[component]
pub fn Hero() -> Element {
    let sections = use_section_registry();
    let navigate = use_navigate();
    let viewport = use_viewport();
    let on_screen = use_visibility(ObserverOptions::new(0.0));
    let intro = use_reveal_once(ObserverOptions::new(0.1));
    let stats = use_reveal_cascade(STATS.len(), ObserverOptions::new(0.1));

    let frame = viewport();
    // The particle loop only runs while the hero is on screen, and never on mobile
    let particles_active = on_screen.is_visible() && !frame.is_mobile();
    let backdrop = backdrop_size(on_screen.bounds(), &frame);

    rsx! {
        section {
            id: SectionId::Home.anchor(),
            class: "section hero",
            onmounted: move |evt| {
                let node = evt.data();
                sections.register(SectionId::Home, node.clone());
                on_screen.attach(node);
            },

            if let Some((width, height)) = backdrop {
                div { class: "hero-backdrop",
                    ParticleCanvas {
                        active: particles_active,
                        width,
                        height,
                    }
                }
            }

            div {
                class: if intro.is_visible() { "hero-content reveal revealed" } else { "hero-content reveal" },
                onmounted: move |evt| intro.attach(evt.data()),

                p { class: "hero-greeting", "Hello, I'm" }
                h1 { class: "hero-name text-gradient", "{PROFILE.name}" }
                p { class: "hero-headline", "{PROFILE.headline}" }
                p { class: "hero-bio", "{PROFILE.bio}" }

                div { class: "hero-actions",
                    LinkButton {
                        variant: ButtonVariant::Primary,
                        href: format!("#{}", SectionId::Contact.anchor()),
                        onclick: move |_| navigate.to(SectionId::Contact),
                        Icon { name: IconName::Send, size: 18 }
                        span { "Contact Me" }
                    }
                    LinkButton {
                        variant: ButtonVariant::Secondary,
                        href: format!("#{}", SectionId::Projects.anchor()),
                        onclick: move |_| navigate.to(SectionId::Projects),
                        Icon { name: IconName::FolderOpen, size: 18 }
                        span { "View Projects" }
                    }
                }
            }

            div {
                class: "hero-stats",
                onmounted: move |evt| stats.region.attach(evt.data()),
                for (i, stat) in STATS.iter().enumerate() {
                    div {
                        key: "{stat.label}",
                        class: stats.class(&format!("stat-card reveal {}", stat.accent.class()), i),
                        span { class: "stat-value", "{stat.value}" }
                        span { class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }
    }
}

/// Particle canvas size: the hero's own rect, not the visible band.
/// No backdrop until the hero is measured, and none on mobile.
fn backdrop_size(hero: Option<Bounds>, frame: &ViewportFrame) -> Option<(f64, f64)> {
    if frame.is_mobile() {
        return None;
    }
    hero.map(|rect| (rect.width(), rect.height()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: f64, height: f64) -> ViewportFrame {
        ViewportFrame::default().next(Bounds::new(0.0, 0.0, width, height))
    }

    #[test]
    fn backdrop_spans_the_whole_hero() {
        let hero = Bounds::new(0.0, 0.0, 1280.0, 2400.0);
        assert_eq!(backdrop_size(Some(hero), &frame(1280.0, 860.0)), Some((1280.0, 2400.0)));
    }

    #[test]
    fn no_backdrop_before_measurement_or_on_mobile() {
        assert_eq!(backdrop_size(None, &frame(1280.0, 860.0)), None);
        let hero = Bounds::new(0.0, 0.0, 400.0, 900.0);
        assert_eq!(backdrop_size(Some(hero), &frame(400.0, 800.0)), None);
    }
}
