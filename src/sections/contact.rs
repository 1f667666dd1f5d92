use dioxus::prelude::*;
use portfolio_core::content::{ContactKind, CONTACTS};
use portfolio_core::{ObserverOptions, SectionId, PROFILE};
use portfolio_ui::{ButtonVariant, Icon, IconName, LinkButton, SectionHeader};

use crate::context::use_section_registry;
use crate::observers::use_reveal_cascade;

fn contact_icon(kind: ContactKind) -> IconName {
    match kind {
        ContactKind::Email => IconName::Mail,
        ContactKind::Phone => IconName::Phone,
        ContactKind::SourceControl => IconName::Github,
        ContactKind::ProfessionalNetwork => IconName::Linkedin,
    }
}

/// Contact cards and the closing resume link.
#[component]
pub fn Contact() -> Element {
    let sections = use_section_registry();
    let cascade = use_reveal_cascade(CONTACTS.len(), ObserverOptions::new(0.1));

    rsx! {
        section {
            id: SectionId::Contact.anchor(),
            class: "section contact",
            onmounted: move |evt| sections.register(SectionId::Contact, evt.data()),

            SectionHeader {
                title: "Get In Touch".to_string(),
                subtitle: "Open to freelance work and full-time roles".to_string(),
            }

            div {
                class: "contact-grid",
                onmounted: move |evt| cascade.region.attach(evt.data()),
                for (i, link) in CONTACTS.iter().enumerate() {
                    a {
                        key: "{link.label}",
                        class: cascade.class(&format!("contact-card glass reveal {}", link.accent.class()), i),
                        href: "{link.href}",
                        target: if link.is_external() { "_blank" },
                        rel: if link.is_external() { "noopener noreferrer" },

                        span { class: "contact-card__icon",
                            Icon { name: contact_icon(link.kind), size: 24 }
                        }
                        span { class: "contact-card__label", "{link.label}" }
                        span { class: "contact-card__value", "{link.value}" }
                    }
                }
            }

            div { class: "contact-footer",
                LinkButton {
                    variant: ButtonVariant::Primary,
                    href: PROFILE.resume_path.to_string(),
                    download: true,
                    Icon { name: IconName::Download, size: 18 }
                    span { "Download Resume" }
                }
            }
        }
    }
}
