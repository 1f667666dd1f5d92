//! Button Components
//!
//! Link-styled and plain buttons used across the page:
//! - Primary: gradient call-to-action ("Contact Me")
//! - Secondary: outlined action ("View Projects")
//! - Ghost: glass pill (resume download, theme toggle)
//! - Icon: square icon-only control (slideshow arrows, menu)

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Icon,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::Icon => "btn-icon",
        }
    }
}

fn full_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", variant.class(), extra),
        _ => variant.class().to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Accessible label, needed for icon-only buttons
    #[props(default)]
    pub aria_label: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Icon,
///         aria_label: "Next image".to_string(),
///         onclick: move |_| { carousel.write().next(); },
///         Icon { name: IconName::ChevronRight, size: 18 }
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = full_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": props.aria_label.clone(),
            onclick: move |evt| {
                evt.stop_propagation();
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Properties for the LinkButton component
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub href: String,
    pub children: Element,
    /// Open in a new window (external links)
    #[props(default = false)]
    pub external: bool,
    /// Offer the target as a download
    #[props(default = false)]
    pub download: bool,
    /// Intercepts the click (in-page anchors)
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default)]
    pub class: Option<String>,
}

/// Anchor styled like a button.
///
/// When `onclick` is given the default navigation is prevented, so in-page
/// anchors can scroll smoothly instead of jumping.
#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let class = full_class(props.variant, props.class.as_deref());

    rsx! {
        a {
            class: "{class}",
            href: "{props.href}",
            target: if props.external { "_blank" },
            rel: if props.external { "noopener noreferrer" },
            download: if props.download { "" },
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    evt.prevent_default();
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::Icon.class(), "btn-icon");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(full_class(ButtonVariant::Ghost, None), "btn-ghost");
        assert_eq!(full_class(ButtonVariant::Ghost, Some("")), "btn-ghost");
        assert_eq!(
            full_class(ButtonVariant::Icon, Some("carousel-prev")),
            "btn-icon carousel-prev"
        );
    }
}
