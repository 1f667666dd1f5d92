use dioxus::prelude::*;
use portfolio_core::Theme;
use portfolio_ui::{Button, ButtonVariant, Icon, IconName};

/// Sun/moon switch between the dark and light palettes.
#[component]
pub fn ThemeToggle(theme: Theme, on_toggle: EventHandler<()>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Icon,
            class: "theme-toggle".to_string(),
            aria_label: theme.toggle_label().to_string(),
            onclick: move |_| on_toggle.call(()),
            if theme.is_dark() {
                Icon { name: IconName::Sun, size: 18 }
            } else {
                Icon { name: IconName::Moon, size: 18 }
            }
        }
    }
}
