use dioxus::prelude::*;
use portfolio_core::{IntroGate, IntroPhase, SectionId, Storage, VisitFlag, PROFILE};

use crate::components::{MobileNav, Navigation, TerminalIntro};
use crate::context::{get_data_dir, get_initial_theme, Navigate};
use crate::observers::use_scroll_controller;
use crate::sections::{Contact, Experience, Hero, Projects, Skills};
use crate::theme::GLOBAL_STYLES;

/// Open the visit-flag store, degrading to "no storage" on failure.
fn open_visit_flag() -> VisitFlag {
    let data_dir = get_data_dir();
    match Storage::open_in(&data_dir) {
        Ok(storage) => VisitFlag::new(Some(storage)),
        Err(e) => {
            tracing::warn!("Visit flag storage unavailable in {:?}: {}", data_dir, e);
            VisitFlag::new(None)
        }
    }
}

fn theme_script(class: &str, value: &str) -> String {
    format!(
        "const root = document.documentElement;\
         root.classList.remove('theme-dark', 'theme-light');\
         root.classList.add('{class}');\
         root.dataset.theme = '{value}';"
    )
}

const THEME_CLEANUP: &str = "const root = document.documentElement;\
     root.classList.remove('theme-dark', 'theme-light');\
     delete root.dataset.theme;";

/// Root application component: the page shell.
///
/// Owns theme, intro phase and scroll state, and provides the viewport,
/// section registry and navigation contexts to every section.
#[component]
pub fn App() -> Element {
    let visit = use_hook(open_visit_flag);
    let first_phase = use_hook(|| IntroGate::decide(&visit));
    let mut intro = use_signal(|| first_phase);
    let mut theme = use_signal(get_initial_theme);

    let scroll = use_scroll_controller();
    let navigate = {
        let scroll = scroll.clone();
        use_callback(move |section: SectionId| scroll.navigate_to(section))
    };
    use_context_provider(|| Navigate(navigate));

    // Mirror the theme onto the document root
    use_effect(move || {
        let current = theme();
        tracing::debug!(theme = current.css_value(), "Applying theme");
        let _ = dioxus::document::eval(&theme_script(current.document_class(), current.css_value()));
    });
    use_drop(|| {
        let _ = dioxus::document::eval(THEME_CLEANUP);
    });

    let state = scroll.state();
    let viewport = scroll.viewport();
    let is_mobile = use_memo(move || viewport().is_mobile());
    let on_scroll = scroll.clone();
    let on_mount = scroll.clone();
    let on_resize = scroll.clone();

    rsx! {
        style { {GLOBAL_STYLES} }

        div {
            class: "app-shell",
            "data-theme": theme().css_value(),

            if intro().is_visible() {
                TerminalIntro {
                    user_name: PROFILE.name.to_string(),
                    on_complete: move |_| {
                        let next = intro().advance(IntroPhase::Dismissed);
                        intro.set(next);
                    },
                }
            }

            Navigation {
                state,
                theme: theme(),
                on_navigate: move |section| navigate.call(section),
                on_toggle_theme: move |_| {
                    let next = theme().toggle();
                    theme.set(next);
                },
            }

            main {
                class: "page-scroll",
                onmounted: move |evt| on_mount.attach(evt.data()),
                onscroll: move |_| on_scroll.on_scroll(),
                onresize: move |_| on_resize.on_resize(),

                Hero {}
                Skills {}
                Experience {}
                Projects {}
                Contact {}

                footer { class: "site-footer",
                    p { "{PROFILE.name}" }
                    p { class: "site-footer__note", "Built with Rust and Dioxus" }
                }
            }

            if is_mobile() {
                MobileNav {
                    active: state.active,
                    on_navigate: move |section| navigate.call(section),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_script_sets_class_and_dataset() {
        let script = theme_script("theme-light", "light");
        assert!(script.contains("classList.add('theme-light')"));
        assert!(script.contains("dataset.theme = 'light'"));
        assert!(script.contains("remove('theme-dark', 'theme-light')"));
    }

    #[test]
    fn cleanup_removes_both_classes() {
        assert!(THEME_CLEANUP.contains("remove('theme-dark', 'theme-light')"));
        assert!(THEME_CLEANUP.contains("delete root.dataset.theme"));
    }
}
