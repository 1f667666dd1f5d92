//! Project image with a loading spinner and a bundled fallback.

use dioxus::prelude::*;
use portfolio_core::ImageSlot;

#[derive(Props, Clone, PartialEq)]
pub struct ProjectImageProps {
    pub src: String,
    pub alt: String,
}

/// Image that shows a spinner until loaded and swaps to the fallback
/// graphic on error.
///
/// Key it by `src` so a new source remounts with a fresh slot.
#[component]
pub fn ProjectImage(props: ProjectImageProps) -> Element {
    let mut slot = use_signal(ImageSlot::new);
    let current = slot();
    let src = current.display_src(&props.src).to_string();

    rsx! {
        div { class: "project-image",
            if current.is_loading() {
                div { class: "project-image__spinner", "aria-hidden": "true" }
            }
            img {
                class: if current.is_loading() { "project-image__img loading" } else { "project-image__img" },
                src: "{src}",
                alt: "{props.alt}",
                onload: move |_| slot.write().on_load(),
                onerror: move |_| slot.write().on_error(),
            }
        }
    }
}
