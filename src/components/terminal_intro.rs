//! Terminal Intro
//!
//! First-visit overlay that types a short boot script, then fades out.
//! Typing and the blinking cursor run as scope-owned tasks, so closing
//! the overlay early cancels them.

use dioxus::prelude::*;
use portfolio_core::intro::{COMPLETE_DELAY, CURSOR_BLINK, FADE_DELAY};
use portfolio_core::{ScriptStep, TerminalScript};
use portfolio_ui::{Icon, IconName};

#[derive(Props, Clone, PartialEq)]
pub struct TerminalIntroProps {
    pub user_name: String,
    /// Fired once the script has finished, or when the user skips it
    pub on_complete: EventHandler<()>,
}

#[component]
pub fn TerminalIntro(props: TerminalIntroProps) -> Element {
    let user_name = props.user_name.clone();
    let mut script = use_signal(move || TerminalScript::for_user(&user_name));
    let mut cursor_on = use_signal(|| true);
    let mut fading = use_signal(|| false);
    let on_complete = props.on_complete;

    use_future(move || async move {
        loop {
            tokio::time::sleep(CURSOR_BLINK).await;
            cursor_on.set(!cursor_on());
        }
    });

    use_future(move || async move {
        loop {
            let step = script.write().advance();
            match step {
                ScriptStep::Typed(delay) | ScriptStep::LineDone(delay) => {
                    tokio::time::sleep(delay).await;
                }
                ScriptStep::Finished => break,
            }
        }
        tokio::time::sleep(COMPLETE_DELAY).await;
        fading.set(true);
        tokio::time::sleep(FADE_DELAY).await;
        tracing::debug!("Terminal intro finished");
        on_complete.call(());
    });

    let current = script.read();
    let partial = current.current_partial();

    rsx! {
        div {
            class: if fading() { "terminal-overlay fading" } else { "terminal-overlay" },
            role: "dialog",
            "aria-label": "Introduction",

            div { class: "terminal-window",
                div { class: "terminal-titlebar",
                    span { class: "terminal-dot terminal-dot--red" }
                    span { class: "terminal-dot terminal-dot--amber" }
                    span { class: "terminal-dot terminal-dot--green" }
                    span { class: "terminal-title",
                        Icon { name: IconName::Terminal, size: 14 }
                        "portfolio.sh"
                    }
                    button {
                        class: "terminal-close",
                        r#type: "button",
                        "aria-label": "Skip intro",
                        onclick: move |_| on_complete.call(()),
                        Icon { name: IconName::Close, size: 14 }
                    }
                }

                div { class: "terminal-body",
                    for (i, line) in current.completed_lines().iter().enumerate() {
                        p { key: "{i}", class: "terminal-line", "{line}" }
                    }
                    if let Some(partial) = partial {
                        p { class: "terminal-line terminal-line--typing",
                            "{partial}"
                            span { class: if cursor_on() { "terminal-cursor" } else { "terminal-cursor hidden" }, "█" }
                        }
                    } else {
                        p { class: "terminal-line",
                            span { class: if cursor_on() { "terminal-cursor" } else { "terminal-cursor hidden" }, "█" }
                        }
                    }
                }

                div { class: "terminal-footer",
                    button {
                        class: "terminal-skip",
                        r#type: "button",
                        onclick: move |_| on_complete.call(()),
                        "Skip"
                    }
                }
            }
        }
    }
}
