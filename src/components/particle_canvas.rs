//! Animated particle backdrop for the hero, drawn as SVG.

use dioxus::prelude::*;
use portfolio_core::particles::PARTICLE_FRAME;
use portfolio_core::ParticleField;

/// Runs at 20 FPS while `active`; the field is rebuilt when the size changes.
#[component]
pub fn ParticleCanvas(active: bool, width: f64, height: f64) -> Element {
    let mut field = use_signal(|| ParticleField::new(width, height));
    let ticker = use_hook(|| CopyValue::new(None::<Task>));

    use_effect(use_reactive!(|(active, width, height)| {
        let mut ticker = ticker;
        if let Some(task) = ticker.write().take() {
            task.cancel();
        }
        if (field.peek().width(), field.peek().height()) != (width, height) {
            field.set(ParticleField::new(width, height));
        }
        if !active {
            return;
        }
        let task = spawn(async move {
            loop {
                tokio::time::sleep(PARTICLE_FRAME).await;
                field.write().step();
            }
        });
        *ticker.write() = Some(task);
    }));

    let current = field.read();
    let links = current.links();

    rsx! {
        svg {
            class: "particle-canvas",
            xmlns: "http://www.w3.org/2000/svg",
            width: "100%",
            height: "100%",
            view_box: "0 0 {current.width()} {current.height()}",
            preserve_aspect_ratio: "none",
            "aria-hidden": "true",

            for (i, link) in links.iter().enumerate() {
                line {
                    key: "l{i}",
                    x1: "{link.x1}",
                    y1: "{link.y1}",
                    x2: "{link.x2}",
                    y2: "{link.y2}",
                    stroke: format!("rgba(96, 165, 250, {:.3})", link.opacity * 0.2),
                    stroke_width: "1",
                }
            }
            for (i, p) in current.particles().iter().enumerate() {
                circle {
                    key: "p{i}",
                    cx: "{p.x}",
                    cy: "{p.y}",
                    r: "{p.radius}",
                    fill: "{p.color}",
                    opacity: "0.8",
                }
            }
        }
    }
}
