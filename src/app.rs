use bitfolio_core::{label_of, stage_for_scroll, Selection, STAGES};
use dioxus::document;
use dioxus::prelude::*;
use serde::Deserialize;

use crate::components::{Hero, NavHeader, PhotoGallery, PixelMap, Section};
use crate::theme::GLOBAL_STYLES;

/// Scroll offset and viewport height reported by the webview.
#[derive(Debug, Clone, Copy, Deserialize)]
struct ScrollReport {
    y: f64,
    h: f64,
}

/// Forwards window scroll events into Rust. `dioxus.send` feeds the
/// `recv` loop in [`App`]; the initial report pins the stage before any
/// scrolling happens.
const SCROLL_BRIDGE: &str = r#"
    const report = () => dioxus.send({ y: window.scrollY, h: window.innerHeight });
    window.addEventListener('scroll', report, { passive: true });
    report();
"#;

/// Context copy shown under each stage's map, in stage order.
const STAGE_CONTEXT: [&str; 4] = [
    "Bulgaria glows bright - that's home. Think cozy pixel sunrises and strong coffee.",
    "Study checkpoints unlocked: France, USA, Singapore. Each added a new power-up.",
    "Work quests across Bulgaria, USA, UK, and Singapore. Boss battles included.",
    "Hover or click any highlighted country to load photo tiles from my adventures.",
];

/// Root application component.
///
/// Owns the two pieces of shared state: the active narrative stage (derived
/// from scroll position) and the country selection (shared by all four map
/// instances).
#[component]
pub fn App() -> Element {
    let mut stage: Signal<usize> = use_signal(|| 0);
    let mut selection: Signal<Selection> = use_signal(Selection::new);

    // Re-derive the stage index from every scroll report. The webview may
    // coalesce scroll events; only the latest offset matters.
    use_effect(move || {
        spawn(async move {
            let mut bridge = document::eval(SCROLL_BRIDGE);
            loop {
                match bridge.recv::<ScrollReport>().await {
                    Ok(report) => {
                        let next = stage_for_scroll(report.y, report.h);
                        if next != stage() {
                            tracing::debug!(
                                "stage {} -> {} (y={:.0}, h={:.0})",
                                stage(),
                                next,
                                report.y,
                                report.h
                            );
                            stage.set(next);
                        }
                    }
                    Err(e) => {
                        tracing::warn!("scroll bridge closed: {e:?}");
                        break;
                    }
                }
            }
        });
    });

    let selected_id = selection.read().selected().map(str::to_string);
    let gallery_heading = match selected_id.as_deref() {
        Some(id) => format!("Photos from {}", label_of(id)),
        None => "Select a country".to_string(),
    };

    rsx! {
        style { {GLOBAL_STYLES} }

        div { class: "page",
            NavHeader {}

            main { class: "page-main",
                div { class: "hero-slot", Hero {} }

                // One full-height section per narrative stage. Only the
                // active stage hands its highlight set to the map; every map
                // shares the same selection.
                for (idx , s) in STAGES.iter().enumerate() {
                    Section {
                        key: "{s.key}",
                        id: s.key.to_string(),
                        title: s.title.to_string(),
                        subtitle: s.subtitle.to_string(),

                        PixelMap {
                            highlighted: if idx == stage() {
                                s.highlight.iter().map(|id| id.to_string()).collect()
                            } else {
                                Vec::new()
                            },
                            selected: selected_id.clone(),
                            on_select: move |id: String| selection.write().select(id),
                        }

                        p { class: "stage-context", {STAGE_CONTEXT[idx]} }

                        if idx == STAGES.len() - 1 {
                            div { class: "gallery-slot",
                                div { class: "gallery-heading", "{gallery_heading}" }
                                PhotoGallery { country: selected_id.clone() }
                            }
                        }
                    }
                }

                Section {
                    id: "contact".to_string(),
                    title: "Contact".to_string(),
                    subtitle: "Let's connect".to_string(),

                    div { class: "contact-links",
                        a { class: "contact-link", href: "mailto:you@example.com", "you@example.com" }
                        a {
                            class: "contact-link",
                            href: "https://linkedin.com",
                            target: "_blank",
                            "LinkedIn"
                        }
                        a {
                            class: "contact-link",
                            href: "https://github.com",
                            target: "_blank",
                            "GitHub"
                        }
                    }
                }

                Section {
                    id: "cv".to_string(),
                    title: "CV".to_string(),
                    subtitle: "Quick download".to_string(),

                    div { class: "cv-row",
                        a { class: "contact-link", href: "#cv", "Download PDF" }
                        p { class: "cv-hint", "Add your actual CV link in the button." }
                    }
                }
            }

            footer { class: "page-footer", "Built with a love for retro, pixel vibes." }
        }
    }
}
