//! Pixel Hero Component
//!
//! Banner at the top of the page: avatar block, title, tagline, and the four
//! info badges summarizing the narrative before any scrolling.

use dioxus::prelude::*;

use crate::theme::colors;

/// One small fact card inside the hero.
#[component]
fn InfoBadge(glyph: String, label: String, value: String, accent: String) -> Element {
    rsx! {
        div { class: "info-badge",
            span { class: "info-badge__icon", style: "background: {accent};", "{glyph}" }
            div { class: "info-badge__text",
                div { class: "info-badge__label", "{label}" }
                div { class: "info-badge__value", "{value}" }
            }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    rsx! {
        div { class: "hero",
            div { class: "hero__top",
                div { class: "hero__avatar" }
                div {
                    h1 { class: "hero__title", "My 64-bit World" }
                    p { class: "hero__tagline",
                        "Scroll through a playful, 80s-style world map to discover where I'm from, studied, and worked."
                    }
                }
            }

            div { class: "hero__badges",
                InfoBadge {
                    glyph: "⌂".to_string(),
                    label: "From".to_string(),
                    value: "Bulgaria".to_string(),
                    accent: colors::AMBER.to_string(),
                }
                InfoBadge {
                    glyph: "✎".to_string(),
                    label: "Studied".to_string(),
                    value: "France • USA • Singapore".to_string(),
                    accent: colors::LIME.to_string(),
                }
                InfoBadge {
                    glyph: "⚒".to_string(),
                    label: "Worked".to_string(),
                    value: "Bulgaria • USA • UK • Singapore".to_string(),
                    accent: colors::SKY.to_string(),
                }
                InfoBadge {
                    glyph: "▣".to_string(),
                    label: "Gallery".to_string(),
                    value: "Tap countries to view".to_string(),
                    accent: colors::ROSE.to_string(),
                }
            }

            div { class: "hero__hint", "▼ Scroll to explore" }
        }
    }
}
