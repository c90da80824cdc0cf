//! Pixel Map Component
//!
//! The stylized 8-bit world: a 900x420 SVG canvas with a faint pixel grid,
//! low-fi continent blobs for context, and one chunky block per registry
//! country. Hover and click both report the country upward; exploration
//! should not require a commitment click.

use bitfolio_core::atlas::COUNTRIES;
use dioxus::prelude::*;

use crate::theme::colors;

/// A country renders in its registry color when it is part of the active
/// stage's highlight set or is the current selection; otherwise neutral gray.
fn is_active(id: &str, highlighted: &[String], selected: Option<&str>) -> bool {
    highlighted.iter().any(|h| h == id) || selected == Some(id)
}

/// Faint 16px grid over the whole canvas.
#[component]
fn WorldGrid() -> Element {
    rsx! {
        g { opacity: "0.35",
            for x in (0..900u32).step_by(16) {
                line {
                    x1: "{x}",
                    y1: "0",
                    x2: "{x}",
                    y2: "420",
                    stroke: colors::GRID_LINE,
                    stroke_width: "1",
                }
            }
            for y in (0..420u32).step_by(16) {
                line {
                    x1: "0",
                    y1: "{y}",
                    x2: "900",
                    y2: "{y}",
                    stroke: colors::GRID_LINE,
                    stroke_width: "1",
                }
            }
        }
    }
}

#[component]
pub fn PixelMap(
    /// Country ids forced to active color by the current stage.
    highlighted: Vec<String>,
    /// Shared selection, if any.
    selected: Option<String>,
    /// Reports the country id on click or hover. Fires once per interaction
    /// event; no debouncing.
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "map",
            div { class: "map__frame",
                svg { class: "map__canvas", view_box: "0 0 900 420",
                    rect { x: "0", y: "0", width: "900", height: "420", fill: colors::CANVAS }

                    WorldGrid {}

                    // Low-fi continent blobs for context
                    g { opacity: "0.15",
                        rect { x: "80", y: "140", width: "260", height: "120", fill: colors::CONTINENT }
                        rect { x: "390", y: "140", width: "200", height: "110", fill: colors::CONTINENT }
                        rect { x: "640", y: "240", width: "220", height: "120", fill: colors::CONTINENT }
                        rect { x: "430", y: "280", width: "120", height: "50", fill: colors::CONTINENT }
                    }

                    // Countries of interest
                    for c in COUNTRIES.iter() {
                        {
                            let active = is_active(c.id, &highlighted, selected.as_deref());
                            let fill = if active { c.fill } else { colors::NEUTRAL_BLOCK };
                            let shadow_opacity = if active { "0.25" } else { "0.1" };
                            let shine_opacity = if active { "0.7" } else { "0.3" };
                            let shine_w = (c.rect.w * 0.2).max(4.0);
                            let shadow_x = c.rect.x + 3.0;
                            let shadow_y = c.rect.y + 3.0;
                            let click_id = c.id.to_string();
                            let hover_id = c.id.to_string();
                            rsx! {
                                g {
                                    key: "{c.id}",
                                    class: "map__country",
                                    role: "button",
                                    tabindex: "0",
                                    onclick: move |_| on_select.call(click_id.clone()),
                                    onmouseenter: move |_| on_select.call(hover_id.clone()),

                                    // Shadow
                                    rect {
                                        x: "{shadow_x}",
                                        y: "{shadow_y}",
                                        width: "{c.rect.w}",
                                        height: "{c.rect.h}",
                                        fill: "#000",
                                        opacity: "{shadow_opacity}",
                                    }
                                    // Main block
                                    rect {
                                        x: "{c.rect.x}",
                                        y: "{c.rect.y}",
                                        width: "{c.rect.w}",
                                        height: "{c.rect.h}",
                                        fill: "{fill}",
                                        stroke: colors::INK,
                                        stroke_width: "2",
                                    }
                                    // Shine
                                    rect {
                                        x: "{c.rect.x}",
                                        y: "{c.rect.y}",
                                        width: "{shine_w}",
                                        height: "4",
                                        fill: "#ffffff",
                                        opacity: "{shine_opacity}",
                                    }
                                }
                            }
                        }
                    }

                    // Title badge
                    g {
                        rect {
                            x: "20",
                            y: "20",
                            width: "280",
                            height: "44",
                            fill: "#ffffff",
                            stroke: colors::INK,
                            stroke_width: "2",
                        }
                        text {
                            x: "40",
                            y: "49",
                            font_family: "monospace",
                            font_size: "18",
                            fill: colors::INK,
                            "Interactive 64-bit World"
                        }
                    }
                }
            }

            div { class: "map__legend",
                span { class: "legend-chip legend-chip--hint", "✦ Hover or click a country to see photos" }
                for c in COUNTRIES.iter() {
                    span { key: "{c.id}", class: "legend-chip",
                        span { class: "legend-chip__swatch", style: "background: {c.fill};" }
                        "{c.label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlights(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_highlighted_country_is_active() {
        let hl = highlights(&["BULGARIA"]);
        assert!(is_active("BULGARIA", &hl, None));
        assert!(!is_active("FRANCE", &hl, None));
    }

    #[test]
    fn test_selected_country_is_active_without_highlight() {
        assert!(is_active("USA", &[], Some("USA")));
        assert!(!is_active("USA", &[], Some("UK")));
    }

    #[test]
    fn test_highlight_and_selection_overlap() {
        let hl = highlights(&["BULGARIA", "USA"]);
        assert!(is_active("USA", &hl, Some("USA")));
    }

    #[test]
    fn test_nothing_active_by_default() {
        for c in COUNTRIES {
            assert!(!is_active(c.id, &[], None));
        }
    }
}
