//! Narrative Section Component
//!
//! Full-height wrapper for each scroll stage plus the contact/CV blocks.
//! The `id` doubles as the in-page anchor target.

use dioxus::prelude::*;

#[component]
pub fn Section(id: String, title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        section { id: "{id}", class: "section",
            div { class: "section__inner",
                div { class: "section__header",
                    h2 { class: "section__title", "{title}" }
                    if !subtitle.is_empty() {
                        p { class: "section__subtitle", "{subtitle}" }
                    }
                }
                div { class: "section__body", {children} }
            }
        }
    }
}
