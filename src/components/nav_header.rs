//! Navigation Header Component
//!
//! Sticky top bar: app title on the left, Contact and CV anchor links on the
//! right. Pure furniture, no state.

use dioxus::prelude::*;

#[component]
pub fn NavHeader() -> Element {
    rsx! {
        header { class: "nav-header",
            div { class: "nav-header__inner",
                div { class: "nav-header__title", "64-bit Me" }
                nav { class: "nav-header__links",
                    a { class: "nav-link", href: "#contact", "Contact" }
                    a { class: "nav-link", href: "#cv", "CV" }
                }
            }
        }
    }
}
