//! Photo Gallery Component
//!
//! Grid of photo tiles for the selected country. Renders nothing until a
//! country is selected; a selection without photos gets a placeholder
//! instead of an error.

use bitfolio_core::{label_of, photos_for};
use dioxus::prelude::*;

#[component]
pub fn PhotoGallery(country: Option<String>) -> Element {
    let Some(country) = country else {
        return VNode::empty();
    };

    let items = photos_for(&country);
    let label = label_of(&country);

    rsx! {
        div { class: "photo-gallery",
            for (idx , src) in items.iter().enumerate() {
                div { key: "{country}-{idx}", class: "photo-gallery__tile",
                    img {
                        class: "photo-gallery__img",
                        src: "{src}",
                        alt: "{label} {idx}",
                    }
                }
            }
            if items.is_empty() {
                div { class: "photo-gallery__empty", "No photos yet." }
            }
        }
    }
}
