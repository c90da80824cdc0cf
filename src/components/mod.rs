//! UI components for the 64-bit World portfolio.
//!
//! Retro pixel aesthetic: chunky blocks, hard shadows, monospace badges.

mod hero;
mod nav_header;
mod photo_gallery;
mod pixel_map;
mod section;

pub use hero::Hero;
pub use nav_header::NavHeader;
pub use photo_gallery::PhotoGallery;
pub use pixel_map::PixelMap;
pub use section::Section;
