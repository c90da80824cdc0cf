//! 64-bit World Core Library
//!
//! Presentation-independent data and logic for the portfolio app: the country
//! registry behind the pixel map, the scroll-driven narrative stages, the
//! shared country selection, and the static photo gallery tables.
//!
//! ## Overview
//!
//! The desktop UI is a scrollable narrative over a stylized world map. Scroll
//! position is quantized into one of four [`stage::Stage`]s, each of which
//! highlights a set of countries from the [`atlas`]. Hovering or clicking a
//! country updates a single shared [`selection::Selection`], which drives the
//! photo gallery in the final stage.
//!
//! Everything in this crate is static configuration plus pure functions; no
//! operation here can fail.

pub mod atlas;
pub mod gallery;
pub mod selection;
pub mod stage;

pub use atlas::{label_of, lookup, CountryRecord, MapRect, COUNTRIES};
pub use gallery::photos_for;
pub use selection::Selection;
pub use stage::{stage_for_scroll, Stage, STAGES};
