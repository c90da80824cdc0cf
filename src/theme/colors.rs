//! Color constants for the retro pixel aesthetic.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const PAPER: &str = "#fff9ed";
pub const CANVAS: &str = "#fafaf9";
pub const PANEL: &str = "#ffffff";

// === INK (Outlines, Text) ===
pub const INK: &str = "#111827";
pub const TEXT_BODY: &str = "#404040";
pub const TEXT_MUTED: &str = "#737373";

// === MAP ===
pub const NEUTRAL_BLOCK: &str = "#cbd5e1";
pub const GRID_LINE: &str = "#e5e7eb";
pub const CONTINENT: &str = "#9ca3af";

// === ACCENTS (Hero badges) ===
pub const AMBER: &str = "#fcd34d";
pub const LIME: &str = "#bef264";
pub const SKY: &str = "#7dd3fc";
pub const ROSE: &str = "#fda4af";
