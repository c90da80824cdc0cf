//! Country Registry - the five countries on the pixel map
//!
//! Static, immutable table defined once at startup. Coordinates are canvas
//! units on the map's 900x420 viewBox, intentionally blocky for the retro
//! look.

/// Position and size of a country block on the map canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

/// Display metadata for one country on the pixel map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryRecord {
    /// Unique key, also the value passed through selection callbacks.
    pub id: &'static str,
    /// Human-readable name shown in the legend and gallery heading.
    pub label: &'static str,
    /// Fill color when the country is highlighted or selected.
    pub fill: &'static str,
    pub rect: MapRect,
}

/// All countries of interest, in legend order.
pub const COUNTRIES: &[CountryRecord] = &[
    CountryRecord {
        id: "BULGARIA",
        label: "Bulgaria",
        fill: "#f59e0b",
        rect: MapRect { x: 540.0, y: 180.0, w: 28.0, h: 16.0 },
    },
    CountryRecord {
        id: "FRANCE",
        label: "France",
        fill: "#22c55e",
        rect: MapRect { x: 500.0, y: 180.0, w: 24.0, h: 18.0 },
    },
    CountryRecord {
        id: "USA",
        label: "USA",
        fill: "#3b82f6",
        rect: MapRect { x: 150.0, y: 170.0, w: 120.0, h: 40.0 },
    },
    CountryRecord {
        id: "UK",
        label: "United Kingdom",
        fill: "#a855f7",
        rect: MapRect { x: 485.0, y: 165.0, w: 14.0, h: 16.0 },
    },
    CountryRecord {
        id: "SINGAPORE",
        label: "Singapore",
        fill: "#ef4444",
        rect: MapRect { x: 720.0, y: 280.0, w: 20.0, h: 10.0 },
    },
];

/// Look up a country by id.
pub fn lookup(id: &str) -> Option<&'static CountryRecord> {
    COUNTRIES.iter().find(|c| c.id == id)
}

/// Display label for an id, falling back to the raw id when unknown.
///
/// Never fails; the gallery heading uses this so an unregistered id still
/// renders something sensible.
pub fn label_of(id: &str) -> &str {
    match lookup(id) {
        Some(c) => c.label,
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in COUNTRIES.iter().enumerate() {
            for b in COUNTRIES.iter().skip(i + 1) {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_lookup_known() {
        let bg = lookup("BULGARIA").unwrap();
        assert_eq!(bg.label, "Bulgaria");
        assert_eq!(bg.fill, "#f59e0b");
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(lookup("ATLANTIS").is_none());
    }

    #[test]
    fn test_label_of_falls_back_to_id() {
        assert_eq!(label_of("UK"), "United Kingdom");
        assert_eq!(label_of("ATLANTIS"), "ATLANTIS");
    }

    #[test]
    fn test_rects_fit_canvas() {
        for c in COUNTRIES {
            assert!(c.rect.x >= 0.0 && c.rect.x + c.rect.w <= 900.0, "{}", c.id);
            assert!(c.rect.y >= 0.0 && c.rect.y + c.rect.h <= 420.0, "{}", c.id);
        }
    }
}
