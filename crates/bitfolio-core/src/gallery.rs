//! Photo gallery tables
//!
//! Static country-id to photo-URL mapping. Image hosting and loading are the
//! webview's problem; this is just the lookup.

/// Photo URLs per country, in display order.
const GALLERY: &[(&str, &[&str])] = &[
    (
        "BULGARIA",
        &[
            "https://images.unsplash.com/photo-1548266651-4b8c3c5a8f16?q=80&w=1200&auto=format&fit=crop",
            "https://images.unsplash.com/photo-1548266651-b1d6d61bb64e?q=80&w=1200&auto=format&fit=crop",
        ],
    ),
    (
        "FRANCE",
        &["https://images.unsplash.com/photo-1502602898657-3e91760cbb34?q=80&w=1200&auto=format&fit=crop"],
    ),
    (
        "USA",
        &["https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?q=80&w=1200&auto=format&fit=crop"],
    ),
    (
        "UK",
        &["https://images.unsplash.com/photo-1473959383412-b19c1f3b2613?q=80&w=1200&auto=format&fit=crop"],
    ),
    (
        "SINGAPORE",
        &["https://images.unsplash.com/photo-1483683804023-6ccdb62f86ef?q=80&w=1200&auto=format&fit=crop"],
    ),
];

/// Photos for a country; empty for countries without an entry.
pub fn photos_for(id: &str) -> &'static [&'static str] {
    GALLERY
        .iter()
        .find(|(country, _)| *country == id)
        .map(|(_, photos)| *photos)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulgaria_has_two_photos() {
        assert_eq!(photos_for("BULGARIA").len(), 2);
    }

    #[test]
    fn test_usa_has_single_photo() {
        assert_eq!(photos_for("USA").len(), 1);
    }

    #[test]
    fn test_unknown_country_is_empty() {
        assert!(photos_for("ATLANTIS").is_empty());
    }

    #[test]
    fn test_every_entry_matches_the_atlas() {
        for (id, photos) in GALLERY {
            assert!(crate::atlas::lookup(id).is_some(), "{id}");
            assert!(!photos.is_empty(), "{id}");
        }
    }
}
