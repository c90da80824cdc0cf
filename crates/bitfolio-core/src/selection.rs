//! Shared country selection
//!
//! One value for the whole session: every map instance writes into the same
//! selection, the gallery reads from it. The UI event loop serializes writes,
//! so last write wins.

/// The single country most recently hovered or clicked, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected: Option<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interaction with a country. Re-selecting the current country
    /// is a no-op.
    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.selected.as_deref() != Some(id.as_str()) {
            tracing::debug!("selection -> {}", id);
            self.selected = Some(id);
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(Selection::new().selected(), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut sel = Selection::new();
        sel.select("FRANCE"); // hover
        sel.select("USA"); // click
        assert_eq!(sel.selected(), Some("USA"));
        assert!(sel.is_selected("USA"));
        assert!(!sel.is_selected("FRANCE"));
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let mut sel = Selection::new();
        sel.select("UK");
        let before = sel.clone();
        sel.select("UK");
        sel.select("UK");
        assert_eq!(sel, before);
    }
}
