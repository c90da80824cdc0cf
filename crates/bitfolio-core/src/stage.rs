//! Narrative stages and the scroll-to-stage mapping
//!
//! The page is four full-height sections; the scroll offset is quantized
//! into a stage index so exactly one stage's map lights up at a time.

/// One scroll-triggered narrative section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    /// Section anchor id.
    pub key: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Country ids forced to their registry color while this stage is active.
    pub highlight: &'static [&'static str],
}

/// The narrative, in scroll order. Fixed length; index 0 is active before any
/// scroll.
pub const STAGES: &[Stage] = &[
    Stage {
        key: "from",
        title: "Where I'm from",
        subtitle: "Home base that shaped me",
        highlight: &["BULGARIA"],
    },
    Stage {
        key: "study",
        title: "Where I studied",
        subtitle: "Academic stops around the globe",
        highlight: &["FRANCE", "USA", "SINGAPORE"],
    },
    Stage {
        key: "work",
        title: "Where I worked",
        subtitle: "Professional adventures",
        highlight: &["BULGARIA", "USA", "UK", "SINGAPORE"],
    },
    Stage {
        key: "gallery",
        title: "Photo memories",
        subtitle: "Hover or click a country",
        highlight: &[],
    },
];

/// Quantize a scroll offset into a stage index.
///
/// `floor((y + 100) / (viewport_h * 0.9))`, clamped to a valid index.
/// Monotonically non-decreasing in `y` for a fixed viewport height and
/// saturates at the last stage for any scroll position past the end. Total
/// for any finite input; a non-positive viewport height pins the result to
/// the last stage rather than dividing into nonsense.
pub fn stage_for_scroll(y: f64, viewport_h: f64) -> usize {
    let last = STAGES.len() - 1;
    if viewport_h <= 0.0 {
        return last;
    }
    let raw = ((y + 100.0) / (viewport_h * 0.9)).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_stage_count_and_order() {
        assert_eq!(STAGES.len(), 4);
        assert_eq!(STAGES[0].key, "from");
        assert_eq!(STAGES[0].highlight, &["BULGARIA"]);
        assert!(STAGES[3].highlight.is_empty());
    }

    #[test]
    fn test_known_offsets() {
        // Concrete checkpoints at a 800px viewport (bucket width 720).
        assert_eq!(stage_for_scroll(0.0, 800.0), 0);
        assert_eq!(stage_for_scroll(700.0, 800.0), 1);
        assert_eq!(stage_for_scroll(2000.0, 800.0), 2);
        assert_eq!(stage_for_scroll(100_000.0, 800.0), 3);
    }

    #[test]
    fn test_initial_position_is_first_stage() {
        // Before any scroll the first stage is active; the +100 bias never
        // reaches the second bucket at realistic viewport heights.
        assert_eq!(stage_for_scroll(0.0, 800.0), 0);
        assert_eq!(stage_for_scroll(0.0, 600.0), 0);
        assert_eq!(stage_for_scroll(0.0, 2000.0), 0);
    }

    #[test]
    fn test_negative_overscroll_clamps_to_first() {
        // Elastic overscroll can report y < 0.
        assert_eq!(stage_for_scroll(-500.0, 800.0), 0);
    }

    #[test]
    fn test_degenerate_viewport() {
        assert_eq!(stage_for_scroll(0.0, 0.0), 3);
        assert_eq!(stage_for_scroll(0.0, -10.0), 3);
    }

    proptest! {
        #[test]
        fn prop_index_always_valid(y in -1e9f64..1e9, h in 1.0f64..1e6) {
            prop_assert!(stage_for_scroll(y, h) < STAGES.len());
        }

        #[test]
        fn prop_monotone_in_scroll(y in 0.0f64..1e6, dy in 0.0f64..1e6, h in 1.0f64..1e4) {
            prop_assert!(stage_for_scroll(y, h) <= stage_for_scroll(y + dy, h));
        }

        #[test]
        fn prop_matches_closed_form(y in 0.0f64..1e6, h in 1.0f64..1e4) {
            let expected = (((y + 100.0) / (h * 0.9)).floor() as usize).min(3);
            prop_assert_eq!(stage_for_scroll(y, h), expected);
        }
    }
}
