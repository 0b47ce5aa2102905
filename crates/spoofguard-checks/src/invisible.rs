//! Duplicate invisible-mark detection
//!
//! Stacking the same non-spacing mark twice on one base renders identically
//! to a single mark but is binary-distinct, so it only becomes visible after
//! canonical decomposition.

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Detects a repeated non-spacing mark within one combining sequence.
pub struct InvisibleMarkDetector;

impl InvisibleMarkDetector {
    /// Whether any combining sequence of the canonically decomposed label
    /// repeats a non-spacing mark. Stops at the first repetition; this is a
    /// boolean detector, not an enumerator.
    pub fn duplicate_marks(label: &str) -> bool {
        let mut first_mark: Option<char> = None;
        // Marks seen in the current combining sequence.
        let mut marks_seen: Vec<char> = Vec::new();
        for c in label.nfd() {
            if c.general_category() != GeneralCategory::NonspacingMark {
                first_mark = None;
                marks_seen.clear();
                continue;
            }
            match first_mark {
                None => first_mark = Some(c),
                Some(first) => {
                    if marks_seen.is_empty() {
                        marks_seen.push(first);
                    }
                    if marks_seen.contains(&c) {
                        return true;
                    }
                    marks_seen.push(c);
                }
            }
        }
        false
    }
}
