//! Reduced confusable check
//!
//! Whole-label confusability is modeled as a pluggable capability so that
//! further script pairs can be added without touching the decision tree. The
//! shipped implementation covers the classic case: a label whose Cyrillic
//! code points all render identically to Latin letters.

use unicode_script::{Script, UnicodeScript};

use crate::tables;

/// Whole-label confusable capability.
pub trait ConfusableDetector: Send + Sync {
    /// Whether the label as a whole is visually confusable with a Latin
    /// rendition.
    fn whole_label_confusable(&self, label: &str) -> bool;
}

/// Cyrillic-vs-Latin look-alike detector.
#[derive(Debug, Default)]
pub struct CyrillicLookalikes;

impl ConfusableDetector for CyrillicLookalikes {
    /// Filters the label to Cyrillic-script code points; confusable when
    /// that filtered set is non-empty and every member is a registered
    /// Latin look-alike.
    fn whole_label_confusable(&self, label: &str) -> bool {
        let mut seen_cyrillic = false;
        for c in label.chars().filter(|c| c.script() == Script::Cyrillic) {
            seen_cyrillic = true;
            if !tables::is_cyrillic_latin_alike(c) {
                return false;
            }
        }
        seen_cyrillic
    }
}
