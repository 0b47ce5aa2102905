//! Mixed numbering-system detection

use crate::tables;

/// Detects digits from more than one numbering system in one label.
pub struct MixedNumberDetector;

impl MixedNumberDetector {
    /// Zero reference of each numbering system whose digits appear in the
    /// label, de-duplicated, in first-occurrence order.
    pub fn numerics(label: &str) -> Vec<char> {
        let mut zeros = Vec::new();
        for c in label.chars() {
            if let Some(zero) = tables::decimal_zero(c) {
                if !zeros.contains(&zero) {
                    zeros.push(zero);
                }
            }
        }
        zeros
    }

    /// Whether the label mixes digits from more than one numbering system.
    pub fn is_mixed(label: &str) -> bool {
        Self::numerics(label).len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_system_never_mixed() {
        assert!(!MixedNumberDetector::is_mixed("abc123"));
        assert!(!MixedNumberDetector::is_mixed("\u{0661}\u{0662}\u{0663}"));
        assert!(!MixedNumberDetector::is_mixed("no digits"));
    }

    #[test]
    fn western_and_arabic_indic_mix_fires() {
        // 1 then Arabic-Indic two
        assert!(MixedNumberDetector::is_mixed("1\u{0662}"));
    }

    #[test]
    fn zero_references_preserve_first_occurrence_order() {
        let numerics = MixedNumberDetector::numerics("\u{0662}9\u{0663}4");
        assert_eq!(numerics, vec!['\u{0660}', '0']);
    }

    #[test]
    fn duplicates_are_collapsed() {
        assert_eq!(MixedNumberDetector::numerics("2024"), vec!['0']);
    }
}
