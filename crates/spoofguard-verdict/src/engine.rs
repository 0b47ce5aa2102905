//! Spoof-check decision tree
//!
//! Orchestrates one label through emoji masking, the configured sub-checks,
//! and the priority-ordered terminal branches.

use spoofguard_checks::tables;
use spoofguard_checks::{CheckRunner, ConfusableDetector, CyrillicLookalikes};
use spoofguard_core::{CheckConfig, RestrictionLevel, Result, SpoofChecks};
use tracing::debug;

use crate::patterns::{self, DangerousPatterns};
use crate::verdict::Verdict;

/// Screens labels for Unicode spoofing risk.
///
/// Holds only immutable compiled pattern state; configuration travels with
/// each call, so one checker can screen independent labels concurrently.
pub struct SpoofChecker {
    dangerous: DangerousPatterns,
    confusable: Box<dyn ConfusableDetector>,
}

impl SpoofChecker {
    /// Create a checker with the default Cyrillic look-alike confusable
    /// detector. Fails fast when the fixed pattern set does not compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            dangerous: DangerousPatterns::compile()?,
            confusable: Box::new(CyrillicLookalikes),
        })
    }

    /// Replace the confusable capability.
    pub fn with_confusable_detector(mut self, detector: Box<dyn ConfusableDetector>) -> Self {
        self.confusable = detector;
        self
    }

    /// Screen one label, already split from its hostname.
    ///
    /// `tld_ascii` reports whether the hostname's TLD is ASCII-compatible
    /// encoded; the Cyrillic confusable annotation only applies under an
    /// ASCII TLD.
    pub fn check_label(&self, label: &str, config: &CheckConfig, tld_ascii: bool) -> Verdict {
        // Mask emoji with a neutral letter so pictographs cannot shield the
        // rest of the label from script and restriction analysis.
        let masked_label = Self::mask_emoji(label);
        let label = masked_label.as_str();

        let check = CheckRunner::run(label, config);
        let result_value = check.combined_bitmask(config.checks());
        if result_value & SpoofChecks::ALL_CHECKS.bits() != 0 {
            debug!(result_value, "spoof check failure");
            return Verdict::Unsafe {
                result_value,
                numerics: check.numerics,
            };
        }

        // Only the restriction-level bits matter from here on.
        let result_value = result_value & RestrictionLevel::MASK;

        if patterns::has_deviation_character(label) {
            debug!("deviation characters");
            return Verdict::Deviation { result_value };
        }

        if result_value == RestrictionLevel::Ascii.bits() {
            return Verdict::AsciiSafe { result_value };
        }

        if result_value == RestrictionLevel::SingleScriptRestrictive.bits()
            && !patterns::has_kana_exception(label)
            && !patterns::has_combining_diacritic_exception(label)
        {
            let cyrillic_like_latin =
                tld_ascii && self.confusable.whole_label_confusable(label);
            return Verdict::SingleScript {
                result_value,
                cyrillic_like_latin,
            };
        }

        debug!("multiple scripts");
        if patterns::has_non_ascii_latin(label)
            && !patterns::is_latin_greek_cyrillic_ascii(label)
        {
            return Verdict::MultiScriptRisk { result_value };
        }

        let matched = self.dangerous.matches(label);
        if !matched.is_empty() {
            debug!(?matched, "dangerous patterns");
        }
        Verdict::DangerousPattern {
            result_value,
            matched,
        }
    }

    fn mask_emoji(label: &str) -> String {
        label
            .chars()
            .map(|c| if tables::is_emoji(c) { 'a' } else { c })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> SpoofChecker {
        SpoofChecker::new().unwrap()
    }

    fn check(label: &str) -> Verdict {
        checker().check_label(label, &CheckConfig::default(), true)
    }

    #[test]
    fn ascii_label_is_ascii_safe() {
        let verdict = check("example");
        assert_eq!(
            verdict,
            Verdict::AsciiSafe {
                result_value: RestrictionLevel::Ascii.bits()
            }
        );
        assert!(verdict.is_safe());
    }

    #[test]
    fn disallowed_code_point_is_unsafe() {
        let verdict = check("ab$cd");
        assert!(!verdict.is_safe());
        assert!(matches!(verdict, Verdict::Unsafe { .. }));
        // both the restriction-level and char-limit checks fire
        let value = verdict.result_value();
        assert_ne!(value & SpoofChecks::RESTRICTION_LEVEL.bits(), 0);
        assert_ne!(value & SpoofChecks::CHAR_LIMIT.bits(), 0);
    }

    #[test]
    fn mixed_numbers_are_unsafe() {
        let verdict = check("price1\u{0662}");
        match verdict {
            Verdict::Unsafe {
                result_value,
                numerics,
            } => {
                assert_ne!(result_value & SpoofChecks::MIXED_NUMBERS.bits(), 0);
                assert_eq!(numerics, vec!['0', '\u{0660}']);
            }
            other => panic!("expected Unsafe, got {other:?}"),
        }
    }

    #[test]
    fn stacked_marks_are_unsafe_at_any_level() {
        let verdict = check("a\u{0301}\u{0301}");
        assert!(matches!(verdict, Verdict::Unsafe { .. }));
        assert_ne!(
            verdict.result_value() & SpoofChecks::INVISIBLE.bits(),
            0
        );
    }

    #[test]
    fn deviation_label_is_annotated_safe() {
        let verdict = check("stra\u{00DF}e");
        assert!(matches!(verdict, Verdict::Deviation { .. }));
        assert!(verdict.is_safe());
    }

    #[test]
    fn cyrillic_look_alikes_annotated() {
        // spoofs "pay"
        let verdict = check("\u{0440}\u{0430}\u{0443}");
        assert_eq!(
            verdict,
            Verdict::SingleScript {
                result_value: RestrictionLevel::SingleScriptRestrictive.bits(),
                cyrillic_like_latin: true,
            }
        );
        assert!(!verdict.is_safe());
    }

    #[test]
    fn honest_cyrillic_is_safe_single_script() {
        let verdict = check("пример");
        assert_eq!(
            verdict,
            Verdict::SingleScript {
                result_value: RestrictionLevel::SingleScriptRestrictive.bits(),
                cyrillic_like_latin: false,
            }
        );
        assert!(verdict.is_safe());
    }

    #[test]
    fn confusable_annotation_skipped_for_non_ascii_tld() {
        let verdict = checker().check_label(
            "\u{0440}\u{0430}\u{0443}",
            &CheckConfig::default(),
            false,
        );
        assert_eq!(
            verdict,
            Verdict::SingleScript {
                result_value: RestrictionLevel::SingleScriptRestrictive.bits(),
                cyrillic_like_latin: false,
            }
        );
    }

    #[test]
    fn unrecognized_multi_script_mix_is_risky() {
        let verdict = check("caf\u{00E9}東");
        assert_eq!(
            verdict,
            Verdict::MultiScriptRisk {
                result_value: RestrictionLevel::HighlyRestrictive.bits()
            }
        );
        assert!(!verdict.is_safe());
        assert!(verdict.multiple_script());
    }

    #[test]
    fn recognized_mix_runs_dangerous_patterns() {
        let verdict = check("tokyo東京");
        assert_eq!(
            verdict,
            Verdict::DangerousPattern {
                result_value: RestrictionLevel::HighlyRestrictive.bits(),
                matched: vec![],
            }
        );
        assert!(verdict.is_safe());
        assert!(verdict.multiple_script());
    }

    #[test]
    fn dangerous_pattern_match_is_flagged() {
        let verdict = check("ab\u{30FC}cd東");
        match &verdict {
            Verdict::DangerousPattern { matched, .. } => {
                assert!(matched.iter().any(|m| m == "prolonged-sound-mark"));
            }
            other => panic!("expected DangerousPattern, got {other:?}"),
        }
        assert!(!verdict.is_safe());
    }

    #[test]
    fn emoji_cannot_shield_analysis() {
        // an emoji between Latin and Cyrillic still leaves a mixed label
        let verdict = check("pay\u{1F600}\u{0440}");
        assert!(!matches!(verdict, Verdict::SingleScript { .. }));
    }
}
