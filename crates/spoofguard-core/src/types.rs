//! Core types for label spoof screening

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Restriction level of a label's character repertoire.
///
/// Levels are totally ordered; a higher level means a riskier repertoire.
/// Each level also has a fixed position in the combined result bitmask so it
/// can travel alongside triggered check bits.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionLevel {
    /// Every code point is ASCII.
    Ascii,
    /// All explicit-script code points resolve to a single script.
    SingleScriptRestrictive,
    /// A permitted multi-script combination (e.g. Latin + Han + Hiragana).
    HighlyRestrictive,
    /// Contains code points outside the allowed set, or deprecated ones.
    Unrestrictive,
}

impl RestrictionLevel {
    /// Bit-space a restriction level occupies inside a combined bitmask.
    pub const MASK: u32 = 0x7F00_0000;

    /// The level's value in combined-bitmask encoding.
    pub fn bits(self) -> u32 {
        match self {
            RestrictionLevel::Ascii => 0x1000_0000,
            RestrictionLevel::SingleScriptRestrictive => 0x2000_0000,
            RestrictionLevel::HighlyRestrictive => 0x3000_0000,
            RestrictionLevel::Unrestrictive => 0x6000_0000,
        }
    }

    /// Decode a level from the masked bits of a combined bitmask.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits & Self::MASK {
            0x1000_0000 => Some(RestrictionLevel::Ascii),
            0x2000_0000 => Some(RestrictionLevel::SingleScriptRestrictive),
            0x3000_0000 => Some(RestrictionLevel::HighlyRestrictive),
            0x6000_0000 => Some(RestrictionLevel::Unrestrictive),
            _ => None,
        }
    }
}

bitflags! {
    /// Selects which sub-checks run during an evaluation.
    ///
    /// A disabled check's bit can never appear in a result.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SpoofChecks: u32 {
        /// Restriction level exceeds the configured threshold.
        const RESTRICTION_LEVEL = 0x10;
        /// Duplicate non-spacing mark inside one combining sequence.
        const INVISIBLE = 0x20;
        /// A code point outside the allowed set.
        const CHAR_LIMIT = 0x40;
        /// Digits from more than one numbering system.
        const MIXED_NUMBERS = 0x80;
        /// All sub-checks.
        const ALL_CHECKS = Self::RESTRICTION_LEVEL.bits()
            | Self::INVISIBLE.bits()
            | Self::CHAR_LIMIT.bits()
            | Self::MIXED_NUMBERS.bits();
    }
}

/// Intermediate state of one evaluation.
///
/// Holds the triggered check bits, the computed restriction level (present
/// only when the restriction-level check ran), and the distinct
/// numbering-system zero references in first-occurrence order. Created fresh
/// per evaluation; never shared across labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// Checks that fired during the evaluation.
    pub checks: SpoofChecks,

    /// Restriction level of the label, when computed.
    pub restriction_level: Option<RestrictionLevel>,

    /// Zero reference of each numbering system seen, first occurrence first.
    pub numerics: Vec<char>,
}

impl CheckResult {
    /// Create an empty check result
    pub fn new() -> Self {
        Self {
            checks: SpoofChecks::empty(),
            restriction_level: None,
            numerics: Vec::new(),
        }
    }

    /// Combined result bitmask: triggered bits masked by the enabled set,
    /// with the restriction-level bits ORed in when a level was computed.
    ///
    /// Masking here is what guarantees a disabled check's bit never reaches
    /// a caller, independent of which detectors actually ran.
    pub fn combined_bitmask(&self, enabled: SpoofChecks) -> u32 {
        let mut value = (self.checks & enabled).bits();
        if let Some(level) = self.restriction_level {
            value |= level.bits();
        }
        value
    }
}

impl Default for CheckResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restriction_levels_are_ordered() {
        assert!(RestrictionLevel::Ascii < RestrictionLevel::SingleScriptRestrictive);
        assert!(
            RestrictionLevel::SingleScriptRestrictive < RestrictionLevel::HighlyRestrictive
        );
        assert!(RestrictionLevel::HighlyRestrictive < RestrictionLevel::Unrestrictive);
    }

    #[test]
    fn restriction_level_bits_round_trip() {
        for level in [
            RestrictionLevel::Ascii,
            RestrictionLevel::SingleScriptRestrictive,
            RestrictionLevel::HighlyRestrictive,
            RestrictionLevel::Unrestrictive,
        ] {
            assert_eq!(RestrictionLevel::from_bits(level.bits()), Some(level));
        }
        assert_eq!(RestrictionLevel::from_bits(0), None);
    }

    #[test]
    fn combined_bitmask_masks_disabled_checks() {
        let mut result = CheckResult::new();
        result.checks = SpoofChecks::MIXED_NUMBERS | SpoofChecks::INVISIBLE;
        result.restriction_level = Some(RestrictionLevel::Ascii);

        let combined = result.combined_bitmask(SpoofChecks::INVISIBLE);
        assert_eq!(
            combined,
            SpoofChecks::INVISIBLE.bits() | RestrictionLevel::Ascii.bits()
        );
        assert_eq!(combined & SpoofChecks::MIXED_NUMBERS.bits(), 0);
    }

    #[test]
    fn combined_bitmask_without_level_has_no_level_bits() {
        let mut result = CheckResult::new();
        result.checks = SpoofChecks::CHAR_LIMIT;
        let combined = result.combined_bitmask(SpoofChecks::ALL_CHECKS);
        assert_eq!(combined & RestrictionLevel::MASK, 0);
        assert_eq!(combined, SpoofChecks::CHAR_LIMIT.bits());
    }
}
