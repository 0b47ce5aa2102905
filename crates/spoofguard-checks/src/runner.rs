//! Check runner
//!
//! Runs the enabled sub-checks over one label and collects the outcome into
//! a [`CheckResult`]. Evaluation is a pure function of the label and the
//! configuration; nothing is shared between calls.

use spoofguard_core::{CheckConfig, CheckResult, SpoofChecks};
use tracing::debug;

use crate::invisible::InvisibleMarkDetector;
use crate::numbers::MixedNumberDetector;
use crate::restriction::RestrictionLevelClassifier;
use crate::tables;

/// Runs the configured sub-checks over a label.
pub struct CheckRunner;

impl CheckRunner {
    /// Evaluate one label against the configuration.
    pub fn run(label: &str, config: &CheckConfig) -> CheckResult {
        let enabled = config.checks();
        let mut result = CheckResult::new();

        if enabled.contains(SpoofChecks::RESTRICTION_LEVEL) {
            let level = RestrictionLevelClassifier::classify(label);
            if level > config.restriction_level() {
                result.checks |= SpoofChecks::RESTRICTION_LEVEL;
            }
            result.restriction_level = Some(level);
            debug!(?level, threshold = ?config.restriction_level(), "restriction level");
        }

        if enabled.contains(SpoofChecks::MIXED_NUMBERS) {
            let numerics = MixedNumberDetector::numerics(label);
            if numerics.len() > 1 {
                debug!(?numerics, "mixed numbering systems");
                result.checks |= SpoofChecks::MIXED_NUMBERS;
            }
            result.numerics = numerics;
        }

        if enabled.contains(SpoofChecks::CHAR_LIMIT)
            && label.chars().any(|c| !tables::is_allowed(c))
        {
            result.checks |= SpoofChecks::CHAR_LIMIT;
        }

        if enabled.contains(SpoofChecks::INVISIBLE)
            && InvisibleMarkDetector::duplicate_marks(label)
        {
            debug!("duplicate non-spacing mark");
            result.checks |= SpoofChecks::INVISIBLE;
        }

        result
    }
}
