//! Restriction-level classification

use spoofguard_core::RestrictionLevel;
use tracing::trace;

use crate::script::ScriptResolver;
use crate::tables;

/// Classifies a label's character repertoire into a restriction level.
pub struct RestrictionLevelClassifier;

impl RestrictionLevelClassifier {
    /// Ordered decision, first match wins. Never understates risk: any
    /// disallowed or deprecated code point short-circuits to
    /// [`RestrictionLevel::Unrestrictive`].
    pub fn classify(label: &str) -> RestrictionLevel {
        if label
            .chars()
            .any(|c| !tables::is_allowed(c) || tables::is_removed(c))
        {
            trace!(label, "disallowed or removed code point");
            return RestrictionLevel::Unrestrictive;
        }
        if label.chars().all(|c| c.is_ascii()) {
            return RestrictionLevel::Ascii;
        }
        if ScriptResolver::single_script(label) {
            RestrictionLevel::SingleScriptRestrictive
        } else {
            RestrictionLevel::HighlyRestrictive
        }
    }
}
