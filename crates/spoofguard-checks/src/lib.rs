//! Spoofguard Checks
//!
//! The sub-checks behind label spoof screening:
//! - [`script::ScriptResolver`]: single-script compatibility
//! - [`restriction::RestrictionLevelClassifier`]: the ordered
//!   ASCII / single-script / highly-restrictive / unrestrictive decision
//! - [`numbers::MixedNumberDetector`]: digits from multiple numbering systems
//! - [`invisible::InvisibleMarkDetector`]: duplicate stacked non-spacing marks
//! - [`confusable`]: the reduced Cyrillic-vs-Latin look-alike check
//! - [`runner::CheckRunner`]: runs the enabled checks into a `CheckResult`
//!
//! All checks are pure, synchronous functions of the label and the
//! configuration.

pub mod confusable;
pub mod invisible;
pub mod numbers;
pub mod restriction;
pub mod runner;
pub mod script;
pub mod tables;

pub use confusable::{ConfusableDetector, CyrillicLookalikes};
pub use invisible::InvisibleMarkDetector;
pub use numbers::MixedNumberDetector;
pub use restriction::RestrictionLevelClassifier;
pub use runner::CheckRunner;
pub use script::ScriptResolver;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::confusable::{ConfusableDetector, CyrillicLookalikes};
    pub use crate::invisible::InvisibleMarkDetector;
    pub use crate::numbers::MixedNumberDetector;
    pub use crate::restriction::RestrictionLevelClassifier;
    pub use crate::runner::CheckRunner;
    pub use crate::script::ScriptResolver;
}
