//! Spoofguard Verdict
//!
//! The decision tree that turns the label sub-checks into a verdict:
//! emoji masking, the all-checks gate, and the priority-ordered terminal
//! branches (deviation, ASCII, single script, multi-script risk, dangerous
//! patterns), plus the hostname boundary in front of it all.

pub mod domain;
pub mod engine;
pub mod patterns;
pub mod verdict;

pub use domain::{label_boundary_ok, safe_to_display, Domain};
pub use engine::SpoofChecker;
pub use patterns::DangerousPatterns;
pub use verdict::Verdict;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::domain::{safe_to_display, Domain};
    pub use crate::engine::SpoofChecker;
    pub use crate::verdict::Verdict;
    pub use spoofguard_core::prelude::*;
}
