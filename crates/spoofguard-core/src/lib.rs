//! Spoofguard Core
//!
//! Shared types for screening a domain-name label for Unicode spoofing risk.
//!
//! This crate provides:
//! - The ordered [`RestrictionLevel`] classification and its bitmask encoding
//! - The [`SpoofChecks`] flag set selecting which sub-checks run
//! - The per-evaluation [`CheckResult`] and its combined bitmask
//! - The immutable per-call [`CheckConfig`]
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod types;

pub use config::CheckConfig;
pub use error::{Error, Result};
pub use types::{CheckResult, RestrictionLevel, SpoofChecks};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::CheckConfig;
    pub use crate::error::{Error, Result};
    pub use crate::types::{CheckResult, RestrictionLevel, SpoofChecks};
}
