//! Per-evaluation check configuration

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{RestrictionLevel, SpoofChecks};

/// Immutable configuration for one evaluation.
///
/// A configuration value is passed into every call instead of living as
/// shared mutable state on the checker, so independent labels can be
/// screened concurrently without interference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    checks: SpoofChecks,
    restriction_level: RestrictionLevel,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            checks: SpoofChecks::ALL_CHECKS,
            restriction_level: RestrictionLevel::HighlyRestrictive,
        }
    }
}

impl CheckConfig {
    /// Default configuration: all checks enabled, highly-restrictive
    /// threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the enabled check set.
    ///
    /// The typed flag set cannot carry unknown bits. An empty set disables
    /// every sub-check, leaving only the pattern rules of the decision tree.
    pub fn with_checks(mut self, checks: SpoofChecks) -> Self {
        self.checks = checks;
        self
    }

    /// Replace the restriction-level threshold.
    pub fn with_restriction_level(mut self, level: RestrictionLevel) -> Self {
        self.restriction_level = level;
        self
    }

    /// Build from a raw check bitmask, failing fast on unknown bits or an
    /// empty check set.
    pub fn from_bits(bits: u32, level: RestrictionLevel) -> Result<Self> {
        let checks = SpoofChecks::from_bits(bits)
            .ok_or_else(|| Error::config(format!("unknown check bits in {bits:#06x}")))?;
        if checks.is_empty() {
            return Err(Error::config("no checks enabled"));
        }
        Ok(Self {
            checks,
            restriction_level: level,
        })
    }

    /// Enabled sub-checks.
    pub fn checks(&self) -> SpoofChecks {
        self.checks
    }

    /// Restriction-level threshold; levels above it trigger the
    /// restriction-level check.
    pub fn restriction_level(&self) -> RestrictionLevel {
        self.restriction_level
    }

    /// Load a configuration from YAML.
    ///
    /// `checks` is a raw bitmask for compatibility with bitmask-driven
    /// callers and is validated through [`CheckConfig::from_bits`];
    /// `restriction_level` is a level name. Missing fields keep their
    /// defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let raw: RawConfig = serde_yaml::from_str(yaml)?;
        let defaults = Self::default();
        let level = raw.restriction_level.unwrap_or(defaults.restriction_level);
        match raw.checks {
            Some(bits) => Self::from_bits(bits, level),
            None => Ok(defaults.with_restriction_level(level)),
        }
    }

    /// Load a configuration from a YAML file.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    checks: Option<u32>,

    #[serde(default)]
    restriction_level: Option<RestrictionLevel>,
}
