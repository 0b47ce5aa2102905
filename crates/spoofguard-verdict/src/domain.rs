//! Hostname boundary
//!
//! Splits a hostname into labels and applies the separator rules that sit in
//! front of the screening engine. The public surface here is deliberately
//! trivial: every failure collapses to `false`.

use spoofguard_core::CheckConfig;
use tracing::debug;

use crate::engine::SpoofChecker;

/// A hostname split into its labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    hostname: String,
    labels: Vec<String>,
    tld_ascii: bool,
}

impl Domain {
    /// Split a hostname on `.` and record whether its TLD is
    /// ASCII-compatible encoded.
    pub fn parse(hostname: &str) -> Self {
        let labels: Vec<String> = hostname.split('.').map(str::to_owned).collect();
        let tld_ascii = !labels
            .last()
            .map(|tld| tld.starts_with("xn--"))
            .unwrap_or(false);
        Self {
            hostname: hostname.to_owned(),
            labels,
            tld_ascii,
        }
    }

    /// The hostname as given.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The labels, in hostname order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether the TLD is ASCII-compatible encoded (`xn--` prefix absent).
    pub fn is_tld_ascii(&self) -> bool {
        self.tld_ascii
    }
}

/// Separator rules applied to each label before screening: non-empty, no
/// leading or trailing `-`/`_`, no embedded `--`.
pub fn label_boundary_ok(label: &str) -> bool {
    !label.is_empty()
        && !label.starts_with(['-', '_'])
        && !label.ends_with(['-', '_'])
        && !label.contains("--")
}

/// Screen a whole hostname with the default configuration, collapsing every
/// failure to `false`.
///
/// This is the trivial public surface: callers wanting the structured
/// verdict or a custom configuration use [`SpoofChecker`] directly.
pub fn safe_to_display(hostname: &str) -> bool {
    let checker = match SpoofChecker::new() {
        Ok(checker) => checker,
        Err(e) => {
            debug!(error = %e, "checker construction failed");
            return false;
        }
    };
    let config = CheckConfig::default();
    let domain = Domain::parse(hostname);
    if domain.hostname().is_empty() {
        return false;
    }
    domain.labels().iter().all(|label| {
        label_boundary_ok(label)
            && checker
                .check_label(label, &config, domain.is_tld_ascii())
                .is_safe()
    })
}
