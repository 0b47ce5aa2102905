//! Error types for spoofguard

/// Result type alias using spoofguard's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for spoofguard operations
///
/// The screening engine itself never fails on risky input; risky labels are
/// classified as unsafe. Errors surface only from configuration handling and
/// pattern-set construction, and they surface eagerly.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid check configuration (unknown bits, empty check set)
    #[error("configuration error: {0}")]
    Config(String),

    /// Pattern-set construction errors
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Configuration file IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration deserialization errors
    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new pattern error
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }
}
