//! Error types for pattern resolution and masking.
//!
//! Every failure in this crate is an explicit variant of [`MaskError`];
//! nothing panics across the library boundary. The [`ErrorSeverity`]
//! classification separates expected per-call outcomes (resolved silently by
//! the function surface) from operational faults that warrant a diagnostic.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while resolving or applying masking patterns
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum MaskError {
    /// The requested key has no entry in the pattern catalog
    #[error("unknown pattern key: {0}")]
    UnknownKey(String),

    /// The catalog entry for a key holds a pattern source that does not
    /// compile
    #[error("pattern for key '{key}' failed to compile: {message}")]
    PatternCompile {
        /// Catalog key whose pattern source was rejected
        key: String,
        /// Diagnostic from the regex engine
        message: String,
    },

    /// A caller-supplied mask string was not exactly one character
    #[error("mask character must be exactly one character, got {0} bytes")]
    InvalidMaskLength(usize),
}

impl MaskError {
    /// Severity of this error for logging and propagation decisions
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownKey(_) | Self::InvalidMaskLength(_) => ErrorSeverity::Info,
            Self::PatternCompile { .. } => ErrorSeverity::Error,
        }
    }

    /// Whether the function surface should emit a diagnostic for this error
    /// instead of failing silently
    pub fn is_operational_fault(&self) -> bool {
        self.severity() >= ErrorSeverity::Error
    }
}

/// Result type alias for rowmask-core operations
pub type Result<T> = std::result::Result<T, MaskError>;

/// Severity levels for monitoring and alerting decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    /// Informational, typically an expected per-call outcome
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}
