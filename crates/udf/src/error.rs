//! Error types for the scope-facing function surface.
//!
//! [`UdfError`] covers the failures that can only arise at the host boundary
//! (null arguments, calls outside a prepared scope) and composes the core
//! masking errors upward via `#[from]`. The same severity classification as
//! `rowmask-core` decides which failures stay silent and which are surfaced
//! to the host error channel.

use rowmask_core::{ErrorSeverity, MaskError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::ScopeStatus;

/// Errors produced by the masking function surface
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum UdfError {
    /// A required argument was null
    #[error("required argument was null")]
    NullArgument,

    /// A masking call arrived while the scope holds no usable cache
    #[error("no masking state for scope in status '{0}'")]
    Uninitialized(ScopeStatus),

    /// A core masking failure, carried through unchanged
    #[error(transparent)]
    Mask(#[from] MaskError),
}

impl UdfError {
    /// Severity of this error for logging and propagation decisions
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NullArgument => ErrorSeverity::Info,
            Self::Uninitialized(_) => ErrorSeverity::Error,
            Self::Mask(inner) => inner.severity(),
        }
    }

    /// Whether this error should be surfaced to the host error channel
    /// instead of failing silently
    pub fn is_operational_fault(&self) -> bool {
        self.severity() >= ErrorSeverity::Error
    }
}

/// Result type alias for rowmask-udf operations
pub type Result<T> = std::result::Result<T, UdfError>;
