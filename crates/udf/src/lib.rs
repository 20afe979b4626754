//! # RowMask UDF
//!
//! Host-facing masking functions with scope lifecycle management.
//!
//! This crate contains:
//! - The per-scope context modeling the host's opaque state handle and error
//!   channel
//! - The lifecycle hooks the host calls once per execution scope
//! - The null-propagating `mask` / `mask_with_char` entry points
//! - The boundary error taxonomy composing `rowmask-core` errors upward
//!
//! ## Architecture Principles
//! - Nullable host strings are `Option`s; no failure crosses as a panic
//! - Expected per-call outcomes stay silent, operational faults are reported
//! - Row text never appears in logs or diagnostics

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod context;
pub mod error;
pub mod functions;
pub mod lifecycle;

// Re-export commonly used types
pub use context::{Diagnostic, ScopeContext, ScopeStatus};
pub use error::{Result, UdfError};
pub use functions::{mask, mask_with_char};
pub use lifecycle::{close_scope, prepare_scope, prepare_scope_with_catalog, scope_stats};
