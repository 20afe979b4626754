//! # RowMask Core
//!
//! Pattern catalog, compiled-pattern cache, and masking engine.
//!
//! This crate contains:
//! - The fixed key to pattern-source catalog
//! - The per-scope compiled-pattern cache behind a single mutex
//! - The length-preserving span-rewriting engine
//! - Error and policy types shared with the function surface
//!
//! ## Architecture Principles
//! - No host-boundary types; those live in `rowmask-udf`
//! - Synchronous throughout, no async runtime
//! - All failures are explicit `Result` variants, never panics

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod cache;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod policy;
pub mod stats;

// Re-export commonly used types
pub use cache::PatternCache;
pub use catalog::PatternCatalog;
pub use error::{ErrorSeverity, MaskError, Result};
pub use policy::{MaskChar, MaskPolicy};
pub use stats::CacheStats;
