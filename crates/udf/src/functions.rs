//! Null-propagating masking entry points.
//!
//! These are the per-row calls the host dispatches. Nullable engine strings
//! arrive as `Option<&str>` and every failure leaves as `None`; internally
//! both variants route through one fallible path so every outcome is an
//! explicit [`UdfError`] before it is flattened. Only operational faults
//! reach the host error channel. Row text is never logged.

use rowmask_core::{engine, MaskPolicy, PatternCache};
use tracing::instrument;

use crate::context::ScopeContext;
use crate::error::{Result, UdfError};

/// Masks every catalog match in `input` with asterisks.
///
/// Returns `None` when any argument is null, the key is unknown, or the
/// scope is not prepared.
#[instrument(skip(context, input))]
pub fn mask(context: &ScopeContext, key: Option<&str>, input: Option<&str>) -> Option<String> {
    finish(context, try_mask(context, key, input, MaskPolicy::Asterisk))
}

/// Masks every catalog match in `input` with a caller-chosen character.
///
/// `mask_char` must be exactly one character; anything else yields `None`.
/// The null and unknown-key rules match [`mask`].
#[instrument(skip(context, input))]
pub fn mask_with_char(
    context: &ScopeContext,
    key: Option<&str>,
    input: Option<&str>,
    mask_char: Option<&str>,
) -> Option<String> {
    let outcome = match mask_char {
        None => Err(UdfError::NullArgument),
        Some(mask) => MaskPolicy::replace_with(mask)
            .map_err(UdfError::from)
            .and_then(|policy| try_mask(context, key, input, policy)),
    };
    finish(context, outcome)
}

fn try_mask(
    context: &ScopeContext,
    key: Option<&str>,
    input: Option<&str>,
    policy: MaskPolicy,
) -> Result<String> {
    let key = key.ok_or(UdfError::NullArgument)?;
    let input = input.ok_or(UdfError::NullArgument)?;
    let cache = context.prepared_state::<PatternCache>()?;
    let pattern = cache.resolve(key)?;
    Ok(engine::apply(&pattern, input, policy))
}

/// Flattens the outcome to the nullable host result, reporting operational
/// faults on the way out.
fn finish(context: &ScopeContext, outcome: Result<String>) -> Option<String> {
    match outcome {
        Ok(masked) => Some(masked),
        Err(error) => {
            if error.is_operational_fault() {
                context.report_error(&error);
            }
            None
        }
    }
}
