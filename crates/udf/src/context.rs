//! Per-scope host boundary state.
//!
//! [`ScopeContext`] models the slice of the host engine a masking call can
//! touch: an opaque per-scope state slot (the host hands the same handle to
//! the lifecycle hooks and to every row call) and an error channel that
//! collects timestamped [`Diagnostic`] records. Row text never enters the
//! channel or the logs; diagnostics carry only the error's own message.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::error::UdfError;

/// Lifecycle position of an execution scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScopeStatus {
    /// Scope created but no state installed; masking calls are rejected
    #[default]
    NotPrepared,
    /// Scope state installed and serving masking calls
    Prepared,
    /// Scope state released; terminal
    Closed,
}

impl fmt::Display for ScopeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPrepared => write!(f, "Not Prepared"),
            Self::Prepared => write!(f, "Prepared"),
            Self::Closed => write!(f, "Closed"),
        }
    }
}

/// One fault surfaced through the host error channel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Scope the fault was reported under
    pub scope_id: Uuid,
    /// When the fault was reported
    pub at: DateTime<Utc>,
    /// Human-readable fault description
    pub message: String,
}

/// Type-erased scope state, matching the opaque handle the host stores
type ScopeState = Arc<dyn Any + Send + Sync>;

#[derive(Debug, Default)]
struct ScopeInner {
    status: ScopeStatus,
    slot: Option<ScopeState>,
}

/// Per-scope handle threaded through lifecycle hooks and masking calls
///
/// One `ScopeContext` exists per execution scope. The status and the state
/// slot move together under a single writer lock, so a call can never observe
/// a prepared scope without its state or a closed scope that still holds one.
#[derive(Debug)]
pub struct ScopeContext {
    scope_id: Uuid,
    inner: RwLock<ScopeInner>,
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl Default for ScopeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeContext {
    /// Creates an unprepared scope with a fresh scope id
    pub fn new() -> Self {
        Self {
            scope_id: Uuid::new_v4(),
            inner: RwLock::new(ScopeInner::default()),
            diagnostics: Mutex::new(Vec::new()),
        }
    }

    /// Identifier correlating this scope's diagnostics and log events
    pub fn scope_id(&self) -> Uuid {
        self.scope_id
    }

    /// Current lifecycle status
    pub fn status(&self) -> ScopeStatus {
        self.inner.read().status
    }

    /// Installs scope state, transitioning `NotPrepared` to `Prepared`.
    ///
    /// Returns the status seen on entry. The slot is written only from
    /// `NotPrepared`; a prepared scope keeps its existing state and a closed
    /// scope stays closed.
    pub(crate) fn install_state<T: Send + Sync + 'static>(&self, state: Arc<T>) -> ScopeStatus {
        let mut inner = self.inner.write();
        let prior = inner.status;
        if prior == ScopeStatus::NotPrepared {
            inner.slot = Some(state);
            inner.status = ScopeStatus::Prepared;
        }
        prior
    }

    /// Returns the installed state when the scope is prepared
    pub(crate) fn prepared_state<T: Send + Sync + 'static>(&self) -> Result<Arc<T>, UdfError> {
        let inner = self.inner.read();
        match inner.status {
            ScopeStatus::Prepared => inner
                .slot
                .as_ref()
                .and_then(|slot| Arc::clone(slot).downcast::<T>().ok())
                .ok_or(UdfError::Uninitialized(ScopeStatus::Prepared)),
            status => Err(UdfError::Uninitialized(status)),
        }
    }

    /// Releases the state slot and transitions to `Closed`.
    ///
    /// Returns the status seen on entry together with whatever the slot held,
    /// so the caller can inspect the released state before dropping it.
    pub(crate) fn close(&self) -> (ScopeStatus, Option<ScopeState>) {
        let mut inner = self.inner.write();
        let prior = inner.status;
        inner.status = ScopeStatus::Closed;
        (prior, inner.slot.take())
    }

    /// Records an operational fault on the host error channel
    pub(crate) fn report_error(&self, error: &UdfError) {
        let message = error.to_string();
        warn!(scope_id = %self.scope_id, severity = %error.severity(), %message, "masking fault");
        self.diagnostics.lock().push(Diagnostic {
            scope_id: self.scope_id,
            at: Utc::now(),
            message,
        });
    }

    /// Snapshot of the diagnostics reported so far, oldest first
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }
}
