//! Lifecycle states for a single asynchronously loaded value.
//!
//! Pure domain types with no IO and no async. One `LifecycleValue` exists
//! per logical field; transitions consume the current state and return the
//! next one, so a partially-updated state is unrepresentable.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::handle::InflightHandle;
use crate::reason::DirtyReason;

// ── State ────────────────────────────────────────────────────

/// The full lifecycle of one asynchronously loaded, locally editable value.
///
/// Exactly one variant is active at a time, and there is no eighth variant:
/// consumers match exhaustively or collapse the state with
/// [`either`](Self::either).
///
/// `prev` fields are derived, not caller-chosen: every transition seeds
/// them from the best value still extractable from the state it consumed
/// (a live value outranks a recorded previous value, which outranks
/// nothing). Direct variant construction stays public for callers that
/// enter the lifecycle mid-stream, e.g. building `Ready` from a completed
/// load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleValue<T, E> {
    /// No load has ever been attempted.
    Uninitialized,
    /// A load is in progress.
    Loading {
        prev: Option<T>,
        #[serde(skip)]
        handle: Option<InflightHandle>,
    },
    /// The resource exists and is confirmed to be empty.
    Empty,
    /// The last confirmed good value.
    Ready { value: T },
    /// A locally modified or cached value, not yet confirmed.
    Dirty {
        value: T,
        reason: DirtyReason,
        #[serde(skip_serializing_if = "Option::is_none", default)]
        modified_at: Option<SystemTime>,
        prev: Option<T>,
    },
    /// A write of `value` is in progress.
    Updating {
        value: T,
        prev: Option<T>,
        #[serde(skip)]
        handle: Option<InflightHandle>,
    },
    /// The last operation failed.
    Failure { error: E, prev: Option<T> },
}

impl<T, E> Default for LifecycleValue<T, E> {
    fn default() -> Self {
        Self::Uninitialized
    }
}

// ── Extraction ───────────────────────────────────────────────

impl<T, E> LifecycleValue<T, E> {
    /// The best value this state can still show: a live value outranks a
    /// recorded previous value, which outranks nothing.
    ///
    /// Single home of the priority order. Every transition seeds its `prev`
    /// from this, run once against the state being transitioned away from.
    fn into_best_value(self) -> Option<T> {
        match self {
            Self::Ready { value }
            | Self::Updating { value, .. }
            | Self::Dirty { value, .. } => Some(value),
            Self::Loading { prev, .. } | Self::Failure { prev, .. } => prev,
            Self::Uninitialized | Self::Empty => None,
        }
    }

    /// Converts from `&LifecycleValue<T, E>` to `LifecycleValue<&T, &E>`.
    #[must_use]
    pub fn as_ref(&self) -> LifecycleValue<&T, &E> {
        match self {
            Self::Uninitialized => LifecycleValue::Uninitialized,
            Self::Loading { prev, handle } => LifecycleValue::Loading {
                prev: prev.as_ref(),
                handle: handle.clone(),
            },
            Self::Empty => LifecycleValue::Empty,
            Self::Ready { value } => LifecycleValue::Ready { value },
            Self::Dirty {
                value,
                reason,
                modified_at,
                prev,
            } => LifecycleValue::Dirty {
                value,
                reason: reason.clone(),
                modified_at: *modified_at,
                prev: prev.as_ref(),
            },
            Self::Updating {
                value,
                prev,
                handle,
            } => LifecycleValue::Updating {
                value,
                prev: prev.as_ref(),
                handle: handle.clone(),
            },
            Self::Failure { error, prev } => LifecycleValue::Failure {
                error,
                prev: prev.as_ref(),
            },
        }
    }

    /// Borrowing form of the extraction that seeds every transition.
    #[must_use]
    pub fn best_value(&self) -> Option<&T> {
        self.as_ref().into_best_value()
    }

    // ── Transitions ──────────────────────────────────────────

    /// Begin a load, carrying forward the best previous value.
    #[must_use]
    pub fn to_loading(self) -> Self {
        Self::Loading {
            prev: self.into_best_value(),
            handle: None,
        }
    }

    /// Begin a load and keep a handle to the operation performing it.
    #[must_use]
    pub fn to_loading_with_handle(self, handle: InflightHandle) -> Self {
        Self::Loading {
            prev: self.into_best_value(),
            handle: Some(handle),
        }
    }

    /// Begin a write of `value`, carrying forward the best previous value.
    #[must_use]
    pub fn to_updating(self, value: T) -> Self {
        Self::Updating {
            value,
            prev: self.into_best_value(),
            handle: None,
        }
    }

    /// Begin a write of `value` and keep a handle to the operation.
    #[must_use]
    pub fn to_updating_with_handle(self, value: T, handle: InflightHandle) -> Self {
        Self::Updating {
            value,
            prev: self.into_best_value(),
            handle: Some(handle),
        }
    }

    /// Record a local edit of `value`, classified [`DirtyReason::Edited`].
    #[must_use]
    pub fn to_dirty(self, value: T) -> Self {
        self.to_dirty_as(value, DirtyReason::Edited, None)
    }

    /// Record a local modification with an explicit reason and timestamp.
    #[must_use]
    pub fn to_dirty_as(
        self,
        value: T,
        reason: DirtyReason,
        modified_at: Option<SystemTime>,
    ) -> Self {
        Self::Dirty {
            value,
            reason,
            modified_at,
            prev: self.into_best_value(),
        }
    }

    /// Record a failed operation, keeping whatever value survived it.
    #[must_use]
    pub fn to_failure(self, error: E) -> Self {
        Self::Failure {
            error,
            prev: self.into_best_value(),
        }
    }

    // ── Collapsing ───────────────────────────────────────────

    /// Collapse all seven states to a binary outcome.
    ///
    /// Exactly one handler runs, exactly once. Routing reads the `value` and
    /// `prev` fields materialized at construction time; it never re-derives
    /// a previous value:
    ///
    /// - `Dirty`, `Updating`, `Ready`: their value is usable.
    /// - `Loading` or `Failure` with a recorded previous value: that value
    ///   is usable (stale, in the failure case).
    /// - `Failure` with nothing recorded: no value, the error is passed on.
    /// - `Uninitialized`, `Empty`, `Loading` with nothing recorded: no
    ///   value, no error.
    ///
    /// A failure that still has a usable previous value hides its error
    /// here. Callers that need the stale value and the error at the same
    /// time should match directly or use
    /// [`disposition`](Self::disposition), which surfaces both.
    pub fn either<'a, R>(
        &'a self,
        on_value: impl FnOnce(&'a T) -> R,
        on_no_value: impl FnOnce(Option<&'a E>) -> R,
    ) -> R {
        match self {
            Self::Dirty { value, .. } | Self::Updating { value, .. } | Self::Ready { value } => {
                on_value(value)
            }
            Self::Loading {
                prev: Some(prev), ..
            }
            | Self::Failure {
                prev: Some(prev), ..
            } => on_value(prev),
            Self::Failure { error, prev: None } => on_no_value(Some(error)),
            Self::Uninitialized
            | Self::Empty
            | Self::Loading { prev: None, .. } => on_no_value(None),
        }
    }

    /// The usable value if [`either`](Self::either) would route to one.
    #[must_use]
    pub fn value_or_none(&self) -> Option<&T> {
        self.either(Some, |_| None)
    }

    // ── Queries ──────────────────────────────────────────────

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        matches!(self, Self::Dirty { .. })
    }

    /// Whether a load or a write is currently in progress.
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Loading { .. } | Self::Updating { .. })
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// The error of a failed state.
    #[must_use]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Failure { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The in-flight operation handle, if the current state carries one.
    #[must_use]
    pub fn handle(&self) -> Option<&InflightHandle> {
        match self {
            Self::Loading { handle, .. } | Self::Updating { handle, .. } => handle.as_ref(),
            _ => None,
        }
    }

    /// The classification of a dirty state.
    #[must_use]
    pub fn dirty_reason(&self) -> Option<&DirtyReason> {
        match self {
            Self::Dirty { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
