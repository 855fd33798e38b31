//! Render disposition for lifecycle values.

use crate::reason::DirtyReason;
use crate::value::LifecycleValue;

/// Decoration to draw next to a usable value.
#[derive(Debug, PartialEq, Eq)]
pub enum Indicator<'a, E> {
    /// A load or write is running behind the shown value.
    InProgress,
    /// The shown value is locally modified and unconfirmed.
    Dirty { reason: &'a DirtyReason },
    /// The last operation failed; the shown value is the stale survivor.
    Stale { error: &'a E },
}

/// What a renderer should put on screen for a lifecycle value.
///
/// Exactly one disposition applies to every variant/prev/failure
/// combination, so a renderer that handles these three cases cannot fall
/// through.
#[derive(Debug, PartialEq, Eq)]
pub enum ViewDisposition<'a, T, E> {
    /// Nothing to show and nothing wrong: draw a placeholder.
    Placeholder,
    /// A usable value, possibly decorated.
    Value {
        value: &'a T,
        indicator: Option<Indicator<'a, E>>,
    },
    /// No usable value at all: draw a dedicated error view.
    Error { error: &'a E },
}

impl<T, E> LifecycleValue<T, E> {
    /// How a renderer should treat the current state.
    ///
    /// Unlike [`either`](Self::either), a failure that still has a usable
    /// previous value surfaces both the value and the error here, as
    /// [`Indicator::Stale`].
    #[must_use]
    pub fn disposition(&self) -> ViewDisposition<'_, T, E> {
        match self {
            Self::Uninitialized | Self::Empty | Self::Loading { prev: None, .. } => {
                ViewDisposition::Placeholder
            }
            Self::Loading {
                prev: Some(prev), ..
            } => ViewDisposition::Value {
                value: prev,
                indicator: Some(Indicator::InProgress),
            },
            Self::Updating { value, .. } => ViewDisposition::Value {
                value,
                indicator: Some(Indicator::InProgress),
            },
            Self::Ready { value } => ViewDisposition::Value {
                value,
                indicator: None,
            },
            Self::Dirty { value, reason, .. } => ViewDisposition::Value {
                value,
                indicator: Some(Indicator::Dirty { reason }),
            },
            Self::Failure {
                error,
                prev: Some(prev),
            } => ViewDisposition::Value {
                value: prev,
                indicator: Some(Indicator::Stale { error }),
            },
            Self::Failure { error, prev: None } => ViewDisposition::Error { error },
        }
    }
}
