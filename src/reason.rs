//! Classification of why a value is locally modified.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dirty reason tag must not be empty")]
pub struct EmptyTagError;

/// Caller-defined reason label, guaranteed non-empty (after trimming).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReasonTag(String);

impl ReasonTag {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyTagError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyTagError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ReasonTag {
    type Error = EmptyTagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ReasonTag {
    type Error = EmptyTagError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReasonTag> for String {
    fn from(value: ReasonTag) -> Self {
        value.0
    }
}

impl fmt::Display for ReasonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Why a dirty value is considered locally modified and unconfirmed.
///
/// Three built-in classifications cover the common edit pipeline; `Custom`
/// is the extension point for callers with their own vocabulary. Reasons
/// are distinguished by the identity of the classification, never by
/// inspecting the modified value: two `Custom` reasons are the same reason
/// exactly when their tags are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirtyReason {
    /// Locally changed, not yet validated or saved.
    #[default]
    Edited,
    /// Locally changed and passed validation, not yet saved.
    Validated,
    /// Sourced from a local cache, not yet confirmed by the backend.
    Cached,
    /// Caller-defined classification.
    Custom(ReasonTag),
}

impl DirtyReason {
    pub fn custom(tag: impl Into<String>) -> Result<Self, EmptyTagError> {
        Ok(Self::Custom(ReasonTag::new(tag)?))
    }

    /// Display label for renderers and logs.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Edited => "edited",
            Self::Validated => "validated",
            Self::Cached => "cached",
            Self::Custom(tag) => tag.as_str(),
        }
    }
}
