//! Closed lifecycle states for a single asynchronously loaded value.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. A [`LifecycleValue`] replaces the tangle of nullable fields
//! and boolean flags (`is_loading`, `has_error`, `cached_copy`, ...) that
//! tends to grow around a value which is loaded, edited, and written back
//! asynchronously: the seven states are mutually exclusive by construction,
//! and every consumer match is checked for exhaustiveness by the compiler.
//!
//! The crate never performs the load or the write. `Loading` and `Updating`
//! can carry an [`InflightHandle`] so the caller can find its own operation
//! again, but polling, awaiting, and cancelling all belong to the caller.

mod handle;
mod reason;
pub mod ui;
mod value;

pub use handle::InflightHandle;
pub use reason::{DirtyReason, EmptyTagError, ReasonTag};
pub use value::LifecycleValue;
