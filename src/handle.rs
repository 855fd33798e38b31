//! Opaque payload for caller-managed asynchronous operations.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque reference to an in-flight asynchronous operation.
///
/// `Loading` and `Updating` states may carry one of these so the caller can
/// find its future, cancellation token, or request id again when the state
/// comes back around. The lifecycle core stores and clones the handle; it
/// never awaits, cancels, or inspects what is inside.
///
/// Equality is identity: two handles are equal exactly when they refer to
/// the same stored operation, regardless of its contents.
#[derive(Clone)]
pub struct InflightHandle(Arc<dyn Any + Send + Sync>);

impl InflightHandle {
    #[must_use]
    pub fn new(operation: impl Any + Send + Sync) -> Self {
        Self(Arc::new(operation))
    }

    /// Borrow the stored operation back as its concrete type.
    ///
    /// Returns `None` if `U` is not the type the handle was created with.
    #[must_use]
    pub fn downcast_ref<U: Any>(&self) -> Option<&U> {
        self.0.downcast_ref()
    }
}

impl fmt::Debug for InflightHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("InflightHandle(..)")
    }
}

impl PartialEq for InflightHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for InflightHandle {}
