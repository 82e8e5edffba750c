//! Opaque engine handles.

use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

/// Cheaply-cloneable, type-erased reference to an engine implementation.
///
/// The registry stores and returns handles without ever looking inside
/// them. The pipeline that ultimately runs an engine recovers the concrete
/// type with [`EngineHandle::downcast_ref`].
#[derive(Clone)]
pub struct EngineHandle {
    engine: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl EngineHandle {
    /// Wraps an engine value in an opaque handle.
    pub fn new<T: Any + Send + Sync>(engine: T) -> Self {
        Self {
            engine: Arc::new(engine),
            type_name: type_name::<T>(),
        }
    }

    /// Returns true if the handle wraps a value of type `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.engine.is::<T>()
    }

    /// Borrows the wrapped engine as `T`, or `None` on a type mismatch.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.engine.downcast_ref::<T>()
    }

    /// Returns true when both handles refer to the same engine value.
    pub fn ptr_eq(&self, other: &EngineHandle) -> bool {
        Arc::ptr_eq(&self.engine, &other.engine)
    }

    /// Name of the concrete engine type behind the handle.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineHandle")
            .field("type", &self.type_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeEngine {
        marker: u8,
    }

    #[test]
    fn test_downcast_roundtrip() {
        let handle = EngineHandle::new(FakeEngine { marker: 7 });
        assert!(handle.is::<FakeEngine>());
        assert_eq!(handle.downcast_ref::<FakeEngine>().unwrap().marker, 7);
    }

    #[test]
    fn test_downcast_mismatch_is_none() {
        let handle = EngineHandle::new(FakeEngine { marker: 0 });
        assert!(!handle.is::<String>());
        assert!(handle.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_clones_share_identity() {
        let handle = EngineHandle::new(FakeEngine { marker: 1 });
        let clone = handle.clone();
        assert!(handle.ptr_eq(&clone));

        let other = EngineHandle::new(FakeEngine { marker: 1 });
        assert!(!handle.ptr_eq(&other));
    }

    #[test]
    fn test_debug_names_engine_type() {
        let handle = EngineHandle::new(FakeEngine { marker: 0 });
        assert!(format!("{handle:?}").contains("FakeEngine"));
        assert!(handle.type_name().contains("FakeEngine"));
    }
}
