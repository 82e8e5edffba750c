//! Process-wide default engine registry.
//!
//! Plugins register themselves here; each [`Environment`] copies the
//! process-wide registrations once, at construction. Registrations made
//! after an environment is constructed are not visible to it.
//!
//! The registry behind these functions is thread-safe; writers take the
//! lock only for the duration of a single map insert.
//!
//! [`Environment`]: crate::environment::Environment

use std::collections::HashMap;
use std::sync::{OnceLock, PoisonError, RwLock};

use crate::engine::EngineHandle;
use crate::extension::InvalidExtensionError;
use crate::registry::ExtensionRegistry;

static GLOBAL_ENGINES: OnceLock<RwLock<ExtensionRegistry<EngineHandle>>> = OnceLock::new();

fn global_engines() -> &'static RwLock<ExtensionRegistry<EngineHandle>> {
    GLOBAL_ENGINES.get_or_init(|| RwLock::new(ExtensionRegistry::new()))
}

/// Registers `handle` for `ext` process-wide, replacing any engine already
/// registered at that extension.
pub fn register_engine(ext: &str, handle: EngineHandle) -> Result<(), InvalidExtensionError> {
    global_engines()
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .register(ext, handle)
}

/// Returns the engine registered process-wide for `ext`, if any.
pub fn engine(ext: &str) -> Result<Option<EngineHandle>, InvalidExtensionError> {
    Ok(global_engines()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(ext)?
        .cloned())
}

/// Returns a snapshot of the process-wide extension→engine registrations.
pub fn engines() -> HashMap<String, EngineHandle> {
    global_engines()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .snapshot()
}

/// Lists all extensions with a process-wide registered engine.
pub fn engine_extensions() -> Vec<String> {
    global_engines()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .extensions()
        .map(str::to_string)
        .collect()
}
