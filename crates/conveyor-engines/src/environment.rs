//! Environment surface for engine registration.

use std::collections::HashMap;

use crate::engine::EngineHandle;
use crate::extension::InvalidExtensionError;
use crate::global;
use crate::registry::ExtensionRegistry;

/// Engine-registry surface of a pipeline environment.
///
/// An engine is a processor bound to a filename extension:
/// `application.js.coffee` says the engine registered for `.coffee` runs on
/// the file. Implementors embed an [`ExtensionRegistry`] and expose it
/// through the two accessors; every other method is provided.
pub trait Engines {
    /// The embedded engine registry.
    fn engine_registry(&self) -> &ExtensionRegistry<EngineHandle>;

    /// The embedded engine registry, for registration.
    fn engine_registry_mut(&mut self) -> &mut ExtensionRegistry<EngineHandle>;

    /// Returns the engine registered for `ext`, if any.
    ///
    /// ```
    /// # use conveyor_engines::{Engines, Environment, EngineHandle};
    /// # struct CoffeeEngine;
    /// # let mut environment = Environment::empty();
    /// # environment.register_engine(".coffee", EngineHandle::new(CoffeeEngine)).unwrap();
    /// let engine = environment.engine(".coffee").unwrap();
    /// assert!(engine.unwrap().is::<CoffeeEngine>());
    /// ```
    fn engine(&self, ext: &str) -> Result<Option<EngineHandle>, InvalidExtensionError> {
        Ok(self.engine_registry().get(ext)?.cloned())
    }

    /// Returns a copy of every registered extension→engine pair, decoupled
    /// from later registrations.
    fn engines(&self) -> HashMap<String, EngineHandle> {
        self.engine_registry().snapshot()
    }

    /// Lists all extensions with a registered engine.
    fn engine_extensions(&self) -> Vec<String> {
        self.engine_registry()
            .extensions()
            .map(str::to_string)
            .collect()
    }

    /// Registers `handle` for `ext`, replacing any engine already
    /// registered at that extension.
    fn register_engine(
        &mut self,
        ext: &str,
        handle: EngineHandle,
    ) -> Result<(), InvalidExtensionError> {
        self.engine_registry_mut().register(ext, handle)
    }
}

/// One environment's engine registrations.
///
/// A new environment starts from a copy of the process-wide registrations
/// (see [`crate::global`]); afterwards the two scopes evolve independently.
/// Engine changes local to one environment belong here rather than in the
/// global registry.
#[derive(Debug)]
pub struct Environment {
    engines: ExtensionRegistry<EngineHandle>,
}

impl Environment {
    /// Creates an environment seeded with the engines currently registered
    /// process-wide.
    pub fn new() -> Self {
        Self {
            engines: ExtensionRegistry::from_normalized(global::engines()),
        }
    }

    /// Creates an environment with no engines registered.
    pub fn empty() -> Self {
        Self {
            engines: ExtensionRegistry::new(),
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Engines for Environment {
    fn engine_registry(&self) -> &ExtensionRegistry<EngineHandle> {
        &self.engines
    }

    fn engine_registry_mut(&mut self) -> &mut ExtensionRegistry<EngineHandle> {
        &mut self.engines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SassEngine;
    struct LessEngine;

    #[test]
    fn test_empty_environment_has_no_engines() {
        let environment = Environment::empty();
        assert!(environment.engine_extensions().is_empty());
        assert!(environment.engine(".sass").unwrap().is_none());
    }

    #[test]
    fn test_register_and_lookup_through_trait() {
        let mut environment = Environment::empty();
        environment
            .register_engine("sass", EngineHandle::new(SassEngine))
            .unwrap();

        let engine = environment.engine(".sass").unwrap().unwrap();
        assert!(engine.is::<SassEngine>());
        assert_eq!(environment.engine_extensions(), vec![".sass".to_string()]);
    }

    #[test]
    fn test_override_replaces_engine() {
        let mut environment = Environment::empty();
        environment
            .register_engine(".sass", EngineHandle::new(SassEngine))
            .unwrap();
        environment
            .register_engine(".sass", EngineHandle::new(LessEngine))
            .unwrap();

        let engine = environment.engine(".sass").unwrap().unwrap();
        assert!(engine.is::<LessEngine>());
        assert_eq!(environment.engine_extensions().len(), 1);
    }

    #[test]
    fn test_engines_snapshot_decoupled() {
        let mut environment = Environment::empty();
        environment
            .register_engine(".sass", EngineHandle::new(SassEngine))
            .unwrap();

        let mut snapshot = environment.engines();
        snapshot.remove(".sass");

        assert!(environment.engine(".sass").unwrap().is_some());
    }
}
