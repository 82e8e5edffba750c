//! Extension-keyed processor registry.

use std::collections::HashMap;

use crate::extension::{normalize_extension, InvalidExtensionError};

/// Registry mapping normalized filename extensions to processor handles.
///
/// The handle type is opaque to the registry: handles are stored, cloned
/// into snapshots, and handed back, never inspected or invoked. Keys are
/// always stored in normalized form and every operation normalizes its
/// input before comparing, so `coffee` and `.coffee` address the same
/// entry.
///
/// The registry is a plain synchronous structure with no locking of its
/// own; concurrent hosts wrap it (see [`crate::global`]).
#[derive(Debug, Clone)]
pub struct ExtensionRegistry<H> {
    /// Handles indexed by normalized extension.
    entries: HashMap<String, H>,
}

impl<H> ExtensionRegistry<H> {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Builds a registry from entries whose keys are already normalized,
    /// e.g. another registry's snapshot.
    pub(crate) fn from_normalized(entries: HashMap<String, H>) -> Self {
        Self { entries }
    }

    /// Registers `handle` for `ext`, silently replacing any handle already
    /// registered at that extension.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidExtensionError`] from normalization; the
    /// registry itself never fails.
    pub fn register(&mut self, ext: &str, handle: H) -> Result<(), InvalidExtensionError> {
        let key = normalize_extension(ext)?;
        if self.entries.insert(key.clone(), handle).is_some() {
            log::debug!("replaced processor registered for {key}");
        } else {
            log::debug!("registered processor for {key}");
        }
        Ok(())
    }

    /// Returns the handle registered for `ext`, or `None` if the extension
    /// has no entry. Absence is not an error.
    pub fn get(&self, ext: &str) -> Result<Option<&H>, InvalidExtensionError> {
        let key = normalize_extension(ext)?;
        let handle = self.entries.get(&key);
        if handle.is_none() {
            log::trace!("no processor registered for {key}");
        }
        Ok(handle)
    }

    /// Returns true if a handle is registered for `ext`.
    pub fn contains(&self, ext: &str) -> Result<bool, InvalidExtensionError> {
        Ok(self.entries.contains_key(&normalize_extension(ext)?))
    }

    /// Lists all registered normalized extensions.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Returns the number of registered extensions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no extensions are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: Clone> ExtensionRegistry<H> {
    /// Returns an independent copy of the whole extension→handle mapping.
    ///
    /// The copy is decoupled in both directions: later registrations do not
    /// appear in it, and mutating it does not touch the registry.
    pub fn snapshot(&self) -> HashMap<String, H> {
        self.entries.clone()
    }
}

impl<H> Default for ExtensionRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
