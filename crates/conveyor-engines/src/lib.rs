//! Conveyor Engine Registry
//!
//! This crate provides the engine registry for the Conveyor asset pipeline:
//! the mapping from filename extensions to the engines that process them.
//!
//! # Overview
//!
//! An engine is a processor bound to a filename extension. A file named
//! `application.js.coffee` carries the `.coffee` extension, so the engine
//! registered for `.coffee` runs on it. Extensions can be stacked
//! (`application.js.coffee.ejs`); walking the stack and running the
//! resolved engines is the pipeline's job, not this crate's — the registry
//! only answers "which engine handles this extension".
//!
//! Registrations live in two scopes:
//!
//! - the process-wide registry ([`global`]), where plugins register
//!   themselves;
//! - an [`Environment`] instance, seeded from a copy of the global
//!   registrations at construction and independent afterwards.
//!
//! Engine changes local to one pipeline belong on its `Environment`.
//!
//! # Example
//!
//! ```
//! use conveyor_engines::{EngineHandle, Engines, Environment};
//!
//! struct CoffeeScriptEngine;
//!
//! let mut environment = Environment::empty();
//! environment
//!     .register_engine("coffee", EngineHandle::new(CoffeeScriptEngine))
//!     .unwrap();
//!
//! // Spellings with and without the leading dot address the same entry.
//! let engine = environment.engine(".coffee").unwrap().unwrap();
//! assert!(engine.is::<CoffeeScriptEngine>());
//! assert_eq!(environment.engine_extensions(), vec![".coffee".to_string()]);
//! ```
//!
//! # Modules
//!
//! - [`engine`]: opaque engine handles
//! - [`environment`]: the [`Engines`] surface and [`Environment`]
//! - [`extension`]: extension normalization and validation
//! - [`global`]: the process-wide registry
//! - [`registry`]: the generic extension-keyed registry

pub mod engine;
pub mod environment;
pub mod extension;
pub mod global;
pub mod registry;

pub use engine::EngineHandle;
pub use environment::{Engines, Environment};
pub use extension::{normalize_extension, InvalidExtensionError};
pub use registry::ExtensionRegistry;
