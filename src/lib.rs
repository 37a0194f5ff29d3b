//! Catgen - compiles per-plugin YAML config fragments into an EventCatalog
//! generators module.
//!
//! This library provides the core functionality for catgen, including:
//! - YAML config fragment loading with JSON Schema validation
//! - Deep-merging of global and per-service configuration
//! - Per-plugin-type service resolution
//! - Deterministic module emission with deferred env-var interpolation
//!
//! # Example
//!
//! ```no_run
//! use catgen_cli::emit::render;
//! use catgen_cli::pipeline;
//! use catgen_cli::registry::PluginRegistry;
//! use std::path::Path;
//!
//! let registry = PluginRegistry::default();
//! let entries = pipeline::run(&registry, Path::new("generators")).unwrap();
//! let module = render(&entries, chrono::Utc::now());
//! println!("{}", module);
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod pipeline;
pub mod registry;
pub mod report;
pub mod resolve;

pub use error::{CatgenError, Result, Violation};
