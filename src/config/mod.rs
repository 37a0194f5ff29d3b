//! Configuration loading and merging for catgen.
//!
//! This module handles:
//! - YAML config fragment parsing
//! - JSON Schema loading and validation
//! - Deep-merging global and per-service config

pub mod loader;
pub mod merge;
pub mod schema;

pub use loader::{load_config_file, load_config_str};
pub use merge::deep_merge;
pub use schema::{CompiledSchema, load_schema};
