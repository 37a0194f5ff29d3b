//! Per-plugin-type service resolution.
//!
//! This module handles:
//! - Enumerating service config fragments for one plugin type
//! - Applying global config defaults with service overrides
//! - Extracting reserved service fields from merged config

pub mod extract;
pub mod service;
pub mod types;

pub use extract::extract_service;
pub use service::resolve_plugin_type;
pub use types::{GeneratorEntry, ServiceDescriptor};
