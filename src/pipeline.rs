//! Pipeline driver: resolves every registered plugin type in order.

use crate::error::Result;
use crate::registry::PluginRegistry;
use crate::resolve::{GeneratorEntry, resolve_plugin_type};
use std::path::Path;

/// Resolve all plugin types in registry order and concatenate their entries.
///
/// An empty result is not an error; the caller decides whether to warn and
/// skip output.
pub fn run(registry: &PluginRegistry, root: &Path) -> Result<Vec<GeneratorEntry>> {
	let mut entries = Vec::new();

	for binding in registry.iter() {
		let resolved = resolve_plugin_type(&binding.plugin_type, &binding.package, root)?;
		entries.extend(resolved);
	}

	Ok(entries)
}
