//! Plugin-type registry.
//!
//! Maps each known plugin type (the name of its config subdirectory) to the
//! EventCatalog generator package that consumes its entries. The registry is
//! ordered: output entries follow registry order, so iteration order here is
//! part of the output contract.

/// One plugin type bound to its generator package.
#[derive(Debug, Clone)]
pub struct PluginBinding {
	/// Config subdirectory name, e.g. `openapi`.
	pub plugin_type: String,

	/// Generator package name, e.g. `@eventcatalog/generator-openapi`.
	pub package: String,
}

/// Ordered, immutable mapping from plugin type to generator package.
///
/// Built once and passed into the pipeline, so tests can inject fake plugin
/// types instead of relying on module-level state.
#[derive(Debug, Clone)]
pub struct PluginRegistry {
	bindings: Vec<PluginBinding>,
}

impl PluginRegistry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self {
			bindings: Vec::new(),
		}
	}

	/// Append a plugin type. Registration order is output order.
	pub fn register(&mut self, plugin_type: &str, package: &str) {
		self.bindings.push(PluginBinding {
			plugin_type: plugin_type.to_string(),
			package: package.to_string(),
		});
	}

	/// Iterate bindings in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &PluginBinding> {
		self.bindings.iter()
	}

	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}

impl Default for PluginRegistry {
	/// The plugin types catgen ships with.
	fn default() -> Self {
		let mut registry = Self::new();
		registry.register("openapi", "@eventcatalog/generator-openapi");
		registry.register("asyncapi", "@eventcatalog/generator-asyncapi");
		registry
	}
}
