use serde::Serialize;
use serde_json::{Map, Value};

/// Config keys with special handling: extracted into a [`ServiceDescriptor`]
/// instead of passed through as generic plugin options.
pub const RESERVED_FIELDS: [&str; 6] = ["id", "path", "name", "summary", "owners", "headers"];

/// Service-level fields extracted from a merged config fragment.
///
/// Optional fields are serialized only when present, so the generated module
/// never carries null placeholders. Field order here is output order.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDescriptor {
	pub id: String,

	pub path: String,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<Value>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub summary: Option<Value>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub owners: Option<Value>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub headers: Option<Value>,
}

/// One generator entry for the output module: the plugin package paired with
/// its options (pass-through fields plus `services: [descriptor]`).
#[derive(Debug, Clone)]
pub struct GeneratorEntry {
	/// Generator package name from the plugin registry.
	pub package: String,

	/// Plugin options, key order preserved from the merged config.
	pub options: Map<String, Value>,
}
