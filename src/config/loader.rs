use crate::config::schema::CompiledSchema;
use crate::error::{CatgenError, Result};
use serde_json::Value;
use std::path::Path;

/// Load a YAML config fragment from the given path, optionally validating it
/// against a compiled schema.
pub fn load_config_file(path: &Path, schema: Option<&CompiledSchema>) -> Result<Value> {
	let content = std::fs::read_to_string(path).map_err(|source| CatgenError::Read {
		path: path.to_path_buf(),
		source,
	})?;

	load_config_str(&content, path, schema)
}

/// Parse a config fragment from a string (useful for testing).
///
/// YAML is a superset of JSON, so the parsed tree is represented as a
/// `serde_json::Value`; mapping keys must be strings. An empty or null
/// document normalizes to an empty mapping.
pub fn load_config_str(
	content: &str,
	path: &Path,
	schema: Option<&CompiledSchema>,
) -> Result<Value> {
	let doc: Value =
		serde_yaml::from_str(content).map_err(|source| CatgenError::Parse {
			path: path.to_path_buf(),
			source,
		})?;

	let doc = match doc {
		Value::Null => Value::Object(serde_json::Map::new()),
		other => other,
	};

	if let Some(schema) = schema {
		schema.validate(&doc, path)?;
	}

	Ok(doc)
}
