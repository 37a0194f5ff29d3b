use crate::error::{CatgenError, Result};
use crate::resolve::types::{RESERVED_FIELDS, ServiceDescriptor};
use serde_json::{Map, Value};
use std::path::Path;

/// Split a merged config into a [`ServiceDescriptor`] (reserved fields) and
/// the residual pass-through options.
///
/// `id` and `path` must be non-empty strings in the merged result; the other
/// reserved fields are carried over only when present and non-null. The
/// residual map keeps the merged document's key order.
pub fn extract_service(merged: &Value, path: &Path) -> Result<(ServiceDescriptor, Map<String, Value>)> {
	let map = match merged.as_object() {
		Some(map) => map,
		None => {
			return Err(CatgenError::MissingField {
				path: path.to_path_buf(),
				field: "id",
			});
		}
	};

	let id = required_string(map, "id", path)?;
	let service_path = required_string(map, "path", path)?;

	let descriptor = ServiceDescriptor {
		id,
		path: service_path,
		name: optional_field(map, "name"),
		summary: optional_field(map, "summary"),
		owners: optional_field(map, "owners"),
		headers: optional_field(map, "headers"),
	};

	let rest: Map<String, Value> = map
		.iter()
		.filter(|(key, _)| !RESERVED_FIELDS.contains(&key.as_str()))
		.map(|(key, value)| (key.clone(), value.clone()))
		.collect();

	Ok((descriptor, rest))
}

fn required_string(map: &Map<String, Value>, field: &'static str, path: &Path) -> Result<String> {
	match map.get(field) {
		Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
		_ => Err(CatgenError::MissingField {
			path: path.to_path_buf(),
			field,
		}),
	}
}

fn optional_field(map: &Map<String, Value>, field: &str) -> Option<Value> {
	match map.get(field) {
		Some(Value::Null) | None => None,
		Some(value) => Some(value.clone()),
	}
}
