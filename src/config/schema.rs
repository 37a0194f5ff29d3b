use crate::error::{CatgenError, Result, Violation};
use crate::report;
use serde_json::Value;
use std::path::Path;

/// A compiled JSON Schema, loaded once per plugin type and reused read-only
/// across every validation for that type.
#[derive(Debug)]
pub struct CompiledSchema {
	validator: jsonschema::Validator,
}

/// Load and compile a JSON Schema from a file.
pub fn load_schema(path: &Path) -> Result<CompiledSchema> {
	let content = std::fs::read_to_string(path).map_err(|source| CatgenError::Read {
		path: path.to_path_buf(),
		source,
	})?;

	let schema: Value =
		serde_json::from_str(&content).map_err(|source| CatgenError::SchemaParse {
			path: path.to_path_buf(),
			source,
		})?;

	let validator =
		jsonschema::validator_for(&schema).map_err(|e| CatgenError::SchemaCompile {
			path: path.to_path_buf(),
			message: e.to_string(),
		})?;

	Ok(CompiledSchema { validator })
}

impl CompiledSchema {
	/// Validate a document, collecting every violation (not just the first).
	///
	/// Each violation is reported as a diagnostic line before the error is
	/// returned.
	pub fn validate(&self, doc: &Value, path: &Path) -> Result<()> {
		let violations: Vec<Violation> = self
			.validator
			.iter_errors(doc)
			.map(|e| Violation {
				pointer: e.instance_path.to_string(),
				message: e.to_string(),
			})
			.collect();

		if violations.is_empty() {
			return Ok(());
		}

		let file_name = path
			.file_name()
			.map(|n| n.to_string_lossy().to_string())
			.unwrap_or_else(|| path.display().to_string());
		report::error(&format!("Validation failed for {}:", file_name));
		for violation in &violations {
			report::error(&format!("  {} {}", violation.pointer, violation.message));
		}

		Err(CatgenError::Validation {
			path: path.to_path_buf(),
			violations,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use std::io::Write;
	use std::path::PathBuf;

	fn write_schema(content: &Value) -> tempfile::NamedTempFile {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(content.to_string().as_bytes()).unwrap();
		file
	}

	fn sample_schema() -> Value {
		json!({
			"type": "object",
			"required": ["id", "path"],
			"properties": {
				"id": {"type": "string"},
				"path": {"type": "string"}
			}
		})
	}

	#[test]
	fn test_valid_document_passes() {
		let file = write_schema(&sample_schema());
		let schema = load_schema(file.path()).unwrap();

		let doc = json!({"id": "orders", "path": "./orders.yaml"});
		assert!(schema.validate(&doc, &PathBuf::from("orders.yaml")).is_ok());
	}

	#[test]
	fn test_all_violations_collected() {
		let file = write_schema(&sample_schema());
		let schema = load_schema(file.path()).unwrap();

		// Missing both required fields: the validator must surface both.
		let doc = json!({"summary": "no id, no path"});
		let err = schema
			.validate(&doc, &PathBuf::from("bad.yaml"))
			.unwrap_err();

		match err {
			CatgenError::Validation { violations, .. } => {
				assert_eq!(violations.len(), 2);
			}
			other => panic!("Expected Validation error, got {:?}", other),
		}
	}

	#[test]
	fn test_violation_carries_pointer() {
		let file = write_schema(&sample_schema());
		let schema = load_schema(file.path()).unwrap();

		let doc = json!({"id": 42, "path": "./ok.yaml"});
		let err = schema
			.validate(&doc, &PathBuf::from("bad.yaml"))
			.unwrap_err();

		match err {
			CatgenError::Validation { violations, .. } => {
				assert_eq!(violations.len(), 1);
				assert_eq!(violations[0].pointer, "/id");
			}
			other => panic!("Expected Validation error, got {:?}", other),
		}
	}

	#[test]
	fn test_malformed_schema_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		file.write_all(b"not json {{{").unwrap();

		match load_schema(file.path()).unwrap_err() {
			CatgenError::SchemaParse { .. } => {}
			other => panic!("Expected SchemaParse error, got {:?}", other),
		}
	}

	#[test]
	fn test_missing_schema_file() {
		let result = load_schema(&PathBuf::from("/nonexistent/schema.json"));
		match result.unwrap_err() {
			CatgenError::Read { .. } => {}
			other => panic!("Expected Read error, got {:?}", other),
		}
	}
}
