use std::path::PathBuf;

/// A single schema violation: JSON pointer to the offending field plus a
/// human-readable message.
#[derive(Debug, Clone)]
pub struct Violation {
	/// JSON pointer into the validated document (empty for the root).
	pub pointer: String,

	/// Message from the schema validator.
	pub message: String,
}

/// Library-level structured errors for catgen.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum CatgenError {
	#[error("Failed to read {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},

	#[error("Failed to parse schema {path}")]
	SchemaParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("Invalid schema {path}: {message}")]
	SchemaCompile { path: PathBuf, message: String },

	#[error("Validation failed for {path} ({} violation(s))", .violations.len())]
	Validation {
		path: PathBuf,
		violations: Vec<Violation>,
	},

	#[error("Missing required field '{field}' in {path}")]
	MissingField { path: PathBuf, field: &'static str },
}

/// Result type alias using CatgenError.
pub type Result<T> = std::result::Result<T, CatgenError>;
