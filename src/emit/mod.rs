//! Generated-module emission.
//!
//! This module handles:
//! - Deterministic serialization of generator entries
//! - Rewriting `{{ NAME }}` placeholders into deferred env-var expressions
//! - Wrapping the result in an ES module prologue

pub mod interp;

use crate::resolve::GeneratorEntry;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Render generator entries as the text of the generated ES module.
///
/// Output is deterministic except for the embedded timestamp, which is a
/// parameter so callers (and tests) control it.
pub fn render(entries: &[GeneratorEntry], generated_at: DateTime<Utc>) -> String {
	let literal: Vec<Value> = entries
		.iter()
		.map(|entry| {
			Value::Array(vec![
				Value::String(entry.package.clone()),
				Value::Object(entry.options.clone()),
			])
		})
		.collect();

	// The alternate Display form pretty-prints with two-space indentation.
	let serialized = format!("{:#}", Value::Array(literal));

	let rewritten = interp::rewrite_placeholders(&serialized);

	format!(
		"// THIS FILE IS AUTO-GENERATED BY catgen\n\
		 // DO NOT EDIT MANUALLY - Your changes will be overwritten\n\
		 // Generated at: {}\n\
		 \n\
		 export default {};\n",
		generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
		rewritten
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;
	use serde_json::{Map, json};

	fn entry(package: &str, options: Value) -> GeneratorEntry {
		let options = match options {
			Value::Object(map) => map,
			_ => Map::new(),
		};
		GeneratorEntry {
			package: package.to_string(),
			options,
		}
	}

	fn fixed_time() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 0).unwrap()
	}

	#[test]
	fn test_render_module_shape() {
		let entries = vec![entry(
			"@eventcatalog/generator-openapi",
			json!({"services": [{"id": "a", "path": "/a"}]}),
		)];
		let module = render(&entries, fixed_time());

		assert!(module.starts_with("// THIS FILE IS AUTO-GENERATED BY catgen\n"));
		assert!(module.contains("// Generated at: 2026-01-15T12:30:00.000Z"));
		assert!(module.contains("export default ["));
		assert!(module.contains("\"@eventcatalog/generator-openapi\""));
		assert!(module.ends_with(";\n"));
	}

	#[test]
	fn test_render_rewrites_placeholders() {
		let entries = vec![entry(
			"@pkg/openapi",
			json!({
				"url": "https://{{ HOST }}:{{ PORT }}",
				"services": [{"id": "a", "path": "/a"}]
			}),
		)];
		let module = render(&entries, fixed_time());

		assert!(module.contains("`https://${process.env.HOST}:${process.env.PORT}`"));
		assert!(!module.contains("{{ HOST }}"));
		// Plain strings keep ordinary quoting.
		assert!(module.contains("\"id\": \"a\""));
	}

	#[test]
	fn test_render_is_deterministic() {
		let entries = vec![
			entry("@pkg/a", json!({"services": [{"id": "a", "path": "/a"}]})),
			entry("@pkg/b", json!({"services": [{"id": "b", "path": "/b"}]})),
		];
		let first = render(&entries, fixed_time());
		let second = render(&entries, fixed_time());
		assert_eq!(first, second);
	}

	#[test]
	fn test_render_empty_entries() {
		let module = render(&[], fixed_time());
		assert!(module.contains("export default [];"));
	}

	#[test]
	fn test_entry_pair_order() {
		let entries = vec![entry("@pkg/a", json!({"k": 1}))];
		let module = render(&entries, fixed_time());

		let package_pos = module.find("\"@pkg/a\"").unwrap();
		let options_pos = module.find("\"k\": 1").unwrap();
		assert!(package_pos < options_pos);
	}
}
