use crate::config::schema::{self, CompiledSchema};
use crate::config::{deep_merge, load_config_file};
use crate::error::{CatgenError, Result};
use crate::report;
use crate::resolve::extract::extract_service;
use crate::resolve::types::GeneratorEntry;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// File name of the optional per-plugin-type global config.
const GLOBAL_CONFIG_FILE: &str = "__config__.yaml";

/// Resolve all service configs for one plugin type into generator entries.
///
/// Fatal errors (returned): unreadable/invalid schema, unreadable/invalid
/// global config, unreadable plugin directory. Per-service failures (parse,
/// schema violations, missing `id`/`path`) log a diagnostic and skip that
/// file; the remaining files still produce entries.
pub fn resolve_plugin_type(
	plugin_type: &str,
	package: &str,
	root: &Path,
) -> Result<Vec<GeneratorEntry>> {
	let plugin_dir = root.join(plugin_type);

	if !plugin_dir.is_dir() {
		report::warning(&format!("Directory not found: {}", plugin_dir.display()));
		return Ok(Vec::new());
	}

	report::info(&format!("Processing {} generators...", plugin_type));

	let schema = load_plugin_schema(plugin_type, root)?;

	let global_config_path = plugin_dir.join(GLOBAL_CONFIG_FILE);
	let global_config = if global_config_path.is_file() {
		let config = load_config_file(&global_config_path, schema.as_ref())?;
		report::success(&format!("  Loaded global config: {}", GLOBAL_CONFIG_FILE));
		config
	} else {
		Value::Object(Map::new())
	};

	let service_files = list_service_files(&plugin_dir)?;
	if service_files.is_empty() {
		report::warning(&format!("  No service configs found in {}/", plugin_type));
		return Ok(Vec::new());
	}

	let mut entries = Vec::new();

	for service_file in &service_files {
		let service_config = match load_config_file(service_file, schema.as_ref()) {
			Ok(config) => config,
			Err(e) => {
				report::error(&format!("  Skipping {}: {}", file_name(service_file), e));
				continue;
			}
		};

		let merged = deep_merge(&global_config, &service_config);

		let (descriptor, mut options) = match extract_service(&merged, service_file) {
			Ok(extracted) => extracted,
			Err(e) => {
				report::error(&format!("  Skipping {}: {}", file_name(service_file), e));
				continue;
			}
		};

		let descriptor_value = match serde_json::to_value(&descriptor) {
			Ok(value) => value,
			Err(e) => {
				report::error(&format!("  Skipping {}: {}", file_name(service_file), e));
				continue;
			}
		};

		// One service per entry; descriptors are never merged across files.
		options.insert(
			"services".to_string(),
			Value::Array(vec![descriptor_value]),
		);

		entries.push(GeneratorEntry {
			package: package.to_string(),
			options,
		});

		report::success(&format!("  ✓ {} → {}", file_name(service_file), descriptor.id));
	}

	Ok(entries)
}

/// Load the optional `<root>/schemas/<pluginType>-config.schema.json`.
fn load_plugin_schema(plugin_type: &str, root: &Path) -> Result<Option<CompiledSchema>> {
	let schema_path = root
		.join("schemas")
		.join(format!("{}-config.schema.json", plugin_type));

	if !schema_path.is_file() {
		return Ok(None);
	}

	let schema = schema::load_schema(&schema_path)?;
	report::info(&format!("  Using schema: {}", file_name(&schema_path)));
	Ok(Some(schema))
}

/// Service config fragments in a plugin directory: `*.yaml` excluding the
/// global config, sorted by file name so output order is deterministic.
fn list_service_files(plugin_dir: &Path) -> Result<Vec<PathBuf>> {
	let read_dir = std::fs::read_dir(plugin_dir).map_err(|source| CatgenError::Read {
		path: plugin_dir.to_path_buf(),
		source,
	})?;

	let mut files: Vec<PathBuf> = read_dir
		.filter_map(|entry| entry.ok())
		.map(|entry| entry.path())
		.filter(|path| {
			path.is_file()
				&& path.extension().is_some_and(|ext| ext == "yaml")
				&& path
					.file_name()
					.is_some_and(|name| name != GLOBAL_CONFIG_FILE)
		})
		.collect();

	files.sort_by_key(|path| path.file_name().map(|n| n.to_os_string()));
	Ok(files)
}

fn file_name(path: &Path) -> String {
	path.file_name()
		.map(|n| n.to_string_lossy().to_string())
		.unwrap_or_else(|| path.display().to_string())
}
