use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use catgen_cli::emit::render;
use catgen_cli::pipeline;
use catgen_cli::registry::PluginRegistry;
use catgen_cli::report;

/// Output file name, both in the config root and in the dev-server cache.
const OUTPUT_FILE: &str = "generated.mjs";

/// Dev-server cache directory, relative to the working directory.
const CACHE_DIR: &str = ".eventcatalog-core/generators";

#[derive(Parser)]
#[command(name = "catgen")]
#[command(
	author,
	version,
	about = "Compiles per-plugin YAML config fragments into an EventCatalog generators module"
)]
struct Cli {
	/// Root directory containing per-plugin config fragments
	#[arg(long, default_value = "generators", value_name = "DIR")]
	root: PathBuf,

	/// Resolve and validate all config fragments without writing output files
	#[arg(long)]
	check: bool,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			report::error(&format!("Generation failed: {e:#}"));
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	if !cli.root.is_dir() {
		anyhow::bail!("Generators directory not found: {}", cli.root.display());
	}

	report::info("Starting EventCatalog generators configuration...");

	let registry = PluginRegistry::default();
	let entries = pipeline::run(&registry, &cli.root)
		.context("Failed to resolve generator configuration")?;

	if entries.is_empty() {
		report::warning("No generators were created!");
		return Ok(ExitCode::SUCCESS);
	}

	if cli.check {
		report::success(&format!(
			"Resolved {} generator(s), no files written (--check)",
			entries.len()
		));
		return Ok(ExitCode::SUCCESS);
	}

	let module = render(&entries, chrono::Utc::now());

	let output_path = cli.root.join(OUTPUT_FILE);
	write_output(&output_path, &module)?;

	let cache_dir = Path::new(CACHE_DIR);
	std::fs::create_dir_all(cache_dir)
		.with_context(|| format!("Failed to create {}", cache_dir.display()))?;
	let cache_path = cache_dir.join(OUTPUT_FILE);
	write_output(&cache_path, &module)?;

	report::success(&format!("Generated {} generator(s)", entries.len()));
	report::success(&format!("Output written to: {}", output_path.display()));
	report::success(&format!("Output copied to: {}", cache_path.display()));

	Ok(ExitCode::SUCCESS)
}

fn write_output(path: &Path, content: &str) -> Result<()> {
	std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
