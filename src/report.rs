//! Console status reporting for catgen.
//!
//! Status lines carry a colored symbol prefix. Info and success go to
//! stdout; warnings and errors go to stderr so they survive piping the
//! generated output.

use colored::Colorize;

/// Print an informational line.
pub fn info(msg: &str) {
	println!("{} {}", "ℹ".blue(), msg);
}

/// Print a success line.
pub fn success(msg: &str) {
	println!("{} {}", "✓".green(), msg);
}

/// Print a warning line.
pub fn warning(msg: &str) {
	eprintln!("{} {}", "⚠".yellow(), msg);
}

/// Print an error line.
pub fn error(msg: &str) {
	eprintln!("{} {}", "✗".red(), msg);
}
