use regex::Regex;

/// A `{{ NAME }}` placeholder token inside a string value.
const PLACEHOLDER_PATTERN: &str = r"\{\{\s*(\w+)\s*\}\}";

/// Rewrite placeholder tokens in serialized JSON into deferred env-var
/// expressions.
///
/// The input is scanned literal-by-literal: only text inside double-quoted
/// JSON string literals (honoring backslash escapes) is considered, so
/// structural punctuation can never be corrupted. A literal containing one
/// or more `{{ NAME }}` tokens is re-emitted as a JS template literal with
/// each token replaced by `${process.env.NAME}`; all other literals pass
/// through untouched.
pub fn rewrite_placeholders(serialized: &str) -> String {
	let placeholder = Regex::new(PLACEHOLDER_PATTERN).unwrap();
	let mut out = String::with_capacity(serialized.len());
	let mut rest = serialized;

	while let Some(open) = rest.find('"') {
		out.push_str(&rest[..open]);
		let body = &rest[open + 1..];

		match find_closing_quote(body) {
			Some(close) => {
				let content = &body[..close];
				if placeholder.is_match(content) {
					out.push('`');
					out.push_str(&placeholder.replace_all(content, |caps: &regex::Captures| {
						format!("${{process.env.{}}}", &caps[1])
					}));
					out.push('`');
				} else {
					out.push('"');
					out.push_str(content);
					out.push('"');
				}
				rest = &body[close + 1..];
			}
			None => {
				// Unterminated literal; emit verbatim.
				out.push('"');
				out.push_str(body);
				rest = "";
			}
		}
	}

	out.push_str(rest);
	out
}

/// Byte offset of the closing quote of a string literal body, skipping
/// backslash-escaped characters.
fn find_closing_quote(body: &str) -> Option<usize> {
	let mut escaped = false;
	for (i, c) in body.char_indices() {
		if escaped {
			escaped = false;
			continue;
		}
		match c {
			'\\' => escaped = true,
			'"' => return Some(i),
			_ => {}
		}
	}
	None
}
