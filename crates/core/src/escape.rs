//! Sanitizers for server-provided text.
//!
//! Nothing coming back from the search service is trusted: file names,
//! suggestions and document bodies all pass through one of these before they
//! reach a display surface.

/// Escape text for inclusion in HTML markup, element content or attribute.
#[must_use]
pub fn markup(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			other => escaped.push(other),
		}
	}
	escaped
}

/// Neutralize control characters so text cannot drive the terminal.
///
/// Every control character (including ESC, which starts escape sequences) is
/// replaced with U+FFFD. With `preformatted` set, newlines and tabs survive
/// so document bodies keep their layout; carriage returns are dropped.
#[must_use]
pub fn terminal(text: &str, preformatted: bool) -> String {
	let mut cleaned = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'\n' | '\t' if preformatted => cleaned.push(ch),
			'\r' if preformatted => {}
			c if c.is_control() => cleaned.push(char::REPLACEMENT_CHARACTER),
			c => cleaned.push(c),
		}
	}
	cleaned
}
