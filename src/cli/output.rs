use anyhow::Result;
use docseek_api::ResultItem;
use docseek_core::{ResultsView, Status, escape};
use serde_json::json;

use super::OutputFormat;

/// Print the results of a one-shot search in the chosen format.
pub(crate) fn print_results(format: OutputFormat, query: &str, results: &[ResultItem]) -> Result<()> {
	let text = match format {
		OutputFormat::Plain => format_plain(query, results),
		OutputFormat::Json => format_json(query, results)?,
		OutputFormat::Html => format_html(query, results),
	};
	print!("{text}");
	Ok(())
}

/// Plain-text listing: the count line, then one block per result.
pub(crate) fn format_plain(query: &str, results: &[ResultItem]) -> String {
	let view = ResultsView::new(results, query);
	if view.is_empty() {
		return format!("{}\n", Status::NoResults(query.to_string()).text());
	}

	let mut out = format!("{}\n", view.count_text());
	for card in view.cards() {
		out.push('\n');
		out.push_str(&escape::terminal(&card.title, false));
		out.push('\n');
		for line in [&card.path, &card.snippet, &card.score] {
			out.push_str("  ");
			out.push_str(&escape::terminal(line, false));
			out.push('\n');
		}
	}
	out
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_json(query: &str, results: &[ResultItem]) -> Result<String> {
	let payload = json!({
		"query": query,
		"count": results.len(),
		"results": results,
	});
	Ok(format!("{}\n", serde_json::to_string_pretty(&payload)?))
}

/// HTML fragment of the results list, or the no-results message.
pub(crate) fn format_html(query: &str, results: &[ResultItem]) -> String {
	let view = ResultsView::new(results, query);
	if view.is_empty() {
		let message = Status::NoResults(query.to_string()).text();
		return format!("<div class=\"status\">{}</div>\n", escape::markup(&message));
	}
	view.to_markup()
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn results() -> Vec<ResultItem> {
		vec![
			ResultItem::new("guide.txt", "docs/guide.txt", 0.5),
			ResultItem::new("<notes>.txt", "docs/notes.txt", 0.125),
		]
	}

	#[test]
	fn plain_lists_count_and_both_score_precisions() {
		let text = format_plain("rust", &results());
		assert!(text.starts_with("About 2 results\n"));
		assert!(text.contains("\nguide.txt\n  docs/guide.txt\n"));
		assert!(text.contains("Relevance score: 0.5000"));
		assert!(text.contains("TF-IDF Score: 0.125000"));
	}

	#[test]
	fn plain_reports_empty_result_set() {
		assert_eq!(format_plain("zebra", &[]), "No results found for \"zebra\"\n");
	}

	#[test]
	fn json_keeps_wire_field_names() {
		let json = format_json("rust", &results()).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"], "rust");
		assert_eq!(value["count"], 2);
		assert_eq!(value["results"][0]["fileName"], "guide.txt");
		assert_eq!(value["results"][1]["filePath"], "docs/notes.txt");
	}

	#[test]
	fn html_escapes_server_text() {
		let html = format_html("rust", &results());
		assert!(html.contains("&lt;notes&gt;.txt"));
		assert!(!html.contains("<notes>"));

		let empty = format_html("<q>", &[]);
		assert!(empty.contains("No results found for &quot;&lt;q&gt;&quot;"));
	}
}
