//! Display projection of a search result set.

use docseek_api::ResultItem;

use crate::escape;

/// Rendered results for one executed query, in server order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultsView {
	query: String,
	cards: Vec<ResultCard>,
	/// Highlighted card in the list; reset to the top on every render.
	selected: Option<usize>,
}

/// One result as shown to the user.
///
/// `snippet` and `score` are two projections of the same relevance value at
/// different precisions.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultCard {
	pub title: String,
	pub path: String,
	pub snippet: String,
	pub score: String,
	/// Path to request when the title is activated.
	pub document_path: String,
}

impl ResultCard {
	#[must_use]
	pub fn from_item(item: &ResultItem) -> Self {
		Self {
			title: item.file_name.clone(),
			path: item.file_path.clone(),
			snippet: format!("Relevance score: {:.4}", item.score),
			score: format!("TF-IDF Score: {:.6}", item.score),
			document_path: item.file_path.clone(),
		}
	}
}

impl ResultsView {
	#[must_use]
	pub fn new(results: &[ResultItem], query: impl Into<String>) -> Self {
		let cards: Vec<ResultCard> = results.iter().map(ResultCard::from_item).collect();
		let selected = if cards.is_empty() { None } else { Some(0) };
		Self {
			query: query.into(),
			cards,
			selected,
		}
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn cards(&self) -> &[ResultCard] {
		&self.cards
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.cards.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.cards.is_empty()
	}

	/// "About N results", or "No results found" for an empty set.
	#[must_use]
	pub fn count_text(&self) -> String {
		match self.cards.len() {
			0 => "No results found".to_string(),
			1 => "About 1 result".to_string(),
			n => format!("About {n} results"),
		}
	}

	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	#[must_use]
	pub fn selected_card(&self) -> Option<&ResultCard> {
		self.selected.and_then(|index| self.cards.get(index))
	}

	pub fn select_next(&mut self) {
		if let Some(index) = self.selected
			&& index + 1 < self.cards.len()
		{
			self.selected = Some(index + 1);
		}
	}

	pub fn select_previous(&mut self) {
		if let Some(index) = self.selected
			&& index > 0
		{
			self.selected = Some(index - 1);
		}
	}

	pub fn select(&mut self, index: usize) {
		if index < self.cards.len() {
			self.selected = Some(index);
		}
	}

	/// HTML fragment equivalent of the results list.
	#[must_use]
	pub fn to_markup(&self) -> String {
		let mut out = format!(
			"<div class=\"results-count\">{}</div>\n",
			escape::markup(&self.count_text())
		);
		for card in &self.cards {
			out.push_str("<div class=\"result-item\">\n");
			out.push_str(&format!(
				"  <a class=\"result-title\" href=\"#\" data-path=\"{}\">{}</a>\n",
				escape::markup(&card.document_path),
				escape::markup(&card.title)
			));
			out.push_str(&format!(
				"  <div class=\"result-url\">{}</div>\n",
				escape::markup(&card.path)
			));
			out.push_str(&format!(
				"  <div class=\"result-snippet\">{}</div>\n",
				escape::markup(&card.snippet)
			));
			out.push_str(&format!(
				"  <div class=\"result-score\">{}</div>\n",
				escape::markup(&card.score)
			));
			out.push_str("</div>\n");
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn score_is_projected_at_two_precisions() {
		let view = ResultsView::new(&[ResultItem::new("a.txt", "/d/a.txt", 0.123456)], "a");
		let card = &view.cards()[0];
		assert!(card.snippet.contains("0.1235"));
		assert!(card.score.contains("0.123456"));
	}

	#[test]
	fn count_text_pluralizes() {
		let one = ResultsView::new(&[ResultItem::new("a", "a", 1.0)], "q");
		assert_eq!(one.count_text(), "About 1 result");
		let two = ResultsView::new(
			&[ResultItem::new("a", "a", 1.0), ResultItem::new("b", "b", 0.5)],
			"q",
		);
		assert_eq!(two.count_text(), "About 2 results");
		assert_eq!(ResultsView::new(&[], "q").count_text(), "No results found");
	}

	#[test]
	fn server_order_is_preserved() {
		let view = ResultsView::new(
			&[ResultItem::new("low", "l", 0.1), ResultItem::new("high", "h", 0.9)],
			"q",
		);
		let titles: Vec<_> = view.cards().iter().map(|c| c.title.as_str()).collect();
		assert_eq!(titles, ["low", "high"]);
	}

	#[test]
	fn selection_starts_at_top_and_clamps() {
		let mut view = ResultsView::new(
			&[ResultItem::new("a", "a", 1.0), ResultItem::new("b", "b", 0.5)],
			"q",
		);
		assert_eq!(view.selected(), Some(0));
		view.select_previous();
		assert_eq!(view.selected(), Some(0));
		view.select_next();
		view.select_next();
		assert_eq!(view.selected_card().map(|c| c.title.as_str()), Some("b"));
		assert_eq!(ResultsView::new(&[], "q").selected(), None);
	}

	#[test]
	fn markup_escapes_server_text() {
		let view = ResultsView::new(&[ResultItem::new("<b>x</b>", "/p&q", 0.5)], "x");
		let markup = view.to_markup();
		assert!(markup.contains("&lt;b&gt;x&lt;/b&gt;"));
		assert!(markup.contains("data-path=\"/p&amp;q\""));
		assert!(markup.contains("Relevance score: 0.5000"));
		assert!(!markup.contains("<b>x</b>"));
	}
}
