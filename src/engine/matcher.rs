//! Relatedness between stakeholders and bridging-theme evaluation.
//!
//! Everything here is a pure function of its inputs: connections, conflicts,
//! and theme matches are recomputed from scratch on every call rather than
//! updated incrementally. At the intended scale (tens of stakeholders) the
//! O(n²·m) pairwise passes are far below any budget that would justify
//! indexing.

use super::model::{Connection, Stakeholder};
use super::scenarios::{KnownTheme, OPPOSING_VALUES, Scenario};
use super::text::{expand_keywords, tokenize};

/// A token mentioned by two or more stakeholders, with the mention count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BridgingWord {
	pub word: String,
	pub count: usize,
}

/// Outcome of evaluating one proposed theme against a scenario.
#[derive(Clone, Debug)]
pub struct ThemeMatch {
	/// Share of stakeholders bridged, rounded to a whole percentage.
	pub score: u32,
	/// Bridged stakeholder names, in scenario declaration order.
	pub bridged: Vec<String>,
	/// The known theme that short-circuited matching, when one did.
	pub known: Option<&'static KnownTheme>,
}

/// Derive the connection list for the current stakeholder set.
///
/// Two stakeholders are connected iff their combined concern+value token
/// sets intersect; the connection carries the deduplicated intersection and
/// its size as the weight.
pub fn compute_connections(stakeholders: &[Stakeholder]) -> Vec<Connection> {
	let mut connections = Vec::new();

	for i in 0..stakeholders.len() {
		for j in (i + 1)..stakeholders.len() {
			let tokens_a = tokenize(&stakeholders[i].combined_text());
			let tokens_b = tokenize(&stakeholders[j].combined_text());

			let mut shared: Vec<String> = Vec::new();
			for token in &tokens_a {
				if tokens_b.contains(token) && !shared.contains(token) {
					shared.push(token.clone());
				}
			}

			if !shared.is_empty() {
				let weight = shared.len();
				connections.push(Connection {
					a: stakeholders[i].id,
					b: stakeholders[j].id,
					shared,
					weight,
				});
			}
		}
	}

	connections
}

/// Flag stakeholder pairs whose stated values contain opposite sides of a
/// known opposing-value pair. Labels are deduplicated.
pub fn detect_conflicts(stakeholders: &[Stakeholder]) -> Vec<String> {
	let mut conflicts: Vec<String> = Vec::new();

	for i in 0..stakeholders.len() {
		for j in (i + 1)..stakeholders.len() {
			let vals_a = tokenize(&stakeholders[i].values);
			let vals_b = tokenize(&stakeholders[j].values);

			for (left, right) in OPPOSING_VALUES {
				let a_left = vals_a.iter().any(|t| t == left);
				let a_right = vals_a.iter().any(|t| t == right);
				let b_left = vals_b.iter().any(|t| t == left);
				let b_right = vals_b.iter().any(|t| t == right);

				if (a_left && b_right) || (a_right && b_left) {
					let label = format!(
						"{} vs {} ({}/{})",
						stakeholders[i].name, stakeholders[j].name, left, right
					);
					if !conflicts.contains(&label) {
						conflicts.push(label);
					}
				}
			}
		}
	}

	conflicts
}

/// Tokens shared by at least two stakeholders, sorted by how many mention
/// them (descending, stable in first-seen order).
pub fn bridging_words(stakeholders: &[Stakeholder]) -> Vec<BridgingWord> {
	// First-seen order keeps the sort deterministic across runs.
	let mut counts: Vec<(String, usize)> = Vec::new();

	for stakeholder in stakeholders {
		let mut unique: Vec<String> = Vec::new();
		for token in tokenize(&stakeholder.combined_text()) {
			if !unique.contains(&token) {
				unique.push(token);
			}
		}
		for word in unique {
			match counts.iter_mut().find(|(w, _)| *w == word) {
				Some((_, n)) => *n += 1,
				None => counts.push((word, 1)),
			}
		}
	}

	let mut bridging: Vec<BridgingWord> = counts
		.into_iter()
		.filter(|(_, n)| *n >= 2)
		.map(|(word, count)| BridgingWord { word, count })
		.collect();
	bridging.sort_by(|a, b| b.count.cmp(&a.count));
	bridging
}

/// Find the known theme a proposed text refers to, if any.
///
/// Exact matches on the theme key or one of its keywords win first; only
/// then does a second pass try substring containment either way against the
/// keys. Both passes run in theme declaration order, and the first hit wins.
fn find_known_theme(text: &str, themes: &'static [KnownTheme]) -> Option<&'static KnownTheme> {
	for theme in themes {
		if text == theme.key || theme.keywords.iter().any(|kw| text == *kw) {
			return Some(theme);
		}
	}
	themes
		.iter()
		.find(|theme| text.contains(theme.key) || theme.key.contains(text))
}

/// Evaluate a proposed theme against a scenario.
///
/// Returns `None` for text shorter than two characters after trimming (a
/// silent no-op, not an error). A known-theme hit is authoritative: the
/// bridged set is exactly its bridge list and concern matching is skipped.
/// Otherwise each stakeholder is tested against the expanded keyword set
/// with a bidirectional substring check, falling back to known-theme bridge
/// lists whose keywords overlap the text.
pub fn match_theme(text: &str, scenario: &Scenario) -> Option<ThemeMatch> {
	let text = text.trim().to_lowercase();
	if text.chars().count() < 2 {
		return None;
	}

	let total = scenario.stakeholders.len();
	if total == 0 {
		return Some(ThemeMatch { score: 0, bridged: Vec::new(), known: None });
	}

	let known = find_known_theme(&text, scenario.themes);
	let bridged: Vec<String> = match known {
		Some(theme) => theme.bridges.iter().map(|name| name.to_string()).collect(),
		None => {
			let keywords = expand_keywords(&text);
			scenario
				.stakeholders
				.iter()
				.filter(|s| stakeholder_bridged(&text, &keywords, s.concerns, s.name, scenario))
				.map(|s| s.name.to_string())
				.collect()
		}
	};

	let score = (bridged.len() as f64 / total as f64 * 100.0).round() as u32;
	Some(ThemeMatch { score, bridged, known })
}

fn stakeholder_bridged(
	text: &str,
	keywords: &[String],
	concerns: &[&str],
	name: &str,
	scenario: &Scenario,
) -> bool {
	for concern in concerns {
		let concern = concern.to_lowercase();
		let first_word = concern.split(' ').next().unwrap_or("");
		for keyword in keywords {
			if concern.contains(keyword.as_str()) || keyword.contains(first_word) {
				return true;
			}
		}
	}

	// Fallback: a known theme whose keywords overlap the text may still
	// vouch for this stakeholder via its bridge list.
	for theme in scenario.themes {
		for keyword in theme.keywords {
			if (text.contains(keyword) || keyword.contains(text))
				&& theme.bridges.contains(&name)
			{
				return true;
			}
		}
	}

	false
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::model::Category;

	fn stakeholder(id: u32, name: &str, concerns: &str, values: &str) -> Stakeholder {
		Stakeholder {
			id,
			name: name.to_string(),
			category: Category::Community,
			concerns: concerns.to_string(),
			values: values.to_string(),
			x: 0.0,
			y: 0.0,
		}
	}

	#[test]
	fn connection_iff_tokens_intersect() {
		let stakeholders = vec![
			stakeholder(1, "A", "noise, safety", "peace"),
			stakeholder(2, "B", "crime, safety", "order"),
			stakeholder(3, "C", "revenue", "profit"),
		];
		let connections = compute_connections(&stakeholders);
		assert_eq!(connections.len(), 1);
		assert_eq!((connections[0].a, connections[0].b), (1, 2));
		assert_eq!(connections[0].shared, vec!["safety"]);
		assert_eq!(connections[0].weight, 1);
	}

	#[test]
	fn connection_weight_equals_intersection_size() {
		let stakeholders = vec![
			stakeholder(1, "A", "safety, noise, transport", "order"),
			stakeholder(2, "B", "transport, safety", "freedom"),
		];
		let connections = compute_connections(&stakeholders);
		assert_eq!(connections[0].weight, 2);
		assert_eq!(connections[0].shared, vec!["safety", "transport"]);
	}

	#[test]
	fn duplicate_tokens_collapse_in_intersection() {
		let stakeholders = vec![
			stakeholder(1, "A", "safety, safety", "safety"),
			stakeholder(2, "B", "safety", ""),
		];
		let connections = compute_connections(&stakeholders);
		assert_eq!(connections[0].weight, 1);
	}

	#[test]
	fn opposing_values_produce_one_labelled_conflict() {
		let stakeholders = vec![
			stakeholder(1, "Police", "", "order, control"),
			stakeholder(2, "Venues", "", "freedom"),
		];
		let conflicts = detect_conflicts(&stakeholders);
		assert_eq!(conflicts, vec!["Police vs Venues (control/freedom)"]);
	}

	#[test]
	fn conflict_direction_does_not_matter() {
		let forward = detect_conflicts(&[
			stakeholder(1, "A", "", "control"),
			stakeholder(2, "B", "", "freedom"),
		]);
		let reversed = detect_conflicts(&[
			stakeholder(1, "A", "", "freedom"),
			stakeholder(2, "B", "", "control"),
		]);
		assert_eq!(forward.len(), 1);
		assert_eq!(reversed.len(), 1);
	}

	#[test]
	fn bridging_words_require_two_mentions() {
		let stakeholders = vec![
			stakeholder(1, "A", "safety, noise", ""),
			stakeholder(2, "B", "safety, revenue", ""),
			stakeholder(3, "C", "safety", ""),
		];
		let words = bridging_words(&stakeholders);
		assert_eq!(words.len(), 1);
		assert_eq!(words[0], BridgingWord { word: "safety".into(), count: 3 });
	}

	#[test]
	fn bridging_words_sorted_by_count_descending() {
		let stakeholders = vec![
			stakeholder(1, "A", "noise, safety", ""),
			stakeholder(2, "B", "noise, safety", ""),
			stakeholder(3, "C", "safety", ""),
		];
		let words = bridging_words(&stakeholders);
		assert_eq!(words[0].word, "safety");
		assert_eq!(words[0].count, 3);
		assert_eq!(words[1].word, "noise");
		assert_eq!(words[1].count, 2);
	}

	fn kings_cross() -> &'static Scenario {
		Scenario::by_key("kings-cross").unwrap()
	}

	#[test]
	fn known_theme_key_short_circuits() {
		let result = match_theme("hosting", kings_cross()).unwrap();
		assert_eq!(result.score, 100);
		assert_eq!(
			result.bridged,
			vec!["Police", "Venue Owners", "Residents", "Council", "Visitors"]
		);
		assert!(result.known.is_some());
	}

	#[test]
	fn known_theme_keyword_short_circuits() {
		// "hospitality" is a keyword of "hosting", not a key itself.
		let result = match_theme("hospitality", kings_cross()).unwrap();
		assert_eq!(result.bridged.len(), 5);
		assert_eq!(result.known.unwrap().key, "hosting");
	}

	#[test]
	fn known_theme_matches_by_key_substring() {
		let result = match_theme("a safety plan", kings_cross()).unwrap();
		assert_eq!(result.known.unwrap().key, "safety");
		assert_eq!(result.bridged, vec!["Police", "Residents", "Council"]);
		assert_eq!(result.score, 60);
	}

	#[test]
	fn free_text_matches_through_concerns() {
		// "transport" appears in the Visitors concern "transport access".
		let result = match_theme("transport", kings_cross()).unwrap();
		assert!(result.known.is_none());
		assert!(result.bridged.contains(&"Visitors".to_string()));
	}

	#[test]
	fn short_text_is_a_no_op() {
		assert!(match_theme("", kings_cross()).is_none());
		assert!(match_theme(" x ", kings_cross()).is_none());
	}

	#[test]
	fn zero_stakeholders_scores_zero() {
		static EMPTY: Scenario = Scenario {
			key: "empty",
			name: "Empty",
			stakeholders: &[],
			themes: &[],
		};
		let result = match_theme("hosting", &EMPTY).unwrap();
		assert_eq!(result.score, 0);
		assert!(result.bridged.is_empty());
	}

	#[test]
	fn match_theme_is_deterministic() {
		let first = match_theme("community spirit", kings_cross()).unwrap();
		let second = match_theme("community spirit", kings_cross()).unwrap();
		assert_eq!(first.score, second.score);
		assert_eq!(first.bridged, second.bridged);
	}
}
