//! Free-text normalization: tokenizing concern/value strings and expanding a
//! proposed theme against the synonym table.

use super::scenarios::SYNONYM_GROUPS;

/// Split free text into comparable lowercase tokens.
///
/// Splits on whitespace, commas, and semicolons; tokens shorter than three
/// characters are dropped. Duplicates are kept — they collapse in the
/// membership tests downstream.
pub fn tokenize(text: &str) -> Vec<String> {
	text.to_lowercase()
		.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
		.map(str::trim)
		.filter(|w| w.chars().count() > 2)
		.map(String::from)
		.collect()
}

/// Expand a normalized (trimmed, lowercase) theme text into keywords.
///
/// The expansion holds the raw text, its whitespace-split words, and every
/// synonym group for which any member occurs in the text. Containment is a
/// substring test, not a whole-token match: "ghost" pulls in the "host"
/// group. That looseness is part of the matching contract.
pub fn expand_keywords(text: &str) -> Vec<String> {
	let mut keywords: Vec<String> = vec![text.to_string()];
	for word in text.split_whitespace() {
		if !keywords.iter().any(|k| k == word) {
			keywords.push(word.to_string());
		}
	}

	for (root, synonyms) in SYNONYM_GROUPS {
		let group = std::iter::once(*root).chain(synonyms.iter().copied());
		if group.clone().any(|member| text.contains(member)) {
			for member in group {
				if !keywords.iter().any(|k| k == member) {
					keywords.push(member.to_string());
				}
			}
		}
	}

	keywords
}
