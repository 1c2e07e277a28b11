//! State for the theme-exploration widget: the chosen scenario plus the
//! history of tested theme proposals.

use log::info;

use super::matcher::{self, ThemeMatch};
use super::scenarios::Scenario;

/// One evaluated theme, appended to the history and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeProposal {
	/// Normalized (trimmed, lowercase) submitted text.
	pub text: String,
	pub score: u32,
	pub bridged: Vec<String>,
}

/// All live state of the theme explorer.
#[derive(Default)]
pub struct ExplorerState {
	pub scenario: Option<&'static Scenario>,
	pub proposals: Vec<ThemeProposal>,
	pub best_score: u32,
	pub max_bridged: usize,
	/// Bridged names from the most recent test, for the orbit diagram.
	pub current_bridged: Vec<String>,
}

impl ExplorerState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Switch scenario and clear the session history. Unknown keys are a
	/// no-op.
	pub fn load_scenario(&mut self, key: &str) {
		let Some(scenario) = Scenario::by_key(key) else {
			return;
		};
		self.scenario = Some(scenario);
		self.proposals.clear();
		self.best_score = 0;
		self.max_bridged = 0;
		self.current_bridged.clear();
		info!(
			"loaded scenario: {} ({} stakeholders)",
			scenario.name,
			scenario.stakeholders.len()
		);
	}

	/// Evaluate a proposed theme, record it, and return the match. Returns
	/// `None` (leaving state untouched) when no scenario is loaded or the
	/// text is too short.
	pub fn test_theme(&mut self, raw: &str) -> Option<ThemeMatch> {
		let scenario = self.scenario?;
		let result = matcher::match_theme(raw, scenario)?;

		let text = raw.trim().to_lowercase();
		self.proposals.push(ThemeProposal {
			text: text.clone(),
			score: result.score,
			bridged: result.bridged.clone(),
		});
		self.best_score = self.best_score.max(result.score);
		self.max_bridged = self.max_bridged.max(result.bridged.len());
		self.current_bridged = result.bridged.clone();

		info!(
			"tested theme \"{text}\": {}% ({}), bridges {}/{}",
			result.score,
			score_label(result.score),
			result.bridged.len(),
			scenario.stakeholders.len()
		);
		Some(result)
	}
}

/// Verdict shown next to a score.
pub fn score_label(score: u32) -> &'static str {
	if score >= 80 {
		"Excellent"
	} else if score >= 50 {
		"Good"
	} else if score > 0 {
		"Partial"
	} else {
		"No match"
	}
}

/// Feedback line for a score when no known theme supplied a description.
pub fn score_description(score: u32) -> &'static str {
	if score >= 80 {
		"This theme resonates across nearly all stakeholder groups, creating a strong foundation for frame creation."
	} else if score >= 50 {
		"This theme connects several stakeholder groups but leaves some concerns unaddressed. Consider how to broaden its reach."
	} else if score > 0 {
		"This theme only partially connects stakeholders. Look for deeper patterns that bridge more perspectives."
	} else {
		"This theme does not clearly connect to stakeholder concerns. Try a different angle or explore the suggested themes below."
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn testing_before_loading_is_a_no_op() {
		let mut state = ExplorerState::new();
		assert!(state.test_theme("hosting").is_none());
		assert!(state.proposals.is_empty());
	}

	#[test]
	fn unknown_scenario_key_is_a_no_op() {
		let mut state = ExplorerState::new();
		state.load_scenario("nowhere");
		assert!(state.scenario.is_none());
	}

	#[test]
	fn proposals_accumulate_with_best_score() {
		let mut state = ExplorerState::new();
		state.load_scenario("kings-cross");

		let full = state.test_theme("hosting").unwrap();
		assert_eq!(full.score, 100);

		let partial = state.test_theme("entertainment").unwrap();
		assert_eq!(partial.score, 40);

		assert_eq!(state.proposals.len(), 2);
		assert_eq!(state.best_score, 100);
		assert_eq!(state.max_bridged, 5);
		assert_eq!(state.current_bridged, partial.bridged);
	}

	#[test]
	fn short_text_records_nothing() {
		let mut state = ExplorerState::new();
		state.load_scenario("library");
		assert!(state.test_theme("x").is_none());
		assert!(state.proposals.is_empty());
	}

	#[test]
	fn switching_scenarios_clears_history() {
		let mut state = ExplorerState::new();
		state.load_scenario("kings-cross");
		let _ = state.test_theme("hosting");
		state.load_scenario("social-housing");
		assert!(state.proposals.is_empty());
		assert_eq!(state.best_score, 0);
	}

	#[test]
	fn proposal_text_is_normalized() {
		let mut state = ExplorerState::new();
		state.load_scenario("kings-cross");
		let _ = state.test_theme("  Hosting  ");
		assert_eq!(state.proposals[0].text, "hosting");
	}

	#[test]
	fn score_labels_follow_the_bands() {
		assert_eq!(score_label(100), "Excellent");
		assert_eq!(score_label(80), "Excellent");
		assert_eq!(score_label(60), "Good");
		assert_eq!(score_label(20), "Partial");
		assert_eq!(score_label(0), "No match");
	}
}
