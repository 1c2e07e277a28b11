//! State for the stakeholder-map widget.
//!
//! The component owns one `MapState` and drives it through the command
//! methods below; derived data (connections, stats) is recomputed in full
//! after every mutation, so what renders is always a pure function of the
//! current stakeholder list and drag state.

use log::info;

use super::layout::{self, DragCapture, Surface};
use super::matcher::{self, BridgingWord};
use super::model::{Category, Connection, Stakeholder};
use super::scenarios::KINGS_CROSS_PRESET;

/// Counters shown in the widget's stats bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MapStats {
	pub stakeholders: usize,
	pub connections: usize,
	/// Distinct shared tokens across all connections.
	pub shared_words: usize,
	pub conflicts: usize,
}

/// All live state of the map widget.
pub struct MapState {
	pub stakeholders: Vec<Stakeholder>,
	pub connections: Vec<Connection>,
	pub surface: Surface,
	pub drag: Option<DragCapture>,
	next_id: u32,
}

impl MapState {
	pub fn new(surface: Surface) -> Self {
		Self {
			stakeholders: Vec::new(),
			connections: Vec::new(),
			surface,
			drag: None,
			next_id: 1,
		}
	}

	/// Add a stakeholder and return its id. Blank names are rejected with
	/// `None` and leave the state untouched.
	pub fn add_stakeholder(
		&mut self,
		name: &str,
		category: Category,
		concerns: &str,
		values: &str,
	) -> Option<u32> {
		let name = name.trim();
		if name.is_empty() {
			return None;
		}

		let (x, y) = layout::place_incremental(self.stakeholders.len(), self.surface);
		let id = self.next_id;
		self.next_id += 1;

		self.stakeholders.push(Stakeholder {
			id,
			name: name.to_string(),
			category,
			concerns: concerns.to_string(),
			values: values.to_string(),
			x,
			y,
		});
		self.recompute();
		info!("added stakeholder {name} ({})", category.label());
		Some(id)
	}

	/// Remove by id. Unknown ids are a no-op.
	pub fn remove_stakeholder(&mut self, id: u32) {
		let before = self.stakeholders.len();
		self.stakeholders.retain(|s| s.id != id);
		if self.stakeholders.len() != before {
			self.recompute();
		}
	}

	pub fn set_concerns(&mut self, id: u32, text: &str) {
		if let Some(s) = self.stakeholders.iter_mut().find(|s| s.id == id) {
			s.concerns = text.to_string();
			self.recompute();
		}
	}

	pub fn set_values(&mut self, id: u32, text: &str) {
		if let Some(s) = self.stakeholders.iter_mut().find(|s| s.id == id) {
			s.values = text.to_string();
			self.recompute();
		}
	}

	/// Clear everything; ids keep counting from where they were per session.
	pub fn reset(&mut self) {
		self.stakeholders.clear();
		self.connections.clear();
		self.drag = None;
		info!("reset stakeholder map");
	}

	/// Seed the Kings Cross example and reflow everyone onto the ring.
	pub fn load_example(&mut self) {
		self.reset();
		for preset in KINGS_CROSS_PRESET {
			self.add_stakeholder(preset.name, preset.category, preset.concerns, preset.values);
		}
		layout::reflow_circle(&mut self.stakeholders, self.surface);
		info!("loaded Kings Cross scenario ({} stakeholders)", self.stakeholders.len());
	}

	pub fn set_surface(&mut self, surface: Surface) {
		self.surface = surface;
	}

	/// Recompute the derived connection list from scratch.
	pub fn recompute(&mut self) {
		self.connections = matcher::compute_connections(&self.stakeholders);
	}

	/// Start dragging the topmost node under the pointer, if any.
	/// Already-dragging is a no-op: one node is captured exclusively.
	pub fn begin_drag(&mut self, px: f64, py: f64) {
		if self.drag.is_some() {
			return;
		}
		let hit = self.node_at(px, py).map(|s| (s.id, s.x, s.y));
		if let Some((id, x, y)) = hit {
			self.drag = Some(DragCapture {
				id,
				diameter: self.diameter_of(id),
				offset_x: px - x,
				offset_y: py - y,
			});
		}
	}

	/// Move the captured node, clamped to the surface. Idle is a no-op.
	pub fn drag_to(&mut self, px: f64, py: f64) {
		let Some(capture) = self.drag else {
			return;
		};
		let (x, y) = layout::clamp_drag(
			px - capture.offset_x,
			py - capture.offset_y,
			capture.diameter,
			self.surface,
		);
		if let Some(s) = self.stakeholders.iter_mut().find(|s| s.id == capture.id) {
			s.x = x;
			s.y = y;
		}
	}

	/// Release the capture. Fires on pointer-up or cancel anywhere.
	pub fn end_drag(&mut self) {
		self.drag = None;
	}

	/// The topmost (last-drawn) node whose disc contains the point.
	pub fn node_at(&self, px: f64, py: f64) -> Option<&Stakeholder> {
		self.stakeholders.iter().rev().find(|s| {
			let r = self.diameter_of(s.id) / 2.0;
			let (dx, dy) = (s.x - px, s.y - py);
			dx * dx + dy * dy <= r * r
		})
	}

	/// Current diameter for one node, from its incident connection weight.
	pub fn diameter_of(&self, id: u32) -> f64 {
		let weights = layout::incident_weights(&self.stakeholders, &self.connections);
		let max = weights.values().copied().max().unwrap_or(0);
		layout::node_diameter(weights.get(&id).copied().unwrap_or(0), max)
	}

	pub fn stats(&self) -> MapStats {
		let mut shared: Vec<&str> = Vec::new();
		for conn in &self.connections {
			for word in &conn.shared {
				if !shared.contains(&word.as_str()) {
					shared.push(word);
				}
			}
		}
		MapStats {
			stakeholders: self.stakeholders.len(),
			connections: self.connections.len(),
			shared_words: shared.len(),
			conflicts: matcher::detect_conflicts(&self.stakeholders).len(),
		}
	}

	/// Bridging words across the current stakeholder set.
	pub fn bridging_words(&self) -> Vec<BridgingWord> {
		matcher::bridging_words(&self.stakeholders)
	}

	/// Conflict labels across the current stakeholder set.
	pub fn conflicts(&self) -> Vec<String> {
		matcher::detect_conflicts(&self.stakeholders)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SURFACE: Surface = Surface { width: 400.0, height: 300.0 };

	fn map_with(entries: &[(&str, &str, &str)]) -> MapState {
		let mut state = MapState::new(SURFACE);
		for (name, concerns, values) in entries {
			state.add_stakeholder(name, Category::Community, concerns, values);
		}
		state
	}

	#[test]
	fn blank_name_is_rejected() {
		let mut state = MapState::new(SURFACE);
		assert_eq!(state.add_stakeholder("   ", Category::Business, "", ""), None);
		assert_eq!(state.stakeholders.len(), 0);
	}

	#[test]
	fn ids_are_monotonic_and_never_reused() {
		let mut state = map_with(&[("A", "", ""), ("B", "", "")]);
		state.remove_stakeholder(1);
		let id = state.add_stakeholder("C", Category::Ngo, "", "").unwrap();
		assert_eq!(id, 3);
	}

	#[test]
	fn removing_unknown_id_is_a_no_op() {
		let mut state = map_with(&[("A", "safety", "")]);
		state.remove_stakeholder(42);
		assert_eq!(state.stakeholders.len(), 1);
	}

	#[test]
	fn editing_text_recomputes_connections() {
		let mut state = map_with(&[("A", "noise", ""), ("B", "revenue", "")]);
		assert!(state.connections.is_empty());
		state.set_concerns(2, "noise, revenue");
		assert_eq!(state.connections.len(), 1);
		assert_eq!(state.connections[0].shared, vec!["noise"]);
	}

	#[test]
	fn removal_drops_derived_connections() {
		let mut state = map_with(&[("A", "safety", ""), ("B", "safety", "")]);
		assert_eq!(state.connections.len(), 1);
		state.remove_stakeholder(2);
		assert!(state.connections.is_empty());
	}

	#[test]
	fn positions_stay_on_the_surface() {
		let mut state = MapState::new(SURFACE);
		for i in 0..12 {
			state.add_stakeholder(&format!("S{i}"), Category::Individual, "", "");
		}
		for s in &state.stakeholders {
			assert!(s.x >= 0.0 && s.x <= SURFACE.width);
			assert!(s.y >= 0.0 && s.y <= SURFACE.height);
		}
	}

	#[test]
	fn example_scenario_connects_and_conflicts() {
		let mut state = MapState::new(SURFACE);
		state.load_example();
		assert_eq!(state.stakeholders.len(), 6);
		let stats = state.stats();
		assert!(stats.connections > 0);
		// Police (control) vs Venue Owners (freedom-side values) and friends.
		assert!(stats.conflicts > 0);
		assert!(stats.shared_words > 0);
	}

	#[test]
	fn bridging_words_include_safety_in_example() {
		let mut state = MapState::new(SURFACE);
		state.load_example();
		let words = state.bridging_words();
		assert!(words.iter().any(|w| w.word == "safety" && w.count >= 3));
	}

	#[test]
	fn drag_moves_only_the_captured_node() {
		let mut state = map_with(&[("A", "", ""), ("B", "", "")]);
		let (ax, ay) = (state.stakeholders[0].x, state.stakeholders[0].y);
		let (bx, by) = (state.stakeholders[1].x, state.stakeholders[1].y);

		state.begin_drag(ax, ay);
		assert!(state.drag.is_some());
		state.drag_to(ax + 30.0, ay + 10.0);

		assert!((state.stakeholders[0].x - (ax + 30.0)).abs() < 1e-9);
		assert!((state.stakeholders[0].y - (ay + 10.0)).abs() < 1e-9);
		assert_eq!((state.stakeholders[1].x, state.stakeholders[1].y), (bx, by));

		state.end_drag();
		assert!(state.drag.is_none());
	}

	#[test]
	fn drag_preserves_grab_offset() {
		let mut state = map_with(&[("A", "", "")]);
		let (x, y) = (state.stakeholders[0].x, state.stakeholders[0].y);

		// Grab 5px right of center; the node should keep that offset.
		state.begin_drag(x + 5.0, y);
		state.drag_to(x + 55.0, y);
		assert!((state.stakeholders[0].x - (x + 50.0)).abs() < 1e-9);
	}

	#[test]
	fn drag_is_clamped_to_the_surface() {
		let mut state = map_with(&[("A", "", "")]);
		let (x, y) = (state.stakeholders[0].x, state.stakeholders[0].y);
		let half = state.diameter_of(1) / 2.0;

		state.begin_drag(x, y);
		state.drag_to(-500.0, 5000.0);
		assert_eq!(state.stakeholders[0].x, half);
		assert_eq!(state.stakeholders[0].y, SURFACE.height - half);
	}

	#[test]
	fn drag_miss_and_idle_moves_are_no_ops() {
		let mut state = map_with(&[("A", "", "")]);
		let (x, y) = (state.stakeholders[0].x, state.stakeholders[0].y);

		state.begin_drag(x + 200.0, y); // nowhere near the node
		assert!(state.drag.is_none());
		state.drag_to(0.0, 0.0);
		assert_eq!((state.stakeholders[0].x, state.stakeholders[0].y), (x, y));
	}
}
