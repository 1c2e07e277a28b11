//! Node placement and direct-manipulation geometry for the map surface.

use std::collections::HashMap;
use std::f64::consts::PI;

use super::model::{Connection, Stakeholder};

/// Smallest node diameter, used when a node has no connections.
pub const NODE_MIN_DIAMETER: f64 = 36.0;
/// Extra diameter granted to the most-connected node.
pub const NODE_SIZE_RANGE: f64 = 28.0;

/// The drawable area nodes live in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
	pub width: f64,
	pub height: f64,
}

impl Surface {
	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	/// Radius of the placement ring: 60% of the inscribed half-extent.
	pub fn ring_radius(&self) -> f64 {
		let (cx, cy) = self.center();
		cx.min(cy) * 0.6
	}
}

/// One node exclusively captured by the pointer.
///
/// `None` vs `Some` is the whole interaction state machine: idle until a
/// pointer-down lands on a node, back to idle on pointer-up or cancel
/// anywhere.
#[derive(Clone, Copy, Debug)]
pub struct DragCapture {
	pub id: u32,
	/// Node diameter at capture time; bounds clamping uses it.
	pub diameter: f64,
	/// Pointer-to-center delta recorded at pointer-down.
	pub offset_x: f64,
	pub offset_y: f64,
}

/// A connection's current line endpoints plus its weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSegment {
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub weight: usize,
}

/// Position for slot `index` of `count` nodes spread evenly on the ring,
/// starting at the top (−90°) and proceeding clockwise.
pub fn ring_position(index: usize, count: usize, surface: Surface) -> (f64, f64) {
	let count = count.max(1);
	let angle = (index as f64 / count as f64) * 2.0 * PI - PI / 2.0;
	let (cx, cy) = surface.center();
	let radius = surface.ring_radius();
	(cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Position for a node added when `count` nodes already exist.
///
/// Uses the projected future count (at least six slots) so early additions
/// spread out without reflowing the nodes already placed.
pub fn place_incremental(count: usize, surface: Surface) -> (f64, f64) {
	let slots = (count + 1).max(6);
	ring_position(count, slots, surface)
}

/// Reassign every node an even slot on the ring. Used when a whole scenario
/// is (re)loaded; incremental adds never disturb existing positions.
pub fn reflow_circle(stakeholders: &mut [Stakeholder], surface: Surface) {
	let count = stakeholders.len();
	for (i, s) in stakeholders.iter_mut().enumerate() {
		let (x, y) = ring_position(i, count, surface);
		s.x = x;
		s.y = y;
	}
}

/// Clamp a dragged center so the node's full extent stays on the surface.
pub fn clamp_drag(x: f64, y: f64, diameter: f64, surface: Surface) -> (f64, f64) {
	let half = diameter / 2.0;
	(
		x.max(half).min(surface.width - half),
		y.max(half).min(surface.height - half),
	)
}

/// Total incident connection weight per node id. Nodes without connections
/// are present with weight zero.
pub fn incident_weights(
	stakeholders: &[Stakeholder],
	connections: &[Connection],
) -> HashMap<u32, usize> {
	let mut weights: HashMap<u32, usize> =
		stakeholders.iter().map(|s| (s.id, 0)).collect();
	for conn in connections {
		*weights.entry(conn.a).or_insert(0) += conn.weight;
		*weights.entry(conn.b).or_insert(0) += conn.weight;
	}
	weights
}

/// Node diameter: the minimum plus a share of the range proportional to the
/// node's incident weight relative to the global maximum.
pub fn node_diameter(incident: usize, max_incident: usize) -> f64 {
	let max = max_incident.max(1) as f64;
	NODE_MIN_DIAMETER + (incident as f64 / max) * NODE_SIZE_RANGE
}

/// Current line endpoints for every connection, derived from node positions.
/// Connections whose endpoints no longer exist are skipped.
pub fn edge_segments(
	stakeholders: &[Stakeholder],
	connections: &[Connection],
) -> Vec<EdgeSegment> {
	connections
		.iter()
		.filter_map(|conn| {
			let from = stakeholders.iter().find(|s| s.id == conn.a)?;
			let to = stakeholders.iter().find(|s| s.id == conn.b)?;
			Some(EdgeSegment {
				x1: from.x,
				y1: from.y,
				x2: to.x,
				y2: to.y,
				weight: conn.weight,
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::model::Category;

	const SURFACE: Surface = Surface { width: 400.0, height: 300.0 };
	const EPS: f64 = 1e-9;

	fn stakeholder(id: u32, x: f64, y: f64) -> Stakeholder {
		Stakeholder {
			id,
			name: format!("S{id}"),
			category: Category::Ngo,
			concerns: String::new(),
			values: String::new(),
			x,
			y,
		}
	}

	#[test]
	fn ring_of_four_is_distinct_in_bounds_and_right_angled() {
		let positions: Vec<(f64, f64)> =
			(0..4).map(|i| ring_position(i, 4, SURFACE)).collect();

		for (i, &(x, y)) in positions.iter().enumerate() {
			assert!(x >= 0.0 && x <= SURFACE.width, "x out of bounds at {i}");
			assert!(y >= 0.0 && y <= SURFACE.height, "y out of bounds at {i}");
			for &(ox, oy) in &positions[i + 1..] {
				assert!((x - ox).abs() > EPS || (y - oy).abs() > EPS);
			}
		}

		let (cx, cy) = SURFACE.center();
		for i in 0..4 {
			let (x1, y1) = positions[i];
			let (x2, y2) = positions[(i + 1) % 4];
			let a1 = (y1 - cy).atan2(x1 - cx);
			let a2 = (y2 - cy).atan2(x2 - cx);
			let mut delta = (a2 - a1).rem_euclid(2.0 * PI);
			if delta > PI {
				delta = 2.0 * PI - delta;
			}
			assert!((delta - PI / 2.0).abs() < 1e-6, "step {i} subtends {delta}");
		}
	}

	#[test]
	fn ring_starts_at_the_top() {
		let (x, y) = ring_position(0, 4, SURFACE);
		let (cx, cy) = SURFACE.center();
		assert!((x - cx).abs() < EPS);
		assert!((y - (cy - SURFACE.ring_radius())).abs() < EPS);
	}

	#[test]
	fn incremental_placement_projects_six_slots_early() {
		// With fewer than six nodes the projected ring has six slots, so the
		// first addition lands exactly on slot zero of a six-ring.
		assert_eq!(place_incremental(0, SURFACE), ring_position(0, 6, SURFACE));
		assert_eq!(place_incremental(3, SURFACE), ring_position(3, 6, SURFACE));
		// Beyond six, the projection is current count + 1.
		assert_eq!(place_incremental(9, SURFACE), ring_position(9, 10, SURFACE));
	}

	#[test]
	fn reflow_uses_even_slots() {
		let mut stakeholders: Vec<Stakeholder> =
			(0..3).map(|i| stakeholder(i, 0.0, 0.0)).collect();
		reflow_circle(&mut stakeholders, SURFACE);
		for (i, s) in stakeholders.iter().enumerate() {
			assert_eq!((s.x, s.y), ring_position(i, 3, SURFACE));
		}
	}

	#[test]
	fn clamp_keeps_full_extent_inside() {
		assert_eq!(clamp_drag(-50.0, 10.0, 40.0, SURFACE), (20.0, 20.0));
		assert_eq!(clamp_drag(1000.0, 1000.0, 40.0, SURFACE), (380.0, 280.0));
		assert_eq!(clamp_drag(200.0, 150.0, 40.0, SURFACE), (200.0, 150.0));
	}

	#[test]
	fn diameter_interpolates_between_min_and_max() {
		assert!((node_diameter(0, 4) - NODE_MIN_DIAMETER).abs() < EPS);
		assert!(
			(node_diameter(4, 4) - (NODE_MIN_DIAMETER + NODE_SIZE_RANGE)).abs() < EPS
		);
		assert!((node_diameter(2, 4) - (NODE_MIN_DIAMETER + NODE_SIZE_RANGE / 2.0)).abs() < EPS);
	}

	#[test]
	fn diameter_is_minimum_with_no_connections_at_all() {
		// Global max of zero must not divide by zero.
		assert!((node_diameter(0, 0) - NODE_MIN_DIAMETER).abs() < EPS);
	}

	#[test]
	fn incident_weights_sum_both_endpoints() {
		let stakeholders = vec![stakeholder(1, 0.0, 0.0), stakeholder(2, 0.0, 0.0), stakeholder(3, 0.0, 0.0)];
		let connections = vec![
			Connection { a: 1, b: 2, shared: vec!["x".into()], weight: 2 },
			Connection { a: 2, b: 3, shared: vec!["y".into()], weight: 1 },
		];
		let weights = incident_weights(&stakeholders, &connections);
		assert_eq!(weights[&1], 2);
		assert_eq!(weights[&2], 3);
		assert_eq!(weights[&3], 1);
	}

	#[test]
	fn edge_segments_track_current_positions() {
		let stakeholders = vec![stakeholder(1, 10.0, 20.0), stakeholder(2, 30.0, 40.0)];
		let connections = vec![Connection { a: 1, b: 2, shared: vec![], weight: 1 }];
		let segments = edge_segments(&stakeholders, &connections);
		assert_eq!(
			segments,
			vec![EdgeSegment { x1: 10.0, y1: 20.0, x2: 30.0, y2: 40.0, weight: 1 }]
		);
	}

	#[test]
	fn edge_segments_skip_dangling_connections() {
		let stakeholders = vec![stakeholder(1, 0.0, 0.0)];
		let connections = vec![Connection { a: 1, b: 99, shared: vec![], weight: 1 }];
		assert!(edge_segments(&stakeholders, &connections).is_empty());
	}
}
