use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::engine::layout;
use crate::engine::map::MapState;

const EDGE_COLOR: &str = "rgba(16, 185, 129, 0.35)";

pub fn render(state: &MapState, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (state.surface.width, state.surface.height);
	ctx.set_fill_style_str("#0f172a");
	ctx.fill_rect(0.0, 0.0, w, h);

	if state.stakeholders.is_empty() {
		ctx.set_fill_style_str("#64748b");
		ctx.set_font("14px sans-serif");
		ctx.set_text_align("center");
		let _ = ctx.fill_text("Add stakeholders to see the network", w / 2.0, h / 2.0);
		return;
	}

	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &MapState, ctx: &CanvasRenderingContext2d) {
	for segment in layout::edge_segments(&state.stakeholders, &state.connections) {
		ctx.set_stroke_style_str(EDGE_COLOR);
		ctx.set_line_width((segment.weight as f64 * 2.0).max(1.0));
		ctx.begin_path();
		ctx.move_to(segment.x1, segment.y1);
		ctx.line_to(segment.x2, segment.y2);
		ctx.stroke();
	}
}

fn draw_nodes(state: &MapState, ctx: &CanvasRenderingContext2d) {
	let weights = layout::incident_weights(&state.stakeholders, &state.connections);
	let max = weights.values().copied().max().unwrap_or(0);

	for s in &state.stakeholders {
		let incident = weights.get(&s.id).copied().unwrap_or(0);
		let radius = layout::node_diameter(incident, max) / 2.0;

		ctx.begin_path();
		let _ = ctx.arc(s.x, s.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(s.category.color());
		ctx.fill();
		ctx.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
		ctx.set_line_width(1.5);
		ctx.stroke();

		ctx.set_fill_style_str("white");
		ctx.set_font("11px sans-serif");
		ctx.set_text_align("center");
		let _ = ctx.fill_text(&s.name, s.x, s.y + radius + 14.0);
	}
}
