use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::engine::scenarios::Scenario;

/// Draw the orbit diagram: one translucent circle per stakeholder spread
/// around the center, bridged ones highlighted, labels outside and the
/// first two concerns inside.
pub fn render(
	scenario: Option<&'static Scenario>,
	bridged: &[String],
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) {
	ctx.set_fill_style_str("#0f172a");
	ctx.fill_rect(0.0, 0.0, width, height);

	let Some(scenario) = scenario else {
		ctx.set_fill_style_str("#64748b");
		ctx.set_font("14px sans-serif");
		ctx.set_text_align("center");
		let _ = ctx.fill_text("Pick a scenario to explore themes", width / 2.0, height / 2.0);
		return;
	};

	let (cx, cy) = (width / 2.0, height / 2.0);
	let n = scenario.stakeholders.len().max(1);
	let circle_radius = width.min(height) * 0.28;
	let orbit_radius = width.min(height) * 0.22;

	for (i, stakeholder) in scenario.stakeholders.iter().enumerate() {
		let angle = 2.0 * PI * i as f64 / n as f64 - PI / 2.0;
		let x = cx + orbit_radius * angle.cos();
		let y = cy + orbit_radius * angle.sin();
		let is_bridged = bridged.iter().any(|name| name == stakeholder.name);

		ctx.begin_path();
		let _ = ctx.arc(x, y, circle_radius, 0.0, 2.0 * PI);
		ctx.set_global_alpha(if is_bridged { 0.55 } else { 0.3 });
		ctx.set_fill_style_str(stakeholder.color);
		ctx.fill();
		ctx.set_global_alpha(1.0);

		if is_bridged {
			ctx.begin_path();
			let _ = ctx.arc(x, y, circle_radius, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
			ctx.set_line_width(2.5);
			ctx.stroke();
		}

		let label_distance = orbit_radius + circle_radius * 0.65;
		ctx.set_fill_style_str("white");
		ctx.set_font("12px sans-serif");
		ctx.set_text_align("center");
		let _ = ctx.fill_text(
			stakeholder.name,
			cx + label_distance * angle.cos(),
			cy + label_distance * angle.sin(),
		);

		let concerns: Vec<&str> = stakeholder.concerns.iter().take(2).copied().collect();
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.7)");
		ctx.set_font("10px sans-serif");
		let _ = ctx.fill_text(
			&concerns.join(", "),
			cx + orbit_radius * 0.6 * angle.cos(),
			cy + orbit_radius * 0.6 * angle.sin(),
		);
	}
}
