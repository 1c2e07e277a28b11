use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

use super::render;
use crate::components::timestamp;
use crate::engine::explorer::{ExplorerState, score_description, score_label};
use crate::engine::scenarios::SCENARIOS;

#[derive(Clone, PartialEq)]
struct StakeholderTag {
	name: &'static str,
	color: &'static str,
	concern_count: usize,
}

#[derive(Clone, PartialEq)]
struct BridgeRow {
	name: &'static str,
	color: &'static str,
	bridged: bool,
}

#[derive(Clone, PartialEq)]
struct ResultView {
	badge: String,
	score: u32,
	description: String,
	rows: Vec<BridgeRow>,
}

#[derive(Clone, Copy, PartialEq, Default)]
struct ExplorerStats {
	tested: usize,
	best: u32,
	max_bridged: usize,
}

fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}

/// The theme-exploration widget: pick a scenario, propose bridging themes,
/// and see which stakeholders each theme reaches.
#[component]
pub fn ThemeExplorer() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let theme_ref = NodeRef::<leptos::html::Input>::new();

	let state: Rc<RefCell<ExplorerState>> = Rc::new(RefCell::new(ExplorerState::new()));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let stakeholder_tags = RwSignal::new(Vec::<StakeholderTag>::new());
	let suggestions = RwSignal::new(Vec::<&'static str>::new());
	let result = RwSignal::new(Option::<ResultView>::None);
	let stats = RwSignal::new(ExplorerStats::default());
	let log_lines = RwSignal::new(Vec::<(String, String)>::new());

	let push_log = move |msg: String| {
		log_lines.update(|lines| lines.push((timestamp(), msg)));
	};

	let (state_init, animate_init) = (state.clone(), animate.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();

		let w = canvas
			.parent_element()
			.map(|p| p.client_width() as f64)
			.filter(|w| *w > 0.0)
			.unwrap_or(640.0);
		let h = canvas
			.parent_element()
			.map(|p| p.client_height() as f64)
			.filter(|h| *h > 0.0)
			.unwrap_or(480.0);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			{
				let st = state_anim.borrow();
				render::render(st.scenario, &st.current_bridged, &ctx, w, h);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = web_sys::window()
				.unwrap()
				.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_test = state.clone();
	let run_test = Rc::new(move |raw: String| {
		let outcome = {
			let mut st = state_test.borrow_mut();
			let outcome = st.test_theme(&raw);
			if outcome.is_some() {
				stats.set(ExplorerStats {
					tested: st.proposals.len(),
					best: st.best_score,
					max_bridged: st.max_bridged,
				});
			}
			outcome.map(|m| (m, st.scenario))
		};
		let Some((matched, Some(scenario))) = outcome else {
			return;
		};

		let text = raw.trim().to_lowercase();
		let description = match matched.known {
			Some(theme) => theme.description.to_string(),
			None => score_description(matched.score).to_string(),
		};
		let rows = scenario
			.stakeholders
			.iter()
			.map(|s| BridgeRow {
				name: s.name,
				color: s.color,
				bridged: matched.bridged.iter().any(|b| b == s.name),
			})
			.collect();
		result.set(Some(ResultView {
			badge: capitalize(&text),
			score: matched.score,
			description,
			rows,
		}));
		push_log(format!(
			"Tested theme \"{text}\": {}% ({}), bridges {}/{} stakeholders",
			matched.score,
			score_label(matched.score),
			matched.bridged.len(),
			scenario.stakeholders.len()
		));

		if let Some(input) = theme_ref.get() {
			input.set_value("");
			let _ = input.focus();
		}
	});

	let state_scenario = state.clone();
	let on_scenario_change = move |ev: web_sys::Event| {
		let key = event_target_value(&ev);
		if key.is_empty() {
			return;
		}
		{
			let mut st = state_scenario.borrow_mut();
			st.load_scenario(&key);
			let Some(scenario) = st.scenario else {
				return;
			};
			stakeholder_tags.set(
				scenario
					.stakeholders
					.iter()
					.map(|s| StakeholderTag {
						name: s.name,
						color: s.color,
						concern_count: s.concerns.len(),
					})
					.collect(),
			);
			suggestions.set(scenario.themes.iter().map(|t| t.key).collect());
			stats.set(ExplorerStats::default());
			result.set(None);
			push_log(format!(
				"Loaded scenario: {} ({} stakeholders)",
				scenario.name,
				scenario.stakeholders.len()
			));
		}
		if let Some(input) = theme_ref.get() {
			input.set_value("");
		}
	};

	let run_on_click = run_test.clone();
	let on_test_click = move |_| {
		if let Some(input) = theme_ref.get() {
			run_on_click(input.value());
		}
	};
	let run_on_enter = run_test.clone();
	let on_theme_keydown = move |ev: KeyboardEvent| {
		if ev.key() == "Enter" {
			if let Some(input) = theme_ref.get() {
				run_on_enter(input.value());
			}
		}
	};

	let run_on_chip = StoredValue::new_local(run_test);

	view! {
		<div class="theme-explorer">
			<div class="explorer-controls">
				<select on:change=on_scenario_change>
					<option value="">"Choose a scenario…"</option>
					{SCENARIOS
						.iter()
						.map(|s| view! { <option value=s.key>{s.name}</option> })
						.collect_view()}
				</select>
				<input
					node_ref=theme_ref
					type="text"
					placeholder="Propose a bridging theme"
					on:keydown=on_theme_keydown
				/>
				<button on:click=on_test_click>"Test theme"</button>
			</div>

			<div class="stakeholder-tags">
				{move || {
					stakeholder_tags
						.get()
						.into_iter()
						.map(|tag| {
							view! {
								<span
									class="stakeholder-tag"
									style=format!("background: {};", tag.color)
								>
									{tag.name}
									<span class="concern-count">{tag.concern_count}</span>
								</span>
							}
						})
						.collect_view()
				}}
			</div>

			<div class="venn-panel">
				<canvas node_ref=canvas_ref class="venn-canvas" style="display: block;" />
			</div>

			<div class="suggestions">
				{move || {
					let run = run_on_chip.get_value();
					suggestions
						.get()
						.into_iter()
						.map(move |key| {
							let run = run.clone();
							view! {
								<button class="suggestion-chip" on:click=move |_| run(key.to_string())>
									{capitalize(key)}
								</button>
							}
						})
						.collect_view()
				}}
			</div>

			{move || {
				result
					.get()
					.map(|r| {
						view! {
							<div class="results-panel">
								<span class="venn-theme-badge">{r.badge.clone()}</span>
								<div class="score-row">
									<span class="score-text">{format!("{}%", r.score)}</span>
									<div class="score-bar">
										<div
											class="score-fill"
											style=format!("width: {}%;", r.score)
										></div>
									</div>
								</div>
								<p class="score-description">{r.description.clone()}</p>
								<ul class="bridged-list">
									{r.rows
										.iter()
										.map(|row| {
											let mark = if row.bridged { "✓ " } else { "✗ " };
											let class = if row.bridged { "" } else { "not-bridged" };
											view! {
												<li
													class=class
													style=format!("background: {};", row.color)
												>
													{mark}
													{row.name}
												</li>
											}
										})
										.collect_view()}
								</ul>
							</div>
						}
					})
			}}

			<div class="stats-bar">
				<span class="stat">"Themes tested: " {move || stats.get().tested}</span>
				<span class="stat">"Best score: " {move || format!("{}%", stats.get().best)}</span>
				<span class="stat">"Most bridged: " {move || stats.get().max_bridged}</span>
			</div>

			<div class="log-panel">
				{move || {
					log_lines
						.get()
						.into_iter()
						.map(|(ts, msg)| {
							view! {
								<div class="log-entry">
									<span class="timestamp">{format!("[{ts}]")}</span>
									" "
									{msg}
								</div>
							}
						})
						.collect_view()
				}}
			</div>
		</div>
	}
}
