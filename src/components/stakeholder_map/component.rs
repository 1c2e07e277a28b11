use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent,
};

use super::render;
use crate::components::timestamp;
use crate::engine::layout::Surface;
use crate::engine::map::{MapState, MapStats};
use crate::engine::model::Category;

/// Snapshot of one stakeholder for the editable card list. Rebuilt only on
/// membership changes so in-progress textarea edits are not clobbered.
#[derive(Clone, PartialEq)]
struct CardView {
	id: u32,
	name: String,
	category: Category,
	concerns: String,
	values: String,
}

#[derive(Clone, PartialEq)]
struct Tag {
	label: String,
	detail: String,
	conflict: bool,
}

fn card_views(state: &MapState) -> Vec<CardView> {
	state
		.stakeholders
		.iter()
		.map(|s| CardView {
			id: s.id,
			name: s.name.clone(),
			category: s.category,
			concerns: s.concerns.clone(),
			values: s.values.clone(),
		})
		.collect()
}

/// The stakeholder-mapping widget: add/edit/remove stakeholders, drag them
/// on the network canvas, and surface bridging words and value conflicts.
#[component]
pub fn StakeholderMap() -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let name_ref = NodeRef::<leptos::html::Input>::new();
	let category_ref = NodeRef::<leptos::html::Select>::new();

	let state: Rc<RefCell<MapState>> = Rc::new(RefCell::new(MapState::new(Surface {
		width: 800.0,
		height: 520.0,
	})));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let cards = RwSignal::new(Vec::<CardView>::new());
	let stats = RwSignal::new(MapStats::default());
	let tags = RwSignal::new(Vec::<Tag>::new());
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
			.unwrap_or(800.0);
		let h = canvas
			.parent_element()
			.map(|p| p.client_height() as f64)
			.filter(|h| *h > 0.0)
			.unwrap_or(520.0);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();
		state_init.borrow_mut().set_surface(Surface { width: w, height: h });

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			render::render(&state_anim.borrow(), &ctx);
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

	let state_add = state.clone();
	let add_stakeholder = move || {
		let Some(input) = name_ref.get() else {
			return;
		};
		let name = input.value();
		let category = category_ref
			.get()
			.and_then(|select| Category::parse(&select.value()))
			.unwrap_or(Category::Government);

		let added = {
			let mut st = state_add.borrow_mut();
			let added = st.add_stakeholder(&name, category, "", "").is_some();
			if added {
				cards.set(card_views(&st));
				stats.set(st.stats());
			}
			added
		};
		if added {
			push_log(format!("Added stakeholder: {} ({})", name.trim(), category.label()));
			input.set_value("");
		}
		// Blank names are rejected silently; either way the input refocuses.
		let _ = input.focus();
	};
	let add_on_click = add_stakeholder.clone();
	let add_on_enter = add_stakeholder;

	let state_load = state.clone();
	let on_load_example = move |_| {
		{
			let mut st = state_load.borrow_mut();
			st.load_example();
			cards.set(card_views(&st));
			stats.set(st.stats());
		}
		tags.set(Vec::new());
		push_log("Loaded Kings Cross nightlife scenario".to_string());
	};

	let state_bridges = state.clone();
	let on_find_bridges = move |_| {
		let (bridging, conflicts) = {
			let st = state_bridges.borrow();
			(st.bridging_words(), st.conflicts())
		};
		if bridging.is_empty() && conflicts.is_empty() {
			tags.set(Vec::new());
			push_log("No bridging themes found".to_string());
			return;
		}
		let mut found: Vec<Tag> = bridging
			.iter()
			.map(|b| Tag {
				label: b.word.clone(),
				detail: b.count.to_string(),
				conflict: false,
			})
			.collect();
		found.extend(conflicts.iter().map(|c| Tag {
			label: c.clone(),
			detail: "!".to_string(),
			conflict: true,
		}));
		tags.set(found);
		push_log(format!(
			"Found {} bridging theme(s) and {} potential conflict(s)",
			bridging.len(),
			conflicts.len()
		));
	};

	let state_reset = state.clone();
	let on_reset = move |_| {
		state_reset.borrow_mut().reset();
		cards.set(Vec::new());
		stats.set(MapStats::default());
		tags.set(Vec::new());
		push_log("Reset all stakeholders".to_string());
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		state_md
			.borrow_mut()
			.begin_drag(ev.client_x() as f64 - rect.left(), ev.client_y() as f64 - rect.top());
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		state_mm
			.borrow_mut()
			.drag_to(ev.client_x() as f64 - rect.left(), ev.client_y() as f64 - rect.top());
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		state_mu.borrow_mut().end_drag();
	};
	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		state_ml.borrow_mut().end_drag();
	};

	let state_ts = state.clone();
	let on_touchstart = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		state_ts
			.borrow_mut()
			.begin_drag(touch.client_x() as f64 - rect.left(), touch.client_y() as f64 - rect.top());
		ev.prevent_default();
	};

	let state_tm = state.clone();
	let on_touchmove = move |ev: TouchEvent| {
		let Some(touch) = ev.touches().get(0) else {
			return;
		};
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		state_tm
			.borrow_mut()
			.drag_to(touch.client_x() as f64 - rect.left(), touch.client_y() as f64 - rect.top());
		ev.prevent_default();
	};

	let state_te = state.clone();
	let on_touchend = move |_: TouchEvent| {
		state_te.borrow_mut().end_drag();
	};
	let state_tc = state.clone();
	let on_touchcancel = move |_: TouchEvent| {
		state_tc.borrow_mut().end_drag();
	};

	let state_cards = StoredValue::new_local(state.clone());

	view! {
		<div class="stakeholder-map">
			<div class="map-controls">
				<input
					node_ref=name_ref
					type="text"
					placeholder="Stakeholder name"
					on:keydown=move |ev: KeyboardEvent| {
						if ev.key() == "Enter" {
							add_on_enter();
						}
					}
				/>
				<select node_ref=category_ref>
					{Category::ALL
						.iter()
						.map(|c| view! { <option value=c.label()>{c.label()}</option> })
						.collect_view()}
				</select>
				<button on:click=move |_| add_on_click()>"Add"</button>
				<button on:click=on_load_example>"Load example"</button>
				<button on:click=on_find_bridges>"Find bridges"</button>
				<button on:click=on_reset>"Reset"</button>
			</div>

			<div class="map-body">
				<div class="stakeholder-cards">
					{move || {
						let state = state_cards.get_value();
						cards
							.get()
							.into_iter()
							.map(move |card| {
								let CardView { id, name, category, concerns, values } = card;
								let state_remove = state.clone();
								let state_concerns = state.clone();
								let state_values = state.clone();
								view! {
									<div
										class="stakeholder-card"
										style=format!("--card-color: {}", category.color())
									>
										<div class="stakeholder-card-header">
											<span class="stakeholder-name">{name}</span>
											<span class="stakeholder-type-badge">{category.label()}</span>
											<button
												class="btn-remove-stakeholder"
												title="Remove"
												on:click=move |_| {
													let removed = {
														let mut st = state_remove.borrow_mut();
														let removed = st
															.stakeholders
															.iter()
															.find(|s| s.id == id)
															.map(|s| s.name.clone());
														st.remove_stakeholder(id);
														cards.set(card_views(&st));
														stats.set(st.stats());
														removed
													};
													if let Some(name) = removed {
														push_log(format!("Removed stakeholder: {name}"));
													}
												}
											>
												"×"
											</button>
										</div>
										<label>"Concerns"</label>
										<textarea
											class="concerns-input"
											placeholder="e.g., safety, noise, revenue"
											prop:value=concerns
											on:input=move |ev| {
												let mut st = state_concerns.borrow_mut();
												st.set_concerns(id, &event_target_value(&ev));
												stats.set(st.stats());
											}
										></textarea>
										<label>"Values"</label>
										<textarea
											class="values-input"
											placeholder="e.g., order, profit, wellbeing"
											prop:value=values
											on:input=move |ev| {
												let mut st = state_values.borrow_mut();
												st.set_values(id, &event_target_value(&ev));
												stats.set(st.stats());
											}
										></textarea>
									</div>
								}
							})
							.collect_view()
					}}
				</div>

				<div class="network-panel">
					<canvas
						node_ref=canvas_ref
						class="network-canvas"
						on:mousedown=on_mousedown
						on:mousemove=on_mousemove
						on:mouseup=on_mouseup
						on:mouseleave=on_mouseleave
						on:touchstart=on_touchstart
						on:touchmove=on_touchmove
						on:touchend=on_touchend
						on:touchcancel=on_touchcancel
						style="display: block; cursor: grab;"
					/>
				</div>
			</div>

			<div class="bridging-themes">
				{move || {
					tags.get()
						.into_iter()
						.map(|tag| {
							let class = if tag.conflict {
								"bridging-tag conflict-tag"
							} else {
								"bridging-tag"
							};
							view! {
								<span class=class>
									{tag.label}
									<span class="tag-count">{tag.detail}</span>
								</span>
							}
						})
						.collect_view()
				}}
			</div>

			<div class="stats-bar">
				<span class="stat">"Stakeholders: " {move || stats.get().stakeholders}</span>
				<span class="stat">"Connections: " {move || stats.get().connections}</span>
				<span class="stat">"Shared words: " {move || stats.get().shared_words}</span>
				<span class="stat">"Conflicts: " {move || stats.get().conflicts}</span>
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
