use leptos::prelude::*;

use crate::components::stakeholder_map::StakeholderMap;

/// Stakeholder-mapping page.
#[component]
pub fn MapPage() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="page">
				<h1>"Stakeholder map"</h1>
				<p class="subtitle">
					"Shared concern and value words connect stakeholders. Drag nodes to rearrange."
				</p>
				<StakeholderMap />
			</div>
		</ErrorBoundary>
	}
}
