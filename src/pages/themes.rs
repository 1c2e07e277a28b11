use leptos::prelude::*;

use crate::components::theme_explorer::ThemeExplorer;

/// Theme-exploration page.
#[component]
pub fn ThemesPage() -> impl IntoView {
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
				<h1>"Theme explorer"</h1>
				<p class="subtitle">
					"A strong bridging theme speaks to every stakeholder's concerns at once."
				</p>
				<ThemeExplorer />
			</div>
		</ErrorBoundary>
	}
}
