use leptos::prelude::*;

/// 404 fallback page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page">
			<h1>"Not found"</h1>
			<p>
				"That page does not exist. "
				<a href="/">"Back to the canvas."</a>
			</p>
		</div>
	}
}
