use leptos::prelude::*;

/// Landing page linking to the two widgets.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<div class="home">
			<h1>"Stakeholder Canvas"</h1>
			<p class="subtitle">
				"Map stakeholder concerns and values, then explore the themes that bridge them."
			</p>
			<nav class="home-nav">
				<a href="/map" class="home-card">
					<h2>"Stakeholder map"</h2>
					<p>
						"Add stakeholders, edit their concerns and values, and watch shared language connect them on the network."
					</p>
				</a>
				<a href="/themes" class="home-card">
					<h2>"Theme explorer"</h2>
					<p>
						"Pick a scenario and test bridging themes against every stakeholder's concerns."
					</p>
				</a>
			</nav>
		</div>
	}
}
