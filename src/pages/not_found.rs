use leptos::prelude::*;
use leptos_router::components::A;

/// 404 - Not Found
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h2>"Page not found"</h2>
			<A href="/">"Back to Inheritance"</A>
		</div>
	}
}
