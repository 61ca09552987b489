use leptos::prelude::*;

/// 404 page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<section class="section not-found">
			<h1>"Lost in space"</h1>
			<p>"This page does not exist."</p>
			<a href="/">"Back to the start"</a>
		</section>
	}
}
