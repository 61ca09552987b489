use leptos::prelude::*;

/// Full-height page section with an optional heading.
#[component]
pub fn Section(
	id: &'static str,
	#[prop(optional)] title: Option<&'static str>,
	#[prop(default = "")] class: &'static str,
	children: Children,
) -> impl IntoView {
	view! {
		<section id=id class=format!("section {}", class)>
			<div class="section__inner">
				{title.map(|title| view! { <h2 class="section__title">{title}</h2> })}
				{children()}
			</div>
		</section>
	}
}
