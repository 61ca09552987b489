use leptos::ev;
use leptos::prelude::*;

use crate::content::{NAV_LINKS, PROFILE};

/// Scroll distance after which the bar gets its solid background.
const SOLID_AFTER_PX: f64 = 50.0;

/// Fixed top navigation with a collapsible mobile menu.
#[component]
pub fn Nav() -> impl IntoView {
	let (scrolled, set_scrolled) = signal(false);
	let (menu_open, set_menu_open) = signal(false);

	let _ = window_event_listener(ev::scroll, move |_| {
		let y = window().scroll_y().unwrap_or(0.0);
		set_scrolled.set(y > SOLID_AFTER_PX);
	});

	let bar_class = move || {
		if scrolled.get() || menu_open.get() {
			"nav nav--solid"
		} else {
			"nav"
		}
	};

	view! {
		<nav class=bar_class>
			<div class="nav__inner">
				<span class="nav__brand">{PROFILE.name}</span>

				<div class="nav__links">
					{NAV_LINKS
						.iter()
						.map(|(label, href)| view! { <a href=*href>{*label}</a> })
						.collect_view()}
				</div>

				<button class="nav__toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
					{move || if menu_open.get() { "✕" } else { "☰" }}
				</button>
			</div>

			<Show when=move || menu_open.get()>
				<div class="nav__menu">
					{NAV_LINKS
						.iter()
						.map(|(label, href)| {
							view! {
								<a href=*href on:click=move |_| set_menu_open.set(false)>
									{*label}
								</a>
							}
						})
						.collect_view()}
				</div>
			</Show>
		</nav>
	}
}
