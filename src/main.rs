use leptos::prelude::*;
use orbit_portfolio::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(App);
}
