use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::SceneConfig;
use super::frame::start_frame_loop;
use super::particles::{generate_sparkles, generate_stars};
use super::render::{self, Particles};
use super::state::NetworkState;
use super::types::SkillRecord;

fn window_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

fn set_cursor(cursor: &str) {
	let body = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body());
	if let Some(body) = body {
		let _ = body.style().set_property("cursor", cursor);
	}
}

/// Fullscreen canvas behind the page showing the rotating skill network.
#[component]
pub fn SkillNetworkCanvas(
	skills: &'static [SkillRecord],
	#[prop(optional)] config: Option<SceneConfig>,
) -> impl IntoView {
	NetworkState::new(skills, config.unwrap_or_default(), 0.0, 0.0)
		.inspect_err(|err| error!("Skill network unavailable: {}", err))
		.map(network_canvas)
}

fn network_canvas(state: NetworkState) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let particles = Rc::new(Particles {
		stars: generate_stars(&state.config.stars),
		sparkles: generate_sparkles(&state.config.sparkles),
	});
	let state = Rc::new(RefCell::new(state));
	let started = Rc::new(Cell::new(false));
	let listeners: Rc<RefCell<Vec<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(Vec::new()));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (state_init, listeners_init, resize_cb_init) = (
		state.clone(),
		listeners.clone(),
		resize_cb.clone(),
	);
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if started.replace(true) {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("Skill network needs a browser window");
			return;
		};

		let (w, h) = window_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		state_init.borrow_mut().resize(w, h);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("Canvas context is not 2d");
					return;
				}
			},
			_ => {
				error!("Canvas 2d context unavailable");
				return;
			}
		};

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = window_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			state_resize.borrow_mut().resize(nw, nh);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		// The canvas sits under the page content, so picking listens on the window.
		let state_mm = state_init.clone();
		let on_mousemove = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			state_mm
				.borrow_mut()
				.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
		});
		let state_ml = state_init.clone();
		let on_mouseleave = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			// `mouseout` without a related target means the pointer left the window.
			if ev.related_target().is_some() {
				return;
			}
			if state_ml.borrow_mut().pointer_left() {
				set_cursor("auto");
			}
		});
		for (name, cb) in [("mousemove", &on_mousemove), ("mouseout", &on_mouseleave)] {
			let _ = window.add_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
		}
		listeners_init.borrow_mut().extend([on_mousemove, on_mouseleave]);

		let (state_anim, particles_anim) = (state_init.clone(), particles.clone());
		start_frame_loop(move |frame| {
			let scroll_offset = web_sys::window()
				.and_then(|w| w.scroll_y().ok())
				.map_or(0.0, |y| -y);
			let mut s = state_anim.borrow_mut();
			s.tick(frame, scroll_offset);
			if frame.frame == 0 {
				debug!("First frame, camera depth {:.2}", s.rig.depth);
			}
			if s.sample_pointer(js_sys::Date::now()) {
				set_cursor(if s.hover.hovered.is_some() { "pointer" } else { "auto" });
			}
			render::render(&s, &particles_anim, &ctx);
		});
		info!("Skill network started at {}x{}", w, h);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="skill-network-canvas"
			style="display: block; position: fixed; inset: 0; z-index: 0;"
		/>
	}
}
