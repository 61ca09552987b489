use std::cell::RefCell;
use std::rc::Rc;

use log::error;
use wasm_bindgen::prelude::*;

/// Longest step handed to a frame callback, in seconds.
pub const MAX_DELTA: f64 = 0.1;

/// Timing handed to the per-frame callback.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameContext {
	/// Seconds since the first tick.
	pub elapsed: f64,
	/// Seconds since the previous tick, clamped to [`MAX_DELTA`].
	pub delta: f64,
	/// Zero-based tick counter.
	pub frame: u64,
}

/// Turns `requestAnimationFrame` timestamps (milliseconds) into [`FrameContext`]s.
#[derive(Clone, Debug, Default)]
pub struct FrameClock {
	start_ms: Option<f64>,
	last_ms: f64,
	frames: u64,
}

impl FrameClock {
	pub fn tick(&mut self, now_ms: f64) -> FrameContext {
		let start = *self.start_ms.get_or_insert(now_ms);
		let delta = if self.frames == 0 {
			0.0
		} else {
			((now_ms - self.last_ms) / 1000.0).clamp(0.0, MAX_DELTA)
		};
		let ctx = FrameContext {
			elapsed: (now_ms - start) / 1000.0,
			delta,
			frame: self.frames,
		};
		self.last_ms = now_ms;
		self.frames += 1;
		ctx
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Registers `on_frame` on a `requestAnimationFrame` chain, called once per
/// tick for the rest of the session.
pub fn start_frame_loop(mut on_frame: impl FnMut(&FrameContext) + 'static) {
	let callback: FrameCallback = Rc::new(RefCell::new(None));
	let mut clock = FrameClock::default();

	let next = callback.clone();
	*callback.borrow_mut() = Some(Closure::new(move |now_ms: f64| {
		let ctx = clock.tick(now_ms);
		on_frame(&ctx);
		if let Some(ref cb) = *next.borrow() {
			request_frame(cb);
		}
	}));
	if let Some(ref cb) = *callback.borrow() {
		request_frame(cb);
	}
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) {
	let Some(window) = web_sys::window() else {
		error!("No window available for requestAnimationFrame");
		return;
	};
	if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
		error!("requestAnimationFrame failed: {:?}", err);
	}
}
