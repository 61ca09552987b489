use log::debug;

use super::camera::CameraRig;
use super::config::SceneConfig;
use super::error::SceneError;
use super::frame::FrameContext;
use super::layout::cached_layout;
use super::projection::Viewport;
use super::types::{LayoutResult, SkillRecord, Vec3};

/// World radius of an idle node sphere.
pub const NODE_RADIUS: f64 = 0.1;
/// World radius of the hovered node sphere.
pub const HOVERED_NODE_RADIUS: f64 = 0.2;
/// Screen-space pick radius, in node radii.
pub const PICK_RADIUS_FACTOR: f64 = 2.5;
/// Never pick tighter than this many pixels.
pub const MIN_PICK_RADIUS: f64 = 6.0;

/// The single "currently highlighted" slot. Last write wins.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HoverState {
	pub hovered: Option<usize>,
}

impl HoverState {
	/// Returns true when the slot changed.
	pub fn enter(&mut self, idx: usize) -> bool {
		let changed = self.hovered != Some(idx);
		self.hovered = Some(idx);
		changed
	}

	/// Only clears the slot when `idx` is the node currently held.
	pub fn leave(&mut self, idx: usize) -> bool {
		if self.hovered == Some(idx) {
			self.hovered = None;
			true
		} else {
			false
		}
	}

	pub fn is_hovered(&self, idx: usize) -> bool {
		self.hovered == Some(idx)
	}

	pub fn is_dimmed(&self, idx: usize) -> bool {
		self.hovered.is_some_and(|h| h != idx)
	}
}

/// Lets pointer samples through at a fixed rate.
#[derive(Clone, Copy, Debug)]
pub struct PickThrottle {
	interval_ms: f64,
	last_ms: Option<f64>,
}

impl PickThrottle {
	pub fn new(interval_ms: f64) -> Self {
		Self {
			interval_ms,
			last_ms: None,
		}
	}

	pub fn admit(&mut self, now_ms: f64) -> bool {
		match self.last_ms {
			Some(last) if now_ms - last < self.interval_ms => false,
			_ => {
				self.last_ms = Some(now_ms);
				true
			}
		}
	}
}

/// Everything the background needs from one frame to the next.
pub struct NetworkState {
	pub config: SceneConfig,
	pub layout: LayoutResult,
	pub rig: CameraRig,
	pub hover: HoverState,
	pub throttle: PickThrottle,
	/// Last known pointer position in canvas pixels, `None` once it left the window.
	pub pointer: Option<(f64, f64)>,
	pub yaw: f64,
	pub pitch: f64,
	pub elapsed: f64,
	pub width: f64,
	pub height: f64,
}

impl NetworkState {
	pub fn new(
		skills: &[SkillRecord],
		config: SceneConfig,
		width: f64,
		height: f64,
	) -> Result<Self, SceneError> {
		config.validate()?;
		let layout = cached_layout(skills, &config.layout)?;
		Ok(Self {
			rig: CameraRig::new(&config.camera),
			throttle: PickThrottle::new(config.pick_interval_ms),
			pointer: None,
			config,
			layout,
			hover: HoverState::default(),
			yaw: 0.0,
			pitch: 0.0,
			elapsed: 0.0,
			width,
			height,
		})
	}

	pub fn tick(&mut self, ctx: &FrameContext, scroll_offset: f64) {
		let motion = &self.config.motion;
		let speed = if self.hover.hovered.is_some() {
			motion.hovered_rotation_speed
		} else {
			motion.rotation_speed
		};
		// Speeds are tuned per 60 Hz frame.
		self.yaw += speed * 60.0 * ctx.delta;
		self.pitch = (ctx.elapsed * motion.wobble_frequency).sin() * motion.wobble_amplitude;
		self.elapsed = ctx.elapsed;
		self.rig
			.advance(scroll_offset, &self.config.camera, &self.config.visibility);
	}

	pub fn network_visible(&self) -> bool {
		self.rig.network_visible(&self.config.visibility)
	}

	/// World-space position of a node after the group transform.
	pub fn world_position(&self, local: Vec3) -> Vec3 {
		self.config.motion.group_position + local.rotate_y(self.yaw).rotate_x(self.pitch)
	}

	pub fn viewport(&self) -> Viewport {
		Viewport::new(
			self.width,
			self.height,
			self.rig.depth,
			self.config.camera.fov_degrees,
		)
	}

	/// Nearest node whose projected disc contains the canvas point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		if !self.network_visible() {
			return None;
		}
		let viewport = self.viewport();
		let mut found: Option<(usize, f64)> = None;
		for node in &self.layout.nodes {
			let Some(p) = viewport.project(self.world_position(node.position)) else {
				continue;
			};
			let radius = (NODE_RADIUS * PICK_RADIUS_FACTOR * p.scale).max(MIN_PICK_RADIUS);
			let (dx, dy) = (p.x - sx, p.y - sy);
			if (dx * dx + dy * dy).sqrt() > radius {
				continue;
			}
			if found.is_none_or(|(_, d)| p.distance < d) {
				found = Some((node.index, p.distance));
			}
		}
		found.map(|(idx, _)| idx)
	}

	/// Applies a pick result as enter/leave messages. Returns true on change.
	pub fn set_hover(&mut self, picked: Option<usize>) -> bool {
		let changed = match (self.hover.hovered, picked) {
			(_, Some(idx)) => self.hover.enter(idx),
			(Some(prev), None) => self.hover.leave(prev),
			(None, None) => false,
		};
		if changed {
			debug!("Hovered skill node: {:?}", self.hover.hovered);
		}
		changed
	}

	pub fn pointer_moved(&mut self, x: f64, y: f64) {
		self.pointer = Some((x, y));
	}

	/// Forgets the pointer and drops any hover right away.
	pub fn pointer_left(&mut self) -> bool {
		self.pointer = None;
		self.set_hover(None)
	}

	/// Re-picks under the stored pointer when the throttle admits `now_ms`.
	/// Runs every frame, so a pointer that stopped moving, a scroll or the
	/// rotation itself still updates the hover. Returns true on change.
	pub fn sample_pointer(&mut self, now_ms: f64) -> bool {
		if !self.throttle.admit(now_ms) {
			return false;
		}
		let picked = self.pointer.and_then(|(x, y)| self.node_at_position(x, y));
		self.set_hover(picked)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
