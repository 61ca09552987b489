//! Tuned constants for the background scene.
//!
//! Defaults reproduce the deployed site; every value can be overridden by
//! building a [`SceneConfig`] by hand and calling [`SceneConfig::validate`].

use super::error::{ConfigError, SceneError};
use super::layout::LayoutParams;
use super::types::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraParams {
	/// Camera z when the page is scrolled to the top.
	pub base_depth: f64,
	/// World units per scrolled pixel.
	pub scroll_sensitivity: f64,
	/// Fraction of the remaining distance covered each frame, in (0, 1].
	pub smoothing: f64,
	/// Vertical field of view in degrees.
	pub fov_degrees: f64,
}

impl Default for CameraParams {
	fn default() -> Self {
		Self {
			base_depth: 10.0,
			scroll_sensitivity: 0.015,
			smoothing: 0.1,
			fov_degrees: 50.0,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityParams {
	pub near_bound: f64,
	pub far_bound: f64,
	pub smoothing: f64,
	/// The network is skipped entirely below this opacity.
	pub visible_cutoff: f64,
}

impl Default for VisibilityParams {
	fn default() -> Self {
		Self {
			near_bound: -25.0,
			far_bound: 5.0,
			smoothing: 0.1,
			visible_cutoff: 0.01,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
	/// Where the network group sits in world space.
	pub group_position: Vec3,
	/// Yaw per 60 Hz frame.
	pub rotation_speed: f64,
	pub hovered_rotation_speed: f64,
	/// Pitch wobble: `sin(elapsed * frequency) * amplitude`.
	pub wobble_frequency: f64,
	pub wobble_amplitude: f64,
}

impl Default for MotionParams {
	fn default() -> Self {
		Self {
			group_position: Vec3::new(0.0, 0.0, -20.0),
			rotation_speed: 0.03,
			hovered_rotation_speed: 0.005,
			wobble_frequency: 0.1,
			wobble_amplitude: 0.05,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogParams {
	pub near: f64,
	pub far: f64,
}

impl Default for FogParams {
	fn default() -> Self {
		Self { near: 5.0, far: 25.0 }
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarParams {
	pub count: usize,
	/// Inner radius of the star shell.
	pub radius: f64,
	/// Thickness of the star shell.
	pub depth: f64,
	pub size_factor: f64,
	pub twinkle_speed: f64,
}

impl Default for StarParams {
	fn default() -> Self {
		Self {
			count: 1000,
			radius: 100.0,
			depth: 50.0,
			size_factor: 4.0,
			twinkle_speed: 1.0,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SparkleParams {
	pub count: usize,
	/// Edge length of the cube the sparkles drift in.
	pub scale: f64,
	pub size: f64,
	pub speed: f64,
	pub opacity: f64,
	pub color: &'static str,
}

impl Default for SparkleParams {
	fn default() -> Self {
		Self {
			count: 40,
			scale: 12.0,
			size: 2.0,
			speed: 0.4,
			opacity: 0.5,
			color: "#00ffff",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
	pub layout: LayoutParams,
	pub camera: CameraParams,
	pub visibility: VisibilityParams,
	pub motion: MotionParams,
	pub fog: FogParams,
	pub stars: StarParams,
	pub sparkles: SparkleParams,
	pub background: &'static str,
	/// Minimum time between two hover picks, in milliseconds.
	pub pick_interval_ms: f64,
}

impl Default for SceneConfig {
	fn default() -> Self {
		Self {
			layout: LayoutParams::default(),
			camera: CameraParams::default(),
			visibility: VisibilityParams::default(),
			motion: MotionParams::default(),
			fog: FogParams::default(),
			stars: StarParams::default(),
			sparkles: SparkleParams::default(),
			background: "#050505",
			pick_interval_ms: 100.0,
		}
	}
}

fn finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
	if value.is_finite() {
		Ok(())
	} else {
		Err(ConfigError::NotFinite { name, value })
	}
}

fn smoothing(value: f64) -> Result<(), ConfigError> {
	if value > 0.0 && value <= 1.0 {
		Ok(())
	} else {
		Err(ConfigError::InvalidSmoothing(value))
	}
}

impl SceneConfig {
	pub fn validate(&self) -> Result<(), SceneError> {
		self.layout.validate()?;

		let camera = &self.camera;
		finite("camera.base_depth", camera.base_depth)?;
		finite("camera.scroll_sensitivity", camera.scroll_sensitivity)?;
		smoothing(camera.smoothing)?;
		if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
			return Err(ConfigError::InvalidFieldOfView(camera.fov_degrees).into());
		}

		let vis = &self.visibility;
		finite("visibility.near_bound", vis.near_bound)?;
		finite("visibility.far_bound", vis.far_bound)?;
		if vis.near_bound > vis.far_bound {
			return Err(ConfigError::EmptyVisibilityWindow {
				near: vis.near_bound,
				far: vis.far_bound,
			}
			.into());
		}
		smoothing(vis.smoothing)?;

		let motion = &self.motion;
		finite("motion.rotation_speed", motion.rotation_speed)?;
		finite("motion.hovered_rotation_speed", motion.hovered_rotation_speed)?;

		if !(self.fog.near < self.fog.far) {
			return Err(ConfigError::EmptyFogRange {
				near: self.fog.near,
				far: self.fog.far,
			}
			.into());
		}
		finite("pick_interval_ms", self.pick_interval_ms)?;
		Ok(())
	}
}
