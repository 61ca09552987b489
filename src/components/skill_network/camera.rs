//! Scroll-driven camera depth and the network's fade in/out.

use super::config::{CameraParams, VisibilityParams};

/// One exponential-moving-average step from `current` towards `target`.
pub fn smooth_step(current: f64, target: f64, factor: f64) -> f64 {
	// `c + (t - c)` can round away from `t`.
	if factor >= 1.0 {
		return target;
	}
	current + (target - current) * factor
}

/// Depth the camera is heading for at the given scroll offset.
///
/// `scroll_offset` is the document's top edge relative to the viewport:
/// zero at the top of the page, negative once scrolled down.
pub fn target_depth(scroll_offset: f64, params: &CameraParams) -> f64 {
	params.base_depth + scroll_offset * params.scroll_sensitivity
}

pub fn map_scroll_to_depth(scroll_offset: f64, current_depth: f64, params: &CameraParams) -> f64 {
	smooth_step(
		current_depth,
		target_depth(scroll_offset, params),
		params.smoothing,
	)
}

pub fn target_opacity(depth: f64, params: &VisibilityParams) -> f64 {
	if (params.near_bound..=params.far_bound).contains(&depth) {
		1.0
	} else {
		0.0
	}
}

pub fn step_opacity(depth: f64, current_opacity: f64, params: &VisibilityParams) -> f64 {
	smooth_step(
		current_opacity,
		target_opacity(depth, params),
		params.smoothing,
	)
}

/// Camera depth and network opacity threaded from one frame to the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
	pub depth: f64,
	pub opacity: f64,
}

impl CameraRig {
	pub fn new(params: &CameraParams) -> Self {
		Self {
			depth: params.base_depth,
			opacity: 0.0,
		}
	}

	/// Advance one frame. Depth and opacity are smoothed independently;
	/// opacity reacts to the depth the camera held at the start of the frame.
	pub fn advance(&mut self, scroll_offset: f64, camera: &CameraParams, vis: &VisibilityParams) {
		let opacity = step_opacity(self.depth, self.opacity, vis);
		self.depth = map_scroll_to_depth(scroll_offset, self.depth, camera);
		self.opacity = opacity;
	}

	pub fn network_visible(&self, vis: &VisibilityParams) -> bool {
		self.opacity > vis.visible_cutoff
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_scroll_targets_base_depth() {
		let params = CameraParams::default();
		assert_eq!(target_depth(0.0, &params), params.base_depth);
	}

	#[test]
	fn full_smoothing_jumps_to_target() {
		let params = CameraParams {
			smoothing: 1.0,
			..CameraParams::default()
		};
		for (scroll, current) in [(0.0, 3.1), (-1333.0, 10.0), (-2017.5, -40.7)] {
			assert_eq!(
				map_scroll_to_depth(scroll, current, &params),
				target_depth(scroll, &params)
			);
		}
	}

	#[test]
	fn scrolling_down_moves_camera_forward() {
		let params = CameraParams::default();
		assert!((target_depth(-1000.0, &params) - -5.0).abs() < 1e-12);
		assert!((target_depth(-2000.0, &params) - -20.0).abs() < 1e-12);
	}

	#[test]
	fn one_step_covers_the_smoothing_fraction() {
		let params = CameraParams::default();
		let next = map_scroll_to_depth(-1000.0, 10.0, &params);
		assert!((next - 8.5).abs() < 1e-12);
	}

	#[test]
	fn opacity_is_zero_outside_window() {
		let vis = VisibilityParams::default();
		assert_eq!(target_opacity(10.0, &vis), 0.0);
		assert_eq!(target_opacity(-30.0, &vis), 0.0);
		assert_eq!(target_opacity(-10.0, &vis), 1.0);
		assert_eq!(target_opacity(vis.far_bound, &vis), 1.0);
		assert_eq!(target_opacity(vis.near_bound, &vis), 1.0);
	}

	#[test]
	fn opacity_converges_inside_window() {
		let vis = VisibilityParams::default();
		let mut opacity = 0.0;
		for _ in 0..200 {
			opacity = step_opacity(0.0, opacity, &vis);
		}
		assert!((1.0 - opacity).abs() < 1e-6);

		for _ in 0..200 {
			opacity = step_opacity(40.0, opacity, &vis);
		}
		assert!(opacity < 1e-6);
	}

	#[test]
	fn rig_fades_in_once_scrolled_to_the_network() {
		let (camera, vis) = (CameraParams::default(), VisibilityParams::default());
		let mut rig = CameraRig::new(&camera);
		rig.advance(0.0, &camera, &vis);
		assert!(!rig.network_visible(&vis));

		for _ in 0..300 {
			rig.advance(-2000.0, &camera, &vis);
		}
		assert!((rig.depth - -20.0).abs() < 1e-6);
		assert!(rig.network_visible(&vis));
		assert!(rig.opacity > 0.99);
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(200))]

		#[test]
		fn prop_full_smoothing_returns_target(
			scroll in -20_000.0f64..0.0,
			current in -1_000.0f64..1_000.0,
			sensitivity in 0.0f64..1.0,
		) {
			let params = CameraParams {
				smoothing: 1.0,
				scroll_sensitivity: sensitivity,
				..CameraParams::default()
			};
			prop_assert_eq!(
				map_scroll_to_depth(scroll, current, &params),
				target_depth(scroll, &params)
			);
		}

		#[test]
		fn prop_opacity_converges_inside_and_decays_outside(
			inside in -25.0f64..=5.0,
			outside_far in 5.001f64..1_000.0,
			outside_near in -1_000.0f64..-25.001,
			start in 0.0f64..=1.0,
			smoothing in 0.05f64..=1.0,
		) {
			let vis = VisibilityParams {
				smoothing,
				..VisibilityParams::default()
			};

			let mut opacity = start;
			for _ in 0..600 {
				opacity = step_opacity(inside, opacity, &vis);
			}
			prop_assert!((1.0 - opacity).abs() < 1e-6);

			for depth in [outside_far, outside_near] {
				let mut opacity = start;
				for _ in 0..600 {
					opacity = step_opacity(depth, opacity, &vis);
				}
				prop_assert_eq!(target_opacity(depth, &vis), 0.0);
				prop_assert!(opacity < 1e-6);
			}
		}
	}
}
