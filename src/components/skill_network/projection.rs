use super::config::FogParams;
use super::types::Vec3;

/// Points closer than this to the camera plane are culled.
const NEAR_CLIP: f64 = 0.1;

/// Perspective camera on the z axis looking towards -z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	pub camera_z: f64,
	/// Pixels per world unit at distance 1.
	focal: f64,
}

/// A world point mapped to canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
	pub x: f64,
	pub y: f64,
	/// Pixels per world unit at this point's distance.
	pub scale: f64,
	/// Distance from the camera along the view axis.
	pub distance: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64, camera_z: f64, fov_degrees: f64) -> Self {
		let focal = (height / 2.0) / (fov_degrees.to_radians() / 2.0).tan();
		Self {
			width,
			height,
			camera_z,
			focal,
		}
	}

	pub fn project(&self, point: Vec3) -> Option<Projected> {
		let distance = self.camera_z - point.z;
		if distance < NEAR_CLIP {
			return None;
		}
		let scale = self.focal / distance;
		Some(Projected {
			x: self.width / 2.0 + point.x * scale,
			y: self.height / 2.0 - point.y * scale,
			scale,
			distance,
		})
	}
}

/// Linear fog: 1 (clear) up to `near`, 0 (fully fogged) from `far` on.
pub fn fog_factor(distance: f64, fog: &FogParams) -> f64 {
	((fog.far - distance) / (fog.far - fog.near)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn viewport() -> Viewport {
		Viewport::new(800.0, 600.0, 10.0, 50.0)
	}

	#[test]
	fn axis_point_lands_in_the_centre() {
		let p = viewport().project(Vec3::new(0.0, 0.0, -20.0)).unwrap();
		assert!((p.x - 400.0).abs() < 1e-9);
		assert!((p.y - 300.0).abs() < 1e-9);
		assert!((p.distance - 30.0).abs() < 1e-9);
	}

	#[test]
	fn points_behind_the_camera_are_culled() {
		assert!(viewport().project(Vec3::new(0.0, 0.0, 10.0)).is_none());
		assert!(viewport().project(Vec3::new(1.0, 1.0, 25.0)).is_none());
	}

	#[test]
	fn up_is_up_and_far_is_small() {
		let vp = viewport();
		let near = vp.project(Vec3::new(1.0, 1.0, 0.0)).unwrap();
		let far = vp.project(Vec3::new(1.0, 1.0, -40.0)).unwrap();
		assert!(near.y < 300.0);
		assert!(near.x > 400.0);
		assert!(far.scale < near.scale);
	}

	#[test]
	fn half_fov_maps_to_the_top_edge() {
		let vp = viewport();
		let half = (25.0f64).to_radians().tan() * 10.0;
		let p = vp.project(Vec3::new(0.0, half, 0.0)).unwrap();
		assert!(p.y.abs() < 1e-9);
	}

	#[test]
	fn fog_ramps_between_near_and_far() {
		let fog = FogParams::default();
		assert_eq!(fog_factor(1.0, &fog), 1.0);
		assert_eq!(fog_factor(5.0, &fog), 1.0);
		assert!((fog_factor(15.0, &fog) - 0.5).abs() < 1e-12);
		assert_eq!(fog_factor(25.0, &fog), 0.0);
		assert_eq!(fog_factor(90.0, &fog), 0.0);
	}
}
