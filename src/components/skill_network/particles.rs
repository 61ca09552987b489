use std::f64::consts::{PI, TAU};

use super::config::{SparkleParams, StarParams};
use super::types::Vec3;

/// Deterministic value in [0, 1) for a seed (splitmix64 finaliser).
fn rand_unit(seed: u64) -> f64 {
	let mut z = seed.wrapping_add(0x9e37_79b9_7f4a_7c15);
	z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
	z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
	z ^= z >> 31;
	(z >> 11) as f64 / (1u64 << 53) as f64
}

/// Four independent values for particle `i` of stream `stream`.
fn rand4(stream: u64, i: usize) -> [f64; 4] {
	let base = (stream << 40) ^ ((i as u64) << 2);
	[
		rand_unit(base),
		rand_unit(base + 1),
		rand_unit(base + 2),
		rand_unit(base + 3),
	]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
	pub position: Vec3,
	pub size: f64,
	pub phase: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
	pub base: Vec3,
	pub size: f64,
	pub phase: f64,
}

/// Stars on a spherical shell around the origin.
pub fn generate_stars(params: &StarParams) -> Vec<Star> {
	(0..params.count)
		.map(|i| {
			let [u, v, w, s] = rand4(1, i);
			let z = 2.0 * u - 1.0;
			let theta = TAU * v;
			let ring = (1.0 - z * z).sqrt();
			let radius = params.radius + w * params.depth;
			Star {
				position: Vec3::new(ring * theta.cos(), ring * theta.sin(), z) * radius,
				size: (0.5 + 0.5 * s) * params.size_factor,
				phase: TAU * s,
			}
		})
		.collect()
}

/// Sparkles scattered through a cube of edge `params.scale` centred on the origin.
pub fn generate_sparkles(params: &SparkleParams) -> Vec<Sparkle> {
	(0..params.count)
		.map(|i| {
			let [x, y, z, s] = rand4(2, i);
			Sparkle {
				base: Vec3::new(x - 0.5, y - 0.5, z - 0.5) * params.scale,
				size: params.size * (0.5 + s),
				phase: TAU * s,
			}
		})
		.collect()
}

impl Star {
	/// Brightness in [0.5, 1] at time `t`.
	pub fn twinkle(&self, t: f64, speed: f64) -> f64 {
		0.75 + 0.25 * (t * speed + self.phase).sin()
	}
}

impl Sparkle {
	pub fn position_at(&self, t: f64, speed: f64) -> Vec3 {
		let a = t * speed + self.phase;
		self.base + Vec3::new(a.sin(), (a * 0.8 + PI / 3.0).cos(), (a * 0.6).sin()) * 0.5
	}

	/// Pulse factor in [0, 1] at time `t`.
	pub fn pulse(&self, t: f64, speed: f64) -> f64 {
		0.5 + 0.5 * (t * speed * 4.0 + self.phase).sin()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rand_unit_stays_in_range() {
		for seed in 0..10_000 {
			let v = rand_unit(seed);
			assert!((0.0..1.0).contains(&v));
		}
	}

	#[test]
	fn stars_fill_the_shell() {
		let params = StarParams::default();
		let stars = generate_stars(&params);
		assert_eq!(stars.len(), params.count);
		for star in &stars {
			let r = star.position.length();
			assert!(r >= params.radius - 1e-9 && r <= params.radius + params.depth + 1e-9);
		}
		assert_eq!(stars, generate_stars(&params));
	}

	#[test]
	fn sparkles_stay_near_their_cube() {
		let params = SparkleParams::default();
		let sparkles = generate_sparkles(&params);
		assert_eq!(sparkles.len(), params.count);
		let half = params.scale / 2.0;
		for sparkle in &sparkles {
			for t in [0.0, 1.7, 42.0] {
				let p = sparkle.position_at(t, params.speed);
				for c in [p.x, p.y, p.z] {
					assert!(c.abs() <= half + 0.5 + 1e-9);
				}
				let pulse = sparkle.pulse(t, params.speed);
				assert!((0.0..=1.0).contains(&pulse));
			}
		}
	}
}
