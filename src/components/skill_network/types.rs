use std::ops::{Add, Mul, Sub};

/// A static skill entry shown as one node of the network.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillRecord {
	pub name: &'static str,
	pub category: &'static str,
	/// Proficiency, 0–100.
	pub level: u8,
	pub color: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Vec3 {
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	pub fn length(self) -> f64 {
		(self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
	}

	pub fn distance_to(self, other: Vec3) -> f64 {
		(self - other).length()
	}

	/// Rotation about the x axis (pitch), right-handed.
	pub fn rotate_x(self, angle: f64) -> Self {
		let (s, c) = angle.sin_cos();
		Self::new(self.x, self.y * c - self.z * s, self.y * s + self.z * c)
	}

	/// Rotation about the y axis (yaw), right-handed.
	pub fn rotate_y(self, angle: f64) -> Self {
		let (s, c) = angle.sin_cos();
		Self::new(self.x * c + self.z * s, self.y, -self.x * s + self.z * c)
	}
}

impl Add for Vec3 {
	type Output = Vec3;

	fn add(self, rhs: Vec3) -> Vec3 {
		Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
	}
}

impl Sub for Vec3 {
	type Output = Vec3;

	fn sub(self, rhs: Vec3) -> Vec3 {
		Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
	}
}

impl Mul<f64> for Vec3 {
	type Output = Vec3;

	fn mul(self, rhs: f64) -> Vec3 {
		Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionedNode {
	pub index: usize,
	pub skill: SkillRecord,
	pub position: Vec3,
}

/// Undirected edge between two node indices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionEdge {
	pub a: usize,
	pub b: usize,
	pub distance: f64,
}

impl ConnectionEdge {
	pub fn touches(&self, idx: usize) -> bool {
		self.a == idx || self.b == idx
	}

	pub fn joins(&self, i: usize, j: usize) -> bool {
		(self.a == i && self.b == j) || (self.a == j && self.b == i)
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutResult {
	pub nodes: Vec<PositionedNode>,
	pub edges: Vec<ConnectionEdge>,
}

#[cfg(test)]
mod tests {
	use std::f64::consts::FRAC_PI_2;

	use super::*;

	#[test]
	fn rotations_preserve_length() {
		let v = Vec3::new(1.0, 2.0, -3.0);
		assert!((v.rotate_x(0.7).length() - v.length()).abs() < 1e-12);
		assert!((v.rotate_y(-1.3).length() - v.length()).abs() < 1e-12);
	}

	#[test]
	fn quarter_yaw_moves_x_onto_negative_z() {
		let v = Vec3::new(1.0, 0.0, 0.0).rotate_y(FRAC_PI_2);
		assert!(v.x.abs() < 1e-12);
		assert!((v.z + 1.0).abs() < 1e-12);
	}

	#[test]
	fn edge_join_is_unordered() {
		let e = ConnectionEdge { a: 3, b: 7, distance: 1.0 };
		assert!(e.joins(3, 7));
		assert!(e.joins(7, 3));
		assert!(!e.joins(3, 3));
		assert!(e.touches(7));
		assert!(!e.touches(1));
	}
}
