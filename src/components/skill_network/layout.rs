use std::cell::RefCell;
use std::f64::consts::PI;

use log::info;

use super::error::LayoutError;
use super::types::{ConnectionEdge, LayoutResult, PositionedNode, SkillRecord, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
	pub sphere_radius: f64,
	/// Maximum number of edges touching any single node.
	pub max_degree: usize,
	/// Pairs at or beyond this distance are never connected.
	pub connection_threshold: f64,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			sphere_radius: 5.0,
			max_degree: 2,
			connection_threshold: 4.5,
		}
	}
}

impl LayoutParams {
	pub fn validate(&self) -> Result<(), LayoutError> {
		if !self.sphere_radius.is_finite() || self.sphere_radius < 0.0 {
			return Err(LayoutError::InvalidRadius(self.sphere_radius));
		}
		if !self.connection_threshold.is_finite() || self.connection_threshold <= 0.0 {
			return Err(LayoutError::InvalidThreshold(self.connection_threshold));
		}
		Ok(())
	}
}

/// Position of node `i` out of `n` on a sphere of the given radius.
///
/// The polar angle walks from the south pole (`z = -r`) towards the north
/// while the azimuth winds `sqrt(n * PI)` times faster, which spreads the
/// points roughly evenly over the surface.
pub fn sphere_position(i: usize, n: usize, radius: f64) -> Vec3 {
	let phi = (-1.0 + (2.0 * i as f64) / n as f64).acos();
	let theta = (n as f64 * PI).sqrt() * phi;
	Vec3::new(
		radius * theta.cos() * phi.sin(),
		radius * theta.sin() * phi.sin(),
		radius * phi.cos(),
	)
}

/// Place every skill on the sphere and link near neighbours.
///
/// Candidate pairs are visited `i` ascending then `j` ascending, so when a
/// node runs out of degree the lower-indexed candidates have already won.
pub fn generate_layout(
	skills: &[SkillRecord],
	params: &LayoutParams,
) -> Result<LayoutResult, LayoutError> {
	params.validate()?;

	let n = skills.len();
	let nodes: Vec<PositionedNode> = skills
		.iter()
		.enumerate()
		.map(|(index, skill)| PositionedNode {
			index,
			skill: *skill,
			position: sphere_position(index, n, params.sphere_radius),
		})
		.collect();

	let mut edges: Vec<ConnectionEdge> = Vec::new();
	let mut degree = vec![0usize; n];

	for node in &nodes {
		let i = node.index;
		for other in &nodes {
			let j = other.index;
			if i == j {
				continue;
			}
			let distance = node.position.distance_to(other.position);
			if distance >= params.connection_threshold {
				continue;
			}
			if edges.iter().any(|e| e.joins(i, j)) {
				continue;
			}
			if degree[i] >= params.max_degree || degree[j] >= params.max_degree {
				continue;
			}
			degree[i] += 1;
			degree[j] += 1;
			edges.push(ConnectionEdge { a: i, b: j, distance });
		}
	}

	let longest = edges.iter().map(|e| e.distance).fold(0.0, f64::max);
	info!(
		"Skill layout generated: {} nodes, {} edges, longest edge {:.3}",
		nodes.len(),
		edges.len(),
		longest
	);
	Ok(LayoutResult { nodes, edges })
}

/// Keeps the last generated layout and hands it back while the inputs stay
/// the same.
#[derive(Debug, Default)]
pub struct LayoutCache {
	entry: Option<CacheEntry>,
}

#[derive(Debug)]
struct CacheEntry {
	skills: Vec<SkillRecord>,
	params: LayoutParams,
	result: LayoutResult,
}

impl LayoutCache {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get_or_generate(
		&mut self,
		skills: &[SkillRecord],
		params: &LayoutParams,
	) -> Result<&LayoutResult, LayoutError> {
		let entry = match self.entry.take() {
			Some(entry) if entry.skills == skills && entry.params == *params => entry,
			stale => match generate_layout(skills, params) {
				Ok(result) => CacheEntry {
					skills: skills.to_vec(),
					params: *params,
					result,
				},
				Err(err) => {
					// A rejected request leaves the last good layout in place.
					self.entry = stale;
					return Err(err);
				}
			},
		};
		Ok(&self.entry.insert(entry).result)
	}
}

thread_local! {
	static LAYOUT_CACHE: RefCell<LayoutCache> = RefCell::new(LayoutCache::new());
}

/// [`generate_layout`] memoized per thread, so remounting the background
/// does not redo the work.
pub fn cached_layout(
	skills: &[SkillRecord],
	params: &LayoutParams,
) -> Result<LayoutResult, LayoutError> {
	LAYOUT_CACHE.with(|cache| cache.borrow_mut().get_or_generate(skills, params).cloned())
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::content::SKILLS;

	fn skills(n: usize) -> Vec<SkillRecord> {
		(0..n).map(|i| SKILLS[i % SKILLS.len()]).collect()
	}

	fn degree(layout: &LayoutResult, idx: usize) -> usize {
		layout.edges.iter().filter(|e| e.touches(idx)).count()
	}

	fn assert_graph_invariants(layout: &LayoutResult, max_degree: usize) {
		let mut pairs = HashSet::new();
		for e in &layout.edges {
			assert_ne!(e.a, e.b, "self loop on {}", e.a);
			assert!(pairs.insert((e.a.min(e.b), e.a.max(e.b))), "duplicate edge {:?}", e);
		}
		for node in &layout.nodes {
			assert!(degree(layout, node.index) <= max_degree);
		}
		assert!(layout.edges.len() <= layout.nodes.len() * max_degree);
	}

	#[test]
	fn empty_input_gives_empty_layout() {
		let layout = generate_layout(&[], &LayoutParams::default()).unwrap();
		assert!(layout.nodes.is_empty());
		assert!(layout.edges.is_empty());
	}

	#[test]
	fn single_skill_sits_on_south_pole() {
		let layout = generate_layout(&skills(1), &LayoutParams::default()).unwrap();
		assert_eq!(layout.nodes.len(), 1);
		let p = layout.nodes[0].position;
		assert!(p.x.abs() < 1e-12 && p.y.abs() < 1e-12);
		assert!((p.z + 5.0).abs() < 1e-12);
		assert!(layout.edges.is_empty());
	}

	#[test]
	fn nodes_are_indexed_in_order() {
		for n in [0, 1, 2, 7, 16, 40] {
			let input = skills(n);
			let layout = generate_layout(&input, &LayoutParams::default()).unwrap();
			assert_eq!(layout.nodes.len(), n);
			for (i, node) in layout.nodes.iter().enumerate() {
				assert_eq!(node.index, i);
				assert_eq!(node.skill, input[i]);
			}
		}
	}

	#[test]
	fn nodes_lie_on_the_sphere() {
		let params = LayoutParams {
			sphere_radius: 3.25,
			..LayoutParams::default()
		};
		let layout = generate_layout(&skills(33), &params).unwrap();
		for node in &layout.nodes {
			assert!((node.position.length() - 3.25).abs() < 1e-9);
		}
	}

	#[test]
	fn graph_respects_degree_cap_and_dedup() {
		for n in [2, 5, 16, 24, 64] {
			for max_degree in [0, 1, 2, 3] {
				let params = LayoutParams {
					max_degree,
					..LayoutParams::default()
				};
				let layout = generate_layout(&skills(n), &params).unwrap();
				assert_graph_invariants(&layout, max_degree);
				if max_degree == 0 {
					assert!(layout.edges.is_empty());
				}
			}
		}
	}

	#[test]
	fn edges_are_shorter_than_threshold() {
		let params = LayoutParams {
			connection_threshold: 2.0,
			..LayoutParams::default()
		};
		let layout = generate_layout(&skills(30), &params).unwrap();
		for e in &layout.edges {
			assert!(e.distance < 2.0);
			let (pa, pb) = (layout.nodes[e.a].position, layout.nodes[e.b].position);
			assert_eq!(e.distance, pa.distance_to(pb));
		}
	}

	#[test]
	fn layout_is_deterministic() {
		let input = skills(16);
		let first = generate_layout(&input, &LayoutParams::default()).unwrap();
		let second = generate_layout(&input, &LayoutParams::default()).unwrap();
		for (a, b) in first.nodes.iter().zip(&second.nodes) {
			assert_eq!(a.position.x.to_bits(), b.position.x.to_bits());
			assert_eq!(a.position.y.to_bits(), b.position.y.to_bits());
			assert_eq!(a.position.z.to_bits(), b.position.z.to_bits());
		}
		assert_eq!(first.edges, second.edges);
	}

	#[test]
	fn deployed_network_connects_every_node() {
		let layout = generate_layout(SKILLS, &LayoutParams::default()).unwrap();
		assert_eq!(layout.nodes.len(), 16);
		assert!(layout.edges.len() <= 32);
		assert_graph_invariants(&layout, 2);
		for node in &layout.nodes {
			assert!(degree(&layout, node.index) >= 1, "node {} is isolated", node.index);
		}
	}

	#[test]
	fn lower_indices_win_when_capacity_runs_out() {
		let layout = generate_layout(SKILLS, &LayoutParams::default()).unwrap();
		let pairs: Vec<(usize, usize)> = layout.edges.iter().map(|e| (e.a, e.b)).collect();
		let mut expected = vec![(0, 1), (0, 2), (1, 2)];
		expected.extend((3..15).map(|i| (i, i + 1)));
		assert_eq!(pairs, expected);
	}

	#[test]
	fn rejects_bad_parameters() {
		let bad_radius = LayoutParams {
			sphere_radius: -1.0,
			..LayoutParams::default()
		};
		assert_eq!(
			generate_layout(&skills(4), &bad_radius),
			Err(LayoutError::InvalidRadius(-1.0))
		);

		let bad_threshold = LayoutParams {
			connection_threshold: 0.0,
			..LayoutParams::default()
		};
		assert_eq!(
			generate_layout(&skills(4), &bad_threshold),
			Err(LayoutError::InvalidThreshold(0.0))
		);

		let nan_radius = LayoutParams {
			sphere_radius: f64::NAN,
			..LayoutParams::default()
		};
		assert!(matches!(
			generate_layout(&skills(4), &nan_radius),
			Err(LayoutError::InvalidRadius(_))
		));
	}

	#[test]
	fn zero_radius_collapses_without_nan() {
		let params = LayoutParams {
			sphere_radius: 0.0,
			..LayoutParams::default()
		};
		let layout = generate_layout(&skills(6), &params).unwrap();
		for node in &layout.nodes {
			assert_eq!(node.position.length(), 0.0);
		}
		assert_graph_invariants(&layout, 2);
	}

	#[test]
	fn cache_reuses_until_input_changes() {
		let mut cache = LayoutCache::new();
		let params = LayoutParams::default();
		let first = cache.get_or_generate(SKILLS, &params).unwrap() as *const LayoutResult;
		let again = cache.get_or_generate(SKILLS, &params).unwrap() as *const LayoutResult;
		assert_eq!(first, again);

		let fewer = &SKILLS[..8];
		let changed = cache.get_or_generate(fewer, &params).unwrap();
		assert_eq!(changed.nodes.len(), 8);

		let wider = LayoutParams {
			sphere_radius: 8.0,
			..params
		};
		let regenerated = cache.get_or_generate(fewer, &wider).unwrap();
		assert!((regenerated.nodes[3].position.length() - 8.0).abs() < 1e-9);
	}

	#[test]
	fn rejected_params_keep_the_cached_layout() {
		let mut cache = LayoutCache::new();
		let params = LayoutParams::default();
		let first = cache.get_or_generate(SKILLS, &params).unwrap() as *const LayoutResult;

		let broken = LayoutParams {
			sphere_radius: -3.0,
			..params
		};
		assert_eq!(
			cache.get_or_generate(SKILLS, &broken),
			Err(LayoutError::InvalidRadius(-3.0))
		);

		let again = cache.get_or_generate(SKILLS, &params).unwrap() as *const LayoutResult;
		assert_eq!(first, again);
	}

	#[test]
	fn thread_cache_matches_direct_generation() {
		let params = LayoutParams::default();
		let direct = generate_layout(SKILLS, &params).unwrap();
		assert_eq!(cached_layout(SKILLS, &params).unwrap(), direct);
		assert_eq!(cached_layout(SKILLS, &params).unwrap(), direct);
	}
}
