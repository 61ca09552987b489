//! Per-frame draw description of the skill network.
//!
//! Pure data: what to draw and how strongly, in world space. The canvas
//! adapter in `render` turns it into pixels.

use super::state::{HOVERED_NODE_RADIUS, NODE_RADIUS, NetworkState};
use super::types::Vec3;

pub const HIGHLIGHT_COLOR: &str = "#00ffff";
pub const IDLE_NODE_COLOR: &str = "white";
pub const CATEGORY_COLOR: &str = "#aaaaaa";
pub const CONNECTED_EDGE_COLOR: &str = "cyan";
pub const MUTED_EDGE_COLOR: &str = "#444";
pub const DIMMED_ALPHA: f64 = 0.3;

/// Colour band for a proficiency level.
pub fn tier_color(level: u8) -> &'static str {
	if level >= 85 {
		"#00ff00"
	} else if level >= 70 {
		"#ffff00"
	} else {
		"#ff9900"
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
	/// Text sits on top of its anchor point.
	Bottom,
	/// Text hangs below its anchor point.
	Top,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextDraw {
	pub text: String,
	/// Glyph height in world units.
	pub size: f64,
	/// Vertical offset from the node centre, world units.
	pub offset_y: f64,
	pub anchor: TextAnchor,
	pub color: &'static str,
	pub opacity: f64,
	pub outlined: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeDraw {
	pub world: Vec3,
	pub radius: f64,
	pub color: &'static str,
	/// Halo colour when the node is highlighted.
	pub glow: Option<&'static str>,
	pub opacity: f64,
	pub texts: Vec<TextDraw>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeDraw {
	pub start: Vec3,
	pub end: Vec3,
	pub color: &'static str,
	pub opacity: f64,
	pub width: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NetworkFrame {
	pub edges: Vec<EdgeDraw>,
	pub nodes: Vec<NodeDraw>,
}

/// Builds this frame's network description, or `None` while it is faded out.
pub fn describe_network(state: &NetworkState) -> Option<NetworkFrame> {
	if !state.network_visible() {
		return None;
	}
	let opacity = state.rig.opacity;
	let hover = &state.hover;
	let nodes = &state.layout.nodes;

	let edges = state
		.layout
		.edges
		.iter()
		.map(|edge| {
			let connected = hover.hovered.is_none_or(|h| edge.touches(h));
			let (color, alpha, width) = if connected {
				(CONNECTED_EDGE_COLOR, 0.2, 1.5)
			} else {
				(MUTED_EDGE_COLOR, 0.05, 1.0)
			};
			EdgeDraw {
				start: state.world_position(nodes[edge.a].position),
				end: state.world_position(nodes[edge.b].position),
				color,
				opacity: opacity * alpha,
				width,
			}
		})
		.collect();

	let nodes = nodes
		.iter()
		.map(|node| {
			let idx = node.index;
			let hovered = hover.is_hovered(idx);
			let alpha = opacity * if hover.is_dimmed(idx) { DIMMED_ALPHA } else { 1.0 };
			let color = if hovered {
				HIGHLIGHT_COLOR
			} else {
				IDLE_NODE_COLOR
			};
			let label_y = if hovered { 0.6 } else { 0.4 };

			let mut texts = vec![TextDraw {
				text: node.skill.name.to_string(),
				size: if hovered { 0.5 } else { 0.3 },
				offset_y: label_y,
				anchor: TextAnchor::Bottom,
				color,
				opacity: alpha,
				outlined: true,
			}];
			if hovered {
				texts.push(TextDraw {
					text: node.skill.category.to_string(),
					size: 0.2,
					offset_y: label_y - 0.3,
					anchor: TextAnchor::Top,
					color: CATEGORY_COLOR,
					opacity,
					outlined: false,
				});
				texts.push(TextDraw {
					text: format!("{}%", node.skill.level),
					size: 0.25,
					offset_y: label_y - 0.5,
					anchor: TextAnchor::Top,
					color: tier_color(node.skill.level),
					opacity,
					outlined: false,
				});
			}

			NodeDraw {
				world: state.world_position(node.position),
				radius: if hovered {
					HOVERED_NODE_RADIUS
				} else {
					NODE_RADIUS
				},
				color,
				glow: hovered.then_some(HIGHLIGHT_COLOR),
				opacity: alpha,
				texts,
			}
		})
		.collect();

	Some(NetworkFrame { edges, nodes })
}
