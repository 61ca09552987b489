use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::{Sparkle, Star};
use super::projection::{Projected, Viewport, fog_factor};
use super::scene::{NetworkFrame, TextAnchor, describe_network};
use super::state::NetworkState;

/// Pre-generated background particles.
pub struct Particles {
	pub stars: Vec<Star>,
	pub sparkles: Vec<Sparkle>,
}

pub fn render(state: &NetworkState, particles: &Particles, ctx: &CanvasRenderingContext2d) {
	ctx.set_global_alpha(1.0);
	ctx.set_fill_style_str(state.config.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	let viewport = state.viewport();
	draw_stars(state, &particles.stars, &viewport, ctx);
	draw_sparkles(state, &particles.sparkles, &viewport, ctx);
	if let Some(frame) = describe_network(state) {
		draw_edges(state, &frame, &viewport, ctx);
		draw_nodes(state, &frame, &viewport, ctx);
	}
	ctx.set_global_alpha(1.0);
}

fn dot(ctx: &CanvasRenderingContext2d, p: &Projected, radius: f64) {
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, radius, 0.0, 2.0 * PI);
	ctx.fill();
}

fn draw_stars(
	state: &NetworkState,
	stars: &[Star],
	viewport: &Viewport,
	ctx: &CanvasRenderingContext2d,
) {
	let params = &state.config.stars;
	let far = params.radius + params.depth;
	ctx.set_fill_style_str("white");
	for star in stars {
		let Some(p) = viewport.project(star.position) else {
			continue;
		};
		// Stars thin out towards the far side of the shell.
		let fade = (1.0 - p.distance / (far * 1.2)).clamp(0.1, 1.0);
		ctx.set_global_alpha(star.twinkle(state.elapsed, params.twinkle_speed) * fade);
		dot(ctx, &p, (star.size * 0.05 * p.scale).clamp(0.3, 2.5));
	}
}

fn draw_sparkles(
	state: &NetworkState,
	sparkles: &[Sparkle],
	viewport: &Viewport,
	ctx: &CanvasRenderingContext2d,
) {
	let params = &state.config.sparkles;
	ctx.set_fill_style_str(params.color);
	for sparkle in sparkles {
		let Some(p) = viewport.project(sparkle.position_at(state.elapsed, params.speed)) else {
			continue;
		};
		ctx.set_global_alpha(params.opacity * sparkle.pulse(state.elapsed, params.speed));
		dot(ctx, &p, (sparkle.size * 0.02 * p.scale).clamp(0.5, 4.0));
	}
}

fn draw_edges(
	state: &NetworkState,
	frame: &NetworkFrame,
	viewport: &Viewport,
	ctx: &CanvasRenderingContext2d,
) {
	for edge in &frame.edges {
		let (Some(a), Some(b)) = (viewport.project(edge.start), viewport.project(edge.end)) else {
			continue;
		};
		let fog = fog_factor((a.distance + b.distance) / 2.0, &state.config.fog);
		if fog <= 0.0 {
			continue;
		}
		ctx.set_global_alpha(edge.opacity * fog);
		ctx.set_stroke_style_str(edge.color);
		ctx.set_line_width(edge.width);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_nodes(
	state: &NetworkState,
	frame: &NetworkFrame,
	viewport: &Viewport,
	ctx: &CanvasRenderingContext2d,
) {
	let mut projected: Vec<_> = frame
		.nodes
		.iter()
		.filter_map(|node| viewport.project(node.world).map(|p| (node, p)))
		.collect();
	// Back to front so nearer labels overlap farther ones.
	projected.sort_by(|(_, a), (_, b)| b.distance.total_cmp(&a.distance));

	ctx.set_text_align("center");
	for (node, p) in projected {
		let fog = fog_factor(p.distance, &state.config.fog);
		if fog <= 0.0 {
			continue;
		}
		let radius = node.radius * p.scale;

		if let Some(halo) = node.glow {
			if let Ok(gradient) = ctx.create_radial_gradient(p.x, p.y, radius * 0.3, p.x, p.y, radius * 3.0)
			{
				let _ = gradient.add_color_stop(0.0, halo);
				let _ = gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)");
				ctx.set_global_alpha(0.6 * node.opacity * fog);
				#[allow(deprecated)]
				ctx.set_fill_style(&gradient);
				dot(ctx, &p, radius * 3.0);
			}
		}

		ctx.set_global_alpha(node.opacity * fog);
		ctx.set_fill_style_str(node.color);
		dot(ctx, &p, radius);

		for text in &node.texts {
			let size = text.size * p.scale;
			if size < 4.0 {
				continue;
			}
			let y = p.y - text.offset_y * p.scale;
			ctx.set_text_baseline(match text.anchor {
				TextAnchor::Bottom => "bottom",
				TextAnchor::Top => "top",
			});
			ctx.set_font(&format!("{}px sans-serif", size));
			ctx.set_global_alpha(text.opacity * fog);
			if text.outlined {
				ctx.set_stroke_style_str("black");
				ctx.set_line_width((0.04 * p.scale).max(1.0));
				let _ = ctx.stroke_text(&text.text, p.x, y);
			}
			ctx.set_fill_style_str(text.color);
			let _ = ctx.fill_text(&text.text, p.x, y);
		}
	}
}
