use std::collections::HashMap;
use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::state::ForceGraphState;
use crate::graph::{EdgeKind, GraphEdge, GraphNode};
use crate::model::PersonId;

/// Portrait images keyed by URL, loaded lazily.
#[derive(Default)]
pub struct ImageCache {
	images: HashMap<String, HtmlImageElement>,
}

impl ImageCache {
	fn get(&mut self, url: &str) -> Option<&HtmlImageElement> {
		if !self.images.contains_key(url) {
			let img = HtmlImageElement::new().ok()?;
			img.set_src(url);
			self.images.insert(url.to_owned(), img);
		}
		self.images
			.get(url)
			.filter(|img| img.complete() && img.natural_width() > 0)
	}
}

pub fn render(state: &ForceGraphState, images: &mut ImageCache, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(state.theme.background());
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	let positions = state.positions();
	let by_id: HashMap<&PersonId, (f64, f64, f64)> = state
		.model
		.nodes
		.iter()
		.zip(&positions)
		.filter_map(|(node, pos)| pos.map(|(x, y)| (&node.id, (x, y, node.size))))
		.collect();

	for edge in state.model.edges.iter().filter(|e| !e.hidden) {
		if let (Some(&from), Some(&to)) = (by_id.get(&edge.source), by_id.get(&edge.target)) {
			draw_edge(state, ctx, edge, from, to);
		}
	}

	// Highlighted nodes last so they sit on top
	for pass in [false, true] {
		for (node, pos) in state.model.nodes.iter().zip(&positions) {
			if let Some((x, y)) = *pos {
				if node.highlighted == pass {
					draw_node(state, ctx, images, node, x, y);
				}
			}
		}
	}
	ctx.restore();
}

/// Point on the quadratic curve at `t`.
fn quad_point(p0: (f64, f64), c: (f64, f64), p1: (f64, f64), t: f64) -> (f64, f64) {
	let u = 1.0 - t;
	(
		u * u * p0.0 + 2.0 * u * t * c.0 + t * t * p1.0,
		u * u * p0.1 + 2.0 * u * t * c.1 + t * t * p1.1,
	)
}

fn draw_edge(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	edge: &GraphEdge,
	(x1, y1, r1): (f64, f64, f64),
	(x2, y2, r2): (f64, f64, f64),
) {
	let k = state.transform.k;
	let (dx, dy) = (x2 - x1, y2 - y1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}
	let (ux, uy) = (dx / dist, dy / dist);
	let color = state.theme.label_color();
	let arrow_size = 8.0 / k;

	// Bend every edge of a pair to the same side so parallel edges nest
	let side = if edge.source <= edge.target { 1.0 } else { -1.0 };
	let control = match edge.kind {
		EdgeKind::Straight => ((x1 + x2) / 2.0, (y1 + y2) / 2.0),
		EdgeKind::Curved => (
			(x1 + x2) / 2.0 - uy * edge.curvature * dist * side,
			(y1 + y2) / 2.0 + ux * edge.curvature * dist * side,
		),
	};

	let (cx, cy) = control;
	let (sl, tl) = (
		((cx - x1).powi(2) + (cy - y1).powi(2)).sqrt().max(0.001),
		((x2 - cx).powi(2) + (y2 - cy).powi(2)).sqrt().max(0.001),
	);
	let start = (x1 + (cx - x1) / sl * r1, y1 + (cy - y1) / sl * r1);
	let (ex, ey) = ((x2 - cx) / tl, (y2 - cy) / tl);
	let tip = (x2 - ex * r2, y2 - ey * r2);
	let end = (tip.0 - ex * arrow_size, tip.1 - ey * arrow_size);

	ctx.set_stroke_style_str(color);
	ctx.set_global_alpha(0.6);
	ctx.set_line_width(edge.size / k);
	ctx.begin_path();
	ctx.move_to(start.0, start.1);
	match edge.kind {
		EdgeKind::Straight => ctx.line_to(end.0, end.1),
		EdgeKind::Curved => ctx.quadratic_curve_to(cx, cy, end.0, end.1),
	}
	ctx.stroke();

	ctx.set_fill_style_str(color);
	let (px, py) = (-ey * arrow_size * 0.5, ex * arrow_size * 0.5);
	ctx.begin_path();
	ctx.move_to(tip.0, tip.1);
	ctx.line_to(end.0 + px, end.1 + py);
	ctx.line_to(end.0 - px, end.1 - py);
	ctx.close_path();
	ctx.fill();
	ctx.set_global_alpha(1.0);

	let (lx, ly) = quad_point(start, control, end, 0.5);
	ctx.set_font(&format!("{}px sans-serif", 9.0 / k.max(0.5)));
	ctx.set_text_align("center");
	let _ = ctx.fill_text(&edge.label, lx, ly - 3.0 / k);
	ctx.set_text_align("start");
}

fn draw_node(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	images: &mut ImageCache,
	node: &GraphNode,
	x: f64,
	y: f64,
) {
	let k = state.transform.k;
	let radius = node.size;

	ctx.begin_path();
	let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&node.color);
	ctx.fill();

	if let Some(img) = node.image.as_deref().and_then(|url| images.get(url)) {
		ctx.save();
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.clip();
		if node.color != node.base_color {
			ctx.set_global_alpha(0.3);
		}
		let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
			img,
			x - radius,
			y - radius,
			radius * 2.0,
			radius * 2.0,
		);
		ctx.restore();
	}

	if node.highlighted {
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius + 2.0 / k, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(state.theme.label_color());
		ctx.set_line_width(1.5 / k);
		ctx.stroke();
	}

	ctx.set_fill_style_str(&node.label_color);
	ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
	let _ = ctx.fill_text(&node.label, x + radius + 3.0, y + 3.0);
}
