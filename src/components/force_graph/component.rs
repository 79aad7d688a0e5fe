use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render::{self, ImageCache};
use super::state::ForceGraphState;
use crate::config::{SimulationSettings, Theme};
use crate::graph::Graph;
use crate::model::PersonId;

/// Canvas size taken from its container.
fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 600.0))
}

/// Pointer position relative to the canvas.
fn pointer(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] graph: Signal<Graph>,
	#[prop(into)] theme: Signal<Theme>,
	#[prop(into)] hover_disabled: Signal<bool>,
	#[prop(into)] selected: Signal<Option<PersonId>>,
	simulation: SimulationSettings,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<ForceGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let running = Arc::new(AtomicBool::new(true));
	let (state_init, animate_init, running_init) = (state.clone(), animate.clone(), running.clone());

	// The layout runs until the canvas goes away
	on_cleanup({
		let running = running.clone();
		move || {
			debug!("Stopping graph layout");
			running.store(false, Ordering::Relaxed);
		}
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if state_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = container_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				error!("Canvas 2d context unavailable");
				return;
			}
		};

		let mut initial = ForceGraphState::new(&graph.get_untracked(), &simulation, w, h);
		initial.theme = theme.get_untracked();
		initial.set_hover_disabled(hover_disabled.get_untracked());
		initial.set_selected(selected.get_untracked());
		*state_init.borrow_mut() = Some(initial);

		let (state_anim, animate_inner, running_anim) =
			(state_init.clone(), animate_init.clone(), running_init.clone());
		let mut images = ImageCache::default();
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !running_anim.load(Ordering::Relaxed) {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				if s.animation_running {
					s.tick(0.016);
				}
				render::render(s, &mut images, &ctx);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	// Every new snapshot replaces the graph wholesale
	let state_load = state.clone();
	Effect::new(move |_| {
		let next = graph.get();
		if let Some(ref mut s) = *state_load.borrow_mut() {
			s.load(&next);
		}
	});

	let state_style = state.clone();
	Effect::new(move |_| {
		let (theme, disabled) = (theme.get(), hover_disabled.get());
		if let Some(ref mut s) = *state_style.borrow_mut() {
			s.theme = theme;
			s.set_hover_disabled(disabled);
		}
	});

	let state_select = state.clone();
	Effect::new(move |_| {
		let selected = selected.get();
		if let Some(ref mut s) = *state_select.borrow_mut() {
			s.set_selected(selected);
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				let mut start = (0.0, 0.0);
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						start = (node.x(), node.y());
					}
				});
				(s.drag.node_start_x, s.drag.node_start_y) = start;
			} else {
				s.pan.active = true;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			// Update hover state when not dragging
			if !s.drag.active {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}

			if s.drag.active {
				if let Some(idx) = s.drag.node_idx {
					let (dx, dy) = (
						(x - s.drag.start_x) / s.transform.k,
						(y - s.drag.start_y) / s.transform.k,
					);
					let (nx, ny) = (
						s.drag.node_start_x + dx as f32,
						s.drag.node_start_y + dy as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if s.pan.active {
				s.transform.x = s.pan.transform_start_x + (x - s.pan.start_x);
				s.transform.y = s.pan.transform_start_y + (y - s.pan.start_y);
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_mu.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(canvas_ref, &ev) else {
			return;
		};

		if let Some(ref mut s) = *state_wh.borrow_mut() {
			let factor = if ev.delta_y() > 0.0 { 0.9 } else { 1.1 };
			let new_k = (s.transform.k * factor).clamp(0.1, 10.0);
			let ratio = new_k / s.transform.k;
			s.transform.x = x - (x - s.transform.x) * ratio;
			s.transform.y = y - (y - s.transform.y) * ratio;
			s.transform.k = new_k;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="force-graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
