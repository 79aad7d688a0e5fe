use std::collections::HashMap;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData};
use log::debug;

use crate::config::{SimulationSettings, Theme};
use crate::graph::{Graph, apply_hover_focus, apply_selection};
use crate::model::PersonId;

pub const HIT_RADIUS_SCALE: f64 = 1.2;
/// Spread of the initial layout relative to the viewport.
const SEED_SPREAD: f64 = 0.6;

/// Index of the node in [`ForceGraphState::model`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeInfo {
	pub model: usize,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Interaction inputs that decide highlight and visibility.
#[derive(Clone, Debug, Default)]
pub struct FocusState {
	pub hovered: Option<PersonId>,
	pub selected: Option<PersonId>,
	pub hover_disabled: bool,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	/// Attributes the renderer draws from; positions live in `graph`.
	pub model: Graph,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub focus: FocusState,
	pub theme: Theme,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	simulation: SimulationSettings,
	index: HashMap<PersonId, DefaultNodeIdx>,
}

impl ForceGraphState {
	pub fn new(model: &Graph, simulation: &SimulationSettings, width: f64, height: f64) -> Self {
		let mut state = Self {
			graph: ForceGraph::new(simulation.into()),
			model: Graph::default(),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			focus: FocusState::default(),
			theme: Theme::default(),
			width,
			height,
			animation_running: true,
			simulation: simulation.clone(),
			index: HashMap::new(),
		};
		state.load(model);
		state
	}

	/// Replaces the whole graph; the layout restarts from the new seeds.
	pub fn load(&mut self, model: &Graph) {
		let mut graph = ForceGraph::new((&self.simulation).into());
		let mut index = HashMap::new();

		for (i, node) in model.nodes.iter().enumerate() {
			let idx = graph.add_node(NodeData {
				x: ((node.x - 0.5) * self.width * SEED_SPREAD) as f32,
				y: ((node.y - 0.5) * self.height * SEED_SPREAD) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo { model: i },
			});
			index.insert(node.id.clone(), idx);
		}

		for edge in &model.edges {
			if let (Some(&src), Some(&tgt)) = (index.get(&edge.source), index.get(&edge.target)) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		debug!(
			"Loaded {} nodes and {} edges into the layout",
			model.nodes.len(),
			model.edges.len()
		);
		self.graph = graph;
		self.index = index;
		self.model = model.clone();
		self.drag = DragState::default();
		if self
			.focus
			.hovered
			.as_ref()
			.is_some_and(|id| !self.index.contains_key(id))
		{
			self.focus.hovered = None;
		}
		self.refocus();
	}

	fn refocus(&mut self) {
		apply_hover_focus(
			&mut self.model,
			self.focus.hovered.as_ref(),
			self.focus.hover_disabled,
		);
		apply_selection(&mut self.model, self.focus.selected.as_ref());
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let Some(model) = self.model.nodes.get(node.data.user_data.model) else {
				return;
			};
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// World-space radius, so it scales with zoom like the nodes
			if (dx * dx + dy * dy).sqrt() < model.size * HIT_RADIUS_SCALE {
				found = Some(node.index());
			}
		});
		found
	}

	fn person_at(&self, idx: DefaultNodeIdx) -> Option<PersonId> {
		let mut person = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				person = self
					.model
					.nodes
					.get(node.data.user_data.model)
					.map(|n| n.id.clone());
			}
		});
		person
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		let hovered = node.and_then(|idx| self.person_at(idx));
		if self.focus.hovered == hovered {
			return;
		}
		self.focus.hovered = hovered;
		self.refocus();
	}

	pub fn set_hover_disabled(&mut self, disabled: bool) {
		if self.focus.hover_disabled != disabled {
			self.focus.hover_disabled = disabled;
			self.refocus();
		}
	}

	/// Highlights a newly selected node and centers the view on it.
	/// Re-selecting the current node leaves the view where it is.
	pub fn set_selected(&mut self, selected: Option<PersonId>) {
		if self.focus.selected == selected {
			return;
		}
		if let Some(id) = &selected {
			self.center_on(id);
		}
		self.focus.selected = selected;
		self.refocus();
	}

	/// Layout position of a person's node.
	pub fn position_of(&self, id: &PersonId) -> Option<(f64, f64)> {
		let idx = *self.index.get(id)?;
		let mut pos = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				pos = Some((node.x() as f64, node.y() as f64));
			}
		});
		pos
	}

	/// Centers the view on a person's node.
	pub fn center_on(&mut self, id: &PersonId) {
		if let Some((x, y)) = self.position_of(id) {
			self.transform.x = self.width / 2.0 - x * self.transform.k;
			self.transform.y = self.height / 2.0 - y * self.transform.k;
		}
	}

	/// Layout positions indexed like `model.nodes`.
	pub fn positions(&self) -> Vec<Option<(f64, f64)>> {
		let mut positions = vec![None; self.model.nodes.len()];
		self.graph.visit_nodes(|node| {
			if let Some(slot) = positions.get_mut(node.data.user_data.model) {
				*slot = Some((node.x() as f64, node.y() as f64));
			}
		});
		positions
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}
}
