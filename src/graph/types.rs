use std::collections::HashSet;

use crate::model::{PersonId, RelationshipId};

/// How the renderer draws an edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeKind {
	#[default]
	Straight,
	Curved,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: PersonId,
	/// Layout seed in `[0, 1)`; the force layout owns the position afterwards.
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub label: String,
	pub base_color: String,
	pub color: String,
	pub base_label_color: String,
	pub label_color: String,
	pub image: Option<String>,
	pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphEdge {
	pub id: RelationshipId,
	pub source: PersonId,
	pub target: PersonId,
	pub label: String,
	pub size: f64,
	pub kind: EdgeKind,
	pub curvature: f64,
	pub parallel_index: Option<usize>,
	pub parallel_max_index: Option<usize>,
	pub hidden: bool,
}

impl GraphEdge {
	pub fn touches(&self, node: &PersonId) -> bool {
		&self.source == node || &self.target == node
	}
}

/// Directed multigraph handed to the canvas.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

impl Graph {
	pub fn node(&self, id: &PersonId) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| &n.id == id)
	}

	/// Nodes joined to `id` by an edge in either direction.
	pub fn neighbors(&self, id: &PersonId) -> HashSet<PersonId> {
		self.edges
			.iter()
			.filter_map(|e| {
				if &e.source == id {
					Some(e.target.clone())
				} else if &e.target == id {
					Some(e.source.clone())
				} else {
					None
				}
			})
			.collect()
	}
}
