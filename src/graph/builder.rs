use std::collections::HashMap;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::palette::random_color;
use super::types::{EdgeKind, Graph, GraphEdge, GraphNode};
use crate::config::{GraphSettings, Theme};
use crate::i18n::{Locale, relationship_type_label};
use crate::model::{PersonId, PersonView, Relationship};
use crate::naming::resolve_display_name;

/// Builds the renderable multigraph for one snapshot of the store.
///
/// Every relationship becomes a directed edge from person 1 to person 2.
/// Relationships referencing a person missing from `people` still produce
/// an edge; callers are expected to pass a consistent snapshot.
pub fn build_graph(
	people: &[PersonView],
	relationships: &[Relationship],
	locale: Locale,
	theme: Theme,
	settings: &GraphSettings,
	seed: u64,
) -> Graph {
	let mut rng = StdRng::seed_from_u64(seed);
	let label_color = theme.label_color().to_owned();

	let nodes = people
		.iter()
		.map(|view| {
			let (x, y) = (rng.r#gen::<f64>(), rng.r#gen::<f64>());
			let color = random_color(theme, &mut rng);
			GraphNode {
				id: view.person.id.clone(),
				x,
				y,
				size: settings.node_size,
				label: resolve_display_name(locale, &view.person),
				base_color: color.clone(),
				color,
				base_label_color: label_color.clone(),
				label_color: label_color.clone(),
				image: view.portrait_url.clone(),
				highlighted: false,
			}
		})
		.collect();

	let mut edges: Vec<GraphEdge> = relationships
		.iter()
		.map(|rel| GraphEdge {
			id: rel.id.clone(),
			source: rel.person1_id.clone(),
			target: rel.person2_id.clone(),
			label: relationship_type_label(locale, rel.relationship_type).to_owned(),
			size: settings.edge_size,
			kind: EdgeKind::Straight,
			curvature: 0.0,
			parallel_index: None,
			parallel_max_index: None,
			hidden: false,
		})
		.collect();
	assign_parallel_edges(&mut edges, settings.base_curvature);

	let graph = Graph { nodes, edges };
	debug!(
		"Built graph with {} nodes and {} edges",
		graph.nodes.len(),
		graph.edges.len()
	);
	graph
}

/// Fans out edges that share an unordered endpoint pair.
///
/// Indices follow input order within each group. Edges without a sibling
/// are reset to straight with zero curvature.
pub fn assign_parallel_edges(edges: &mut [GraphEdge], base_curvature: f64) {
	let mut groups: HashMap<(PersonId, PersonId), Vec<usize>> = HashMap::new();
	for (i, edge) in edges.iter().enumerate() {
		groups
			.entry(pair_key(&edge.source, &edge.target))
			.or_default()
			.push(i);
	}

	for members in groups.values() {
		if members.len() < 2 {
			let edge = &mut edges[members[0]];
			edge.kind = EdgeKind::Straight;
			edge.curvature = 0.0;
			edge.parallel_index = None;
			edge.parallel_max_index = None;
			continue;
		}
		let max_index = members.len() - 1;
		for (index, &i) in members.iter().enumerate() {
			let edge = &mut edges[i];
			edge.kind = EdgeKind::Curved;
			edge.curvature = parallel_curvature(base_curvature, index, max_index);
			edge.parallel_index = Some(index);
			edge.parallel_max_index = Some(max_index);
		}
	}
}

/// `base * (1 + 3 * index / max(1, max_index))`
pub fn parallel_curvature(base: f64, index: usize, max_index: usize) -> f64 {
	base * (1.0 + 3.0 * index as f64 / max_index.max(1) as f64)
}

fn pair_key(a: &PersonId, b: &PersonId) -> (PersonId, PersonId) {
	if a <= b {
		(a.clone(), b.clone())
	} else {
		(b.clone(), a.clone())
	}
}
