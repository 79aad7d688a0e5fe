use log::debug;

use super::types::Graph;
use crate::model::PersonId;

/// Fill color of nodes pushed to the background by a hover.
pub const MUTED_NODE_COLOR: &str = "#E2E2E2";
/// Label color of nodes pushed to the background by a hover.
pub const MUTED_LABEL_COLOR: &str = "#A0A0A0";

/// Recomputes highlight, color and visibility for a hovered node.
///
/// Attributes are always derived from the base colors, so repeated calls
/// with the same arguments yield the same graph.
pub fn apply_hover_focus(graph: &mut Graph, hovered: Option<&PersonId>, disable_hover_effect: bool) {
	let active = hovered.filter(|_| !disable_hover_effect);
	let neighbors = active.map(|h| graph.neighbors(h)).unwrap_or_default();
	debug!("Hover focus on {:?}", active);

	for node in &mut graph.nodes {
		node.color.clone_from(&node.base_color);
		node.label_color.clone_from(&node.base_label_color);
		node.highlighted = false;
		let Some(h) = active else { continue };
		if &node.id == h || neighbors.contains(&node.id) {
			node.highlighted = true;
		} else {
			node.color = MUTED_NODE_COLOR.to_owned();
			node.label_color = MUTED_LABEL_COLOR.to_owned();
		}
	}

	for edge in &mut graph.edges {
		edge.hidden = active.is_some_and(|h| !edge.touches(h));
	}
}

/// Highlights the node picked from search, on top of any hover focus.
pub fn apply_selection(graph: &mut Graph, selected: Option<&PersonId>) {
	let Some(selected) = selected else { return };
	if let Some(node) = graph.nodes.iter_mut().find(|n| &n.id == selected) {
		node.highlighted = true;
		node.color.clone_from(&node.base_color);
		node.label_color.clone_from(&node.base_label_color);
	}
}
