use super::types::Graph;
use crate::model::PersonId;

#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit {
	pub id: PersonId,
	pub label: String,
}

/// Matches shown in the search box plus how many were cut off.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchResults {
	pub hits: Vec<SearchHit>,
	pub remaining: usize,
}

/// Case-insensitive substring search over node labels, in node order.
pub fn search_nodes(graph: &Graph, query: &str, limit: usize) -> SearchResults {
	let needle = query.trim().to_lowercase();
	if needle.is_empty() {
		return SearchResults::default();
	}
	let mut matches = graph
		.nodes
		.iter()
		.filter(|n| n.label.to_lowercase().contains(&needle));

	let hits = matches
		.by_ref()
		.take(limit)
		.map(|n| SearchHit {
			id: n.id.clone(),
			label: n.label.clone(),
		})
		.collect();
	SearchResults {
		hits,
		remaining: matches.count(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::types::GraphNode;

	fn graph(labels: &[&str]) -> Graph {
		Graph {
			nodes: labels
				.iter()
				.enumerate()
				.map(|(i, label)| GraphNode {
					id: PersonId(format!("p{i}")),
					x: 0.0,
					y: 0.0,
					size: 15.0,
					label: (*label).to_owned(),
					base_color: String::new(),
					color: String::new(),
					base_label_color: String::new(),
					label_color: String::new(),
					image: None,
					highlighted: false,
				})
				.collect(),
			edges: Vec::new(),
		}
	}

	#[test]
	fn matches_ignore_case() {
		let g = graph(&["Bee Somchai", "Cee", "bella"]);
		let results = search_nodes(&g, "BE", 10);
		let labels: Vec<_> = results.hits.iter().map(|h| h.label.as_str()).collect();
		assert_eq!(labels, vec!["Bee Somchai", "bella"]);
		assert_eq!(results.remaining, 0);
	}

	#[test]
	fn caps_results_and_counts_the_rest() {
		let labels: Vec<String> = (0..13).map(|i| format!("Node {i}")).collect();
		let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
		let results = search_nodes(&graph(&refs), "node", 10);
		assert_eq!(results.hits.len(), 10);
		assert_eq!(results.remaining, 3);
	}

	#[test]
	fn blank_query_finds_nothing() {
		assert_eq!(search_nodes(&graph(&["A"]), "  ", 10), SearchResults::default());
	}
}
