//! Graph model derived from the store: construction, hover focus and search.

mod builder;
mod focus;
mod palette;
mod search;
mod types;

pub use builder::{assign_parallel_edges, build_graph, parallel_curvature};
pub use focus::{MUTED_LABEL_COLOR, MUTED_NODE_COLOR, apply_hover_focus, apply_selection};
pub use palette::random_color;
pub use search::{SearchHit, SearchResults, search_nodes};
pub use types::{EdgeKind, Graph, GraphEdge, GraphNode};
