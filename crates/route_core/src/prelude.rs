//! Re-exports of the most commonly used items in `route_core`.
pub use crate::engine::RouteEngine;
pub use crate::graph::builder::GraphBuilder;
pub use crate::graph::node_index;
pub use crate::graph::Graph;

pub use crate::search;
pub use crate::search::shortest_path::ShortestPath;

pub use crate::util::math::euclidean;
pub use crate::util::test_graphs::{generate_city_graph, generate_triangle_graph};
