//! Routing core for a city trip planner.
//!
//! Builds one immutable weighted undirected graph of cities from a CSV node
//! source and a JSON edge source, and answers shortest-path queries over it:
//! Dijkstra, heuristic-guided A* and a ranked enumeration of alternative
//! simple paths.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//!
//! let graph = generate_triangle_graph();
//! let engine = RouteEngine::new(&graph);
//!
//! assert!(engine.node_exists("A"));
//!
//! let path = engine.dijkstra("A", "C").unwrap().expect("A and C are connected");
//! assert_eq!(engine.path_names(&path), vec!["A", "B", "C"]);
//! assert_eq!(path.weight, 2.0);
//! ```
//!
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod engine;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
