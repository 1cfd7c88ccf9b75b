//! Name-facing query API over a bound [`Graph`].
use anyhow::{bail, Result};

use crate::constants::Weight;
use crate::graph::{Graph, Node, NodeIndex};
use crate::search::all_paths::{all_simple_paths, path_weight};
use crate::search::astar::AStar;
use crate::search::dijkstra::Dijkstra;
use crate::search::shortest_path::ShortestPath;
use crate::util::math::euclidean;

/// Answers route queries by city name over one immutable graph.
///
/// Querying with a city that is not in the graph is a caller error and
/// fails fast with an explicit error; it is never reported as "no path".
/// Callers that want to probe first use [`RouteEngine::node_exists`].
/// A missing connection between two known cities is the normal `Ok(None)`
/// outcome.
pub struct RouteEngine<'a> {
    g: &'a Graph,
}

impl<'a> RouteEngine<'a> {
    pub fn new(g: &'a Graph) -> Self {
        Self { g }
    }

    pub fn graph(&self) -> &Graph {
        self.g
    }

    pub fn node_exists(&self, city: &str) -> bool {
        self.g.contains(city)
    }

    fn resolve(&self, city: &str) -> Result<NodeIndex> {
        match self.g.node_by_name(city) {
            Some(idx) => Ok(idx),
            None => bail!("City {:?} is not in the graph", city),
        }
    }

    /// Shortest path between two cities using Dijkstra's algorithm.
    pub fn dijkstra(&self, from: &str, to: &str) -> Result<Option<ShortestPath>> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        let mut dijkstra = Dijkstra::new(self.g);
        Ok(dijkstra.search(source, target))
    }

    /// A* with the default straight-line heuristic over city coordinates.
    ///
    /// Edge weights are not guaranteed proportional to coordinate distance,
    /// so the result is only guaranteed optimal when they are; see
    /// [`AStar`].
    pub fn astar(&self, from: &str, to: &str) -> Result<Option<ShortestPath>> {
        self.astar_with_heuristic(from, to, euclidean)
    }

    pub fn astar_with_heuristic(
        &self,
        from: &str,
        to: &str,
        heuristic: impl Fn(&Node, &Node) -> Weight,
    ) -> Result<Option<ShortestPath>> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        let mut astar = AStar::new(self.g);
        Ok(astar.search(source, target, heuristic))
    }

    /// All simple paths between two cities, ranked by weight ascending and
    /// truncated to the `keep` best. Exponential in dense graphs; intended
    /// for small diagnostic queries.
    pub fn all_paths(&self, from: &str, to: &str, keep: usize) -> Result<Vec<ShortestPath>> {
        let source = self.resolve(from)?;
        let target = self.resolve(to)?;

        Ok(all_simple_paths(self.g, source, target, keep))
    }

    /// Recomputes the total weight of a path produced by this engine.
    pub fn path_weight(&self, path: &ShortestPath) -> Weight {
        path_weight(self.g, &path.nodes)
    }

    /// City names along a path, in order.
    pub fn path_names(&self, path: &ShortestPath) -> Vec<&str> {
        path.nodes
            .iter()
            .map(|idx| self.g.nodes[idx.index()].name.as_str())
            .collect()
    }
}
