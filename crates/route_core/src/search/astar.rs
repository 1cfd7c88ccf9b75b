//! Implementation of the A* search algorithm.
use std::collections::BinaryHeap;

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    constants::Weight,
    graph::{DefaultIdx, Graph, Node, NodeIndex},
    statistics::SearchStats,
};

use super::shortest_path::ShortestPath;

/// Queue entry ordered by tentative weight (g + heuristic), smallest first,
/// ties broken towards the lower node index.
#[derive(Debug)]
struct Candidate<Idx = DefaultIdx> {
    node: NodeIndex<Idx>,
    real_weight: Weight,
    tentative_weight: Weight,
}

impl Candidate {
    fn new(node: NodeIndex, real_weight: Weight, tentative_weight: Weight) -> Self {
        Self {
            node,
            real_weight,
            tentative_weight,
        }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .tentative_weight
            .total_cmp(&self.tentative_weight)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// A* search with a pluggable heuristic.
///
/// The returned path is optimal only if the heuristic never overestimates
/// the remaining cost. With the default straight-line heuristic over raw
/// city coordinates that is not guaranteed, since edge weights are
/// arbitrary; the result is then "best found under the heuristic".
pub struct AStar<'a> {
    pub stats: SearchStats,
    settled: FxHashSet<NodeIndex>,
    g: &'a Graph,
}

impl<'a> AStar<'a> {
    pub fn new(g: &'a Graph) -> Self {
        AStar {
            g,
            stats: SearchStats::default(),
            settled: FxHashSet::default(),
        }
    }

    pub fn search(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
        heuristic: impl Fn(&Node, &Node) -> Weight,
    ) -> Option<ShortestPath> {
        self.stats.init();
        self.settled.clear();

        if source == target {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Some(ShortestPath::new(vec![source], 0.0));
        }

        let target_node = &self.g.nodes[target.index()];

        let mut node_data: FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)> = FxHashMap::default();
        node_data.insert(source, (0.0, None));

        let mut queue = BinaryHeap::new();

        queue.push(Candidate::new(
            source,
            0.0,
            heuristic(&self.g.nodes[source.index()], target_node),
        ));

        while let Some(Candidate {
            tentative_weight: _,
            real_weight,
            node,
        }) = queue.pop()
        {
            // Stale duplicate of an already settled node
            if !self.settled.insert(node) {
                continue;
            }
            self.stats.nodes_settled += 1;

            if node == target {
                break;
            }

            for (_, edge) in self.g.neighbors(node) {
                if self.settled.contains(&edge.target) {
                    continue;
                }

                let real_weight = real_weight + edge.weight;

                if real_weight
                    < node_data
                        .get(&edge.target)
                        .unwrap_or(&(Weight::INFINITY, None))
                        .0
                {
                    let tentative_weight =
                        real_weight + heuristic(&self.g.nodes[edge.target.index()], target_node);

                    node_data.insert(edge.target, (real_weight, Some(node)));
                    queue.push(Candidate::new(edge.target, real_weight, tentative_weight));
                }
            }
        }

        self.stats.finish();

        if let Some(sp) = super::reconstruct_path(target, source, &node_data) {
            debug!("Path found: {:?}", sp);
            info!("{}, weight: {}", self.stats, sp.weight);

            Some(sp)
        } else {
            info!("No path found: {}", self.stats);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::search::{assert_no_path, assert_path};
    use crate::util::math::euclidean;
    use crate::{edge, graph::node_index, node};

    use super::*;

    fn null_heuristic(_: &Node, _: &Node) -> Weight {
        0.0
    }

    #[test]
    fn null_heuristic_behaves_like_dijkstra() {
        // 0 --- 1 --- 2
        //  \         |
        //   3 ------ 5
        let mut g = Graph::new();
        for i in 0..6 {
            g.add_node(node!(format!("N{i}"), 0.0, 0.0));
        }
        g.add_edge(edge!(node_index(0), node_index(1), 1.0));
        g.add_edge(edge!(node_index(1), node_index(2), 1.0));
        g.add_edge(edge!(node_index(2), node_index(5), 1.0));
        g.add_edge(edge!(node_index(0), node_index(3), 5.0));
        g.add_edge(edge!(node_index(3), node_index(5), 1.0));
        g.add_edge(edge!(node_index(0), node_index(5), 10.0));

        let mut astar = AStar::new(&g);

        assert_path(
            vec![0, 1, 2, 5],
            3.0,
            astar.search(node_index(0), node_index(5), null_heuristic),
        );
        assert_path(
            vec![4],
            0.0,
            astar.search(node_index(4), node_index(4), null_heuristic),
        );
    }

    #[test]
    fn disconnected_graph() {
        // 0 - 1 - 2    3 - 4 - 5
        let mut g = Graph::new();
        for i in 0..6 {
            g.add_node(node!(format!("N{i}"), 0.0, 0.0));
        }
        g.add_edge(edge!(node_index(0), node_index(1), 1.0));
        g.add_edge(edge!(node_index(1), node_index(2), 1.0));
        g.add_edge(edge!(node_index(3), node_index(4), 3.0));
        g.add_edge(edge!(node_index(4), node_index(5), 1.0));

        let mut astar = AStar::new(&g);

        assert_no_path(astar.search(node_index(0), node_index(3), euclidean));
        assert_no_path(astar.search(node_index(3), node_index(0), euclidean));
        assert_path(
            vec![0, 1, 2],
            2.0,
            astar.search(node_index(0), node_index(2), euclidean),
        );
    }

    #[test]
    fn admissible_heuristic_finds_optimum() {
        // Positions proportional to weights, so the straight-line estimate
        // never overestimates.
        let mut g = Graph::new();
        let s = g.add_node(node!("S", 0.0, 0.0));
        let a = g.add_node(node!("A", 1.0, 0.0));
        let t = g.add_node(node!("T", 2.0, 0.0));

        g.add_edge(edge!(s, a, 1.0));
        g.add_edge(edge!(a, t, 1.0));
        g.add_edge(edge!(s, t, 3.0));

        let mut astar = AStar::new(&g);

        assert_path(vec![0, 1, 2], 2.0, astar.search(s, t, euclidean));
    }

    #[test]
    fn inadmissible_heuristic_may_miss_optimum() {
        // Same topology, but A sits far away in coordinate space: the
        // straight-line estimate through A massively overestimates, so the
        // search commits to the heavier direct edge.
        let mut g = Graph::new();
        let s = g.add_node(node!("S", 0.0, 0.0));
        let a = g.add_node(node!("A", 100.0, 0.0));
        let t = g.add_node(node!("T", 0.5, 0.0));

        g.add_edge(edge!(s, a, 1.0));
        g.add_edge(edge!(a, t, 1.0));
        g.add_edge(edge!(s, t, 3.0));

        let mut astar = AStar::new(&g);

        assert_path(vec![0, 2], 3.0, astar.search(s, t, euclidean));

        // The null heuristic is trivially admissible and recovers the
        // optimal path on the same graph.
        assert_path(vec![0, 1, 2], 2.0, astar.search(s, t, null_heuristic));
    }

    #[test]
    fn repeated_queries_are_idempotent() {
        let mut g = Graph::new();
        let s = g.add_node(node!("S", 0.0, 0.0));
        let a = g.add_node(node!("A", 1.0, 0.0));
        let t = g.add_node(node!("T", 2.0, 0.0));
        g.add_edge(edge!(s, a, 1.0));
        g.add_edge(edge!(a, t, 1.0));

        let mut astar = AStar::new(&g);

        let first = astar.search(s, t, euclidean);
        let second = astar.search(s, t, euclidean);
        assert_eq!(first, second);
    }
}
