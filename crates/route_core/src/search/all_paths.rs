//! Bounded enumeration of ranked alternative routes.
use log::info;
use rustc_hash::FxHashSet;

use crate::{
    constants::Weight,
    graph::{Graph, NodeIndex},
};

use super::shortest_path::ShortestPath;

/// Enumerates **all** simple paths (no repeated nodes) between `source` and
/// `target`, ranks them by total weight ascending and returns the first
/// `keep` entries.
///
/// The enumeration itself is not capped: its cost is exponential in dense
/// graphs, so this is meant for small diagnostic graphs and queries only.
/// `keep` bounds the returned list, not the search.
pub fn all_simple_paths(
    g: &Graph,
    source: NodeIndex,
    target: NodeIndex,
    keep: usize,
) -> Vec<ShortestPath> {
    let mut ranked: Vec<ShortestPath> = Vec::new();

    // Iterative DFS; each stack frame holds the unexplored neighbors of the
    // node at the same depth in `path`.
    let mut path = vec![source];
    let mut on_path: FxHashSet<NodeIndex> = FxHashSet::default();
    on_path.insert(source);
    let mut stack = vec![neighbor_targets(g, source)];

    while let Some(frontier) = stack.last_mut() {
        if let Some(next) = frontier.pop() {
            if on_path.contains(&next) {
                continue;
            }
            if next == target {
                let mut nodes = path.clone();
                nodes.push(target);
                let weight = path_weight(g, &nodes);
                ranked.push(ShortestPath::new(nodes, weight));
                continue;
            }
            on_path.insert(next);
            path.push(next);
            stack.push(neighbor_targets(g, next));
        } else {
            stack.pop();
            if let Some(done) = path.pop() {
                on_path.remove(&done);
            }
        }
    }

    info!(
        "Enumerated {} simple paths, keeping up to {}",
        ranked.len(),
        keep
    );

    ranked.sort_by(|a, b| {
        a.weight
            .total_cmp(&b.weight)
            .then_with(|| a.nodes.cmp(&b.nodes))
    });
    ranked.truncate(keep);
    ranked
}

/// Sum of edge weights along a node sequence. A non-adjacent consecutive
/// pair contributes an infinite weight; callers are expected to pass paths
/// produced by the engine itself.
pub fn path_weight(g: &Graph, nodes: &[NodeIndex]) -> Weight {
    nodes
        .windows(2)
        .map(|pair| {
            g.edge_between(pair[0], pair[1])
                .map_or(Weight::INFINITY, |edge| edge.weight)
        })
        .sum()
}

fn neighbor_targets(g: &Graph, node: NodeIndex) -> Vec<NodeIndex> {
    g.neighbors(node).map(|(_, edge)| edge.target).collect()
}

#[cfg(test)]
mod tests {
    use crate::{edge, graph::node_index, node};

    use super::*;

    fn triangle() -> Graph {
        // A - B (1), B - C (1), A - C (5)
        let mut g = Graph::new();
        let a = g.add_node(node!("A", 0.0, 0.0));
        let b = g.add_node(node!("B", 1.0, 0.0));
        let c = g.add_node(node!("C", 2.0, 0.0));
        g.add_edge(edge!(a, b, 1.0));
        g.add_edge(edge!(b, c, 1.0));
        g.add_edge(edge!(a, c, 5.0));
        g
    }

    #[test]
    fn triangle_is_ranked_ascending() {
        let g = triangle();

        let ranked = all_simple_paths(&g, node_index(0), node_index(2), 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].nodes, vec![node_index(0), node_index(1), node_index(2)]);
        assert_eq!(ranked[0].weight, 2.0);
        assert_eq!(ranked[1].nodes, vec![node_index(0), node_index(2)]);
        assert_eq!(ranked[1].weight, 5.0);
    }

    #[test]
    fn keep_truncates_not_the_search() {
        let g = triangle();

        let ranked = all_simple_paths(&g, node_index(0), node_index(2), 1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].weight, 2.0);

        // keep larger than the path count returns everything
        let ranked = all_simple_paths(&g, node_index(0), node_index(2), 10);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn every_path_is_simple_and_consistent() {
        //   1 --- 3
        //  /|     |
        // 0 |     5
        //  \|     |
        //   2 --- 4
        let mut g = Graph::new();
        for i in 0..6 {
            g.add_node(node!(format!("N{i}"), 0.0, 0.0));
        }
        g.add_edge(edge!(node_index(0), node_index(1), 1.0));
        g.add_edge(edge!(node_index(0), node_index(2), 2.0));
        g.add_edge(edge!(node_index(1), node_index(2), 1.0));
        g.add_edge(edge!(node_index(1), node_index(3), 3.0));
        g.add_edge(edge!(node_index(2), node_index(4), 1.0));
        g.add_edge(edge!(node_index(3), node_index(5), 1.0));
        g.add_edge(edge!(node_index(4), node_index(5), 2.0));

        let ranked = all_simple_paths(&g, node_index(0), node_index(5), usize::MAX);

        assert!(!ranked.is_empty());
        for sp in &ranked {
            let mut seen = FxHashSet::default();
            assert!(sp.nodes.iter().all(|n| seen.insert(*n)), "path repeats a node");
            assert_eq!(sp.nodes.first(), Some(&node_index(0)));
            assert_eq!(sp.nodes.last(), Some(&node_index(5)));
            approx::assert_relative_eq!(sp.weight, path_weight(&g, &sp.nodes));
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].weight <= pair[1].weight);
        }
    }

    #[test]
    fn no_connection_yields_empty_ranking() {
        let mut g = Graph::new();
        for i in 0..4 {
            g.add_node(node!(format!("N{i}"), 0.0, 0.0));
        }
        g.add_edge(edge!(node_index(0), node_index(1), 1.0));
        g.add_edge(edge!(node_index(2), node_index(3), 1.0));

        assert!(all_simple_paths(&g, node_index(0), node_index(3), 10).is_empty());
    }
}
