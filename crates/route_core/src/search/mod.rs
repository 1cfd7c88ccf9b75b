use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::graph::NodeIndex;

use self::shortest_path::ShortestPath;

pub mod all_paths;
pub mod astar;
pub mod dijkstra;
pub mod shortest_path;

/// Walks the predecessor map from `target` back to `source` and returns the
/// reconstructed path, or `None` if `target` was never reached.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    node_data: &FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
) -> Option<ShortestPath> {
    let mut path = vec![target];
    let weight = node_data.get(&target)?.0;

    let mut previous_node = node_data.get(&target)?.1?;

    while let Some(prev_node) = node_data.get(&previous_node)?.1 {
        path.push(previous_node);
        previous_node = prev_node;
    }
    path.push(source);
    path.reverse();
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<usize>,
    expected_weight: Weight,
    path: Option<ShortestPath>,
) {
    let path = path.expect("Expected a path, got none");
    assert_eq!(
        path.nodes
            .iter()
            .map(|node| node.index())
            .collect::<Vec<_>>(),
        expected_path
    );
    approx::assert_relative_eq!(path.weight, expected_weight);
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<ShortestPath>) {
    assert!(path.is_none(), "Expected no path, got {:?}", path);
}
