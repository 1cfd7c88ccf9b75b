//! Construction of a [`Graph`] from the two static data sources: a CSV file
//! of cities (`city,lat,lng`) and a JSON file of weighted connections
//! (`graph: [{from_city, to_cities: [{name, weight}]}]`).
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context};
use log::info;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;

use crate::constants::Weight;
use crate::graph::{Edge, Graph, Node, NodeIndex};

#[derive(Debug, Deserialize)]
struct EdgeFile {
    graph: Vec<CityConnections>,
}

#[derive(Debug, Deserialize)]
struct CityConnections {
    from_city: String,
    to_cities: Vec<Connection>,
}

#[derive(Debug, Deserialize)]
struct Connection {
    name: String,
    weight: Weight,
}

/// Builds one immutable city graph from the two data files.
///
/// Any malformed row, unknown edge endpoint, duplicate city name or negative
/// weight is a fatal construction error: there is no partial graph. After
/// all edges are applied, cities with no connections are removed, so every
/// node in the returned graph has degree >= 1.
pub struct GraphBuilder {
    city_file: PathBuf,
    graph_file: PathBuf,
}

impl GraphBuilder {
    pub fn new(city_file: impl Into<PathBuf>, graph_file: impl Into<PathBuf>) -> Self {
        Self {
            city_file: city_file.into(),
            graph_file: graph_file.into(),
        }
    }

    pub fn build(&self) -> anyhow::Result<Graph> {
        let mut nodes = Vec::new();
        let mut seen: FxHashSet<String> = FxHashSet::default();

        let mut reader = csv::Reader::from_path(&self.city_file)
            .with_context(|| format!("Failed to open city file {:?}", self.city_file))?;
        for result in reader.deserialize() {
            let node: Node = result.context("Failed to parse city row")?;
            if !seen.insert(node.name.clone()) {
                bail!("Duplicate city {:?} in {:?}", node.name, self.city_file);
            }
            nodes.push(node);
        }

        let file = File::open(&self.graph_file)
            .with_context(|| format!("Failed to open graph file {:?}", self.graph_file))?;
        let edge_file: EdgeFile = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse graph file {:?}", self.graph_file))?;

        let num_edges: usize = edge_file.graph.iter().map(|c| c.to_cities.len()).sum();

        let mut g = Graph::with_capacity(nodes.len(), num_edges);
        for node in nodes {
            g.add_node(node);
        }

        for connections in &edge_file.graph {
            let from = g.node_by_name(&connections.from_city).with_context(|| {
                format!("Edge source {:?} is not a known city", connections.from_city)
            })?;
            for connection in &connections.to_cities {
                let to = g.node_by_name(&connection.name).with_context(|| {
                    format!("Edge target {:?} is not a known city", connection.name)
                })?;
                if connection.weight < 0.0 {
                    bail!(
                        "Negative weight {} on edge {:?} - {:?}",
                        connection.weight,
                        connections.from_city,
                        connection.name
                    );
                }
                if from == to {
                    bail!("Edge from {:?} to itself", connections.from_city);
                }
                g.add_edge(Edge::new(from, to, connection.weight));
            }
        }

        let num_loaded = g.nodes.len();
        let g = prune_isolated(g);

        info!(
            "Built graph with {} nodes and {} edges ({} isolated cities pruned)",
            g.nodes.len(),
            g.edges.len(),
            num_loaded - g.nodes.len()
        );

        Ok(g)
    }
}

/// Rebuilds the graph over the subset of nodes with degree >= 1. Node
/// indices stay dense; edge weights and definition order are preserved.
fn prune_isolated(g: Graph) -> Graph {
    let keep: Vec<NodeIndex> = (0..g.nodes.len())
        .map(NodeIndex::new)
        .filter(|&idx| g.degree(idx) > 0)
        .collect();

    if keep.len() == g.nodes.len() {
        return g;
    }

    let mut pruned = Graph::with_capacity(keep.len(), g.edges.len());
    let mut remap: FxHashMap<NodeIndex, NodeIndex> =
        FxHashMap::with_capacity_and_hasher(keep.len(), Default::default());

    for old_idx in keep {
        let new_idx = pruned.add_node(g.nodes[old_idx.index()].clone());
        remap.insert(old_idx, new_idx);
    }

    // Every edge endpoint has degree >= 1 and is therefore in the remap
    for edge in g.edges() {
        pruned.add_edge(Edge::new(
            remap[&edge.source],
            remap[&edge.target],
            edge.weight,
        ));
    }

    pruned
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn build_from_test_data() {
        let g = GraphBuilder::new(
            Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/cities.csv"),
            Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/routes.json"),
        )
        .build()
        .unwrap();

        // Ajaccio has no connections and is pruned
        assert_eq!(g.nodes.len(), 8);
        assert!(!g.contains("Ajaccio"));
        assert!(g.contains("Paris"));

        for idx in 0..g.nodes.len() {
            assert!(g.degree(NodeIndex::new(idx)) >= 1);
        }

        let lille = g.node_by_name("Lille").unwrap();
        let paris = g.node_by_name("Paris").unwrap();
        assert_eq!(g.edge_between(lille, paris).map(|e| e.weight), Some(2.0));
    }

    #[test]
    fn unknown_edge_endpoint_is_fatal() {
        let cities = write_temp("builder_unknown_cities.csv", "city,lat,lng\nA,0.0,0.0\nB,1.0,0.0\n");
        let routes = write_temp(
            "builder_unknown_routes.json",
            r#"{"graph": [{"from_city": "A", "to_cities": [{"name": "Nowhere", "weight": 1.0}]}]}"#,
        );

        let err = GraphBuilder::new(cities, routes).build().unwrap_err();
        assert!(err.to_string().contains("Nowhere"));
    }

    #[test]
    fn negative_weight_is_fatal() {
        let cities = write_temp("builder_negative_cities.csv", "city,lat,lng\nA,0.0,0.0\nB,1.0,0.0\n");
        let routes = write_temp(
            "builder_negative_routes.json",
            r#"{"graph": [{"from_city": "A", "to_cities": [{"name": "B", "weight": -2.0}]}]}"#,
        );

        assert!(GraphBuilder::new(cities, routes).build().is_err());
    }

    #[test]
    fn malformed_city_row_is_fatal() {
        let cities = write_temp("builder_malformed_cities.csv", "city,lat,lng\nA,not-a-number,0.0\n");
        let routes = write_temp("builder_malformed_routes.json", r#"{"graph": []}"#);

        assert!(GraphBuilder::new(cities, routes).build().is_err());
    }

    #[test]
    fn duplicate_city_is_fatal() {
        let cities = write_temp(
            "builder_duplicate_cities.csv",
            "city,lat,lng\nA,0.0,0.0\nA,1.0,0.0\n",
        );
        let routes = write_temp("builder_duplicate_routes.json", r#"{"graph": []}"#);

        assert!(GraphBuilder::new(cities, routes).build().is_err());
    }

    #[test]
    fn redefined_edge_takes_last_weight() {
        let cities = write_temp("builder_redefined_cities.csv", "city,lat,lng\nA,0.0,0.0\nB,1.0,0.0\n");
        let routes = write_temp(
            "builder_redefined_routes.json",
            r#"{"graph": [
                {"from_city": "A", "to_cities": [{"name": "B", "weight": 1.0}]},
                {"from_city": "B", "to_cities": [{"name": "A", "weight": 4.0}]}
            ]}"#,
        );

        let g = GraphBuilder::new(cities, routes).build().unwrap();
        assert_eq!(g.edges.len(), 1);
        assert_eq!(g.edges[0].weight, 4.0);
    }
}
