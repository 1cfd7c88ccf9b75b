use crate::constants::Weight;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::{fmt, hash::Hash};

pub mod builder;

/// Default integer type for node and edge indices.
/// Needs to be increased for very large graphs > u32::max
pub type DefaultIdx = u32;

pub trait IndexType: Copy + Default + Hash + Ord + fmt::Debug {
    fn new(idx: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

impl IndexType for usize {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x
    }
    #[inline(always)]
    fn index(&self) -> Self {
        *self
    }
    #[inline(always)]
    fn max() -> Self {
        usize::MAX
    }
}

impl IndexType for u32 {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u32
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        u32::MAX
    }
}

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex<Idx = DefaultIdx>(Idx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Idx: IndexType> From<Idx> for NodeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        NodeIndex(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex<Idx = DefaultIdx>(Idx);

impl<Idx: IndexType> From<Idx> for EdgeIndex<Idx> {
    fn from(ix: Idx) -> Self {
        EdgeIndex(ix)
    }
}

impl<Idx: IndexType> EdgeIndex<Idx> {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// An invalid `EdgeIndex` used to denote absence of an edge.
    #[inline]
    pub fn end() -> Self {
        EdgeIndex(IndexType::max())
    }
}

/// A city: unique case-sensitive name plus a 2-D position. The position is
/// only used as an A* heuristic input, not as a true road metric.
#[derive(Debug, Deserialize, Clone)]
pub struct Node {
    #[serde(rename = "city")]
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Node {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Node {
            name: name.into(),
            lat,
            lng,
        }
    }
}

/// An undirected weighted edge. `source`/`target` only record the order the
/// edge was defined in; traversal works in both directions.
#[derive(Debug, Clone)]
pub struct Edge<Idx = DefaultIdx> {
    pub source: NodeIndex<Idx>,
    pub target: NodeIndex<Idx>,
    pub weight: Weight,
}

impl Edge {
    pub fn new(
        source: NodeIndex<DefaultIdx>,
        target: NodeIndex<DefaultIdx>,
        weight: Weight,
    ) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    pub(crate) fn reverse(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
        }
    }
}

/// Undirected weighted graph of cities, immutable once built.
///
/// Nodes are keyed by city name; every name maps to exactly one dense
/// `NodeIndex`. Each undirected edge is stored once and referenced from the
/// adjacency list of both endpoints.
#[derive(Clone, Debug)]
pub struct Graph<Idx = DefaultIdx> {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge<Idx>>,
    pub adjacency: Vec<Vec<EdgeIndex<Idx>>>,
    name_index: FxHashMap<String, NodeIndex<Idx>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            adjacency: Vec::new(),
            name_index: FxHashMap::default(),
        }
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            adjacency: Vec::with_capacity(num_nodes),
            name_index: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
        }
    }

    /// Adds a new node to the graph.
    ///
    /// **Panics** if a node with the same name already exists
    /// **Panics** if the Graph is at the maximum number of nodes for its
    /// index type
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        let node_idx: NodeIndex = NodeIndex::new(self.nodes.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );
        assert!(
            !self.name_index.contains_key(&node.name),
            "Node {:?} already exists",
            node.name
        );

        // Create new entry in adjacency list for new node
        self.adjacency.push(Vec::new());

        self.name_index.insert(node.name.clone(), node_idx);
        self.nodes.push(node);

        node_idx
    }

    /// Add a new undirected `edge` to the graph.
    ///
    /// If an edge between the two endpoints already exists (in either
    /// definition order), its weight is overwritten with the new one: the
    /// graph is simple, not a multigraph, and the last written weight wins.
    ///
    /// **Panics** if the Graph is at the maximum number of edges for its
    /// index type
    /// **Panics** if the source or target node does not exist, or if they
    /// are the same node
    ///
    /// Returns the index of the created or overwritten edge.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeIndex {
        let edge_idx = EdgeIndex::new(self.edges.len());

        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );
        assert!(
            edge.source.index() < self.nodes.len(),
            "Source node index ({}) does not exist",
            edge.source.index()
        );
        assert!(
            edge.target.index() < self.nodes.len(),
            "Target node index ({}) does not exist",
            edge.target.index()
        );
        assert!(
            edge.source != edge.target,
            "Self-loops are not supported (node index {})",
            edge.source.index()
        );

        for old_idx in &self.adjacency[edge.source.index()] {
            let old_edge = &self.edges[old_idx.index()];
            if (old_edge.source == edge.source && old_edge.target == edge.target)
                || (old_edge.source == edge.target && old_edge.target == edge.source)
            {
                let old_idx = *old_idx;
                self.edges[old_idx.index()].weight = edge.weight;
                return old_idx;
            }
        }

        self.adjacency[edge.source.index()].push(edge_idx);
        self.adjacency[edge.target.index()].push(edge_idx);
        self.edges.push(edge);

        edge_idx
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(node_idx.index())
    }

    /// Looks up a node by its city name. Names are case-sensitive.
    pub fn node_by_name(&self, name: &str) -> Option<NodeIndex> {
        self.name_index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_index.contains_key(name)
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Returns an iterator over the edges incident to `node_idx`, each
    /// oriented so that `edge.source == node_idx`.
    pub fn neighbors(&self, node_idx: NodeIndex) -> impl Iterator<Item = (EdgeIndex, Edge)> + '_ {
        self.adjacency[node_idx.index()].iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            if edge.source == node_idx {
                (*edge_idx, edge.clone())
            } else {
                (*edge_idx, edge.reverse())
            }
        })
    }

    /// Returns the edge connecting `a` and `b`, if any.
    pub fn edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<&Edge> {
        self.adjacency[a.index()]
            .iter()
            .map(|edge_idx| &self.edges[edge_idx.index()])
            .find(|edge| {
                (edge.source == a && edge.target == b) || (edge.source == b && edge.target == a)
            })
    }

    pub fn degree(&self, node_idx: NodeIndex) -> usize {
        self.adjacency[node_idx.index()].len()
    }

    pub fn print_info(&self) {
        println!(
            "Graph:\t#Nodes: {}, #Edges: {}",
            self.nodes.len(),
            self.edges.len()
        );
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create an undirected edge between two nodes with a weight
///
/// edge!(a, b, 3.0)
#[macro_export]
macro_rules! edge {
    ($source:expr, $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $target.into(), $weight)
    };
}

/// Macro to create a node with a given name, lat, lng
/// node!("Paris", 48.85, 2.35)
#[macro_export]
macro_rules! node {
    ($name:expr, $lat:expr, $lng:expr) => {
        $crate::graph::Node::new($name, $lat, $lng)
    };
}
