//! Small hand-built graphs shared by tests, doctests and the demo binary.
use crate::{edge, graph::Graph, node};

/// A - B (1), B - C (1), A - C (5): the cheapest route from A to C goes
/// around via B.
pub fn generate_triangle_graph() -> Graph {
    let mut graph = Graph::new();

    let a = graph.add_node(node!("A", 0.0, 0.0));
    let b = graph.add_node(node!("B", 1.0, 0.0));
    let c = graph.add_node(node!("C", 2.0, 0.0));

    graph.add_edge(edge!(a, b, 1.0));
    graph.add_edge(edge!(b, c, 1.0));
    graph.add_edge(edge!(a, c, 5.0));

    graph
}

/// A small French city network mirroring the shape of the bundled
/// `test_data` files.
pub fn generate_city_graph() -> Graph {
    let mut graph = Graph::new();

    let lille = graph.add_node(node!("Lille", 50.6292, 3.0573));
    let paris = graph.add_node(node!("Paris", 48.8566, 2.3522));
    let strasbourg = graph.add_node(node!("Strasbourg", 48.5734, 7.7521));
    let nantes = graph.add_node(node!("Nantes", 47.2184, -1.5536));
    let lyon = graph.add_node(node!("Lyon", 45.764, 4.8357));
    let bordeaux = graph.add_node(node!("Bordeaux", 44.8378, -0.5792));
    let toulouse = graph.add_node(node!("Toulouse", 43.6047, 1.4442));
    let marseille = graph.add_node(node!("Marseille", 43.2965, 5.3698));

    graph.add_edge(edge!(lille, paris, 2.0));
    graph.add_edge(edge!(paris, strasbourg, 5.0));
    graph.add_edge(edge!(paris, lyon, 4.5));
    graph.add_edge(edge!(paris, nantes, 3.5));
    graph.add_edge(edge!(paris, bordeaux, 5.5));
    graph.add_edge(edge!(lyon, strasbourg, 4.5));
    graph.add_edge(edge!(lyon, marseille, 3.0));
    graph.add_edge(edge!(lyon, toulouse, 5.0));
    graph.add_edge(edge!(toulouse, bordeaux, 2.5));
    graph.add_edge(edge!(toulouse, marseille, 4.0));
    graph.add_edge(edge!(bordeaux, nantes, 3.0));

    graph
}
