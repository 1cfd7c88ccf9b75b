use std::path::Path;

use route_core::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let graph = GraphBuilder::new(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/cities.csv"),
        Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/routes.json"),
    )
    .build()?;
    graph.print_info();

    let engine = RouteEngine::new(&graph);

    let (from, to) = ("Lille", "Marseille");

    match engine.dijkstra(from, to)? {
        Some(path) => println!(
            "Dijkstra: {} (weight {})",
            engine.path_names(&path).join(" -> "),
            path.weight
        ),
        None => println!("Dijkstra: no path from {from} to {to}"),
    }

    match engine.astar(from, to)? {
        Some(path) => println!(
            "A*:       {} (weight {})",
            engine.path_names(&path).join(" -> "),
            path.weight
        ),
        None => println!("A*:       no path from {from} to {to}"),
    }

    println!("Alternative routes:");
    for path in engine.all_paths(from, to, 5)? {
        println!(
            "  {} (weight {})",
            engine.path_names(&path).join(" -> "),
            path.weight
        );
    }

    Ok(())
}
