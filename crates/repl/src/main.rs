//! Interactive front-end over the city route engine.
use std::path::PathBuf;
use std::time::{Duration, Instant};

use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::prelude::*;

#[derive(Default)]
struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} nodes and {} edges",
        context.graph.nodes.len(),
        context.graph.edges.len()
    )))
}

fn format_path(engine: &RouteEngine, path: &ShortestPath, elapsed: Duration) -> String {
    format!(
        "{} (weight {}, took {:?})",
        engine.path_names(path).join(" -> "),
        path.weight,
        elapsed
    )
}

fn check_cities(engine: &RouteEngine, from: &str, to: &str) -> Option<String> {
    if !engine.node_exists(from) {
        return Some(format!("City {from:?} is not in the graph"));
    }
    if !engine.node_exists(to) {
        return Some(format!("City {to:?} is not in the graph"));
    }
    None
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = args.get_one::<String>("from").unwrap();
    let to = args.get_one::<String>("to").unwrap();

    let engine = RouteEngine::new(&context.graph);
    if let Some(msg) = check_cities(&engine, from, to) {
        return Ok(Some(msg));
    }

    let started = Instant::now();
    match engine.dijkstra(from, to) {
        Ok(Some(path)) => Ok(Some(format_path(&engine, &path, started.elapsed()))),
        Ok(None) => Ok(Some(format!("No path from {from} to {to}"))),
        Err(err) => Ok(Some(err.to_string())),
    }
}

fn run_astar(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = args.get_one::<String>("from").unwrap();
    let to = args.get_one::<String>("to").unwrap();

    let engine = RouteEngine::new(&context.graph);
    if let Some(msg) = check_cities(&engine, from, to) {
        return Ok(Some(msg));
    }

    let started = Instant::now();
    match engine.astar(from, to) {
        Ok(Some(path)) => Ok(Some(format_path(&engine, &path, started.elapsed()))),
        Ok(None) => Ok(Some(format!("No path from {from} to {to}"))),
        Err(err) => Ok(Some(err.to_string())),
    }
}

fn run_alternatives(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = args.get_one::<String>("from").unwrap();
    let to = args.get_one::<String>("to").unwrap();
    let keep = *args.get_one::<usize>("k").unwrap_or(&10);

    let engine = RouteEngine::new(&context.graph);
    if let Some(msg) = check_cities(&engine, from, to) {
        return Ok(Some(msg));
    }

    match engine.all_paths(from, to, keep) {
        Ok(ranked) if ranked.is_empty() => Ok(Some(format!("No path from {from} to {to}"))),
        Ok(ranked) => {
            let mut res = format!("The {} shortest routes:\n", ranked.len());
            for path in &ranked {
                res.push_str(&format!(
                    "{} (weight {})\n",
                    engine.path_names(path).join(" -> "),
                    path.weight
                ));
            }
            Ok(Some(res))
        }
        Err(err) => Ok(Some(err.to_string())),
    }
}

fn measure_routes(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::Rng;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    if context.graph.nodes.is_empty() {
        return Ok(Some("Graph is empty".to_string()));
    }

    let mut rng = rand::thread_rng();
    let engine = RouteEngine::new(&context.graph);

    let mut res = String::new();
    for _ in 0..n {
        let from = &context.graph.nodes[rng.gen_range(0..context.graph.nodes.len())].name;
        let to = &context.graph.nodes[rng.gen_range(0..context.graph.nodes.len())].name;

        let started = Instant::now();
        match engine.dijkstra(from, to) {
            Ok(Some(path)) => res.push_str(&format!(
                "{} -> {}: weight {}, {:?}\n",
                from,
                to,
                path.weight,
                started.elapsed()
            )),
            Ok(None) => res.push_str(&format!("{} -> {}: no path\n", from, to)),
            Err(err) => res.push_str(&format!("{err}\n")),
        }
    }

    Ok(Some(res))
}

fn main() -> Result<()> {
    env_logger::init();

    let city_file = std::env::args().nth(1).expect("No city file given");
    let graph_file = std::env::args().nth(2).expect("No graph file given");
    let graph = GraphBuilder::new(city_file, graph_file)
        .build()
        .expect("Failed to build graph");
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Trip planner")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query routes between cities")
        .with_banner("Welcome to the trip planner")
        .with_history(PathBuf::from(".history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("route")
                .arg(Arg::new("from").required(true).help("Departure city"))
                .arg(Arg::new("to").required(true).help("Destination city"))
                .about("Calculate shortest path using Dijkstra's algorithm"),
            run_route,
        )
        .with_command(
            Command::new("astar")
                .arg(Arg::new("from").required(true).help("Departure city"))
                .arg(Arg::new("to").required(true).help("Destination city"))
                .about("Calculate shortest path using A* search"),
            run_astar,
        )
        .with_command(
            Command::new("alt")
                .arg(Arg::new("from").required(true).help("Departure city"))
                .arg(Arg::new("to").required(true).help("Destination city"))
                .arg(
                    Arg::new("k")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of alternative routes to keep"),
                )
                .about("List ranked alternative routes"),
            run_alternatives,
        )
        .with_command(
            Command::new("routem")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random route queries to time"),
                )
                .about("Measure `n` random route calculations"),
            measure_routes,
        );

    repl.run()
}
