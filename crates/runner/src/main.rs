pub mod config;
pub mod csv_loader;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod render;

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{error, info};

use common::types::Vertex;
use csv_loader::CsvLoader;
use error::Error;
use render::Renderer;
use shortest_paths_core::{
    AdjacencyGraph, AllPairsSolver, BellmanFordSolver, DijkstraSolver, FloydWarshallSolver,
    SingleSourceSolver,
};

/// Which engine to run on a loaded graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dijkstra,
    BellmanFord,
    FloydWarshall,
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "bellman-ford" | "bellman_ford" => Ok(Algorithm::BellmanFord),
            "floyd-warshall" | "floyd_warshall" => Ok(Algorithm::FloydWarshall),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

#[derive(Debug)]
pub enum Command {
    Clrs,
    Csv {
        path: PathBuf,
        algorithm: String,
        source: Option<String>,
    },
}

/// Solvers configured once from `[solver]`.
struct Solvers {
    dijkstra: DijkstraSolver,
    bellman_ford: BellmanFordSolver,
    floyd_warshall: FloydWarshallSolver,
}

impl Solvers {
    fn from_config(config: &config::SolverConfig) -> Self {
        Solvers {
            dijkstra: DijkstraSolver {
                reject_negative_weights: config.reject_negative_weights,
            },
            bellman_ford: BellmanFordSolver,
            floyd_warshall: FloydWarshallSolver {
                reject_negative_cycles: config.reject_negative_cycles,
            },
        }
    }
}

fn main() {
    let command = parse_args();

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init_tracing(&config.logging) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let solvers = Solvers::from_config(&config.solver);
    let renderer = Renderer::new(config.output.infinity_literal.as_str());

    if let Err(e) = run(command, &solvers, &renderer) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Parse command-line arguments to determine which graphs to solve
fn parse_args() -> Command {
    let args: Vec<String> = env::args().collect();
    let mode = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "clrs".to_string());

    match (mode.as_str(), args.get(2), args.get(3)) {
        ("clrs", _, _) => Command::Clrs,
        ("csv", Some(path), Some(algorithm)) => Command::Csv {
            path: PathBuf::from(path),
            algorithm: algorithm.clone(),
            source: args.get(4).cloned(),
        },
        _ => {
            eprintln!(
                "Usage: {} [clrs | csv <path_to_csv> <dijkstra|bellman-ford|floyd-warshall> [source]]\n  - CLRS: solve the textbook example graphs\n  - CSV: solve a graph read from a from,to,weight CSV file",
                args.first().map(String::as_str).unwrap_or("runner")
            );
            std::process::exit(1);
        }
    }
}

fn run(command: Command, solvers: &Solvers, renderer: &Renderer) -> Result<(), Error> {
    match command {
        Command::Clrs => run_examples(solvers, renderer),
        Command::Csv {
            path,
            algorithm,
            source,
        } => {
            let algorithm: Algorithm = algorithm.parse()?;
            let graph = CsvLoader::new(path).load_graph()?;
            print_lines(solve(&graph, algorithm, source.as_ref(), solvers, renderer)?);
            Ok(())
        }
    }
}

fn run_examples(solvers: &Solvers, renderer: &Renderer) -> Result<(), Error> {
    info!("solving textbook examples");

    println!("Dijkstra's Algorithm (from 's'):");
    let graph = fixtures::dijkstra_example();
    let distances = solvers.dijkstra.shortest_paths(&graph, &"s")?;
    print_lines(renderer.single_source(&distances));
    println!();

    println!("Bellman-Ford Algorithm (from 's'):");
    let edges = fixtures::bellman_ford_example()?;
    let distances = solvers.bellman_ford.solve_edge_list(&edges, &"s")?;
    print_lines(renderer.single_source(&distances));
    println!();

    println!("Floyd-Warshall Algorithm (All-pairs shortest paths):");
    let graph = fixtures::floyd_warshall_example();
    let distances = solvers.floyd_warshall.all_pairs(&graph)?;
    print_lines(renderer.all_pairs(&distances));
    println!();

    Ok(())
}

/// Runs `algorithm` on `graph` and renders the result.
fn solve<V: Vertex + Display>(
    graph: &AdjacencyGraph<V>,
    algorithm: Algorithm,
    source: Option<&V>,
    solvers: &Solvers,
    renderer: &Renderer,
) -> Result<Vec<String>, Error> {
    let single_source: &dyn SingleSourceSolver<V> = match algorithm {
        Algorithm::FloydWarshall => {
            let table = solvers.floyd_warshall.all_pairs(graph)?;
            return Ok(renderer.all_pairs(&table));
        }
        Algorithm::Dijkstra => &solvers.dijkstra,
        Algorithm::BellmanFord => &solvers.bellman_ford,
    };

    let source = source.ok_or_else(|| Error::MissingSource(format!("{:?}", algorithm)))?;
    let table = single_source.shortest_paths(graph, source)?;
    Ok(renderer.single_source(&table))
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}
