use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use shortest_paths_core::BellmanFordSolver;

fn main() {
    let graph = generate_grid_graph(GRID_SIDE);
    let edges = graph.to_edge_list();

    let start_time = Instant::now();
    let result = BellmanFordSolver.solve_edge_list(&edges, &0);
    let elapsed_time = start_time.elapsed();

    let table = match result {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Bellman-Ford failed: {}", e);
            std::process::exit(1);
        }
    };

    let final_checksum = black_box(checksum(table.distances().iter().copied()));

    println!(
        "--- Bellman-Ford Benchmark Results ({} Vertices, {} Edges) ---",
        edges.vertices().len(),
        edges.edges().len()
    );
    println!("Checksum: {:.10}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
