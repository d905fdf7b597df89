use std::hint::black_box;
use std::time::Instant;

use perf_bench::*;
use shortest_paths_core::floyd_warshall;

fn main() {
    let graph = generate_grid_graph(DENSE_GRID_SIDE);

    let start_time = Instant::now();
    let result = floyd_warshall(&graph);
    let elapsed_time = start_time.elapsed();

    let table = match result {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Floyd-Warshall failed: {}", e);
            std::process::exit(1);
        }
    };

    let final_checksum = black_box(checksum(table.iter().map(|(_, _, d)| d)));

    println!(
        "--- Floyd-Warshall Benchmark Results ({} Vertices, {} Edges) ---",
        graph.len(),
        graph.edge_count()
    );
    println!("Checksum: {:.10}", final_checksum);
    println!("Elapsed Time: {:?}", elapsed_time);
}
