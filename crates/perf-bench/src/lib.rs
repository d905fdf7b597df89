// ----------------------------
// Benchmark graph generation
// ----------------------------

use shortest_paths_core::AdjacencyGraph;

/// Side length of the square grid used by the single-source benchmarks.
pub const GRID_SIDE: usize = 300;

/// Side length used for Floyd-Warshall, whose cost is cubic in |V|.
pub const DENSE_GRID_SIDE: usize = 20;

/// Generates a `side`×`side` grid where every cell links right and down to
/// its neighbours and back left, with weights varied by position.
///
/// Weights are non-negative so every engine can run on the same graph.
pub fn generate_grid_graph(side: usize) -> AdjacencyGraph<usize> {
    let mut graph = AdjacencyGraph::new();
    for cell in 0..side * side {
        graph.add_vertex(cell);
    }

    for row in 0..side {
        for col in 0..side {
            let cell = row * side + col;
            // Weight varied by position so no two paths tie trivially.
            let weight = 1.0 + ((row * 31 + col * 17) % 10) as f64;

            if col + 1 < side {
                graph.add_edge(cell, cell + 1, weight);
            }
            if row + 1 < side {
                graph.add_edge(cell, cell + side, weight + 0.5);
            }
            if col > 0 {
                graph.add_edge(cell, cell - 1, weight * 2.0);
            }
        }
    }

    graph
}

/// Sum of all finite distances; printed so the work cannot be optimised away.
pub fn checksum(distances: impl IntoIterator<Item = f64>) -> f64 {
    distances.into_iter().filter(|d| d.is_finite()).sum()
}
