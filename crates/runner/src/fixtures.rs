//! Textbook example graphs (CLRS figures 24.4, 24.6 and 25.1).

use common::error::Error;
use shortest_paths_core::{AdjacencyGraph, EdgeList};

/// Figure 24.6: non-negative weights, source `s`.
pub fn dijkstra_example() -> AdjacencyGraph<&'static str> {
    [
        ("s", vec![("t", 10.0), ("y", 5.0)]),
        ("t", vec![("x", 1.0), ("y", 2.0)]),
        ("x", vec![("z", 4.0)]),
        ("y", vec![("t", 3.0), ("x", 9.0), ("z", 2.0)]),
        ("z", vec![("s", 7.0), ("x", 6.0)]),
    ]
    .into_iter()
    .collect()
}

/// Figure 24.4: negative weights, no negative cycle, source `s`.
pub fn bellman_ford_example() -> Result<EdgeList<&'static str>, Error> {
    EdgeList::new(
        ["s", "t", "x", "y", "z"],
        vec![
            ("s", "t", 6.0),
            ("s", "y", 7.0),
            ("t", "x", 5.0),
            ("t", "y", 8.0),
            ("t", "z", -4.0),
            ("x", "t", -2.0),
            ("y", "x", -3.0),
            ("y", "z", 9.0),
            ("z", "x", 7.0),
            ("z", "s", 2.0),
        ],
    )
}

/// Figure 25.1: all-pairs example, strongly connected.
pub fn floyd_warshall_example() -> AdjacencyGraph<&'static str> {
    [
        ("1", vec![("2", 3.0), ("3", 8.0), ("5", -4.0)]),
        ("2", vec![("5", 7.0), ("4", 1.0)]),
        ("3", vec![("2", 4.0)]),
        ("4", vec![("3", -5.0), ("1", 2.0)]),
        ("5", vec![("4", 6.0)]),
    ]
    .into_iter()
    .collect()
}
