use common::error::Error;
use common::numeric_kernel::UNREACHABLE;
use shortest_paths_core::{
    AdjacencyGraph, AllPairsSolver, BellmanFordSolver, DijkstraSolver, FloydWarshallSolver,
    SingleSourceSolver, bellman_ford, dijkstra, floyd_warshall,
};

fn dijkstra_graph() -> AdjacencyGraph<&'static str> {
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

fn bellman_ford_edges() -> Vec<(&'static str, &'static str, f64)> {
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
    ]
}

fn floyd_warshall_graph() -> AdjacencyGraph<&'static str> {
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

#[test]
fn scenario_dijkstra_clrs_24_6() {
    let table = dijkstra(&dijkstra_graph(), &"s").unwrap();

    for (vertex, expected) in [("s", 0.0), ("t", 8.0), ("x", 9.0), ("y", 5.0), ("z", 7.0)] {
        assert_eq!(table.get(&vertex), Some(expected), "distance to {vertex}");
    }
}

#[test]
fn scenario_bellman_ford_clrs_24_4() {
    let vertices = ["s", "t", "x", "y", "z"];
    let table = bellman_ford(&bellman_ford_edges(), &vertices, &"s").unwrap();

    let distances: Vec<_> = table.iter().map(|(v, d)| (*v, d)).collect();
    assert_eq!(
        distances,
        vec![("s", 0.0), ("t", 2.0), ("x", 4.0), ("y", 7.0), ("z", -2.0)]
    );
}

#[test]
fn scenario_bellman_ford_negative_cycle() {
    let result = bellman_ford(&[("a", "b", 1.0), ("b", "a", -2.0)], &["a", "b"], &"a");
    assert_eq!(result, Err(Error::NegativeCycle));
}

#[test]
fn bellman_ford_rejects_duplicate_vertices() {
    let result = bellman_ford(&[("a", "b", 1.0)], &["a", "b", "a"], &"a");
    assert_eq!(result, Err(Error::DuplicateVertex("\"a\"".into())));
}

#[test]
fn scenario_floyd_warshall_clrs_25_1() {
    let table = floyd_warshall(&floyd_warshall_graph()).unwrap();

    assert_eq!(table.get(&"1", &"4"), Some(2.0));
    assert_eq!(table.get(&"2", &"4"), Some(1.0));
    assert_eq!(table.get(&"5", &"1"), Some(8.0));
    assert_eq!(table.get(&"4", &"3"), Some(-5.0));
    assert!(table.iter().all(|(_, _, d)| d != UNREACHABLE));
    assert!(table.negative_cycle_vertices().is_empty());
}

#[test]
fn floyd_warshall_rows_match_bellman_ford_on_clrs_25_1() {
    let graph = floyd_warshall_graph();
    let table = floyd_warshall(&graph).unwrap();

    for source in graph.vertices() {
        let single = BellmanFordSolver.shortest_paths(&graph, source).unwrap();
        assert_eq!(table.row(source).unwrap(), single, "row {source}");
    }
}

#[test]
fn solvers_are_interchangeable_behind_the_trait() {
    let graph = dijkstra_graph();
    let solvers: Vec<Box<dyn SingleSourceSolver<&str>>> = vec![
        Box::new(DijkstraSolver::default()),
        Box::new(DijkstraSolver::strict()),
        Box::new(BellmanFordSolver),
    ];

    let tables: Vec<_> = solvers
        .iter()
        .map(|solver| solver.shortest_paths(&graph, &"s").unwrap())
        .collect();

    assert!(tables.windows(2).all(|pair| pair[0] == pair[1]));

    let all_pairs = FloydWarshallSolver::strict().all_pairs(&graph).unwrap();
    assert_eq!(all_pairs.row(&"s").unwrap(), tables[0]);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let graph = floyd_warshall_graph();

    assert_eq!(floyd_warshall(&graph).unwrap(), floyd_warshall(&graph).unwrap());
    assert_eq!(
        dijkstra(&dijkstra_graph(), &"y").unwrap(),
        dijkstra(&dijkstra_graph(), &"y").unwrap()
    );
}

#[test]
fn shared_graph_across_threads() {
    let graph = dijkstra_graph();
    let expected = dijkstra(&graph, &"s").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let graph = &graph;
                scope.spawn(move || {
                    if i % 2 == 0 {
                        dijkstra(graph, &"s").unwrap()
                    } else {
                        BellmanFordSolver.shortest_paths(graph, &"s").unwrap()
                    }
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
