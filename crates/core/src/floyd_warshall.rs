use common::error::Error;
use common::numeric_kernel::{UNREACHABLE, extend, relax};
use common::types::{Vertex, Weight};
use tracing::{debug, warn};

use super::csr::GraphCSR;
use super::graph::AdjacencyGraph;
use super::table::AllPairsTable;
use super::traits::AllPairsSolver;

/// Solver implementing Floyd-Warshall over a dense |V|×|V| table.
///
/// Parallel edges contribute their minimum weight. A negative cycle through
/// `v` leaves `dist[v][v] < 0`; by default the table is returned as is, with
/// `reject_negative_cycles` the solver fails with `Error::NegativeCycle`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydWarshallSolver {
    pub reject_negative_cycles: bool,
}

impl FloydWarshallSolver {
    pub fn strict() -> Self {
        Self {
            reject_negative_cycles: true,
        }
    }
}

/// Dynamic programme over intermediate vertices; returns the row-major matrix.
pub(crate) fn run(graph: &GraphCSR) -> Vec<Weight> {
    let n = graph.num_nodes;
    let mut dist = vec![UNREACHABLE; n * n];

    for u in 0..n {
        dist[u * n + u] = 0.0;
    }
    for (u, v, weight) in graph.edges() {
        relax(&mut dist[u * n + v], weight);
    }

    for k in 0..n {
        for i in 0..n {
            let d_ik = dist[i * n + k];
            if d_ik == UNREACHABLE {
                continue;
            }
            for j in 0..n {
                let candidate = extend(d_ik, dist[k * n + j]);
                relax(&mut dist[i * n + j], candidate);
            }
        }
    }

    dist
}

impl<V: Vertex> AllPairsSolver<V> for FloydWarshallSolver {
    fn all_pairs(&self, graph: &AdjacencyGraph<V>) -> Result<AllPairsTable<V>, Error> {
        let csr = GraphCSR::from_adjacency(graph)?;

        debug!(
            vertices = csr.num_nodes,
            edges = csr.num_edges(),
            "running floyd-warshall"
        );
        let table = AllPairsTable::new(graph.vertex_index().clone(), run(&csr));
        debug!(
            negative_cycle = table.has_negative_cycle(),
            "floyd-warshall finished"
        );

        if self.reject_negative_cycles && table.has_negative_cycle() {
            warn!(
                vertices = ?table.negative_cycle_vertices(),
                "negative self-distance after floyd-warshall"
            );
            return Err(Error::NegativeCycle);
        }

        Ok(table)
    }
}

#[cfg(test)]
mod floyd_warshall_tests {
    use super::*;

    fn clrs_25_1() -> AdjacencyGraph<&'static str> {
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
    fn clrs_figure_25_1() {
        let table = FloydWarshallSolver::default().all_pairs(&clrs_25_1()).unwrap();

        #[rustfmt::skip]
        let expected = [
            [0.0, 1.0, -3.0, 2.0, -4.0],
            [3.0, 0.0, -4.0, 1.0, -1.0],
            [7.0, 4.0, 0.0, 5.0, 3.0],
            [2.0, -1.0, -5.0, 0.0, -2.0],
            [8.0, 5.0, 1.0, 6.0, 0.0],
        ];
        let labels = ["1", "2", "3", "4", "5"];
        for (i, from) in labels.iter().enumerate() {
            for (j, to) in labels.iter().enumerate() {
                assert_eq!(table.get(from, to), Some(expected[i][j]), "{from} -> {to}");
            }
        }
        assert!(!table.has_negative_cycle());
    }

    #[test]
    fn parallel_edges_keep_minimum() {
        let graph: AdjacencyGraph<char> = [('a', vec![('b', 2.0), ('b', 9.0)]), ('b', vec![])]
            .into_iter()
            .collect();

        let table = FloydWarshallSolver::default().all_pairs(&graph).unwrap();
        assert_eq!(table.get(&'a', &'b'), Some(2.0));
        assert_eq!(table.get(&'b', &'a'), Some(UNREACHABLE));
    }

    #[test]
    fn positive_self_loop_keeps_zero_diagonal() {
        let graph: AdjacencyGraph<char> = [('a', vec![('a', 4.0)])].into_iter().collect();

        let table = FloydWarshallSolver::default().all_pairs(&graph).unwrap();
        assert_eq!(table.get(&'a', &'a'), Some(0.0));
    }

    #[test]
    fn negative_cycle_shows_on_diagonal() {
        let graph: AdjacencyGraph<char> = [
            ('a', vec![('b', 1.0)]),
            ('b', vec![('a', -2.0)]),
            ('c', vec![]),
        ]
        .into_iter()
        .collect();

        let table = FloydWarshallSolver::default().all_pairs(&graph).unwrap();
        assert_eq!(table.negative_cycle_vertices(), vec![&'a', &'b']);
        assert_eq!(table.get(&'c', &'c'), Some(0.0));
    }

    #[test]
    fn strict_solver_reports_negative_cycle() {
        let graph: AdjacencyGraph<char> = [('a', vec![('a', -1.0)])].into_iter().collect();

        let result = FloydWarshallSolver::strict().all_pairs(&graph);
        assert_eq!(result, Err(Error::NegativeCycle));
    }

    #[test]
    fn empty_graph_gives_empty_table() {
        let graph: AdjacencyGraph<char> = AdjacencyGraph::new();
        let table = FloydWarshallSolver::strict().all_pairs(&graph).unwrap();

        assert!(table.is_empty());
        assert_eq!(table.iter().count(), 0);
    }

    #[test]
    fn undeclared_neighbor_fails_fast() {
        let graph: AdjacencyGraph<char> = [('a', vec![('z', 1.0)])].into_iter().collect();
        let result = FloydWarshallSolver::default().all_pairs(&graph);
        assert_eq!(result, Err(Error::UndeclaredVertex("'z'".into())));
    }
}
