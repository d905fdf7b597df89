use std::fmt::Display;

use common::numeric_kernel::UNREACHABLE;
use common::types::{Vertex, Weight};
use shortest_paths_core::{AllPairsTable, DistanceTable};

/// Formats result tables for the console, printing the unreachable sentinel
/// as a fixed literal instead of a number.
pub struct Renderer {
    infinity_literal: String,
}

impl Renderer {
    pub fn new(infinity_literal: impl Into<String>) -> Self {
        Renderer {
            infinity_literal: infinity_literal.into(),
        }
    }

    pub fn distance(&self, distance: Weight) -> String {
        if distance == UNREACHABLE {
            self.infinity_literal.clone()
        } else {
            distance.to_string()
        }
    }

    pub fn single_source<V: Vertex + Display>(&self, table: &DistanceTable<V>) -> Vec<String> {
        table
            .iter()
            .map(|(vertex, distance)| {
                format!("Distance to {}: {}", vertex, self.distance(distance))
            })
            .collect()
    }

    pub fn all_pairs<V: Vertex + Display>(&self, table: &AllPairsTable<V>) -> Vec<String> {
        table
            .iter()
            .map(|(from, to, distance)| {
                format!("Shortest path {} → {}: {}", from, to, self.distance(distance))
            })
            .collect()
    }
}
