use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;
use std::path::PathBuf;
use tracing::{debug, error};

use super::error::Error;
use common::types::Edge;
use shortest_paths_core::AdjacencyGraph;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_vertex: String,

    #[serde(rename = "to")]
    pub to_vertex: String,

    #[serde(rename = "weight")]
    pub weight_value: f64,
}

/// Reads a headered `from,to,weight` CSV file into a graph. Columns beyond
/// those three are ignored.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: PathBuf) -> Self {
        CsvLoader { path }
    }

    fn parse_csv_to_edges(&self) -> Result<Vec<Edge<String>>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            error!(path = %self.path.display(), "failed to read edge file: {}", e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

        let mut edges = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            edges.push((record.from_vertex, record.to_vertex, record.weight_value));
        }
        Ok(edges)
    }

    /// Builds an adjacency graph, declaring vertices in order of first appearance.
    pub fn load_graph(&self) -> Result<AdjacencyGraph<String>, Error> {
        let edges = self.parse_csv_to_edges()?;

        let mut graph = AdjacencyGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }

        debug!(
            path = %self.path.display(),
            vertices = graph.len(),
            edges = graph.edge_count(),
            "loaded edge file"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MOCK_CSV_CONTENT: &str = "\
id,from,to,weight,note
1,s,t,6,first
2,s,y,7,
3,t,z,-4,negative
4,z,s,2,
";

    fn write_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(content.as_bytes())
            .expect("Failed to write mock content");
        temp_file
    }

    #[test]
    fn test_parse_csv_to_edges_success() {
        let temp_file = write_csv(MOCK_CSV_CONTENT);
        let loader = CsvLoader::new(temp_file.path().to_path_buf());
        let result = loader.parse_csv_to_edges();

        assert!(
            result.is_ok(),
            "Parsing failed with error: {:?}",
            result.err()
        );

        let edges = result.unwrap();

        let expected_edges: Vec<Edge<String>> = vec![
            ("s".into(), "t".into(), 6.0),
            ("s".into(), "y".into(), 7.0),
            ("t".into(), "z".into(), -4.0),
            ("z".into(), "s".into(), 2.0),
        ];

        assert_eq!(edges, expected_edges, "Parsed edges do not match expected data.");
    }

    #[test]
    fn test_load_graph_declares_vertices_in_appearance_order() {
        let temp_file = write_csv(MOCK_CSV_CONTENT);
        let graph = CsvLoader::new(temp_file.path().to_path_buf())
            .load_graph()
            .unwrap();

        assert_eq!(graph.vertices(), &["s", "t", "y", "z"]);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(
            graph.neighbors(&"s".to_string()),
            Some(&[("t".to_string(), 6.0), ("y".to_string(), 7.0)][..])
        );
    }

    #[test]
    fn test_malformed_weight_is_rejected() {
        let temp_file = write_csv("from,to,weight\na,b,heavy\n");
        let result = CsvLoader::new(temp_file.path().to_path_buf()).load_graph();

        assert!(matches!(result, Err(Error::CsvError(_))));
    }

    #[test]
    fn test_parse_csv_to_edges_file_not_found() {
        let loader = CsvLoader::new(PathBuf::from("non_existent_file.csv"));
        let result = loader.parse_csv_to_edges();

        if let Err(Error::IoError(e)) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected IoError, got: {:?}", result);
        }
    }
}
