use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::graph::{DirectedGraph, MutableGraph};
use crate::{Error, Result};

/// One weighted edge of a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JsonEdge {
    pub u: usize,
    pub v: usize,
    pub w: u64,
}

impl JsonEdge {
    pub fn new(u: usize, v: usize, w: u64) -> Self {
        JsonEdge { u, v, w }
    }
}

/// Edge-list description of a directed weighted graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default = "default_directed")]
    pub directed: bool,
    pub n: usize,
    #[serde(default)]
    pub edges: Vec<JsonEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<usize>,
    #[serde(default = "default_weight_model")]
    pub weight_model: String,
}

fn default_directed() -> bool { true }
fn default_weight_model() -> String { "edge".to_string() }

impl Dataset {
    /// Creates a directed dataset with `n` vertices, no edges and source 0
    pub fn new(n: usize) -> Self {
        Dataset {
            directed: true,
            n,
            edges: Vec::new(),
            source: Some(0),
            weight_model: default_weight_model(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads a dataset from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let dataset = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!(
            "Loaded {} (n={}, edges={})",
            path.display(),
            dataset.n,
            dataset.edges.len()
        );
        Ok(dataset)
    }

    /// Writes the dataset as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json_string()?)?;
        info!(
            "Wrote {} (n={}, edges={})",
            path.display(),
            self.n,
            self.edges.len()
        );
        Ok(())
    }

    /// Designated source vertex, 0 when absent
    pub fn source(&self) -> usize {
        self.source.unwrap_or(0)
    }

    /// Builds the graph store for this dataset.
    ///
    /// Fails with `InvalidArgument` for an undirected dataset or a source
    /// outside a non-empty graph, and with `InvalidVertex` for an edge endpoint
    /// outside `[0, n)`.
    pub fn to_graph(&self) -> Result<DirectedGraph<u64>> {
        if !self.directed {
            return Err(Error::InvalidArgument(
                "only directed datasets are supported".to_string(),
            ));
        }
        if self.n > 0 && self.source() >= self.n {
            return Err(Error::InvalidArgument(format!(
                "source {} is outside a graph of {} vertices",
                self.source(),
                self.n
            )));
        }

        let mut graph = DirectedGraph::with_capacity(self.n);
        for edge in &self.edges {
            graph.add_edge(edge.u, edge.v, edge.w)?;
        }
        Ok(graph)
    }
}
