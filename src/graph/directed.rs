use std::fmt;

use indexmap::IndexSet;

use crate::graph::traits::{Graph, MutableGraph, Weight};
use crate::{Error, Result};

/// A directed weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

impl<W: Weight> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "->{}(w={})", self.to, self.weight)
    }
}

/// A directed graph implementation using adjacency sets.
///
/// Within one source vertex an edge is identified by `(to, weight)`: re-adding
/// the same triple is a no-op, while two edges to the same target with
/// different weights are both kept. Outgoing edges iterate in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Number of distinct edges stored
    edge_count: usize,

    /// Outgoing edges for each vertex: vertex_id -> {(target_vertex, weight)}
    outgoing_edges: Vec<IndexSet<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertex_count: 0,
            edge_count: 0,
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices and no edges
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertex_count: vertices,
            edge_count: 0,
            outgoing_edges: vec![IndexSet::new(); vertices],
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::with_capacity(vertices);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Returns the outgoing edges of `vertex`
    pub fn neighbors(&self, vertex: usize) -> Result<impl Iterator<Item = Edge<W>> + '_> {
        let edges = self
            .outgoing_edges
            .get(vertex)
            .ok_or(Error::InvalidVertex(vertex))?;
        Ok(edges.iter().map(move |&(to, weight)| Edge {
            from: vertex,
            to,
            weight,
        }))
    }

    /// Iterates over every edge, grouped by source vertex in index order
    pub fn edges(&self) -> impl Iterator<Item = Edge<W>> + '_ {
        self.outgoing_edges
            .iter()
            .enumerate()
            .flat_map(|(from, edges)| {
                edges.iter().map(move |&(to, weight)| Edge { from, to, weight })
            })
    }

    /// Builds the transpose of this graph (reversed edge directions, same weights)
    pub fn transpose(&self) -> Self {
        let mut transpose = Self::with_capacity(self.vertex_count);
        for edge in self.edges() {
            transpose.outgoing_edges[edge.to].insert((edge.from, edge.weight));
        }
        transpose.edge_count = self.edge_count;
        transpose
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        match self.outgoing_edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().copied()),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<bool> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(from, to));
        }

        let inserted = self.outgoing_edges[from].insert((to, weight));
        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }
}

impl<W> fmt::Display for DirectedGraph<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph adjacency list:")?;
        for (vertex, edges) in self.outgoing_edges.iter().enumerate() {
            write!(f, "{}:", vertex)?;
            for &(to, weight) in edges {
                write!(f, " {}", Edge { from: vertex, to, weight })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
