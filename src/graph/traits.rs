use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::PrimInt;

use crate::Result;

/// Integer edge weight usable by every graph and algorithm in the crate
pub trait Weight: PrimInt + Hash + Debug + Display {}

impl<T> Weight for T where T: PrimInt + Hash + Debug + Display {}

/// Trait representing a weighted directed graph over vertices `0..n`
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex as `(target, weight)`.
    /// Yields nothing for a vertex outside the graph.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the first inserted edge between two vertices, if any
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

/// Trait for append-only graph construction
pub trait MutableGraph<W>: Graph<W>
where
    W: Weight,
{
    /// Adds a directed edge between vertices with the given weight.
    ///
    /// Returns `Ok(true)` when the edge was inserted and `Ok(false)` when an
    /// identical edge was already present.
    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<bool>;
}
