use std::collections::VecDeque;
use std::marker::PhantomData;

use log::{debug, warn};

use crate::graph::{Graph, Weight};
use crate::metrics::Metrics;
use crate::{Error, Result};

/// Outcome of a topological sort.
///
/// An empty order on a non-empty graph means the graph contains a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologicalOrder {
    order: Vec<usize>,
    vertex_count: usize,
}

impl TopologicalOrder {
    /// Vertices in topological order, empty if a cycle was detected
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// True when the sorted graph had vertices but no valid order exists
    pub fn is_cycle(&self) -> bool {
        self.order.is_empty() && self.vertex_count > 0
    }

    /// Position of every vertex in the order, `None` for vertices not in it
    pub fn positions(&self) -> Vec<Option<usize>> {
        let mut positions = vec![None; self.vertex_count];
        for (index, &vertex) in self.order.iter().enumerate() {
            positions[vertex] = Some(index);
        }
        positions
    }
}

impl AsRef<[usize]> for TopologicalOrder {
    fn as_ref(&self) -> &[usize] {
        &self.order
    }
}

/// Kahn's algorithm for topological sorting.
///
/// Zero in-degree vertices are seeded in increasing index order. Successors
/// are then visited in the graph's outgoing edge order, which for
/// [`DirectedGraph`](crate::graph::DirectedGraph) is insertion order.
#[derive(Debug)]
pub struct TopoSorter<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    graph: &'g G,
    _weight_marker: PhantomData<W>,
}

impl<'g, W, G> TopoSorter<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    pub fn new(graph: &'g G) -> Self {
        TopoSorter {
            graph,
            _weight_marker: PhantomData,
        }
    }

    /// Creates a sorter from a graph that may be absent
    pub fn try_new(graph: Option<&'g G>) -> Result<Self> {
        graph
            .map(Self::new)
            .ok_or_else(|| Error::InvalidArgument("graph cannot be absent".to_string()))
    }

    /// Produces a topological order, or an empty order if the graph has a cycle.
    ///
    /// Counts `pushes` and `pops` on the work queue.
    pub fn sort(&self, metrics: &mut Metrics) -> TopologicalOrder {
        metrics.start();

        let n = self.graph.vertex_count();
        let mut in_degree = vec![0usize; n];
        for u in 0..n {
            for (v, _) in self.graph.outgoing_edges(u) {
                in_degree[v] += 1;
            }
        }

        let mut queue = VecDeque::new();
        for (vertex, &degree) in in_degree.iter().enumerate() {
            if degree == 0 {
                queue.push_back(vertex);
                metrics.increment("pushes");
            }
        }

        let mut order = Vec::with_capacity(n);
        while let Some(u) = queue.pop_front() {
            metrics.increment("pops");
            order.push(u);

            for (v, _) in self.graph.outgoing_edges(u) {
                in_degree[v] -= 1;
                if in_degree[v] == 0 {
                    queue.push_back(v);
                    metrics.increment("pushes");
                }
            }
        }

        metrics.stop();

        if order.len() != n {
            warn!(
                "Cycle detected: only {} of {} vertices could be ordered",
                order.len(),
                n
            );
            order.clear();
        } else {
            debug!("Topological order over {} vertices: {:?}", n, order);
        }

        TopologicalOrder {
            order,
            vertex_count: n,
        }
    }
}
