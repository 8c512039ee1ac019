use std::marker::PhantomData;
use std::ops::Index;

use log::debug;

use crate::graph::{Graph, Weight};
use crate::metrics::Metrics;
use crate::{Error, Result};

/// Which optimum a relaxation pass looks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Shortest,
    Longest,
}

impl PathKind {
    fn improves<W: Weight>(self, candidate: W, current: Option<W>) -> bool {
        match (self, current) {
            (_, None) => true,
            (PathKind::Shortest, Some(current)) => candidate < current,
            (PathKind::Longest, Some(current)) => candidate > current,
        }
    }
}

/// Distances from a single source, one entry per vertex. `None` marks a
/// vertex the source cannot reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances<W> {
    pub source: usize,
    pub values: Vec<Option<W>>,
}

impl<W> Distances<W>
where
    W: Weight,
{
    pub fn get(&self, vertex: usize) -> Option<W> {
        self.values.get(vertex).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of vertices with a finite distance
    pub fn reached(&self) -> usize {
        self.values.iter().filter(|d| d.is_some()).count()
    }

    /// Reached vertex with the greatest distance; the lowest index wins ties
    pub fn farthest(&self) -> Option<(usize, W)> {
        let mut best: Option<(usize, W)> = None;
        for (vertex, distance) in self.values.iter().enumerate() {
            if let Some(distance) = *distance {
                if best.map_or(true, |(_, current)| distance > current) {
                    best = Some((vertex, distance));
                }
            }
        }
        best
    }
}

impl<W> Index<usize> for Distances<W> {
    type Output = Option<W>;

    fn index(&self, vertex: usize) -> &Self::Output {
        &self.values[vertex]
    }
}

/// Single-source shortest and longest paths on a DAG.
///
/// Every query takes a topological order of the graph and trusts it; the
/// order is not re-verified. Vertices are relaxed once each, in that order,
/// so a query costs O(V + E). Distance sums use checked arithmetic and fail
/// with [`Error::DistanceOverflow`] instead of wrapping.
#[derive(Debug)]
pub struct DagPathSolver<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    dag: &'g G,
    _weight_marker: PhantomData<W>,
}

impl<'g, W, G> DagPathSolver<'g, W, G>
where
    W: Weight,
    G: Graph<W>,
{
    pub fn new(dag: &'g G) -> Self {
        DagPathSolver {
            dag,
            _weight_marker: PhantomData,
        }
    }

    /// Shortest distances from `source`, counting `relaxations`
    pub fn shortest_paths(
        &self,
        source: usize,
        topo_order: &[usize],
        metrics: &mut Metrics,
    ) -> Result<Distances<W>> {
        self.distances(PathKind::Shortest, source, topo_order, metrics)
    }

    /// Longest distances from `source`, counting `relaxations`
    pub fn longest_paths(
        &self,
        source: usize,
        topo_order: &[usize],
        metrics: &mut Metrics,
    ) -> Result<Distances<W>> {
        self.distances(PathKind::Longest, source, topo_order, metrics)
    }

    pub fn distances(
        &self,
        kind: PathKind,
        source: usize,
        topo_order: &[usize],
        metrics: &mut Metrics,
    ) -> Result<Distances<W>> {
        let n = self.dag.vertex_count();
        if n > 0 {
            self.check_vertex(source)?;
        }

        metrics.start();
        let mut dist: Vec<Option<W>> = vec![None; n];
        if let Some(slot) = dist.get_mut(source) {
            *slot = Some(W::zero());
        }

        for &u in topo_order {
            // Unreached vertices relax nothing.
            let Some(du) = dist.get(u).copied().flatten() else {
                continue;
            };
            for (v, weight) in self.dag.outgoing_edges(u) {
                let candidate = du
                    .checked_add(&weight)
                    .ok_or(Error::DistanceOverflow(u, v))?;
                if kind.improves(candidate, dist[v]) {
                    dist[v] = Some(candidate);
                    metrics.increment("relaxations");
                }
            }
        }

        metrics.stop();
        Ok(Distances {
            source,
            values: dist,
        })
    }

    /// Reconstructs one optimal path from `source` to `target`.
    ///
    /// Every tight edge `u -> v` (where `dist[v] == dist[u] + w`) out of a
    /// reached vertex claims `v` as its parent; a later tight edge in
    /// topological order overwrites an earlier one. Returns an empty path when
    /// `target` is unreachable.
    pub fn reconstruct_path(
        &self,
        source: usize,
        target: usize,
        topo_order: &[usize],
        use_longest: bool,
        metrics: &mut Metrics,
    ) -> Result<Vec<usize>> {
        let n = self.dag.vertex_count();
        if n == 0 {
            return Ok(Vec::new());
        }
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let kind = if use_longest {
            PathKind::Longest
        } else {
            PathKind::Shortest
        };
        let dist = self.distances(kind, source, topo_order, metrics)?;

        let mut parent: Vec<Option<usize>> = vec![None; n];
        for &u in topo_order {
            let Some(du) = dist.get(u) else {
                continue;
            };
            for (v, weight) in self.dag.outgoing_edges(u) {
                let candidate = du
                    .checked_add(&weight)
                    .ok_or(Error::DistanceOverflow(u, v))?;
                if dist.values[v] == Some(candidate) {
                    parent[v] = Some(u);
                }
            }
        }

        let mut path = vec![target];
        let mut current = target;
        while current != source {
            match parent[current] {
                // A walk longer than n vertices can only mean a zero-weight loop.
                Some(previous) if path.len() <= n => {
                    current = previous;
                    path.push(previous);
                }
                _ => {
                    debug!("No path from {} to {}", source, target);
                    return Ok(Vec::new());
                }
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Length of the longest path from `source`, or zero if nothing beyond it is reached
    pub fn critical_path_length(
        &self,
        source: usize,
        topo_order: &[usize],
        metrics: &mut Metrics,
    ) -> Result<W> {
        let longest = self.longest_paths(source, topo_order, metrics)?;
        Ok(longest
            .farthest()
            .map_or(W::zero(), |(_, distance)| distance))
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.dag.has_vertex(vertex) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(vertex))
        }
    }
}
