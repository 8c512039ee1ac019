use log::debug;

use crate::graph::{DirectedGraph, Graph, MutableGraph, Weight};
use crate::metrics::Metrics;
use crate::Result;

const UNASSIGNED: usize = usize::MAX;

/// Strongly connected components of a graph together with its condensation
#[derive(Debug, Clone)]
pub struct SccResult<W>
where
    W: Weight,
{
    /// Components in the order their roots finished; vertices in pop order (root last)
    pub components: Vec<Vec<usize>>,

    /// Component index of every vertex
    pub component_of: Vec<usize>,

    /// Number of components
    pub component_count: usize,

    /// One vertex per component, one unit-weight edge per connected component pair
    pub condensation: DirectedGraph<W>,
}

impl<W> SccResult<W>
where
    W: Weight,
{
    /// Component containing `vertex`, if the vertex exists
    pub fn component(&self, vertex: usize) -> Option<usize> {
        self.component_of.get(vertex).copied()
    }

    /// Expands an order over components into an order over the original vertices
    pub fn expand_order(&self, component_order: &[usize]) -> Vec<usize> {
        component_order
            .iter()
            .filter_map(|&component| self.components.get(component))
            .flat_map(|members| members.iter().copied())
            .collect()
    }
}

/// Tarjan's single-pass strongly connected components algorithm.
///
/// The depth-first search runs on an explicit work stack, so arbitrarily deep
/// graphs are handled without recursion. Components come out in reverse
/// topological order of the condensation; callers must not rely on them being
/// sorted topologically.
#[derive(Debug, Default, Clone, Copy)]
pub struct TarjanScc;

impl TarjanScc {
    /// Creates a new Tarjan algorithm instance
    pub fn new() -> Self {
        TarjanScc
    }

    /// Finds all strongly connected components and builds the condensation DAG.
    ///
    /// Counts `dfs_visits` once per discovered vertex and `dfs_edges` once per
    /// scanned edge.
    pub fn find_sccs<W, G>(&self, graph: &G, metrics: &mut Metrics) -> Result<SccResult<W>>
    where
        W: Weight,
        G: Graph<W>,
    {
        metrics.start();

        let mut state = TarjanState::new(graph.vertex_count());
        for vertex in 0..graph.vertex_count() {
            if state.disc[vertex] == 0 {
                state.visit(graph, vertex, metrics);
            }
        }

        let TarjanState {
            component_of,
            components,
            ..
        } = state;
        let condensation = build_condensation(graph, &component_of, components.len())?;

        metrics.stop();
        debug!(
            "Tarjan found {} components over {} vertices; condensation has {} edges",
            components.len(),
            graph.vertex_count(),
            condensation.edge_count()
        );

        Ok(SccResult {
            component_count: components.len(),
            components,
            component_of,
            condensation,
        })
    }
}

struct TarjanState {
    time: usize,
    /// Discovery times, 0 means undiscovered
    disc: Vec<usize>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    component_of: Vec<usize>,
    components: Vec<Vec<usize>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        TarjanState {
            time: 0,
            disc: vec![0; n],
            low: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            component_of: vec![UNASSIGNED; n],
            components: Vec::new(),
        }
    }

    fn discover(&mut self, vertex: usize, metrics: &mut Metrics) {
        metrics.increment("dfs_visits");
        self.time += 1;
        self.disc[vertex] = self.time;
        self.low[vertex] = self.time;
        self.stack.push(vertex);
        self.on_stack[vertex] = true;
    }

    /// Depth-first search from `root`. Each frame holds a vertex and the
    /// iterator over its remaining outgoing edges.
    fn visit<W, G>(&mut self, graph: &G, root: usize, metrics: &mut Metrics)
    where
        W: Weight,
        G: Graph<W>,
    {
        let mut work: Vec<(usize, Box<dyn Iterator<Item = (usize, W)> + '_>)> = Vec::new();
        self.discover(root, metrics);
        work.push((root, graph.outgoing_edges(root)));

        while let Some(frame) = work.last_mut() {
            let u = frame.0;
            let next = frame.1.next();

            match next {
                Some((v, _)) => {
                    metrics.increment("dfs_edges");
                    if self.disc[v] == 0 {
                        self.discover(v, metrics);
                        work.push((v, graph.outgoing_edges(v)));
                    } else if self.on_stack[v] {
                        self.low[u] = self.low[u].min(self.disc[v]);
                    }
                }
                None => {
                    work.pop();
                    if let Some(&(parent, _)) = work.last() {
                        self.low[parent] = self.low[parent].min(self.low[u]);
                    }
                    if self.low[u] == self.disc[u] {
                        self.pop_component(u);
                    }
                }
            }
        }
    }

    fn pop_component(&mut self, root: usize) {
        let index = self.components.len();
        let mut component = Vec::new();

        while let Some(vertex) = self.stack.pop() {
            self.on_stack[vertex] = false;
            self.component_of[vertex] = index;
            component.push(vertex);
            if vertex == root {
                break;
            }
        }

        self.components.push(component);
    }
}

/// Collapses every component to one vertex. Parallel crossing edges collapse
/// to a single edge of weight one; original weights are not carried over.
fn build_condensation<W, G>(
    graph: &G,
    component_of: &[usize],
    component_count: usize,
) -> Result<DirectedGraph<W>>
where
    W: Weight,
    G: Graph<W>,
{
    let mut condensation = DirectedGraph::with_capacity(component_count);

    for u in 0..graph.vertex_count() {
        let from = component_of[u];
        for (v, _) in graph.outgoing_edges(u) {
            let to = component_of[v];
            if from != to {
                condensation.add_edge(from, to, W::one())?;
            }
        }
    }

    Ok(condensation)
}
