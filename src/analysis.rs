use log::{error, info};

use crate::algorithm::{DagPathSolver, Distances, SccResult, TarjanScc, TopoSorter, TopologicalOrder};
use crate::graph::{Graph, Weight};
use crate::metrics::Metrics;
use crate::{Error, Result};

/// Parameters of one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Source vertex of the original graph
    pub source: usize,
    /// Target vertex of the original graph; defaults to the end of the critical path
    pub target: Option<usize>,
    /// Reconstruct the longest path instead of the shortest one
    pub use_longest: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            source: 0,
            target: None,
            use_longest: true,
        }
    }
}

impl AnalysisConfig {
    pub fn with_source(mut self, source: usize) -> Self {
        self.source = source;
        self
    }

    pub fn with_target(mut self, target: Option<usize>) -> Self {
        self.target = target;
        self
    }

    pub fn with_longest(mut self, use_longest: bool) -> Self {
        self.use_longest = use_longest;
        self
    }
}

/// Everything one pipeline run produced. Distances, order and path are
/// expressed over condensation vertices (component indices).
#[derive(Debug, Clone)]
pub struct AnalysisReport<W>
where
    W: Weight,
{
    pub vertex_count: usize,
    pub edge_count: usize,
    pub scc: SccResult<W>,
    pub topo_order: TopologicalOrder,
    /// Original vertices listed component by component in topological order
    pub derived_order: Vec<usize>,
    pub source_vertex: usize,
    pub source_component: Option<usize>,
    pub target_component: Option<usize>,
    pub shortest: Distances<W>,
    pub longest: Distances<W>,
    pub use_longest: bool,
    pub path: Vec<usize>,
    pub critical_path_length: W,
    pub scc_metrics: Metrics,
    pub topo_metrics: Metrics,
    pub path_metrics: Metrics,
}

/// Runs SCC decomposition, topological ordering of the condensation and DAG
/// path solving, in that order.
///
/// The path source is the component holding `config.source`; the target is
/// the component holding `config.target`, or else the reached component with
/// the greatest longest-path distance.
pub fn analyze<W, G>(graph: &G, config: &AnalysisConfig) -> Result<AnalysisReport<W>>
where
    W: Weight,
    G: Graph<W>,
{
    let n = graph.vertex_count();
    if n > 0 && !graph.has_vertex(config.source) {
        return Err(Error::InvalidVertex(config.source));
    }
    if let Some(target) = config.target {
        if !graph.has_vertex(target) {
            return Err(Error::InvalidVertex(target));
        }
    }

    let mut scc_metrics = Metrics::new();
    let scc = TarjanScc::new().find_sccs(graph, &mut scc_metrics)?;
    info!(
        "SCC stage: {} components in {:.3} ms",
        scc.component_count,
        scc_metrics.elapsed_ms()
    );

    let mut topo_metrics = Metrics::new();
    let topo_order = TopoSorter::new(&scc.condensation).sort(&mut topo_metrics);
    if topo_order.is_cycle() {
        error!("Condensation graph is cyclic; component decomposition is inconsistent");
    }
    let derived_order = scc.expand_order(topo_order.as_slice());

    let solver = DagPathSolver::new(&scc.condensation);
    let mut path_metrics = Metrics::new();
    let source_component = scc.component(config.source);
    let source = source_component.unwrap_or(0);
    let order = topo_order.as_slice();

    let shortest = solver.shortest_paths(source, order, &mut path_metrics)?;
    let longest = solver.longest_paths(source, order, &mut path_metrics)?;
    let critical_path_length = solver.critical_path_length(source, order, &mut path_metrics)?;

    let target_component = match config.target {
        Some(target) => scc.component(target),
        None => longest.farthest().map(|(component, _)| component),
    };
    let path = match target_component {
        Some(target) => {
            solver.reconstruct_path(source, target, order, config.use_longest, &mut path_metrics)?
        }
        None => Vec::new(),
    };
    info!(
        "Path stage: {} relaxations in {:.3} ms",
        path_metrics.count("relaxations"),
        path_metrics.elapsed_ms()
    );

    Ok(AnalysisReport {
        vertex_count: n,
        edge_count: graph.edge_count(),
        scc,
        topo_order,
        derived_order,
        source_vertex: config.source,
        source_component,
        target_component,
        shortest,
        longest,
        use_longest: config.use_longest,
        path,
        critical_path_length,
        scc_metrics,
        topo_metrics,
        path_metrics,
    })
}
