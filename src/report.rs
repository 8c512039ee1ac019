use std::fmt::{self, Display, Write as _};

use crate::algorithm::Distances;
use crate::analysis::AnalysisReport;
use crate::graph::{Graph, Weight};
use crate::metrics::Metrics;

const RULE: &str = "----------------------------------------------------";

/// Renders distances as `[0, 2, -, 9]`, with `-` for unreached vertices
pub fn format_distances<W: Weight>(distances: &Distances<W>) -> String {
    let mut out = String::from("[");
    for (index, distance) in distances.values.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        match distance {
            Some(distance) => {
                let _ = write!(out, "{}", distance);
            }
            None => out.push('-'),
        }
    }
    out.push(']');
    out
}

/// Renders a path as `0 -> 1 -> 2`, or `(unreachable)` when empty
pub fn format_path(path: &[usize]) -> String {
    if path.is_empty() {
        return "(unreachable)".to_string();
    }
    path.iter()
        .map(|vertex| vertex.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn write_metrics(f: &mut fmt::Formatter<'_>, metrics: &Metrics) -> fmt::Result {
    write!(f, "Metrics:")?;
    for (name, count) in metrics.counters() {
        write!(f, " {} = {},", name, count)?;
    }
    writeln!(f, " total = {}, time = {:.3} ms", metrics.counter(), metrics.elapsed_ms())
}

impl<W> Display for AnalysisReport<W>
where
    W: Weight,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph: {} vertices, {} edges", self.vertex_count, self.edge_count)?;
        writeln!(f, "{}", RULE)?;

        writeln!(f, "\n=== SCC (Tarjan) ===")?;
        writeln!(f, "Found {} SCC(s)", self.scc.component_count)?;
        for (index, component) in self.scc.components.iter().enumerate() {
            writeln!(f, "SCC #{}: {:?} (size={})", index, component, component.len())?;
        }
        writeln!(
            f,
            "Condensation DAG: {} nodes, {} edges",
            self.scc.condensation.vertex_count(),
            self.scc.condensation.edge_count()
        )?;
        write_metrics(f, &self.scc_metrics)?;
        writeln!(f, "{}", RULE)?;

        writeln!(f, "\n=== Topological Sort (Condensation DAG) ===")?;
        if self.topo_order.is_cycle() {
            writeln!(f, "Cycle detected! Topological sort not possible.")?;
        } else {
            writeln!(f, "Topological order of components: {:?}", self.topo_order.as_slice())?;
            writeln!(f, "Derived order of original vertices: {:?}", self.derived_order)?;
        }
        write_metrics(f, &self.topo_metrics)?;
        writeln!(f, "{}", RULE)?;

        writeln!(f, "\n=== DAG Shortest & Longest Paths ===")?;
        match self.source_component {
            Some(component) => writeln!(
                f,
                "Source vertex: {} (component {})",
                self.source_vertex, component
            )?,
            None => writeln!(f, "Source vertex: {} (empty graph)", self.source_vertex)?,
        }
        match self.target_component {
            Some(component) => writeln!(f, "Target component: {}", component)?,
            None => writeln!(f, "Target component: none")?,
        }
        writeln!(f, "Shortest distances: {}", format_distances(&self.shortest))?;
        writeln!(f, "Longest distances: {}", format_distances(&self.longest))?;
        let label = if self.use_longest { "Critical path (longest)" } else { "Shortest path" };
        writeln!(f, "{}: {}", label, format_path(&self.path))?;
        writeln!(f, "Critical path length: {}", self.critical_path_length)?;
        write_metrics(f, &self.path_metrics)?;
        write!(f, "{}", RULE)
    }
}
