use colored::*;
use scc_dagsp::graph::{Graph, MutableGraph};
use scc_dagsp::{analyze, AnalysisConfig, DirectedGraph, Metrics, TarjanScc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A small project plan: two tightly coupled task groups feeding a release
    let mut graph: DirectedGraph<u64> = DirectedGraph::with_capacity(7);
    graph.add_edge(0, 1, 3)?;
    graph.add_edge(1, 2, 2)?;
    graph.add_edge(2, 1, 4)?; // 1 <-> 2 form one group
    graph.add_edge(0, 3, 6)?;
    graph.add_edge(3, 4, 1)?;
    graph.add_edge(4, 3, 1)?; // 3 <-> 4 form another
    graph.add_edge(2, 5, 5)?;
    graph.add_edge(4, 5, 2)?;
    graph.add_edge(5, 6, 1)?;

    println!("{}", "--- Simple SCC + DAG path analysis ---".bold());
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let mut metrics = Metrics::new();
    let scc = TarjanScc::new().find_sccs(&graph, &mut metrics)?;
    for (index, component) in scc.components.iter().enumerate() {
        let label = format!("SCC #{}", index);
        if component.len() > 1 {
            println!("{}: {:?}", label.red().bold(), component);
        } else {
            println!("{}: {:?}", label.green(), component);
        }
    }

    let report = analyze(&graph, &AnalysisConfig::default())?;
    println!();
    println!("{}", report);
    println!(
        "{} {}",
        "Critical path length:".yellow().bold(),
        report.critical_path_length.to_string().yellow()
    );

    Ok(())
}
