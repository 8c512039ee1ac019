use scc_dagsp::graph::{DirectedGraph, Graph};
use scc_dagsp::{analyze, AnalysisConfig, DatasetGenerator, Error};

// Two 2-cycles {0,1} and {2,3} feeding vertex 4
fn layered_graph() -> DirectedGraph<u64> {
    DirectedGraph::from_edges(
        5,
        vec![
            (0, 1, 1u64),
            (1, 0, 1),
            (1, 2, 5),
            (2, 3, 1),
            (3, 2, 1),
            (3, 4, 2),
            (0, 4, 9),
        ],
    )
    .unwrap()
}

#[test]
fn test_pipeline_on_layered_graph() {
    let graph = layered_graph();
    let report = analyze(&graph, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.scc.components, vec![vec![4], vec![3, 2], vec![1, 0]]);
    assert_eq!(report.scc.condensation.edge_count(), 3);
    assert_eq!(report.topo_order.as_slice(), &[2, 1, 0]);
    assert_eq!(report.derived_order, vec![1, 0, 3, 2, 4]);

    assert_eq!(report.source_component, Some(2));
    assert_eq!(report.shortest.values, vec![Some(1), Some(1), Some(0)]);
    assert_eq!(report.longest.values, vec![Some(2), Some(1), Some(0)]);
    assert_eq!(report.target_component, Some(0), "Default target ends the critical path");
    assert_eq!(report.path, vec![2, 1, 0]);
    assert_eq!(report.critical_path_length, 2);
}

#[test]
fn test_pipeline_with_explicit_target_and_shortest_path() {
    let graph = layered_graph();
    let config = AnalysisConfig::default()
        .with_target(Some(4))
        .with_longest(false);
    let report = analyze(&graph, &config).unwrap();

    assert_eq!(report.target_component, Some(0));
    assert_eq!(report.path, vec![2, 0]);
}

#[test]
fn test_pipeline_source_inside_a_component() {
    let graph = layered_graph();
    let report = analyze(&graph, &AnalysisConfig::default().with_source(3)).unwrap();

    assert_eq!(report.source_component, Some(1));
    assert_eq!(report.shortest.values, vec![Some(1), Some(0), None]);
    assert_eq!(report.path, vec![1, 0]);
}

#[test]
fn test_pipeline_on_empty_graph() {
    let graph: DirectedGraph<u64> = DirectedGraph::with_capacity(0);
    let report = analyze(&graph, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.scc.component_count, 0);
    assert!(report.topo_order.is_empty());
    assert!(!report.topo_order.is_cycle());
    assert!(report.shortest.is_empty());
    assert!(report.longest.is_empty());
    assert!(report.path.is_empty());
    assert_eq!(report.target_component, None);
    assert_eq!(report.critical_path_length, 0);
}

#[test]
fn test_pipeline_rejects_out_of_range_vertices() {
    let graph = layered_graph();

    let result = analyze(&graph, &AnalysisConfig::default().with_source(5));
    assert!(matches!(result, Err(Error::InvalidVertex(5))));

    let result = analyze(&graph, &AnalysisConfig::default().with_target(Some(8)));
    assert!(matches!(result, Err(Error::InvalidVertex(8))));
}

#[test]
fn test_pipeline_records_stage_metrics() {
    let graph = layered_graph();
    let report = analyze(&graph, &AnalysisConfig::default()).unwrap();

    assert_eq!(report.scc_metrics.count("dfs_visits"), 5);
    assert_eq!(report.scc_metrics.count("dfs_edges"), 7);
    assert_eq!(report.topo_metrics.count("pops"), 3);
    assert!(report.path_metrics.count("relaxations") > 0);
}

#[test]
fn test_report_rendering() {
    let graph = layered_graph();
    let report = analyze(&graph, &AnalysisConfig::default()).unwrap();
    let rendered = report.to_string();

    assert!(rendered.contains("Graph: 5 vertices, 7 edges"));
    assert!(rendered.contains("=== SCC (Tarjan) ==="));
    assert!(rendered.contains("Found 3 SCC(s)"));
    assert!(rendered.contains("SCC #1: [3, 2] (size=2)"));
    assert!(rendered.contains("Topological order of components: [2, 1, 0]"));
    assert!(rendered.contains("Longest distances: [2, 1, 0]"));
    assert!(rendered.contains("Critical path (longest): 2 -> 1 -> 0"));
    assert!(rendered.contains("Critical path length: 2"));
}

#[test]
fn test_report_marks_unreached_components() {
    let graph = layered_graph();
    let config = AnalysisConfig::default().with_source(4).with_target(Some(0));
    let rendered = analyze(&graph, &config).unwrap().to_string();

    assert!(rendered.contains("Shortest distances: [0, -, -]"));
    assert!(rendered.contains("(unreachable)"));
}

#[test]
fn test_pipeline_on_standard_suite() {
    let suite = DatasetGenerator::new(42).standard_suite().unwrap();
    for (name, dataset) in suite {
        let graph = dataset.to_graph().unwrap();
        let config = AnalysisConfig::default().with_source(dataset.source());
        let report = analyze(&graph, &config).unwrap();

        assert!(!report.topo_order.is_cycle(), "{}: condensation must be acyclic", name);
        assert_eq!(report.topo_order.len(), report.scc.component_count);
        let mut derived = report.derived_order.clone();
        derived.sort_unstable();
        assert_eq!(derived, (0..graph.vertex_count()).collect::<Vec<_>>(), "{}", name);
        assert_eq!(report.path.first(), report.source_component.as_ref(), "{}", name);
        assert_eq!(
            report.path.len() as u64,
            report.critical_path_length + 1,
            "{}: unit-weight critical path has length + 1 vertices",
            name
        );
    }
}
