use scc_dagsp::graph::{DirectedGraph, Graph};
use scc_dagsp::{Error, Metrics, TopoSorter, TopologicalOrder};

fn graph_from(n: usize, edges: &[(usize, usize, u64)]) -> DirectedGraph<u64> {
    DirectedGraph::from_edges(n, edges.iter().copied()).unwrap()
}

fn sort(graph: &DirectedGraph<u64>) -> TopologicalOrder {
    TopoSorter::new(graph).sort(&mut Metrics::new())
}

fn assert_respects_edges(graph: &DirectedGraph<u64>, order: &TopologicalOrder) {
    assert_eq!(order.len(), graph.vertex_count(), "Every vertex must be ordered");
    let positions = order.positions();
    for edge in graph.edges() {
        let from = positions[edge.from].expect("source is ordered");
        let to = positions[edge.to].expect("target is ordered");
        assert!(from < to, "{} must precede {}", edge.from, edge.to);
    }
}

#[test]
fn test_simple_dag() {
    let graph = graph_from(4, &[(0, 1, 1), (0, 2, 1), (1, 3, 1), (2, 3, 1)]);
    let order = sort(&graph);

    assert!(!order.is_cycle());
    assert_respects_edges(&graph, &order);
    assert_eq!(order.as_slice()[0], 0);
    assert_eq!(order.as_slice()[3], 3);
}

#[test]
fn test_cycle_yields_empty_order() {
    let graph = graph_from(3, &[(0, 1, 1), (1, 2, 1), (2, 0, 1)]);
    let order = sort(&graph);

    assert!(order.is_empty(), "Graph with cycle should return empty list");
    assert!(order.is_cycle());
}

#[test]
fn test_cycle_downstream_of_dag_part_still_detected() {
    let graph = graph_from(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1), (3, 2, 1)]);
    let order = sort(&graph);

    assert!(order.is_cycle());
}

#[test]
fn test_disconnected_dag() {
    let graph = graph_from(3, &[(0, 1, 1)]);
    let order = sort(&graph);

    assert_respects_edges(&graph, &order);
    assert_eq!(order.into_vec(), vec![0, 2, 1]);
}

#[test]
fn test_empty_graph_is_not_a_cycle() {
    let graph: DirectedGraph<u64> = DirectedGraph::with_capacity(0);
    let order = sort(&graph);

    assert!(order.is_empty());
    assert!(!order.is_cycle(), "An empty graph has an empty but valid order");
}

#[test]
fn test_single_vertex() {
    let graph: DirectedGraph<u64> = DirectedGraph::with_capacity(1);
    assert_eq!(sort(&graph).as_slice(), &[0]);
}

#[test]
fn test_seeds_in_index_order_then_successors_in_insertion_order() {
    let graph = graph_from(5, &[(0, 2, 1), (0, 1, 1), (3, 4, 1)]);
    let order = sort(&graph);

    // Seeds 0 and 3 first, then 0's successors as inserted, then 4
    assert_eq!(order.as_slice(), &[0, 3, 2, 1, 4]);
}

#[test]
fn test_absent_graph_is_rejected() {
    let result = TopoSorter::<u64, DirectedGraph<u64>>::try_new(None);
    assert!(matches!(result, Err(Error::InvalidArgument(_))));

    let graph: DirectedGraph<u64> = DirectedGraph::with_capacity(2);
    let sorter = TopoSorter::try_new(Some(&graph)).unwrap();
    assert_eq!(sorter.sort(&mut Metrics::new()).len(), 2);
}

#[test]
fn test_metrics_count_queue_operations() {
    let graph = graph_from(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]);
    let mut metrics = Metrics::new();
    TopoSorter::new(&graph).sort(&mut metrics);

    assert_eq!(metrics.count("pushes"), 4);
    assert_eq!(metrics.count("pops"), 4);
}
