//! Integration tests for socnet-centrality
//!
//! Tests the closed-form centrality values of classic graph shapes

use socnet_centrality::{
    betweenness_centrality, closeness_centrality, connected_components, degree_centrality,
    largest, largest_component, top_n, CentralityConfig, CsrGraph, NodeId,
};

fn path_graph(n: u32) -> CsrGraph<u32> {
    CsrGraph::from_edge_list((1..n).map(|i| (i, i + 1))).unwrap()
}

fn star_graph(leaves: u32) -> CsrGraph<u32> {
    CsrGraph::from_edge_list((1..=leaves).map(|leaf| (0, leaf))).unwrap()
}

#[test]
fn test_path_of_five_middle_betweenness() {
    let graph = path_graph(5);
    let scores = betweenness_centrality(&graph, &CentralityConfig::default()).unwrap();

    // Node 3 (1-indexed) sits between 2 nodes on each side
    let node3 = graph.node_id(&3).unwrap();
    assert_eq!(scores.get(node3), Some(4.0));

    let expected = [0.0, 3.0, 4.0, 3.0, 0.0];
    assert_eq!(scores.values(), &expected);
}

#[test]
fn test_star_graph_closed_forms() {
    let leaves = 6;
    let n = f64::from(leaves + 1);
    let graph = star_graph(leaves);
    let config = CentralityConfig::default();

    let degree = degree_centrality(&graph).unwrap();
    let betweenness = betweenness_centrality(&graph, &config).unwrap();

    assert_eq!(degree.get(NodeId(0)), Some(1.0));
    assert_eq!(betweenness.get(NodeId(0)), Some((n - 1.0) * (n - 2.0) / 2.0));

    for leaf in 1..=leaves {
        assert_eq!(degree.get(NodeId(leaf)), Some(1.0 / (n - 1.0)));
        assert_eq!(betweenness.get(NodeId(leaf)), Some(0.0));
    }
}

#[test]
fn test_two_triangles_largest_is_deterministic() {
    let edges = [
        ("x", "y"),
        ("y", "z"),
        ("z", "x"),
        ("a", "b"),
        ("b", "c"),
        ("c", "a"),
    ];

    let graph = CsrGraph::from_edge_list(edges).unwrap();
    let components = connected_components(&graph);
    assert_eq!(components.len(), 2);

    let first = largest(&components).unwrap().clone();
    for _ in 0..10 {
        let again = connected_components(&CsrGraph::from_edge_list(edges).unwrap());
        assert_eq!(largest(&again).unwrap(), &first);
    }

    // Input order does not matter either
    let mut reversed = edges;
    reversed.reverse();
    let lcc = largest_component(&CsrGraph::from_edge_list(reversed).unwrap()).unwrap();
    assert_eq!(lcc.labels(), &["a", "b", "c"]);
}

#[test]
fn test_closeness_on_connected_graph_in_unit_interval() {
    // Barbell: two triangles joined by a bridge 2 — 3
    let graph = CsrGraph::from_edge_list([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)])
        .unwrap();
    let scores = closeness_centrality(&graph, &CentralityConfig::default()).unwrap();

    for (_, score) in scores.iter() {
        assert!(score > 0.0 && score <= 1.0, "closeness {score}");
    }

    // Bridge endpoints are the most central
    let top = top_n(&scores, 2);
    assert_eq!(top, vec![NodeId(2), NodeId(3)]);
}

#[test]
fn test_bridge_betweenness() {
    // Same barbell: the bridge endpoints carry every cross pair
    let graph = CsrGraph::from_edge_list([(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)])
        .unwrap();
    let scores = betweenness_centrality(&graph, &CentralityConfig::default()).unwrap();

    // Node 2 lies on paths {0,1} × {3,4,5} = 6 pairs
    assert_eq!(scores.get(NodeId(2)), Some(6.0));
    assert_eq!(scores.get(NodeId(3)), Some(6.0));
    assert_eq!(scores.get(NodeId(0)), Some(0.0));
}

#[test]
fn test_repeated_runs_are_bit_identical() {
    let edges: Vec<(u32, u32)> = (0..200)
        .flat_map(|i| [(i, (i * 13 + 7) % 200), (i, (i * 31 + 1) % 200)])
        .collect();
    let graph = largest_component(&CsrGraph::from_edge_list(edges).unwrap()).unwrap();

    let parallel = CentralityConfig::default();
    let sequential = CentralityConfig::default().with_parallel(false);
    let few_partitions = CentralityConfig::default().with_partitions(3);

    let first = betweenness_centrality(&graph, &parallel).unwrap();
    assert_eq!(first, betweenness_centrality(&graph, &parallel).unwrap());
    assert_eq!(first, betweenness_centrality(&graph, &sequential).unwrap());

    let closeness = closeness_centrality(&graph, &parallel).unwrap();
    assert_eq!(closeness, closeness_centrality(&graph, &few_partitions).unwrap());
}
