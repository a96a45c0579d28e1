use super::*;
use crate::graph::{PathError, shortest_path};

#[test]
fn detour_beats_heavy_direct_edge() {
    let graph = graph_with_edges(3, &[(1, 2, 2.0), (2, 3, 3.0), (1, 3, 10.0)]);
    let path = shortest_path(&graph, id(1), id(3)).unwrap();
    assert_eq!(path.nodes, ids(&[1, 2, 3]));
    assert_eq!(path.weight, 5.0);
}

#[test]
fn path_to_self_is_trivial() {
    let graph = graph_with_nodes(1);
    let path = shortest_path(&graph, id(1), id(1)).unwrap();
    assert_eq!(path.nodes, ids(&[1]));
    assert_eq!(path.weight, 0.0);
}

#[test]
fn path_to_self_ignores_self_loop() {
    let graph = graph_with_edges(1, &[(1, 1, 3.0)]);
    let path = shortest_path(&graph, id(1), id(1)).unwrap();
    assert_eq!(path.nodes, ids(&[1]));
    assert_eq!(path.weight, 0.0);
}

#[test]
fn disconnected_nodes_have_no_path() {
    let graph = graph_with_nodes(2);
    assert_eq!(
        shortest_path(&graph, id(1), id(2)),
        Err(PathError::NoPath { from: id(1), to: id(2) })
    );
}

#[test]
fn separate_components_have_no_path() {
    let graph = graph_with_edges(4, &[(1, 2, 1.0), (3, 4, 1.0)]);
    assert!(matches!(
        shortest_path(&graph, id(2), id(3)),
        Err(PathError::NoPath { .. })
    ));
}

#[test]
fn unique_path_weight_is_sum_of_edges() {
    // Chain 1 - 2 - 3 - 4 - 5.
    let graph = graph_with_edges(
        5,
        &[(1, 2, 1.5), (2, 3, 2.25), (3, 4, 0.25), (4, 5, 4.0)],
    );
    let path = shortest_path(&graph, id(1), id(5)).unwrap();
    assert_eq!(path.nodes, ids(&[1, 2, 3, 4, 5]));
    assert_eq!(path.weight, 8.0);
}

#[test]
fn path_is_symmetric_on_undirected_graph() {
    let graph = graph_with_edges(3, &[(1, 2, 2.0), (2, 3, 3.0), (1, 3, 10.0)]);
    let forward = shortest_path(&graph, id(1), id(3)).unwrap();
    let backward = shortest_path(&graph, id(3), id(1)).unwrap();
    assert_eq!(forward.weight, backward.weight);
    assert_eq!(backward.nodes, ids(&[3, 2, 1]));
}

#[test]
fn overwritten_edge_changes_result() {
    let mut graph = graph_with_edges(3, &[(1, 2, 2.0), (2, 3, 3.0), (1, 3, 10.0)]);
    graph.add_edge(id(1), id(3), 1.0).unwrap();
    let path = shortest_path(&graph, id(1), id(3)).unwrap();
    assert_eq!(path.nodes, ids(&[1, 3]));
    assert_eq!(path.weight, 1.0);
}

#[test]
fn zero_weight_edges_are_traversed() {
    let graph = graph_with_edges(3, &[(1, 2, 0.0), (2, 3, 0.0), (1, 3, 1.0)]);
    let path = shortest_path(&graph, id(1), id(3)).unwrap();
    assert_eq!(path.weight, 0.0);
    assert_eq!(path.nodes, ids(&[1, 2, 3]));
}

#[test]
fn larger_graph_picks_minimum() {
    //      2
    //   1 --- 2
    //   |     | 1
    // 4 |     3 --- 6
    //   |  1  | 5   | 1
    //   4 --- 5 ----+
    //          1 (5-6)
    let graph = graph_with_edges(
        6,
        &[
            (1, 2, 2.0),
            (2, 3, 1.0),
            (1, 4, 4.0),
            (4, 5, 1.0),
            (3, 5, 5.0),
            (3, 6, 1.0),
            (5, 6, 1.0),
        ],
    );
    let path = shortest_path(&graph, id(1), id(5)).unwrap();
    assert_eq!(path.weight, 5.0);
    // Both 1-4-5 and 1-2-3-6-5 weigh 5; the smaller sequence wins.
    assert_eq!(path.nodes, ids(&[1, 2, 3, 6, 5]));
}

#[test]
fn path_edges_are_consecutive_pairs() {
    let graph = graph_with_edges(3, &[(1, 2, 2.0), (2, 3, 3.0)]);
    let path = shortest_path(&graph, id(1), id(3)).unwrap();
    let edges: Vec<_> = path.edges().collect();
    assert_eq!(edges, vec![(id(1), id(2)), (id(2), id(3))]);
}

#[test]
fn path_display_lists_ids() {
    let graph = graph_with_edges(3, &[(1, 2, 2.0), (2, 3, 3.0)]);
    let path = shortest_path(&graph, id(1), id(3)).unwrap();
    assert_eq!(path.to_string(), "[1, 2, 3]");
}
