mod path;

use super::types::{NodeId, Position};
use super::GraphStore;

/// Helper to build a NodeId.
fn id(n: u32) -> NodeId {
    NodeId(n)
}

/// Helper to build a graph with `count` nodes laid out on a diagonal.
fn graph_with_nodes(count: u32) -> GraphStore {
    let mut graph = GraphStore::new();
    for i in 0..count {
        let t = f64::from(i) / f64::from(count.max(1));
        graph.add_node(Position::new(t, t));
    }
    graph
}

/// Helper to build a graph with `count` nodes and the given weighted edges.
fn graph_with_edges(count: u32, edges: &[(u32, u32, f64)]) -> GraphStore {
    let mut graph = graph_with_nodes(count);
    for &(u, v, w) in edges {
        graph
            .add_edge(id(u), id(v), w)
            .unwrap_or_else(|e| panic!("edge {u}-{v} rejected: {e}"));
    }
    graph
}

/// Helper to turn a slice of raw ids into NodeIds.
fn ids(raw: &[u32]) -> Vec<NodeId> {
    raw.iter().copied().map(NodeId).collect()
}
