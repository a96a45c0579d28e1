pub mod path;
pub mod types;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use tracing::debug;

pub use path::shortest_path;
pub use types::{Edge, GraphError, Node, NodeId, PathError, Position, ShortestPath};

/// In-memory undirected weighted graph with node positions.
///
/// Adjacency is stored in both directions so neighbor lookups never scan the edge list.
/// Ordered maps keep every query (and therefore every search) deterministic.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: BTreeMap<NodeId, Node>,
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
    next_id: NodeId,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    pub fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            adjacency: BTreeMap::new(),
            next_id: NodeId::FIRST,
        }
    }

    /// Add a node at `position` and return its freshly allocated id.
    pub fn add_node(&mut self, position: Position) -> NodeId {
        let id = self.next_id;
        self.next_id = id.next();
        self.nodes.insert(id, Node { id, position });
        self.adjacency.insert(id, BTreeMap::new());
        debug!(node = %id, x = position.x, y = position.y, "node added");
        id
    }

    /// Insert or overwrite the undirected edge `u`-`v`.
    ///
    /// Both endpoints must exist. Negative and non-finite weights are rejected so the
    /// shortest-path search stays correct. On error the graph is left untouched.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: f64) -> Result<(), GraphError> {
        for id in [u, v] {
            if !self.has_node(id) {
                return Err(GraphError::UnknownNode(id));
            }
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }

        let previous = self.adjacency.entry(u).or_default().insert(v, weight);
        self.adjacency.entry(v).or_default().insert(u, weight);

        match previous {
            Some(old) => debug!(%u, %v, old, weight, "edge weight replaced"),
            None => debug!(%u, %v, weight, "edge added"),
        }
        Ok(())
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Every node with its position, ascending by id.
    pub fn node_entries(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// Each undirected edge exactly once, ordered by `(source, target)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().flat_map(|(&u, neighbors)| {
            neighbors
                .range(u..)
                .map(move |(&v, &weight)| Edge {
                    source: u,
                    target: v,
                    weight,
                })
        })
    }

    /// Neighbors of `id` with the connecting weight, ascending by neighbor id.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.adjacency
            .get(&id)
            .into_iter()
            .flat_map(|n| n.iter().map(|(&v, &w)| (v, w)))
    }

    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<f64> {
        self.adjacency.get(&u).and_then(|n| n.get(&v)).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
