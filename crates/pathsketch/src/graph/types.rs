use std::fmt;

use thiserror::Error;

/// Identifier of a node. Assigned sequentially starting at 1, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const FIRST: NodeId = NodeId(1);

    /// The following id, saturating at `u32::MAX`.
    pub(crate) fn next(self) -> Self {
        NodeId(self.0.saturating_add(1))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canvas-normalized position. Both axes run from 0.0 to 1.0, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub position: Position,
}

/// An undirected weighted edge. `source <= target` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

impl Edge {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Minimum-weight path from source to target, both inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub nodes: Vec<NodeId>,
    pub weight: f64,
}

impl ShortestPath {
    /// Consecutive node pairs along the path.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, id) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{id}")?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("invalid weight {0}: weights must be finite and not negative")]
    InvalidWeight(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeId),

    #[error("no path from node {from} to node {to}")]
    NoPath { from: NodeId, to: NodeId },
}
