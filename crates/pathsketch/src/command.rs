use thiserror::Error;
use tracing::{debug, info, warn};

use crate::graph::{self, GraphError, GraphStore, NodeId, PathError, Position, ShortestPath};
use crate::theme::NodeColor;

const WAITING_TEXT: &str = "Waiting for a run...";

/// A user action, carrying an already validated payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    PlaceNode(Position),
    AddEdge {
        source: NodeId,
        target: NodeId,
        weight: f64,
    },
    FindPath {
        source: NodeId,
        target: NodeId,
    },
    SetNodeColor(NodeColor),
}

/// What a successfully dispatched command did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NodePlaced(NodeId),
    EdgeAdded,
    PathFound(ShortestPath),
    ColorChanged(NodeColor),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("invalid {field}: '{value}' is not a valid {expected}")]
    InvalidInput {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Raw contents of the connection text fields.
#[derive(Debug, Clone, Default)]
pub struct ConnectionForm {
    pub source: String,
    pub target: String,
    pub weight: String,
}

impl ConnectionForm {
    pub fn add_edge_command(&self) -> Result<Command, CommandError> {
        Ok(Command::AddEdge {
            source: parse_node_id("start node", &self.source)?,
            target: parse_node_id("end node", &self.target)?,
            weight: parse_weight(&self.weight)?,
        })
    }

    pub fn find_path_command(&self) -> Result<Command, CommandError> {
        Ok(Command::FindPath {
            source: parse_node_id("start node", &self.source)?,
            target: parse_node_id("end node", &self.target)?,
        })
    }
}

pub fn parse_node_id(field: &'static str, raw: &str) -> Result<NodeId, CommandError> {
    raw.trim()
        .parse::<u32>()
        .map(NodeId)
        .map_err(|_| CommandError::InvalidInput {
            field,
            value: raw.to_string(),
            expected: "node number",
        })
}

pub fn parse_weight(raw: &str) -> Result<f64, CommandError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| CommandError::InvalidInput {
            field: "weight",
            value: raw.to_string(),
            expected: "number",
        })
}

/// Application state owned by the front end. Every mutation goes through `dispatch`.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    pub graph: GraphStore,
    pub node_color: NodeColor,
    pub highlighted: Option<ShortestPath>,
}

impl Controller {
    pub fn new(node_color: NodeColor) -> Self {
        Self {
            graph: GraphStore::new(),
            node_color,
            highlighted: None,
        }
    }

    /// Apply a command. On error the state is left exactly as it was.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, CommandError> {
        debug!(?command, "dispatch");
        let result = self.apply(command);
        if let Err(e) = &result {
            warn!(error = %e, "command rejected");
        }
        result
    }

    fn apply(&mut self, command: Command) -> Result<Outcome, CommandError> {
        match command {
            Command::PlaceNode(position) => {
                let id = self.graph.add_node(position);
                self.highlighted = None;
                Ok(Outcome::NodePlaced(id))
            }
            Command::AddEdge {
                source,
                target,
                weight,
            } => {
                self.graph.add_edge(source, target, weight)?;
                self.highlighted = None;
                Ok(Outcome::EdgeAdded)
            }
            Command::FindPath { source, target } => {
                let path = graph::shortest_path(&self.graph, source, target)?;
                self.highlighted = Some(path.clone());
                Ok(Outcome::PathFound(path))
            }
            Command::SetNodeColor(color) => {
                info!(%color, "node color changed");
                self.node_color = color;
                Ok(Outcome::ColorChanged(color))
            }
        }
    }

    /// Summary shown in the result label.
    pub fn result_text(&self) -> String {
        match &self.highlighted {
            Some(path) => format_result(path),
            None => WAITING_TEXT.to_string(),
        }
    }
}

pub fn format_result(path: &ShortestPath) -> String {
    format!(
        "Shortest path: {path}\nTotal weight: {}",
        crate::render::format_weight(path.weight)
    )
}
