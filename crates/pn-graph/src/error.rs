//! Network-specific error types.

use pn_core::{NodeId, PipeId, PnError};

/// Network construction and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A pipe refers to a node that doesn't exist.
    InvalidNodeRef { pipe: PipeId, node: NodeId },

    /// A pipe starts and ends at the same node.
    SelfLoop { pipe: PipeId, node: NodeId },

    /// An entity's ID doesn't match its storage slot.
    IdMismatch { what: &'static str, expected: u32, actual: u32 },

    /// Adjacency list is inconsistent (pipe in node's list but pipe doesn't touch node).
    InconsistentAdjacency { pipe: PipeId, node: NodeId },

    /// Node ID not present in the builder.
    UnknownNode { node: NodeId },

    /// Service type name not recognized.
    UnknownServiceType { name: String },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::InvalidNodeRef { pipe, node } => {
                write!(f, "Pipe {} refers to non-existent node {}", pipe, node)
            }
            GraphError::SelfLoop { pipe, node } => {
                write!(f, "Pipe {} starts and ends at node {}", pipe, node)
            }
            GraphError::IdMismatch {
                what,
                expected,
                actual,
            } => {
                write!(f, "{} in slot {} has id {}", what, expected, actual)
            }
            GraphError::InconsistentAdjacency { pipe, node } => {
                write!(
                    f,
                    "Pipe {} in node {}'s adjacency list but doesn't touch that node",
                    pipe, node
                )
            }
            GraphError::UnknownNode { node } => write!(f, "Node {} not found", node),
            GraphError::UnknownServiceType { name } => {
                write!(f, "Unknown service type '{}'", name)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for PnError {
    fn from(err: GraphError) -> Self {
        PnError::Invariant {
            what: err.to_string(),
        }
    }
}
