//! Network validation logic.

use std::collections::HashSet;
use pn_core::{PipeId, PnResult};

use crate::error::GraphError;
use crate::graph::{Node, Pipe};

/// Validate the network structure: IDs match their slots and every pipe
/// references two distinct, existing nodes.
pub(crate) fn validate_structure(nodes: &[Node], pipes: &[Pipe]) -> PnResult<()> {
    for (i, node) in nodes.iter().enumerate() {
        if node.id.slot() != i {
            return Err(GraphError::IdMismatch {
                what: "Node",
                expected: i as u32,
                actual: node.id.index(),
            }
            .into());
        }
    }

    for (i, pipe) in pipes.iter().enumerate() {
        if pipe.id.slot() != i {
            return Err(GraphError::IdMismatch {
                what: "Pipe",
                expected: i as u32,
                actual: pipe.id.index(),
            }
            .into());
        }

        for node in [pipe.start_node, pipe.end_node] {
            if node.slot() >= nodes.len() {
                return Err(GraphError::InvalidNodeRef {
                    pipe: pipe.id,
                    node,
                }
                .into());
            }
        }

        if pipe.start_node == pipe.end_node {
            return Err(GraphError::SelfLoop {
                pipe: pipe.id,
                node: pipe.start_node,
            }
            .into());
        }
    }

    Ok(())
}

/// Validate adjacency lists for consistency.
pub(crate) fn validate_adjacency(
    nodes: &[Node],
    pipes: &[Pipe],
    node_pipe_offsets: &[usize],
    node_pipes: &[PipeId],
) -> PnResult<()> {
    if node_pipe_offsets.len() != nodes.len() + 1 {
        return Err(GraphError::IdMismatch {
            what: "Adjacency offsets",
            expected: (nodes.len() + 1) as u32,
            actual: node_pipe_offsets.len() as u32,
        }
        .into());
    }

    let mut seen: HashSet<(PipeId, bool)> = HashSet::new();
    for node in nodes {
        let idx = node.id.slot();
        let start = node_pipe_offsets[idx];
        let end = node_pipe_offsets[idx + 1];

        for &pipe_id in &node_pipes[start..end] {
            let Some(pipe) = pipes.get(pipe_id.slot()) else {
                return Err(GraphError::InconsistentAdjacency {
                    pipe: pipe_id,
                    node: node.id,
                }
                .into());
            };
            // Each pipe must appear once at its start node and once at its end node.
            let at_start = pipe.start_node == node.id;
            if !(at_start || pipe.end_node == node.id) || !seen.insert((pipe_id, at_start)) {
                return Err(GraphError::InconsistentAdjacency {
                    pipe: pipe_id,
                    node: node.id,
                }
                .into());
            }
        }
    }

    for pipe in pipes {
        for (node, at_start) in [(pipe.start_node, true), (pipe.end_node, false)] {
            if !seen.contains(&(pipe.id, at_start)) {
                return Err(GraphError::InconsistentAdjacency {
                    pipe: pipe.id,
                    node,
                }
                .into());
            }
        }
    }

    Ok(())
}
