//! Incremental network builder.

use pn_core::{NodeId, PipeId, PnResult};

use crate::error::GraphError;
use crate::graph::{Boundary, Network, Node, Pipe, PipeDef, Position};
use crate::validate;

/// Builder for constructing a network incrementally.
///
/// Use `add_node` and `add_pipe` to build up the network, then call `build()` to
/// validate and freeze it into an immutable `Network`.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    nodes: Vec<Node>,
    pipes: Vec<Pipe>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node without boundary data and return its ID.
    pub fn add_node(&mut self, label: impl Into<String>, position: Position) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(Node {
            id,
            label: label.into(),
            position,
            fluid: None,
            pressure: None,
            temperature: None,
        });
        id
    }

    /// Add a pipe from `start` to `end`. Node references are checked in `build()`.
    pub fn add_pipe(&mut self, start: NodeId, end: NodeId, def: PipeDef) -> PipeId {
        let id = PipeId::from_index(self.pipes.len() as u32);
        self.pipes.push(Pipe {
            id,
            start_node: start,
            end_node: end,
            def,
            velocity: None,
            pressure_drop: None,
        });
        id
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    pub fn pipe(&self, id: PipeId) -> Option<&Pipe> {
        self.pipes.get(id.slot())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn pipe_count(&self) -> usize {
        self.pipes.len()
    }

    /// Replace the stored record of `id` with one carrying `boundary`.
    ///
    /// Every pipe referencing the node sees the new values; the last call wins.
    pub fn apply_boundary(&mut self, id: NodeId, boundary: &Boundary) -> PnResult<()> {
        let slot = self
            .nodes
            .get_mut(id.slot())
            .ok_or(GraphError::UnknownNode { node: id })?;
        *slot = slot.with_boundary(boundary);
        Ok(())
    }

    /// Build and validate the network.
    pub fn build(self) -> PnResult<Network> {
        validate::validate_structure(&self.nodes, &self.pipes)?;

        let (node_pipe_offsets, node_pipes) = Self::build_adjacency(&self.nodes, &self.pipes);

        validate::validate_adjacency(&self.nodes, &self.pipes, &node_pipe_offsets, &node_pipes)?;

        Ok(Network {
            nodes: self.nodes,
            pipes: self.pipes,
            node_pipe_offsets,
            node_pipes,
        })
    }

    /// Compact adjacency: for each node, the pipes touching it, in pipe order.
    fn build_adjacency(nodes: &[Node], pipes: &[Pipe]) -> (Vec<usize>, Vec<PipeId>) {
        let mut per_node: Vec<Vec<PipeId>> = vec![Vec::new(); nodes.len()];
        for pipe in pipes {
            per_node[pipe.start_node.slot()].push(pipe.id);
            per_node[pipe.end_node.slot()].push(pipe.id);
        }

        let mut offsets = Vec::with_capacity(nodes.len() + 1);
        let mut flat = Vec::with_capacity(pipes.len() * 2);
        offsets.push(0);
        for list in per_node {
            flat.extend(list);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}
