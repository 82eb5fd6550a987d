//! Core network data structures.

use pn_core::units::{Length, MassRate, Pressure, Temperature, Velocity, get};
use pn_core::{NodeId, PipeId};
use pn_fluids::Fluid;
use serde::Serialize;

use crate::service::ServiceType;

/// Layout position of a node, in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Fluid state imposed on a node by the pipe that owns the boundary condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    pub fluid: Fluid,
    pub pressure: Pressure,
    pub temperature: Temperature,
}

/// A junction or boundary point.
///
/// A node may be shared by two chained pipes (one pipe's end is the next pipe's
/// start); both pipes then refer to it by the same `NodeId`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub position: Position,
    pub fluid: Option<Fluid>,
    pub pressure: Option<Pressure>,
    pub temperature: Option<Temperature>,
}

impl Node {
    /// Return a copy of this node carrying `boundary`, replacing any previous one.
    pub fn with_boundary(&self, boundary: &Boundary) -> Node {
        Node {
            fluid: Some(boundary.fluid.clone()),
            pressure: Some(boundary.pressure),
            temperature: Some(boundary.temperature),
            ..self.clone()
        }
    }

    pub fn has_boundary(&self) -> bool {
        self.fluid.is_some()
    }
}

/// Which endpoint of a pipe receives its boundary condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    /// The endpoint that carries the boundary: `start` for forward flow, `end` for backward.
    pub fn pick<T>(self, start: T, end: T) -> T {
        match self {
            Direction::Forward => start,
            Direction::Backward => end,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SectionType {
    #[default]
    #[serde(rename = "pipeline")]
    Pipeline,
    #[serde(rename = "control valve")]
    ControlValve,
}

impl SectionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionType::Pipeline => "pipeline",
            SectionType::ControlValve => "control valve",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GasFlowModel {
    #[default]
    Adiabatic,
    Isothermal,
}

/// Resistance contribution of one fitting class on a pipe.
///
/// `k_each` and `k_total` are filled in by the resistance calculation and start at zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fitting {
    pub fitting_type: String,
    pub count: u32,
    pub k_each: f64,
    pub k_total: f64,
}

impl Fitting {
    pub fn new(fitting_type: impl Into<String>, count: u32) -> Self {
        Self {
            fitting_type: fitting_type.into(),
            count,
            k_each: 0.0,
            k_total: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlValve {
    pub pressure_drop: Pressure,
}

/// Everything that describes a pipe segment except its identity and endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeDef {
    pub name: String,
    pub description: Option<String>,
    /// `None` when the length is unknown; such a pipe is not evaluable for pressure drop.
    pub length: Option<Length>,
    pub diameter: Length,
    pub inlet_diameter: Length,
    pub outlet_diameter: Length,
    pub roughness: Length,
    pub mass_flow_rate: MassRate,
    pub direction: Direction,
    pub fluid: Fluid,
    pub erosional_constant: f64,
    pub fittings: Vec<Fitting>,
    pub section_type: SectionType,
    pub control_valve: Option<ControlValve>,
    pub gas_flow_model: GasFlowModel,
    pub elevation_change: Length,
    pub fitting_type: Option<String>,
    pub user_k: Option<f64>,
    pub fitting_safety_factor: Option<f64>,
    pub user_pressure_loss: Option<Pressure>,
    pub service_type: Option<ServiceType>,
    pub service_sub_type: Option<String>,
}

/// A directed pipe segment between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pipe {
    pub id: PipeId,
    pub start_node: NodeId,
    pub end_node: NodeId,
    #[serde(flatten)]
    pub def: PipeDef,
    /// Mean velocity from a segment calculation, absent until one has run.
    pub velocity: Option<Velocity>,
    /// Total segment pressure drop, absent until a segment calculation has run.
    pub pressure_drop: Option<Pressure>,
}

impl Pipe {
    /// The endpoint that carries this pipe's boundary condition.
    pub fn boundary_node(&self) -> NodeId {
        self.def.direction.pick(self.start_node, self.end_node)
    }

    pub fn length_m(&self) -> Option<f64> {
        self.def.length.map(get::meters)
    }

    pub fn diameter_mm(&self) -> f64 {
        get::millimeters(self.def.diameter)
    }

    pub fn with_service(mut self, service: ServiceType, sub_type: Option<String>) -> Self {
        self.def.service_type = Some(service);
        self.def.service_sub_type = sub_type;
        self
    }

    pub fn with_results(mut self, velocity: Velocity, pressure_drop: Pressure) -> Self {
        self.velocity = Some(velocity);
        self.pressure_drop = Some(pressure_drop);
        self
    }
}

/// The network: a validated, immutable collection of nodes and pipes.
///
/// Nodes and pipes are stored in vectors indexed by their IDs, plus a compact
/// node -> incident pipe adjacency.
#[derive(Debug, Clone, Serialize)]
pub struct Network {
    pub(crate) nodes: Vec<Node>,
    pub(crate) pipes: Vec<Pipe>,

    /// node i's pipes are in node_pipes[node_pipe_offsets[i]..node_pipe_offsets[i+1]].
    #[serde(skip)]
    pub(crate) node_pipe_offsets: Vec<usize>,

    #[serde(skip)]
    pub(crate) node_pipes: Vec<PipeId>,
}

impl Network {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot())
    }

    pub fn pipe(&self, id: PipeId) -> Option<&Pipe> {
        self.pipes.get(id.slot())
    }

    /// Pipes incident to a node (as start or end), in pipe order.
    pub fn node_pipes(&self, node_id: NodeId) -> &[PipeId] {
        let idx = node_id.slot();
        if idx >= self.nodes.len() {
            return &[];
        }
        let start = self.node_pipe_offsets[idx];
        let end = self.node_pipe_offsets[idx + 1];
        &self.node_pipes[start..end]
    }

    /// Nodes referenced by more than one pipe.
    pub fn shared_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| self.node_pipes(n.id).len() > 1)
    }

    /// Build a new network whose pipes are `f` applied to each pipe.
    ///
    /// Topology is kept: the returned pipe keeps its id and endpoints.
    pub fn map_pipes(&self, mut f: impl FnMut(&Pipe) -> Pipe) -> Network {
        let pipes = self
            .pipes
            .iter()
            .map(|p| {
                let mapped = f(p);
                Pipe {
                    id: p.id,
                    start_node: p.start_node,
                    end_node: p.end_node,
                    ..mapped
                }
            })
            .collect();
        Network {
            nodes: self.nodes.clone(),
            pipes,
            node_pipe_offsets: self.node_pipe_offsets.clone(),
            node_pipes: self.node_pipes.clone(),
        }
    }
}
