//! pn-graph: pipe network model for pipenet.
//!
//! Provides:
//! - Node, Pipe, Fitting and the immutable `Network`
//! - Incremental `NetworkBuilder` with validation
//! - `ServiceType`, the key used by the criteria rule tables
//!
//! # Example
//!
//! ```
//! use pn_graph::{NetworkBuilder, Position};
//!
//! let mut builder = NetworkBuilder::new();
//! let n1 = builder.add_node("N1", Position::ORIGIN);
//! let n2 = builder.add_node("N2", Position::new(200.0, 0.0));
//! assert_ne!(n1, n2);
//! let network = builder.build().unwrap();
//! assert!(network.is_empty());
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod service;
pub(crate) mod validate;

pub use builder::NetworkBuilder;
pub use error::GraphError;
pub use graph::{
    Boundary, ControlValve, Direction, Fitting, GasFlowModel, Network, Node, Pipe, PipeDef,
    Position, SectionType,
};
pub use service::ServiceType;
