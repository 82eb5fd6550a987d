//! pn-fluids: fluid primitives for pipenet.
//!
//! Provides:
//! - `Phase` and the immutable `Fluid` value attached to nodes and pipes
//! - `ErosionalModel`, the seam for erosional-velocity limits
//! - `Api14e`, the default erosional model
//!
//! # Example
//!
//! ```
//! use pn_fluids::{Api14e, ErosionalModel, Fluid, Phase};
//! use pn_core::units::get;
//!
//! let water = Fluid::default_for(Phase::Liquid);
//! let ve = Api14e.erosional_velocity(water.density, 100.0).unwrap();
//! assert!(get::mps(ve) > 3.0);
//! ```

pub mod erosional;
pub mod error;
pub mod fluid;

pub use erosional::{Api14e, DEFAULT_EROSIONAL_CONSTANT, ErosionalModel};
pub use error::{FluidError, FluidResult};
pub use fluid::{Fluid, Phase};
