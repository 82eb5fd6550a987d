//! pn-core: stable foundation for pipenet.
//!
//! Contains:
//! - units (uom SI types, constructors, sheet unit normalization)
//! - numeric (Real + tolerances + float helpers)
//! - ids (compact IDs for nodes and pipes)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PnError, PnResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
