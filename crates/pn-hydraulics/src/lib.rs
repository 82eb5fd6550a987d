//! pn-hydraulics: screening-level pressure-drop estimates.
//!
//! - friction (Darcy friction factor correlations)
//! - segment (per-pipe estimate from the pipe's own data)
//! - summary (whole-line check against a relief scenario)

pub mod friction;
pub mod segment;
pub mod summary;

pub use friction::{darcy_friction_factor, swamee_jain};
pub use segment::{SegmentEstimate, estimate, estimate_network};
pub use summary::{
    BoundaryKind, FlowScenario, PipelineHydraulicSummary, ValidationStatus, classify,
    friction_factor, summarize,
};
