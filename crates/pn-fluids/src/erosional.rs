//! Erosional velocity limits.

use crate::error::{FluidError, FluidResult};
use pn_core::units::{Density, M_PER_FOOT, Velocity, get, mps};

/// Erosional constant used when a pipe does not specify one.
pub const DEFAULT_EROSIONAL_CONSTANT: f64 = 100.0;

/// kg/m³ to lb/ft³.
const LB_FT3_PER_KG_M3: f64 = 0.062_428;

/// Source of the erosional velocity limit for a fluid density.
///
/// Criteria evaluation depends only on this contract, so callers can swap in a
/// different correlation without touching the rule tables.
pub trait ErosionalModel: Send + Sync {
    /// Maximum velocity before erosion/vibration risk for `density` and the
    /// empirical constant `constant`.
    fn erosional_velocity(&self, density: Density, constant: f64) -> FluidResult<Velocity>;
}

/// API RP 14E correlation: `Ve [ft/s] = C / sqrt(rho [lb/ft³])`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Api14e;

impl ErosionalModel for Api14e {
    fn erosional_velocity(&self, density: Density, constant: f64) -> FluidResult<Velocity> {
        let rho = get::kg_per_m3(density);
        if !rho.is_finite() || rho <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive for erosional velocity",
            });
        }
        if !constant.is_finite() || constant <= 0.0 {
            return Err(FluidError::InvalidArg {
                what: "erosional constant must be positive",
            });
        }
        let ve_ft_s = constant / (rho * LB_FT3_PER_KG_M3).sqrt();
        Ok(mps(ve_ft_s * M_PER_FOOT))
    }
}
