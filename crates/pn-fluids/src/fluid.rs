//! Fluid value objects.

use crate::error::{FluidError, FluidResult};
use pn_core::units::{Density, DynVisc, centipoise, get, kg_per_m3};
use serde::{Deserialize, Serialize};

/// Phase of the fluid carried by a node or pipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Liquid,
    Gas,
    Steam,
    TwoPhase,
}

impl Phase {
    pub fn is_liquid(self) -> bool {
        matches!(self, Phase::Liquid)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Liquid => "liquid",
            Phase::Gas => "gas",
            Phase::Steam => "steam",
            Phase::TwoPhase => "two_phase",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable fluid description attached to a node or pipe at creation.
///
/// Only density and viscosity are required; the gas properties are carried through
/// for downstream compressible-flow calculations and are never defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fluid {
    pub phase: Phase,
    pub density: Density,
    pub viscosity: DynVisc,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molecular_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_heat_ratio: Option<f64>,
}

impl Fluid {
    /// Create a fluid, validating that density and viscosity are positive and finite.
    pub fn new(phase: Phase, density: Density, viscosity: DynVisc) -> FluidResult<Self> {
        let rho = get::kg_per_m3(density);
        if !rho.is_finite() || rho <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        let mu = get::pa_s(viscosity);
        if !mu.is_finite() || mu <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "viscosity must be positive and finite",
            });
        }
        Ok(Self {
            phase,
            density,
            viscosity,
            molecular_weight: None,
            z_factor: None,
            specific_heat_ratio: None,
        })
    }

    /// Fallback properties used when a data sheet leaves density/viscosity blank:
    /// water-like for liquids, air-like at atmospheric pressure otherwise.
    pub fn default_for(phase: Phase) -> Self {
        let (rho, mu_cp) = Self::default_properties(phase);
        Self {
            phase,
            density: kg_per_m3(rho),
            viscosity: centipoise(mu_cp),
            molecular_weight: None,
            z_factor: None,
            specific_heat_ratio: None,
        }
    }

    /// `(density kg/m³, viscosity cP)` defaults for a phase.
    pub fn default_properties(phase: Phase) -> (f64, f64) {
        if phase.is_liquid() { (997.0, 1.0) } else { (1.0, 0.01) }
    }

    pub fn with_gas_properties(
        mut self,
        molecular_weight: Option<f64>,
        z_factor: Option<f64>,
        specific_heat_ratio: Option<f64>,
    ) -> Self {
        self.molecular_weight = molecular_weight;
        self.z_factor = z_factor;
        self.specific_heat_ratio = specific_heat_ratio;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pn_core::units::pa_s;

    #[test]
    fn rejects_non_positive_density() {
        let err = Fluid::new(Phase::Liquid, kg_per_m3(0.0), pa_s(0.001)).unwrap_err();
        assert!(matches!(err, FluidError::NonPhysical { .. }));
        assert!(Fluid::new(Phase::Liquid, kg_per_m3(f64::NAN), pa_s(0.001)).is_err());
    }

    #[test]
    fn rejects_non_positive_viscosity() {
        assert!(Fluid::new(Phase::Gas, kg_per_m3(1.2), pa_s(-1.0)).is_err());
    }

    #[test]
    fn defaults_by_phase() {
        let water = Fluid::default_for(Phase::Liquid);
        assert!((get::kg_per_m3(water.density) - 997.0).abs() < 1e-9);
        assert!((get::pa_s(water.viscosity) - 0.001).abs() < 1e-12);

        let gas = Fluid::default_for(Phase::Gas);
        assert!((get::kg_per_m3(gas.density) - 1.0).abs() < 1e-12);
        assert!((get::pa_s(gas.viscosity) - 1e-5).abs() < 1e-15);
        assert!(gas.molecular_weight.is_none());
    }

    #[test]
    fn gas_properties_are_carried() {
        let gas = Fluid::default_for(Phase::Gas).with_gas_properties(Some(28.96), Some(0.98), None);
        assert_eq!(gas.molecular_weight, Some(28.96));
        assert_eq!(gas.z_factor, Some(0.98));
        assert_eq!(gas.specific_heat_ratio, None);
    }

    #[test]
    fn phase_names() {
        assert_eq!(Phase::TwoPhase.to_string(), "two_phase");
        assert!(Phase::Liquid.is_liquid());
        assert!(!Phase::Steam.is_liquid());
    }
}
