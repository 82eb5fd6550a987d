//! Whole-line pressure-loss check for relief valve inlet and outlet piping.
//!
//! This is a coarse screening estimate: the line is collapsed to its total
//! length and mean diameter, and fluid properties are fixed per phase.

use pn_core::units::{KPA_PER_BAR, Length, Pressure, Velocity, kpa, m, mm, mps};
use pn_fluids::Phase;
use pn_graph::Network;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::friction::swamee_jain;

/// Reynolds number at or below which the fixed friction factor applies.
pub const TURBULENT_RE: f64 = 4000.0;
const FIXED_FRICTION_FACTOR: f64 = 0.02;
const SCREENING_ROUGHNESS_MM: f64 = 0.046;

/// Governing relief scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowScenario {
    pub relieving_rate_kg_h: f64,
    pub phase: Phase,
}

impl FlowScenario {
    /// Approximate density (kg/m³) and viscosity (Pa·s) used for screening.
    ///
    /// Only gas and steam take the vapor density; only liquid takes the liquid
    /// viscosity. Two-phase flow gets liquid density with vapor viscosity.
    pub fn screening_properties(&self) -> (f64, f64) {
        let density = if matches!(self.phase, Phase::Gas | Phase::Steam) {
            10.0
        } else {
            800.0
        };
        let viscosity = if self.phase == Phase::Liquid {
            0.001
        } else {
            0.00002
        };
        (density, viscosity)
    }
}

/// Side of the relief valve the line is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    Inlet,
    Outlet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    Pass,
    Warning,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineHydraulicSummary {
    pub total_length: Length,
    /// Mean of the pipe diameters.
    pub nominal_diameter: Length,
    pub velocity: Velocity,
    pub pressure_drop: Pressure,
    /// Pressure drop as a percentage of set pressure.
    pub pressure_drop_percent: f64,
    pub reynolds_number: f64,
    pub friction_factor: f64,
    pub validation_status: ValidationStatus,
    pub validation_message: String,
}

/// Fixed factor up to [`TURBULENT_RE`], Swamee-Jain with commercial-steel
/// roughness above it.
pub fn friction_factor(reynolds: f64, diameter_m: f64) -> f64 {
    if reynolds <= TURBULENT_RE {
        FIXED_FRICTION_FACTOR
    } else {
        swamee_jain(SCREENING_ROUGHNESS_MM / 1000.0 / diameter_m, reynolds)
    }
}

/// Classify a pressure loss (% of set pressure) for the given side of the valve.
pub fn classify(percent: f64, boundary: BoundaryKind) -> (ValidationStatus, String) {
    match boundary {
        BoundaryKind::Inlet => {
            if percent <= 3.0 {
                (
                    ValidationStatus::Pass,
                    format!("Inlet pressure loss of {percent:.1}% is within the 3% limit"),
                )
            } else if percent <= 5.0 {
                (
                    ValidationStatus::Warning,
                    format!(
                        "Inlet pressure loss of {percent:.1}% exceeds the 3% limit; \
                         consider a larger inlet line diameter"
                    ),
                )
            } else {
                (
                    ValidationStatus::Fail,
                    format!(
                        "Inlet pressure loss of {percent:.1}% exceeds the 5% maximum; \
                         a larger inlet line diameter is required"
                    ),
                )
            }
        }
        BoundaryKind::Outlet => {
            if percent <= 10.0 {
                (
                    ValidationStatus::Pass,
                    format!("Built-up backpressure of {percent:.1}% is within the 10% limit"),
                )
            } else if percent <= 15.0 {
                (
                    ValidationStatus::Warning,
                    format!(
                        "Built-up backpressure of {percent:.1}% exceeds 10%; \
                         consider a balanced bellows valve"
                    ),
                )
            } else {
                (
                    ValidationStatus::Fail,
                    format!("Built-up backpressure of {percent:.1}% exceeds the allowable limit"),
                )
            }
        }
    }
}

/// Screen the whole line against `scenario` at `set_pressure_barg`.
///
/// Returns `None` when there is nothing to evaluate: no pipes, no scenario, or
/// a non-positive mean diameter or set pressure.
pub fn summarize(
    network: &Network,
    scenario: Option<&FlowScenario>,
    set_pressure_barg: f64,
    boundary: BoundaryKind,
) -> Option<PipelineHydraulicSummary> {
    let scenario = scenario?;
    let pipes = network.pipes();
    if pipes.is_empty() {
        return None;
    }

    let total_length_m: f64 = pipes.iter().filter_map(|p| p.length_m()).sum();
    let mean_diameter_mm =
        pipes.iter().map(|p| p.diameter_mm()).sum::<f64>() / pipes.len() as f64;
    if !(mean_diameter_mm > 0.0 && set_pressure_barg > 0.0) {
        debug!(mean_diameter_mm, set_pressure_barg, "line not evaluable");
        return None;
    }

    let (rho, mu) = scenario.screening_properties();
    let d = mean_diameter_mm / 1000.0;
    let flow = scenario.relieving_rate_kg_h / rho / 3600.0;
    let area = std::f64::consts::PI * d * d / 4.0;
    let velocity = flow / area;
    let reynolds = rho * velocity * d / mu;
    let f = friction_factor(reynolds, d);

    let dp_kpa = f * (total_length_m / d) * (rho * velocity * velocity / 2.0) / 1000.0;
    let percent = dp_kpa / (set_pressure_barg * KPA_PER_BAR) * 100.0;
    let (validation_status, validation_message) = classify(percent, boundary);

    Some(PipelineHydraulicSummary {
        total_length: m(total_length_m),
        nominal_diameter: mm(mean_diameter_mm),
        velocity: mps(velocity),
        pressure_drop: kpa(dp_kpa),
        pressure_drop_percent: percent,
        reynolds_number: reynolds,
        friction_factor: f,
        validation_status,
        validation_message,
    })
}
