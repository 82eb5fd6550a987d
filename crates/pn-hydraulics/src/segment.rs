//! Per-pipe pressure-drop estimate.

use pn_core::numeric::{ensure_finite, positive};
use pn_core::units::constants::G0_MPS2;
use pn_core::units::{Pressure, Velocity, get, mps, pa};
use pn_graph::{Network, Pipe};
use serde::Serialize;
use tracing::debug;

use crate::friction::darcy_friction_factor;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SegmentEstimate {
    pub velocity: Velocity,
    pub reynolds_number: f64,
    pub friction_factor: f64,
    /// Total drop across the segment: friction, fittings, static head and fixed losses.
    pub pressure_drop: Pressure,
}

/// Sum of fitting and user K values, scaled by the fitting safety factor (%).
pub fn total_k(pipe: &Pipe) -> f64 {
    let fittings: f64 = pipe.def.fittings.iter().map(|f| f.k_total).sum();
    let k = fittings + pipe.def.user_k.unwrap_or(0.0);
    k * (1.0 + pipe.def.fitting_safety_factor.unwrap_or(0.0) / 100.0)
}

/// Darcy-Weisbach estimate for one pipe using its own fluid and geometry.
///
/// Returns `None` when length, diameter, mass flow, density or viscosity is not
/// positive.
pub fn estimate(pipe: &Pipe) -> Option<SegmentEstimate> {
    let length = pipe.length_m().and_then(positive)?;
    let diameter = positive(get::meters(pipe.def.diameter))?;
    let mdot = positive(get::kgps(pipe.def.mass_flow_rate))?;
    let rho = positive(get::kg_per_m3(pipe.def.fluid.density))?;
    let mu = positive(get::pa_s(pipe.def.fluid.viscosity))?;

    let area = std::f64::consts::PI * diameter.powi(2) / 4.0;
    let velocity = mdot / (rho * area);
    let reynolds = rho * velocity * diameter / mu;

    let relative_roughness = get::meters(pipe.def.roughness).max(0.0) / diameter;
    let f = darcy_friction_factor(relative_roughness, reynolds);

    // ΔP = (f*L/D + K) * 0.5 * rho * v^2 + rho*g*dz + fixed losses
    let dynamic = 0.5 * rho * velocity.powi(2);
    let friction = (f * length / diameter + total_k(pipe)) * dynamic;
    let static_head = rho * G0_MPS2 * get::meters(pipe.def.elevation_change);
    let fixed = pipe
        .def
        .control_valve
        .as_ref()
        .map_or(0.0, |cv| get::pascals(cv.pressure_drop))
        + pipe.def.user_pressure_loss.map_or(0.0, get::pascals);
    let dp = ensure_finite(friction + static_head + fixed, "pressure drop").ok()?;

    Some(SegmentEstimate {
        velocity: mps(velocity),
        reynolds_number: reynolds,
        friction_factor: f,
        pressure_drop: pa(dp),
    })
}

/// New network whose pipes carry estimated velocity and pressure drop.
///
/// Pipes that cannot be estimated are copied unchanged.
pub fn estimate_network(network: &Network) -> Network {
    network.map_pipes(|pipe| match estimate(pipe) {
        Some(e) => pipe.clone().with_results(e.velocity, e.pressure_drop),
        None => {
            debug!(pipe = %pipe.def.name, "segment not evaluable");
            pipe.clone()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pn_core::units::{kgph, kpa, m, mm};
    use pn_fluids::{DEFAULT_EROSIONAL_CONSTANT, Fluid, Phase};
    use pn_graph::{
        ControlValve, Direction, Fitting, GasFlowModel, NetworkBuilder, PipeDef, Position,
        SectionType,
    };

    fn water_pipe() -> Pipe {
        let mut builder = NetworkBuilder::new();
        let a = builder.add_node("A", Position::ORIGIN);
        let b = builder.add_node("B", Position::new(200.0, 0.0));
        let id = builder.add_pipe(
            a,
            b,
            PipeDef {
                name: "P1".into(),
                description: None,
                length: Some(m(100.0)),
                diameter: mm(100.0),
                inlet_diameter: mm(100.0),
                outlet_diameter: mm(100.0),
                roughness: mm(0.046),
                // 997 kg/m3 at 28.2 m3/h is about 1 m/s in DN100
                mass_flow_rate: kgph(997.0 * 3600.0 * std::f64::consts::PI * 0.01 / 4.0),
                direction: Direction::Forward,
                fluid: Fluid::default_for(Phase::Liquid),
                erosional_constant: DEFAULT_EROSIONAL_CONSTANT,
                fittings: Vec::new(),
                section_type: SectionType::Pipeline,
                control_valve: None,
                gas_flow_model: GasFlowModel::Adiabatic,
                elevation_change: m(0.0),
                fitting_type: None,
                user_k: None,
                fitting_safety_factor: None,
                user_pressure_loss: None,
                service_type: None,
                service_sub_type: None,
            },
        );
        builder.build().unwrap().pipe(id).unwrap().clone()
    }

    #[test]
    fn straight_pipe_velocity_and_regime() {
        let e = estimate(&water_pipe()).unwrap();
        assert!((get::mps(e.velocity) - 1.0).abs() < 1e-9);
        // Re = 997 * 1 * 0.1 / 0.001
        assert!((e.reynolds_number - 99_700.0).abs() < 1e-6);
        let expected = e.friction_factor * 1000.0 * 0.5 * 997.0;
        assert!((get::pascals(e.pressure_drop) - expected).abs() < 1e-6);
    }

    #[test]
    fn fittings_elevation_and_fixed_losses_add_up() {
        let base = estimate(&water_pipe()).unwrap();

        let mut pipe = water_pipe();
        let mut elbow = Fitting::new("elbow_90", 2);
        elbow.k_total = 1.5;
        pipe.def.fittings.push(elbow);
        pipe.def.user_k = Some(0.5);
        pipe.def.fitting_safety_factor = Some(10.0);
        pipe.def.elevation_change = m(2.0);
        pipe.def.control_valve = Some(ControlValve {
            pressure_drop: kpa(50.0),
        });
        pipe.def.user_pressure_loss = Some(kpa(5.0));

        assert!((total_k(&pipe) - 2.2).abs() < 1e-12);
        let e = estimate(&pipe).unwrap();
        let extra = 2.2 * 0.5 * 997.0 + 997.0 * G0_MPS2 * 2.0 + 55_000.0;
        let got = get::pascals(e.pressure_drop) - get::pascals(base.pressure_drop);
        assert!((got - extra).abs() < 1e-6, "got {got}, want {extra}");
    }

    #[test]
    fn missing_length_is_not_evaluable() {
        let mut pipe = water_pipe();
        pipe.def.length = None;
        assert!(estimate(&pipe).is_none());
        pipe.def.length = Some(m(0.0));
        assert!(estimate(&pipe).is_none());
    }

    #[test]
    fn zero_flow_is_not_evaluable() {
        let mut pipe = water_pipe();
        pipe.def.mass_flow_rate = kgph(0.0);
        assert!(estimate(&pipe).is_none());
    }
}
