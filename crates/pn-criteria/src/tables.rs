//! Reference design criteria for process piping.
//!
//! Velocities in m/s, pressure drops in bar/100 m, diameter bands in inches.
//! Order matters: lookup takes the first matching row.

use pn_graph::ServiceType::{self, *};

use crate::rules::{CriteriaRule, Limit};

const fn rule(
    service_type: ServiceType,
    sub_type: Option<&'static str>,
    min_diameter: Option<f64>,
    max_diameter: Option<f64>,
    velocity: Limit,
    pressure_drop: Option<Limit>,
) -> CriteriaRule {
    CriteriaRule {
        service_type,
        sub_type,
        min_diameter,
        max_diameter,
        velocity,
        pressure_drop,
    }
}

const fn range(min: f64, max: f64) -> Limit {
    Limit::Range { min, max }
}

const fn max(v: f64) -> Limit {
    Limit::Max(v)
}

pub static LIQUID_RULES: &[CriteriaRule] = &[
    // Pump suction
    rule(PumpSuction, None, None, Some(2.0), range(0.3, 0.6), Some(max(0.35))),
    rule(PumpSuction, None, Some(2.0), Some(10.0), range(0.6, 1.2), Some(max(0.25))),
    rule(PumpSuction, None, Some(10.0), Some(18.0), range(0.9, 1.5), Some(max(0.15))),
    rule(PumpSuction, None, Some(18.0), None, range(1.2, 2.1), Some(max(0.1))),
    // Pump discharge
    rule(PumpDischarge, None, None, Some(3.0), range(1.2, 2.75), Some(max(0.9))),
    rule(PumpDischarge, None, Some(3.0), Some(10.0), range(1.5, 3.0), Some(max(0.7))),
    rule(PumpDischarge, None, Some(10.0), None, range(2.1, 3.65), Some(max(0.45))),
    // General process liquid
    rule(ProcessLiquid, None, None, Some(2.0), max(1.2), Some(max(0.6))),
    rule(ProcessLiquid, None, Some(2.0), Some(10.0), max(1.8), Some(max(0.45))),
    rule(ProcessLiquid, None, Some(10.0), None, max(2.4), Some(max(0.25))),
    // Drains (gravity or low-head)
    rule(Drain, None, None, None, range(0.45, 1.2), None),
    // Amine
    rule(Amine, Some("rich"), None, None, max(1.0), Some(max(0.35))),
    rule(Amine, Some("lean"), None, None, max(2.1), Some(max(0.45))),
    // Boiler feed water
    rule(BoilerFeedWater, Some("suction"), None, None, range(0.3, 0.9), Some(max(0.25))),
    rule(BoilerFeedWater, Some("discharge"), None, None, range(1.2, 2.4), Some(max(0.9))),
    // Cooling water
    rule(CoolingWater, None, None, Some(2.0), range(0.9, 1.5), Some(max(0.45))),
    rule(CoolingWater, None, Some(2.0), Some(10.0), range(1.2, 2.4), Some(max(0.35))),
    rule(CoolingWater, None, Some(10.0), None, range(1.5, 3.0), Some(max(0.25))),
    // Reboiler circuits
    rule(ReboilerTrapOut, None, None, None, range(0.3, 1.2), Some(max(0.1))),
    rule(ReboilerReturn, None, None, None, range(0.9, 3.0), Some(max(0.1))),
];

pub static VAPOR_RULES: &[CriteriaRule] = &[
    // Below atmospheric
    rule(VaporVacuum, None, None, Some(6.0), max(30.0), Some(max(0.01))),
    rule(VaporVacuum, None, Some(6.0), None, max(50.0), Some(max(0.02))),
    // 0 to 3.5 barg
    rule(VaporLowPressure, Some("saturated"), None, Some(6.0), max(25.0), Some(max(0.1))),
    rule(VaporLowPressure, Some("saturated"), Some(6.0), None, max(35.0), Some(max(0.1))),
    rule(VaporLowPressure, Some("superheated"), None, Some(6.0), max(30.0), Some(max(0.1))),
    rule(VaporLowPressure, Some("superheated"), Some(6.0), None, max(45.0), Some(max(0.1))),
    // 3.5 to 14 barg
    rule(VaporMediumPressure, Some("saturated"), None, Some(6.0), max(25.0), Some(max(0.25))),
    rule(VaporMediumPressure, Some("saturated"), Some(6.0), None, max(30.0), Some(max(0.25))),
    rule(VaporMediumPressure, Some("superheated"), None, Some(6.0), max(30.0), Some(max(0.25))),
    rule(VaporMediumPressure, Some("superheated"), Some(6.0), None, max(40.0), Some(max(0.25))),
    // Above 14 barg
    rule(VaporHighPressure, Some("saturated"), None, Some(6.0), max(20.0), Some(max(0.45))),
    rule(VaporHighPressure, Some("saturated"), Some(6.0), None, max(25.0), Some(max(0.45))),
    rule(VaporHighPressure, Some("superheated"), None, Some(6.0), max(25.0), Some(max(0.45))),
    rule(VaporHighPressure, Some("superheated"), Some(6.0), None, max(35.0), Some(max(0.45))),
];
