//! Classification of pipe velocity and pressure drop against the criteria tables.

use pn_core::PipeId;
use pn_core::units::{PA_PER_BAR, get, mm_to_inches};
use pn_fluids::{Api14e, ErosionalModel, Phase};
use pn_graph::{Network, Pipe};
use serde::Serialize;
use tracing::debug;

use crate::rules::{Breach, CriteriaRule, Limit, find_rule};
use crate::tables::{LIQUID_RULES, VAPOR_RULES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    #[default]
    Ok,
    Warning,
    Error,
}

/// Which limit produced a check result, for highlighting in callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LimitType {
    Velocity,
    PressureDrop,
    Erosional,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CriteriaCheckResult {
    pub status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_type: Option<LimitType>,
}

impl CriteriaCheckResult {
    pub fn ok() -> Self {
        Self::default()
    }

    fn flagged(status: CheckStatus, message: String, limit: f64, limit_type: LimitType) -> Self {
        Self {
            status,
            message: Some(message),
            limit: Some(limit),
            limit_type: Some(limit_type),
        }
    }
}

/// Velocity and pressure-drop verdicts for one pipe.
///
/// `{ok, ok}` is also returned for pipes that could not be evaluated at all, so it
/// must not be read as a verified pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PipeStatus {
    pub velocity_status: CriteriaCheckResult,
    pub pressure_drop_status: CriteriaCheckResult,
}

/// Rule table for a fluid phase: only gas uses the vapor table.
pub fn rules_for_phase(phase: Phase) -> &'static [CriteriaRule] {
    if phase == Phase::Gas {
        VAPOR_RULES
    } else {
        LIQUID_RULES
    }
}

/// Pa over a length in metres, expressed as bar/100 m.
pub fn bar_per_100m(pressure_drop_pa: f64, length_m: f64) -> f64 {
    (pressure_drop_pa / length_m) * 100.0 / PA_PER_BAR
}

/// Evaluates pipes against the criteria tables using an erosional model `E`.
#[derive(Debug, Clone, Default)]
pub struct CriteriaEvaluator<E = Api14e> {
    model: E,
}

impl CriteriaEvaluator<Api14e> {
    pub fn new() -> Self {
        Self { model: Api14e }
    }
}

impl<E: ErosionalModel> CriteriaEvaluator<E> {
    pub fn with_model(model: E) -> Self {
        Self { model }
    }

    pub fn evaluate(&self, pipe: &Pipe) -> PipeStatus {
        let mut status = PipeStatus::default();

        let (Some(service), Some(velocity)) = (pipe.def.service_type, pipe.velocity) else {
            return status;
        };
        let diameter_mm = pipe.diameter_mm();
        if !(diameter_mm.is_finite() && diameter_mm > 0.0) {
            return status;
        }
        let velocity = get::mps(velocity);

        match self
            .model
            .erosional_velocity(pipe.def.fluid.density, pipe.def.erosional_constant)
        {
            Ok(limit) => {
                let limit = get::mps(limit);
                if velocity > limit {
                    status.velocity_status = CriteriaCheckResult::flagged(
                        CheckStatus::Error,
                        format!("Velocity exceeds erosional limit of {:.2} m/s", limit),
                        limit,
                        LimitType::Erosional,
                    );
                }
            }
            Err(err) => debug!(pipe = %pipe.def.name, %err, "erosional check skipped"),
        }

        let diameter_in = mm_to_inches(diameter_mm);
        let rules = rules_for_phase(pipe.def.fluid.phase);
        let Some(rule) = find_rule(
            rules,
            service,
            pipe.def.service_sub_type.as_deref(),
            diameter_in,
        ) else {
            debug!(pipe = %pipe.def.name, %service, diameter_in, "no criteria rule");
            return status;
        };

        if status.velocity_status.status != CheckStatus::Error {
            status.velocity_status = check_velocity(rule.velocity, velocity);
        }

        if let (Some(length_m), Some(dp), Some(limit)) =
            (pipe.length_m(), pipe.pressure_drop, rule.pressure_drop)
        {
            if length_m > 0.0 {
                let normalized = bar_per_100m(get::pascals(dp), length_m);
                status.pressure_drop_status = check_pressure_drop(limit, normalized);
            }
        }

        status
    }

    /// Evaluate every pipe, in pipe order.
    pub fn evaluate_network(&self, network: &Network) -> Vec<(PipeId, PipeStatus)> {
        network
            .pipes()
            .iter()
            .map(|pipe| (pipe.id, self.evaluate(pipe)))
            .collect()
    }
}

fn check_velocity(limit: Limit, value: f64) -> CriteriaCheckResult {
    match limit.check(value) {
        None => CriteriaCheckResult::ok(),
        Some(Breach::Above(max)) => CriteriaCheckResult::flagged(
            CheckStatus::Warning,
            format!("Velocity exceeds recommended limit of {} m/s", max),
            max,
            LimitType::Velocity,
        ),
        Some(Breach::Below(min)) => CriteriaCheckResult::flagged(
            CheckStatus::Warning,
            format!("Velocity below recommended limit of {} m/s", min),
            min,
            LimitType::Velocity,
        ),
    }
}

fn check_pressure_drop(limit: Limit, value: f64) -> CriteriaCheckResult {
    match limit.check(value) {
        None => CriteriaCheckResult::ok(),
        Some(Breach::Above(max)) => CriteriaCheckResult::flagged(
            CheckStatus::Warning,
            format!("Pressure drop exceeds recommended limit of {} bar/100m", max),
            max,
            LimitType::PressureDrop,
        ),
        Some(Breach::Below(min)) => CriteriaCheckResult::flagged(
            CheckStatus::Warning,
            format!("Pressure drop below recommended limit of {} bar/100m", min),
            min,
            LimitType::PressureDrop,
        ),
    }
}

/// Evaluate a pipe with the default erosional model.
pub fn evaluate(pipe: &Pipe) -> PipeStatus {
    CriteriaEvaluator::new().evaluate(pipe)
}
