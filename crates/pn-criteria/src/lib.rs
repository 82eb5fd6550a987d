//! pn-criteria: engineering acceptance criteria for pipe segments.
//!
//! The liquid and vapor tables are ordered lists searched first-match-wins by
//! service type, optional sub-type and diameter band. The evaluator combines a
//! table lookup with an erosional-velocity check from an `ErosionalModel`.

pub mod evaluator;
pub mod rules;
pub mod tables;

pub use evaluator::{
    CheckStatus, CriteriaCheckResult, CriteriaEvaluator, LimitType, PipeStatus, bar_per_100m,
    evaluate, rules_for_phase,
};
pub use rules::{Breach, CriteriaRule, Limit, find_rule, overlapping_rules};
pub use tables::{LIQUID_RULES, VAPOR_RULES};
