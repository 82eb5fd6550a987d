//! Criteria rules and first-match lookup.

use pn_graph::ServiceType;
use serde::Serialize;

/// Acceptance limit for a screened quantity.
///
/// A bare number is a maximum only; a range also flags values below `min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Limit {
    Max(f64),
    Range { min: f64, max: f64 },
}

/// Outcome of comparing a value against a `Limit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Breach {
    Above(f64),
    Below(f64),
}

impl Limit {
    /// Compare `value` against the limit. The upper bound is checked first.
    pub fn check(self, value: f64) -> Option<Breach> {
        match self {
            Limit::Max(max) => (value > max).then_some(Breach::Above(max)),
            Limit::Range { min, max } => {
                if value > max {
                    Some(Breach::Above(max))
                } else if value < min {
                    Some(Breach::Below(min))
                } else {
                    None
                }
            }
        }
    }
}

/// One row of a criteria table.
///
/// Diameter bounds are inches and inclusive; `None` leaves that side open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CriteriaRule {
    pub service_type: ServiceType,
    pub sub_type: Option<&'static str>,
    pub min_diameter: Option<f64>,
    pub max_diameter: Option<f64>,
    /// m/s
    pub velocity: Limit,
    /// bar/100 m
    pub pressure_drop: Option<Limit>,
}

impl CriteriaRule {
    pub fn covers_diameter(&self, diameter_in: f64) -> bool {
        self.min_diameter.is_none_or(|min| diameter_in >= min)
            && self.max_diameter.is_none_or(|max| diameter_in <= max)
    }

    /// A rule without a sub-type applies to every sub-type, and a pipe without
    /// one accepts any rule of its service type.
    pub fn accepts_sub_type(&self, sub_type: Option<&str>) -> bool {
        match (self.sub_type, sub_type) {
            (Some(rule), Some(pipe)) => rule.eq_ignore_ascii_case(pipe.trim()),
            _ => true,
        }
    }

    fn bounds(&self) -> (f64, f64) {
        (
            self.min_diameter.unwrap_or(f64::NEG_INFINITY),
            self.max_diameter.unwrap_or(f64::INFINITY),
        )
    }
}

/// First rule in `rules` (in list order) matching the service, sub-type and diameter.
pub fn find_rule<'a>(
    rules: &'a [CriteriaRule],
    service_type: ServiceType,
    sub_type: Option<&str>,
    diameter_in: f64,
) -> Option<&'a CriteriaRule> {
    rules.iter().find(|rule| {
        rule.service_type == service_type
            && rule.accepts_sub_type(sub_type)
            && rule.covers_diameter(diameter_in)
    })
}

/// Index pairs `(earlier, later)` of rules with the same service and sub-type whose
/// diameter ranges overlap by more than a shared endpoint.
///
/// Lookup is first-match-wins, so an overlap silently shadows part of the later
/// rule. This only reports; the tables are never adjusted.
pub fn overlapping_rules(rules: &[CriteriaRule]) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in rules.iter().enumerate() {
        for (j, b) in rules.iter().enumerate().skip(i + 1) {
            if a.service_type != b.service_type || a.sub_type != b.sub_type {
                continue;
            }
            let (a_lo, a_hi) = a.bounds();
            let (b_lo, b_hi) = b.bounds();
            if a_lo.max(b_lo) < a_hi.min(b_hi) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
