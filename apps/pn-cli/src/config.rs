//! Screening configuration file.

use std::path::Path;

use pn_graph::ServiceType;
use pn_hydraulics::{BoundaryKind, FlowScenario};
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Inputs for `summarize`, and the service defaults `check` falls back to
/// when `--service` is not given. Read from YAML.
///
/// ```yaml
/// scenario:
///   relieving_rate_kg_h: 25000
///   phase: liquid
/// set_pressure_barg: 10.0
/// boundary: inlet
/// service_type: pump_discharge
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScreeningConfig {
    #[serde(default)]
    pub scenario: Option<FlowScenario>,
    pub set_pressure_barg: f64,
    pub boundary: BoundaryKind,
    #[serde(default)]
    pub service_type: Option<ServiceType>,
    #[serde(default)]
    pub service_sub_type: Option<String>,
}

impl ScreeningConfig {
    pub fn validate(&self) -> CliResult<()> {
        if !self.set_pressure_barg.is_finite() {
            return Err(CliError::Config {
                what: "set_pressure_barg must be a finite number".to_string(),
            });
        }
        if let Some(scenario) = &self.scenario {
            if !(scenario.relieving_rate_kg_h.is_finite() && scenario.relieving_rate_kg_h >= 0.0) {
                return Err(CliError::Config {
                    what: "scenario.relieving_rate_kg_h must be a non-negative number"
                        .to_string(),
                });
            }
        }
        if self.service_sub_type.is_some() && self.service_type.is_none() {
            return Err(CliError::Config {
                what: "service_sub_type requires service_type".to_string(),
            });
        }
        Ok(())
    }
}

pub fn parse_config(content: &str) -> CliResult<ScreeningConfig> {
    let config: ScreeningConfig = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> CliResult<ScreeningConfig> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content)
}
