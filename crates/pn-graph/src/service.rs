//! Service classification of a pipe, the key into the criteria rule tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    PumpSuction,
    PumpDischarge,
    ProcessLiquid,
    Drain,
    Amine,
    BoilerFeedWater,
    CoolingWater,
    ReboilerTrapOut,
    ReboilerReturn,
    /// Vapor below atmospheric pressure.
    VaporVacuum,
    /// Vapor from 0 to 3.5 barg.
    VaporLowPressure,
    /// Vapor from 3.5 to 14 barg.
    VaporMediumPressure,
    /// Vapor above 14 barg.
    VaporHighPressure,
}

impl ServiceType {
    pub const ALL: [ServiceType; 13] = [
        ServiceType::PumpSuction,
        ServiceType::PumpDischarge,
        ServiceType::ProcessLiquid,
        ServiceType::Drain,
        ServiceType::Amine,
        ServiceType::BoilerFeedWater,
        ServiceType::CoolingWater,
        ServiceType::ReboilerTrapOut,
        ServiceType::ReboilerReturn,
        ServiceType::VaporVacuum,
        ServiceType::VaporLowPressure,
        ServiceType::VaporMediumPressure,
        ServiceType::VaporHighPressure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceType::PumpSuction => "pump_suction",
            ServiceType::PumpDischarge => "pump_discharge",
            ServiceType::ProcessLiquid => "process_liquid",
            ServiceType::Drain => "drain",
            ServiceType::Amine => "amine",
            ServiceType::BoilerFeedWater => "boiler_feed_water",
            ServiceType::CoolingWater => "cooling_water",
            ServiceType::ReboilerTrapOut => "reboiler_trap_out",
            ServiceType::ReboilerReturn => "reboiler_return",
            ServiceType::VaporVacuum => "vapor_vacuum",
            ServiceType::VaporLowPressure => "vapor_low_pressure",
            ServiceType::VaporMediumPressure => "vapor_medium_pressure",
            ServiceType::VaporHighPressure => "vapor_high_pressure",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        ServiceType::ALL
            .into_iter()
            .find(|st| st.as_str() == key)
            .ok_or_else(|| GraphError::UnknownServiceType {
                name: s.to_string(),
            })
    }
}
