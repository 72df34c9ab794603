use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::{ConstantCutPolicy, FullDemandPolicy, HedgingPolicy, StorageFloorPolicy};
use crate::domain::{OperatingParams, ReleaseSchedule, Scenario};
use crate::simulation::SimulationError;

/// Rule that turns a scenario into a release schedule.
///
/// Policies only propose requests; the simulator decides what is actually
/// delivered.
pub trait ReleasePolicy: Send + Sync {
    fn kind(&self) -> PolicyKind;

    fn schedule(
        &self,
        scenario: &Scenario,
        params: &OperatingParams,
    ) -> Result<ReleaseSchedule, SimulationError>;
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PolicyKind {
    FullDemand,
    Hedging,
    ConstantCut,
    StorageFloor,
}

/// Serializable policy description, as found in config files and API bodies.
///
/// ```json
/// { "kind": "hedging", "ratio": 0.9 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicySpec {
    FullDemand,
    Hedging { ratio: f64 },
    ConstantCut { cut: f64 },
    StorageFloor {
        #[serde(default)]
        margin: f64,
    },
}

impl PolicySpec {
    pub fn kind(&self) -> PolicyKind {
        match self {
            PolicySpec::FullDemand => PolicyKind::FullDemand,
            PolicySpec::Hedging { .. } => PolicyKind::Hedging,
            PolicySpec::ConstantCut { .. } => PolicyKind::ConstantCut,
            PolicySpec::StorageFloor { .. } => PolicyKind::StorageFloor,
        }
    }

    pub fn build(&self) -> Box<dyn ReleasePolicy> {
        match *self {
            PolicySpec::FullDemand => Box::new(FullDemandPolicy),
            PolicySpec::Hedging { ratio } => Box::new(HedgingPolicy::new(ratio)),
            PolicySpec::ConstantCut { cut } => Box::new(ConstantCutPolicy::new(cut)),
            PolicySpec::StorageFloor { margin } => Box::new(StorageFloorPolicy::new(margin)),
        }
    }

    /// Short label stored on generated schedules, e.g. `constant_cut:2`.
    pub fn label(&self) -> String {
        match self {
            PolicySpec::FullDemand => self.kind().to_string(),
            PolicySpec::Hedging { ratio } => format!("{}:{}", self.kind(), ratio),
            PolicySpec::ConstantCut { cut } => format!("{}:{}", self.kind(), cut),
            PolicySpec::StorageFloor { margin } => format!("{}:{}", self.kind(), margin),
        }
    }

    /// Build the policy and generate its schedule, labelled with [`Self::label`].
    pub fn schedule(
        &self,
        scenario: &Scenario,
        params: &OperatingParams,
    ) -> Result<ReleaseSchedule, SimulationError> {
        let schedule = self.build().schedule(scenario, params)?;
        Ok(ReleaseSchedule::labelled(self.label(), schedule.requests))
    }
}
