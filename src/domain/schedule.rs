use serde::{Deserialize, Serialize};

use super::scenario::{check_length, check_series};
use crate::simulation::SimulationError;

/// Requested supply release per time step. This is the decision variable of
/// the problem; the simulator only ever delivers less than requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseSchedule {
    /// How the schedule was produced, e.g. `hedging:0.9`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub requests: Vec<f64>,
}

impl ReleaseSchedule {
    pub fn new(requests: Vec<f64>) -> Self {
        Self {
            label: None,
            requests,
        }
    }

    pub fn labelled(label: impl Into<String>, requests: Vec<f64>) -> Self {
        Self {
            label: Some(label.into()),
            requests,
        }
    }

    /// Requests must cover exactly `horizon` steps and lie in `[0, inf)`.
    pub fn validate(&self, horizon: usize) -> Result<(), SimulationError> {
        check_length("release_request", horizon, self.requests.len())?;
        check_series("release_request", &self.requests)
    }
}
