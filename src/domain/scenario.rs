use serde::{Deserialize, Serialize};

use crate::simulation::SimulationError;

/// Hydrological inputs for one simulation run.
///
/// All three series are volumes per time step and must share the same length,
/// which is the simulation horizon `T`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub inflow: Vec<f64>,
    pub evaporation: Vec<f64>,
    pub demand: Vec<f64>,
}

impl Scenario {
    pub fn new(inflow: Vec<f64>, evaporation: Vec<f64>, demand: Vec<f64>) -> Self {
        Self {
            inflow,
            evaporation,
            demand,
        }
    }

    /// Number of time steps, taken from the inflow series.
    pub fn horizon(&self) -> usize {
        self.inflow.len()
    }

    pub fn total_demand(&self) -> f64 {
        self.demand.iter().sum()
    }

    /// Reject mismatched lengths, negative volumes and non-finite values.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let horizon = self.horizon();
        check_length("evaporation", horizon, self.evaporation.len())?;
        check_length("demand", horizon, self.demand.len())?;

        check_series("inflow", &self.inflow)?;
        check_series("evaporation", &self.evaporation)?;
        check_series("demand", &self.demand)?;
        Ok(())
    }
}

pub(crate) fn check_length(
    series: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), SimulationError> {
    if expected != actual {
        return Err(SimulationError::LengthMismatch {
            series,
            expected,
            actual,
        });
    }
    Ok(())
}

pub(crate) fn check_series(field: &'static str, values: &[f64]) -> Result<(), SimulationError> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(SimulationError::NonFinite { field, index });
        }
        if value < 0.0 {
            return Err(SimulationError::NegativeValue {
                field,
                index,
                value,
            });
        }
    }
    Ok(())
}
