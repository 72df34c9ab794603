use serde::{Deserialize, Serialize};

use crate::simulation::SimulationError;

/// Physical limits and operating rules of the reservoir.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperatingParams {
    /// Maximum storage (s_max). Anything above it spills.
    pub capacity: f64,
    /// Storage at the start of the first step (s0).
    pub initial_storage: f64,
    /// Mandatory downstream compensation flow per step.
    pub min_env_flow: f64,
    /// Storage threshold used by the violation objective (s_min).
    pub min_storage: f64,
}

impl OperatingParams {
    pub fn new(capacity: f64, initial_storage: f64, min_env_flow: f64, min_storage: f64) -> Self {
        Self {
            capacity,
            initial_storage,
            min_env_flow,
            min_storage,
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [
            ("capacity", self.capacity),
            ("initial_storage", self.initial_storage),
            ("min_env_flow", self.min_env_flow),
            ("min_storage", self.min_storage),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SimulationError::InvalidParameter { name, value });
            }
        }

        if self.initial_storage > self.capacity {
            return Err(SimulationError::InitialStorageAboveCapacity {
                initial: self.initial_storage,
                capacity: self.capacity,
            });
        }

        Ok(())
    }

    /// Storage never exceeds capacity, so `capacity + inflow[t]` bounds every
    /// intermediate volume of a step. Reject inflows that push it past `f64::MAX`.
    pub fn check_volume_range(&self, inflow: &[f64]) -> Result<(), SimulationError> {
        match inflow.iter().position(|&value| !(self.capacity + value).is_finite()) {
            Some(index) => Err(SimulationError::VolumeOverflow {
                index,
                inflow: inflow[index],
                capacity: self.capacity,
            }),
            None => Ok(()),
        }
    }
}
