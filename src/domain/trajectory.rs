use serde::{Deserialize, Serialize};

/// Per-step state produced by one simulation run.
///
/// `storage` has `T + 1` entries (it starts with the initial condition); all
/// flow series have `T` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub storage: Vec<f64>,
    pub environmental_release: Vec<f64>,
    pub spill: Vec<f64>,
    pub actual_supply: Vec<f64>,
    /// Evaporation actually withdrawn. Equals the scenario value unless the
    /// reservoir ran dry within the step.
    pub evaporation_loss: Vec<f64>,
}

impl Trajectory {
    /// Pre-allocate all series for `horizon` steps, seeded with the initial storage.
    pub fn with_capacity(horizon: usize, initial_storage: f64) -> Self {
        let mut storage = Vec::with_capacity(horizon + 1);
        storage.push(initial_storage);
        Self {
            storage,
            environmental_release: Vec::with_capacity(horizon),
            spill: Vec::with_capacity(horizon),
            actual_supply: Vec::with_capacity(horizon),
            evaporation_loss: Vec::with_capacity(horizon),
        }
    }

    pub fn horizon(&self) -> usize {
        self.actual_supply.len()
    }

    pub fn final_storage(&self) -> f64 {
        self.storage.last().copied().unwrap_or_default()
    }

    pub fn total_supply(&self) -> f64 {
        self.actual_supply.iter().sum()
    }

    pub fn total_spill(&self) -> f64 {
        self.spill.iter().sum()
    }

    /// Storage at the end of each step, excluding the initial condition.
    pub fn simulated_storage(&self) -> &[f64] {
        self.storage.get(1..).unwrap_or(&[])
    }
}
