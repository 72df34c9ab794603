use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{OperatingParams, Scenario, Trajectory};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ObjectiveError {
    #[error("length mismatch: {series} has {actual} steps, expected {expected}")]
    LengthMismatch {
        series: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Scores of one trajectory. Lower is better for both.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveScores {
    /// Sum of squared positive supply shortfalls (TSD).
    pub total_squared_deficit: f64,
    /// Sum of storage shortfalls below the minimum storage threshold (TSV).
    pub total_storage_violation: f64,
}

impl ObjectiveScores {
    /// True if `self` is no worse than `other` in both objectives and strictly
    /// better in at least one.
    pub fn dominates(&self, other: &ObjectiveScores) -> bool {
        let no_worse = self.total_squared_deficit <= other.total_squared_deficit
            && self.total_storage_violation <= other.total_storage_violation;
        let better = self.total_squared_deficit < other.total_squared_deficit
            || self.total_storage_violation < other.total_storage_violation;
        no_worse && better
    }
}

/// Sum over `t` of `max(0, demand[t] - supply[t])^2`.
///
/// Squaring penalises one large shortfall more than several small ones,
/// which is what rewards hedging.
pub fn total_squared_deficit(demand: &[f64], actual_supply: &[f64]) -> Result<f64, ObjectiveError> {
    if demand.len() != actual_supply.len() {
        return Err(ObjectiveError::LengthMismatch {
            series: "actual_supply",
            expected: demand.len(),
            actual: actual_supply.len(),
        });
    }

    Ok(demand
        .iter()
        .zip(actual_supply)
        .map(|(d, s)| (d - s).max(0.0).powi(2))
        .sum())
}

/// Sum of `max(0, min_storage - storage[t])` over the given storage states.
pub fn total_storage_violation(storage: &[f64], min_storage: f64) -> f64 {
    storage.iter().map(|s| (min_storage - s).max(0.0)).sum()
}

/// Score a trajectory against the scenario demand and the storage floor.
///
/// The violation is measured over the simulated states only: the initial
/// storage is a given, not something a schedule can change.
pub fn score(
    scenario: &Scenario,
    params: &OperatingParams,
    trajectory: &Trajectory,
) -> Result<ObjectiveScores, ObjectiveError> {
    let expected_storage = scenario.horizon() + 1;
    if trajectory.storage.len() != expected_storage {
        return Err(ObjectiveError::LengthMismatch {
            series: "storage",
            expected: expected_storage,
            actual: trajectory.storage.len(),
        });
    }

    Ok(ObjectiveScores {
        total_squared_deficit: total_squared_deficit(&scenario.demand, &trajectory.actual_supply)?,
        total_storage_violation: total_storage_violation(
            trajectory.simulated_storage(),
            params.min_storage,
        ),
    })
}
