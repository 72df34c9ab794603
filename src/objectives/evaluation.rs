use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{score, ObjectiveError, ObjectiveScores};
use crate::domain::{OperatingParams, ReleaseSchedule, Scenario, Trajectory};
use crate::simulation::{simulate, SimulationError};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Objective(#[from] ObjectiveError),
}

/// A release schedule together with what it does to the reservoir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub schedule: ReleaseSchedule,
    pub trajectory: Trajectory,
    pub scores: ObjectiveScores,
}

/// Simulate `schedule` and score the result in one pass.
pub fn evaluate(
    scenario: &Scenario,
    params: &OperatingParams,
    schedule: ReleaseSchedule,
) -> Result<Evaluation, EvaluationError> {
    let trajectory = simulate(scenario, params, &schedule)?;
    let scores = score(scenario, params, &trajectory)?;
    Ok(Evaluation {
        schedule,
        trajectory,
        scores,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> (Scenario, OperatingParams) {
        (
            Scenario::new(
                vec![15.0, 17.0, 19.0, 11.0, 9.0, 4.0, 3.0, 8.0],
                vec![1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 3.0],
                vec![13.0, 13.0, 17.0, 18.0, 20.0, 22.0, 25.0, 26.0],
            ),
            OperatingParams::new(150.0, 80.0, 2.0, 30.0),
        )
    }

    fn with_deficits(scenario: &Scenario, deficits: [f64; 8]) -> ReleaseSchedule {
        ReleaseSchedule::new(
            scenario
                .demand
                .iter()
                .zip(deficits)
                .map(|(d, cut)| d - cut)
                .collect(),
        )
    }

    #[test]
    fn test_naive_schedule_is_worse_than_best_hedged() {
        let (scenario, params) = reference();
        let naive_schedule = ReleaseSchedule::new(scenario.demand.clone());
        let naive = evaluate(&scenario, &params, naive_schedule).unwrap();
        assert_eq!(naive.scores.total_squared_deficit, 361.0);
        assert_eq!(naive.scores.total_storage_violation, 56.0);
        assert!(naive.scores.total_squared_deficit > 49.0);
    }

    #[test]
    fn test_hedged_schedule_reaches_documented_deficit() {
        let (scenario, params) = reference();
        let schedule = with_deficits(&scenario, [3.0, 3.0, 3.0, 3.0, 2.0, 2.0, 2.0, 1.0]);
        let hedged = evaluate(&scenario, &params, schedule).unwrap();
        assert_eq!(hedged.scores.total_squared_deficit, 49.0);
        assert!(hedged.scores.total_storage_violation > 0.0);
    }

    #[test]
    fn test_floor_respecting_schedule_has_zero_violation() {
        let (scenario, params) = reference();
        let schedule = with_deficits(&scenario, [5.0, 5.0, 6.0, 6.0, 6.0, 7.0, 7.0, 7.0]);
        let eval = evaluate(&scenario, &params, schedule).unwrap();
        assert_eq!(eval.scores.total_storage_violation, 0.0);
        assert_eq!(eval.scores.total_squared_deficit, 305.0);
        assert_eq!(eval.trajectory.final_storage(), 30.0);
    }

    #[test]
    fn test_simulation_errors_pass_through() {
        let (scenario, params) = reference();
        let err = evaluate(&scenario, &params, ReleaseSchedule::new(vec![1.0])).unwrap_err();
        assert!(matches!(
            err,
            EvaluationError::Simulation(SimulationError::LengthMismatch { .. })
        ));
        assert!(err.to_string().starts_with("length mismatch"));
    }
}
