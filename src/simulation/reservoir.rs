use itertools::izip;
use tracing::{debug, trace};

use super::SimulationError;
use crate::domain::{OperatingParams, ReleaseSchedule, Scenario, Trajectory};

/// Flows and end-of-step storage for a single time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub evaporation_loss: f64,
    pub environmental_release: f64,
    pub supply: f64,
    pub spill: f64,
    pub storage: f64,
}

/// Advance the reservoir by one step.
///
/// Inputs are assumed validated (finite, non-negative). The returned storage
/// always lies in `[0, params.capacity]`.
pub fn step(
    storage: f64,
    inflow: f64,
    evaporation: f64,
    request: f64,
    params: &OperatingParams,
) -> StepOutcome {
    let gross = storage + inflow;
    let evaporation_loss = evaporation.min(gross);
    let available = gross - evaporation_loss;

    // Environmental flow is served first; supply takes what is left.
    let environmental_release = params.min_env_flow.min(available);
    let supply = request.min(available - environmental_release);

    let retained = available - environmental_release - supply;
    let next = retained.min(params.capacity);
    let spill = retained - next;

    StepOutcome {
        evaporation_loss,
        environmental_release,
        supply,
        spill,
        storage: next,
    }
}

/// Run the full mass-balance recurrence over the scenario horizon.
///
/// All inputs are validated up front; on error nothing is simulated.
pub fn simulate(
    scenario: &Scenario,
    params: &OperatingParams,
    schedule: &ReleaseSchedule,
) -> Result<Trajectory, SimulationError> {
    scenario.validate()?;
    params.validate()?;
    params.check_volume_range(&scenario.inflow)?;
    schedule.validate(scenario.horizon())?;

    let horizon = scenario.horizon();
    let mut trajectory = Trajectory::with_capacity(horizon, params.initial_storage);
    let mut storage = params.initial_storage;

    for (t, (&inflow, &evaporation, &request)) in
        izip!(&scenario.inflow, &scenario.evaporation, &schedule.requests).enumerate()
    {
        let outcome = step(storage, inflow, evaporation, request, params);

        if outcome.environmental_release < params.min_env_flow {
            debug!(
                step = t,
                released = outcome.environmental_release,
                required = params.min_env_flow,
                "environmental flow curtailed"
            );
        }
        if outcome.evaporation_loss < evaporation {
            debug!(step = t, "reservoir ran dry before evaporation was met");
        }
        if outcome.spill > 0.0 {
            debug!(step = t, spill = outcome.spill, "reservoir spilled");
        }
        trace!(
            step = t,
            storage = outcome.storage,
            supply = outcome.supply,
            request,
            "step complete"
        );

        trajectory.evaporation_loss.push(outcome.evaporation_loss);
        trajectory.environmental_release.push(outcome.environmental_release);
        trajectory.actual_supply.push(outcome.supply);
        trajectory.spill.push(outcome.spill);
        trajectory.storage.push(outcome.storage);
        storage = outcome.storage;
    }

    Ok(trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_scenario() -> Scenario {
        Scenario::new(
            vec![15.0, 17.0, 19.0, 11.0, 9.0, 4.0, 3.0, 8.0],
            vec![1.0, 1.0, 2.0, 2.0, 2.0, 2.0, 2.0, 3.0],
            vec![13.0, 13.0, 17.0, 18.0, 20.0, 22.0, 25.0, 26.0],
        )
    }

    fn reference_params() -> OperatingParams {
        OperatingParams::new(150.0, 80.0, 2.0, 30.0)
    }

    #[test]
    fn test_full_demand_trajectory() {
        let scenario = reference_scenario();
        let schedule = ReleaseSchedule::new(scenario.demand.clone());
        let t = simulate(&scenario, &reference_params(), &schedule).unwrap();

        assert_eq!(
            t.storage,
            vec![80.0, 79.0, 80.0, 78.0, 67.0, 52.0, 30.0, 4.0, 0.0]
        );
        assert_eq!(
            t.actual_supply,
            vec![13.0, 13.0, 17.0, 18.0, 20.0, 22.0, 25.0, 7.0]
        );
        assert_eq!(t.environmental_release, vec![2.0; 8]);
        assert_eq!(t.spill, vec![0.0; 8]);
        assert_eq!(t.evaporation_loss, scenario.evaporation);
    }

    #[test]
    fn test_spill_keeps_storage_at_capacity() {
        let scenario = Scenario::new(vec![50.0, 50.0], vec![0.0, 0.0], vec![0.0, 0.0]);
        let params = OperatingParams::new(100.0, 90.0, 5.0, 0.0);
        let schedule = ReleaseSchedule::new(vec![10.0, 0.0]);
        let t = simulate(&scenario, &params, &schedule).unwrap();

        // 90 + 50 - 5 - 10 = 125 -> spill 25
        assert_eq!(t.spill, vec![25.0, 45.0]);
        assert_eq!(t.storage, vec![90.0, 100.0, 100.0]);
    }

    #[test]
    fn test_supply_cut_before_environmental_flow() {
        let outcome = step(0.0, 1.5, 0.0, 5.0, &OperatingParams::new(10.0, 0.0, 2.0, 0.0));
        assert_eq!(outcome.environmental_release, 1.5);
        assert_eq!(outcome.supply, 0.0);
        assert_eq!(outcome.storage, 0.0);

        let outcome = step(1.0, 2.0, 0.0, 5.0, &OperatingParams::new(10.0, 0.0, 2.0, 0.0));
        assert_eq!(outcome.environmental_release, 2.0);
        assert_eq!(outcome.supply, 1.0);
        assert_eq!(outcome.storage, 0.0);
    }

    #[test]
    fn test_evaporation_capped_when_dry() {
        let outcome = step(0.5, 1.0, 3.0, 4.0, &OperatingParams::new(10.0, 0.0, 2.0, 0.0));
        assert_eq!(outcome.evaporation_loss, 1.5);
        assert_eq!(outcome.environmental_release, 0.0);
        assert_eq!(outcome.supply, 0.0);
        assert_eq!(outcome.storage, 0.0);
    }

    #[test]
    fn test_zero_request_keeps_water() {
        let scenario = reference_scenario();
        let schedule = ReleaseSchedule::new(vec![0.0; 8]);
        let t = simulate(&scenario, &reference_params(), &schedule).unwrap();
        assert_eq!(t.final_storage(), 135.0);
        assert_eq!(t.total_supply(), 0.0);
    }

    #[test]
    fn test_empty_horizon() {
        let scenario = Scenario::new(vec![], vec![], vec![]);
        let t = simulate(&scenario, &reference_params(), &ReleaseSchedule::new(vec![])).unwrap();
        assert_eq!(t.storage, vec![80.0]);
        assert_eq!(t.horizon(), 0);
    }

    #[test]
    fn test_rejects_mismatched_schedule() {
        let scenario = reference_scenario();
        let schedule = ReleaseSchedule::new(vec![1.0; 7]);
        let err = simulate(&scenario, &reference_params(), &schedule).unwrap_err();
        assert_eq!(
            err,
            SimulationError::LengthMismatch {
                series: "release_request",
                expected: 8,
                actual: 7,
            }
        );
    }

    #[test]
    fn test_rejects_invalid_params_before_running() {
        let scenario = reference_scenario();
        let schedule = ReleaseSchedule::new(scenario.demand.clone());
        let params = OperatingParams::new(-150.0, 80.0, 2.0, 30.0);
        assert!(matches!(
            simulate(&scenario, &params, &schedule),
            Err(SimulationError::InvalidParameter { name: "capacity", .. })
        ));
    }

    #[test]
    fn test_rejects_inflow_that_overflows_storage() {
        let scenario = Scenario::new(vec![1.0, f64::MAX], vec![0.0; 2], vec![0.0; 2]);
        let params = OperatingParams::new(f64::MAX, f64::MAX, 0.0, 0.0);
        let schedule = ReleaseSchedule::new(vec![0.0; 2]);
        assert!(matches!(
            simulate(&scenario, &params, &schedule),
            Err(SimulationError::VolumeOverflow { index: 1, .. })
        ));
    }

    #[test]
    fn test_identical_inputs_give_identical_outputs() {
        let scenario = reference_scenario();
        let schedule = ReleaseSchedule::new(vec![11.0, 9.5, 15.25, 16.0, 18.0, 20.0, 23.0, 24.0]);
        let a = simulate(&scenario, &reference_params(), &schedule).unwrap();
        let b = simulate(&scenario, &reference_params(), &schedule).unwrap();
        for (x, y) in a.storage.iter().zip(&b.storage) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
        assert_eq!(a, b);
    }
}
