use itertools::izip;

use super::{PolicyKind, ReleasePolicy};
use crate::domain::{OperatingParams, ReleaseSchedule, Scenario};
use crate::simulation::{step, SimulationError};

/// Rule-based operator that forward-simulates the reservoir and only requests
/// water stored above `min_storage + margin`.
///
/// Supply requests never exceed demand. The floor can still be breached when
/// inflow does not cover evaporation and the environmental flow, since those
/// are not under the operator's control.
#[derive(Debug, Clone, Copy, Default)]
pub struct StorageFloorPolicy {
    /// Extra reserve kept above the minimum storage threshold.
    pub margin: f64,
}

impl StorageFloorPolicy {
    pub fn new(margin: f64) -> Self {
        Self { margin }
    }
}

impl ReleasePolicy for StorageFloorPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::StorageFloor
    }

    fn schedule(
        &self,
        scenario: &Scenario,
        params: &OperatingParams,
    ) -> Result<ReleaseSchedule, SimulationError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "margin",
                value: self.margin,
            });
        }
        scenario.validate()?;
        params.validate()?;
        params.check_volume_range(&scenario.inflow)?;

        let floor = params.min_storage + self.margin;
        let mut storage = params.initial_storage;
        let mut requests = Vec::with_capacity(scenario.horizon());

        for (&inflow, &evaporation, &demand) in
            izip!(&scenario.inflow, &scenario.evaporation, &scenario.demand)
        {
            // Water left after evaporation and environmental flow, spill included.
            let idle = step(storage, inflow, evaporation, 0.0, params);
            let headroom = (idle.storage + idle.spill - floor).max(0.0);
            let request = demand.min(headroom);

            storage = step(storage, inflow, evaporation, request, params).storage;
            requests.push(request);
        }

        Ok(ReleaseSchedule::new(requests))
    }
}
