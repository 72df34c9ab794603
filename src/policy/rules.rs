use super::{PolicyKind, ReleasePolicy};
use crate::domain::{OperatingParams, ReleaseSchedule, Scenario};
use crate::simulation::SimulationError;

/// Request exactly the demand at every step. This is the naive baseline that
/// hedging strategies are compared against.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullDemandPolicy;

impl ReleasePolicy for FullDemandPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::FullDemand
    }

    fn schedule(
        &self,
        scenario: &Scenario,
        _params: &OperatingParams,
    ) -> Result<ReleaseSchedule, SimulationError> {
        scenario.validate()?;
        Ok(ReleaseSchedule::new(scenario.demand.clone()))
    }
}

/// Request a fixed fraction of demand at every step.
#[derive(Debug, Clone, Copy)]
pub struct HedgingPolicy {
    /// Fraction of demand requested, in `[0, 1]`.
    pub ratio: f64,
}

impl HedgingPolicy {
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }
}

impl ReleasePolicy for HedgingPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Hedging
    }

    fn schedule(
        &self,
        scenario: &Scenario,
        _params: &OperatingParams,
    ) -> Result<ReleaseSchedule, SimulationError> {
        if !(0.0..=1.0).contains(&self.ratio) {
            return Err(SimulationError::ParameterOutOfRange {
                name: "ratio",
                value: self.ratio,
                min: 0.0,
                max: 1.0,
            });
        }
        scenario.validate()?;

        Ok(ReleaseSchedule::new(
            scenario.demand.iter().map(|d| d * self.ratio).collect(),
        ))
    }
}

/// Request demand minus a constant volume, floored at zero.
#[derive(Debug, Clone, Copy)]
pub struct ConstantCutPolicy {
    pub cut: f64,
}

impl ConstantCutPolicy {
    pub fn new(cut: f64) -> Self {
        Self { cut }
    }
}

impl ReleasePolicy for ConstantCutPolicy {
    fn kind(&self) -> PolicyKind {
        PolicyKind::ConstantCut
    }

    fn schedule(
        &self,
        scenario: &Scenario,
        _params: &OperatingParams,
    ) -> Result<ReleaseSchedule, SimulationError> {
        if !self.cut.is_finite() || self.cut < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "cut",
                value: self.cut,
            });
        }
        scenario.validate()?;

        Ok(ReleaseSchedule::new(
            scenario
                .demand
                .iter()
                .map(|d| (d - self.cut).max(0.0))
                .collect(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> Scenario {
        Scenario::new(vec![5.0; 3], vec![1.0; 3], vec![4.0, 10.0, 2.0])
    }

    fn params() -> OperatingParams {
        OperatingParams::new(50.0, 20.0, 1.0, 10.0)
    }

    #[test]
    fn test_full_demand() {
        let s = FullDemandPolicy.schedule(&scenario(), &params()).unwrap();
        assert_eq!(s.requests, vec![4.0, 10.0, 2.0]);
    }

    #[test]
    fn test_hedging_scales_demand() {
        let s = HedgingPolicy::new(0.5).schedule(&scenario(), &params()).unwrap();
        assert_eq!(s.requests, vec![2.0, 5.0, 1.0]);
    }

    #[test]
    fn test_hedging_ratio_out_of_range() {
        let err = HedgingPolicy::new(1.2).schedule(&scenario(), &params()).unwrap_err();
        assert!(matches!(err, SimulationError::ParameterOutOfRange { name: "ratio", .. }));
        assert!(HedgingPolicy::new(f64::NAN).schedule(&scenario(), &params()).is_err());
    }

    #[test]
    fn test_constant_cut_floors_at_zero() {
        let s = ConstantCutPolicy::new(3.0).schedule(&scenario(), &params()).unwrap();
        assert_eq!(s.requests, vec![1.0, 7.0, 0.0]);
    }

    #[test]
    fn test_negative_cut_rejected() {
        assert!(matches!(
            ConstantCutPolicy::new(-1.0).schedule(&scenario(), &params()),
            Err(SimulationError::InvalidParameter { name: "cut", .. })
        ));
    }

    #[test]
    fn test_invalid_scenario_propagates() {
        let mut s = scenario();
        s.demand.pop();
        assert!(FullDemandPolicy.schedule(&s, &params()).is_err());
    }
}
