use tracing::{debug, info};

use super::PolicySpec;
use crate::domain::{OperatingParams, Scenario};
use crate::objectives::{evaluate, Evaluation, EvaluationError};

/// Evaluate every policy in order. Fails on the first invalid policy.
pub fn sweep(
    scenario: &Scenario,
    params: &OperatingParams,
    specs: &[PolicySpec],
) -> Result<Vec<Evaluation>, EvaluationError> {
    let evaluations = specs
        .iter()
        .map(|spec| {
            let schedule = spec.schedule(scenario, params)?;
            let evaluation = evaluate(scenario, params, schedule)?;
            debug!(
                policy = %spec.label(),
                tsd = evaluation.scores.total_squared_deficit,
                tsv = evaluation.scores.total_storage_violation,
                "policy evaluated"
            );
            Ok(evaluation)
        })
        .collect::<Result<Vec<_>, EvaluationError>>()?;

    info!(policies = evaluations.len(), "sweep complete");
    Ok(evaluations)
}

/// Non-dominated evaluations, sorted by ascending deficit.
///
/// Evaluations with identical scores are kept once, first occurrence wins.
pub fn pareto_front(evaluations: &[Evaluation]) -> Vec<Evaluation> {
    let mut front: Vec<&Evaluation> = evaluations
        .iter()
        .filter(|candidate| {
            !evaluations
                .iter()
                .any(|other| other.scores.dominates(&candidate.scores))
        })
        .collect();

    front.sort_by(|a, b| {
        a.scores
            .total_squared_deficit
            .total_cmp(&b.scores.total_squared_deficit)
            .then(
                a.scores
                    .total_storage_violation
                    .total_cmp(&b.scores.total_storage_violation),
            )
    });
    front.dedup_by(|later, earlier| later.scores == earlier.scores);

    front.into_iter().cloned().collect()
}

/// `steps + 1` evenly spaced constant cuts from `0` to `max_cut`.
pub fn cut_ladder(max_cut: f64, steps: usize) -> Vec<PolicySpec> {
    if steps == 0 {
        return vec![PolicySpec::ConstantCut { cut: 0.0 }];
    }
    (0..=steps)
        .map(|i| PolicySpec::ConstantCut {
            cut: max_cut * i as f64 / steps as f64,
        })
        .collect()
}
