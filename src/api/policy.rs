use axum::extract::State;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use strum::IntoEnumIterator;
use validator::Validate;

use super::{error::ApiError, extract::Json, response::ApiResponse, AppState};
use crate::{
    domain::{OperatingParams, Scenario},
    objectives::{self, Evaluation},
    policy::{self, PolicyKind, PolicySpec},
};

#[derive(Debug, Deserialize)]
pub struct PolicyRequest {
    #[serde(default)]
    pub scenario: Option<Scenario>,
    #[serde(default)]
    pub params: Option<OperatingParams>,
    pub policy: PolicySpec,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SweepRequest {
    #[serde(default)]
    pub scenario: Option<Scenario>,
    #[serde(default)]
    pub params: Option<OperatingParams>,
    #[serde(default)]
    #[validate(length(min = 1, max = 256))]
    pub policies: Option<Vec<PolicySpec>>,
    /// Evenly spaced constant cuts, appended after `policies`.
    #[serde(default)]
    #[validate(nested)]
    pub cut_ladder: Option<CutLadder>,
}

/// Shorthand for `steps + 1` constant cuts from 0 to `max_cut`.
#[derive(Debug, Deserialize, Validate)]
pub struct CutLadder {
    pub max_cut: f64,
    #[validate(range(min = 1, max = 255))]
    pub steps: usize,
}

#[derive(Debug, Serialize)]
pub struct SweepResponse {
    pub evaluations: Vec<Evaluation>,
    pub pareto_front: Vec<Evaluation>,
}

/// GET /api/v1/policies - Policy kinds accepted by /policy and /sweep
pub async fn list_policies() -> ApiResponse<Vec<PolicyKind>> {
    let kinds: Vec<PolicyKind> = PolicyKind::iter().collect();
    let count = kinds.len();
    ApiResponse::success(kinds).with_count(count)
}

/// POST /api/v1/policy - Generate a schedule from a policy and evaluate it
pub async fn run_policy(
    State(st): State<AppState>,
    Json(request): Json<PolicyRequest>,
) -> Result<ApiResponse<Evaluation>, ApiError> {
    let (scenario, params) = st.resolve(request.scenario, request.params);
    let schedule = request.policy.schedule(&scenario, &params)?;
    let evaluation = objectives::evaluate(&scenario, &params, schedule)?;

    tracing::info!(
        policy = %request.policy.label(),
        tsd = evaluation.scores.total_squared_deficit,
        tsv = evaluation.scores.total_storage_violation,
        "policy evaluated"
    );
    Ok(ApiResponse::success(evaluation))
}

/// POST /api/v1/sweep - Evaluate many policies and return the Pareto front
pub async fn run_sweep(
    State(st): State<AppState>,
    Json(request): Json<SweepRequest>,
) -> Result<ApiResponse<SweepResponse>, ApiError> {
    request.validate()?;
    let started = Instant::now();

    let (scenario, params) = st.resolve(request.scenario, request.params);
    // Neither list nor ladder: fall back to the configured sweep.
    let specs = match (request.policies, request.cut_ladder) {
        (None, None) => st.cfg.sweep.policies.clone(),
        (policies, ladder) => {
            let mut specs = policies.unwrap_or_default();
            if let Some(ladder) = ladder {
                specs.extend(policy::cut_ladder(ladder.max_cut, ladder.steps));
            }
            specs
        }
    };
    if specs.is_empty() {
        return Err(ApiError::BadRequest("no policies to sweep".to_string()));
    }

    let evaluations = policy::sweep(&scenario, &params, &specs)?;
    let pareto_front = policy::pareto_front(&evaluations);
    let count = evaluations.len();

    Ok(ApiResponse::success(SweepResponse {
        evaluations,
        pareto_front,
    })
    .with_count(count)
    .with_duration(started.elapsed().as_millis() as u64))
}
