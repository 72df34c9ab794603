use axum::extract::State;
use serde::Deserialize;
use std::time::Instant;

use super::{error::ApiError, extract::Json, response::ApiResponse, AppState};
use crate::{
    domain::{OperatingParams, ReleaseSchedule, Scenario, Trajectory},
    objectives::{self, Evaluation, ObjectiveScores},
    simulation,
};

#[derive(Debug, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub scenario: Option<Scenario>,
    #[serde(default)]
    pub params: Option<OperatingParams>,
    pub schedule: ReleaseSchedule,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub scenario: Option<Scenario>,
    #[serde(default)]
    pub params: Option<OperatingParams>,
    pub trajectory: Trajectory,
}

/// POST /api/v1/simulate - Run the mass balance for a release schedule
pub async fn simulate(
    State(st): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<ApiResponse<Trajectory>, ApiError> {
    let (scenario, params) = st.resolve(request.scenario, request.params);
    let trajectory = simulation::simulate(&scenario, &params, &request.schedule)?;

    tracing::info!(
        steps = trajectory.horizon(),
        final_storage = trajectory.final_storage(),
        supply = trajectory.total_supply(),
        spill = trajectory.total_spill(),
        "simulation complete"
    );
    Ok(ApiResponse::success(trajectory))
}

/// POST /api/v1/score - Score an existing trajectory
pub async fn score(
    State(st): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<ApiResponse<ObjectiveScores>, ApiError> {
    let (scenario, params) = st.resolve(request.scenario, request.params);
    let scores = objectives::score(&scenario, &params, &request.trajectory)?;
    Ok(ApiResponse::success(scores))
}

/// POST /api/v1/evaluate - Simulate and score in one call
pub async fn evaluate(
    State(st): State<AppState>,
    Json(request): Json<ScheduleRequest>,
) -> Result<ApiResponse<Evaluation>, ApiError> {
    let started = Instant::now();
    let (scenario, params) = st.resolve(request.scenario, request.params);
    let evaluation = objectives::evaluate(&scenario, &params, request.schedule)?;

    tracing::info!(
        tsd = evaluation.scores.total_squared_deficit,
        tsv = evaluation.scores.total_storage_violation,
        "schedule evaluated"
    );
    Ok(ApiResponse::success(evaluation).with_duration(started.elapsed().as_millis() as u64))
}
