use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::{response::ApiResponse, AppState};
use crate::domain::{OperatingParams, Scenario};

/// GET /api/v1/healthz
pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

#[derive(Debug, Serialize)]
pub struct BaseCase {
    pub scenario: Scenario,
    pub params: OperatingParams,
}

/// GET /api/v1/base-case - Scenario and parameters used when a request omits them
pub async fn base_case(State(st): State<AppState>) -> ApiResponse<BaseCase> {
    ApiResponse::success(BaseCase {
        scenario: st.cfg.scenario.clone(),
        params: st.cfg.reservoir,
    })
}
