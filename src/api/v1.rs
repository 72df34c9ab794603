use axum::{
    routing::{get, post},
    Router,
};

use super::{evaluate, health, policy, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/base-case", get(health::base_case))
        .route("/simulate", post(evaluate::simulate))
        .route("/score", post(evaluate::score))
        .route("/evaluate", post(evaluate::evaluate))
        .route("/policies", get(policy::list_policies))
        .route("/policy", post(policy::run_policy))
        .route("/sweep", post(policy::run_sweep))
        .with_state(state)
}
