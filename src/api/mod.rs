pub mod error;
pub mod evaluate;
pub mod extract;
pub mod health;
pub mod policy;
pub mod response;
pub mod v1;

use axum::{http::HeaderValue, Router};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    config::Config,
    domain::{OperatingParams, Scenario},
};
use error::ApiError;

/// Shared, read-only state. Every request works on its own copies of the
/// scenario and parameters.
#[derive(Debug, Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        Self { cfg: Arc::new(cfg) }
    }

    /// Request values win; anything omitted falls back to the configured base case.
    pub fn resolve(
        &self,
        scenario: Option<Scenario>,
        params: Option<OperatingParams>,
    ) -> (Scenario, OperatingParams) {
        (
            scenario.unwrap_or_else(|| self.cfg.scenario.clone()),
            params.unwrap_or(self.cfg.reservoir),
        )
    }
}

pub fn router(state: AppState) -> Router {
    let server = state.cfg.server.clone();
    let mut router = Router::new()
        .nest("/api/v1", v1::router(state))
        .fallback(not_found);

    if server.enable_cors {
        match server.cors_origin.as_deref().map(str::parse::<HeaderValue>) {
            Some(Ok(origin)) => {
                let cors = CorsLayer::new()
                    .allow_origin(origin)
                    .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                    .allow_headers([axum::http::header::CONTENT_TYPE]);
                router = router.layer(cors);
            }
            _ => tracing::warn!(
                origin = ?server.cors_origin,
                "CORS enabled without a valid origin, leaving it disabled"
            ),
        }
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(1024 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs))),
        )
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".to_string())
}
