use anyhow::Result;
use reservoir_ops::{api, config, objectives, policy::PolicySpec, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;

    let baseline = PolicySpec::FullDemand.schedule(&cfg.scenario, &cfg.reservoir)?;
    let baseline = objectives::evaluate(&cfg.scenario, &cfg.reservoir, baseline)?;
    info!(
        steps = cfg.scenario.horizon(),
        demand = cfg.scenario.total_demand(),
        tsd = baseline.scores.total_squared_deficit,
        tsv = baseline.scores.total_storage_violation,
        "base case loaded, scores for full-demand releases"
    );

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!("server binding to 0.0.0.0 - the service will be reachable from the network");
    }

    let app = api::router(api::AppState::new(cfg));

    info!(%addr, "starting reservoir operations service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
