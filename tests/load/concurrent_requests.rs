//! Concurrent request load test
//!
//! A tuning UI fires one evaluation per slider movement, so many requests
//! arrive at once. Every request must succeed and the shared base case must
//! give identical scores no matter how the requests interleave.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tower::ServiceExt;

use reservoir_ops::api::{router, AppState};
use reservoir_ops::config::Config;

const CLIENTS: usize = 64;
const REQUESTS_PER_CLIENT: usize = 20;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore]
async fn concurrent_evaluations_agree() {
    let cfg = Config::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.toml"))
        .expect("shipped config");
    let app = router(AppState::new(cfg));
    let started = Instant::now();

    let mut tasks = JoinSet::new();
    for client in 0..CLIENTS {
        let app = app.clone();
        tasks.spawn(async move {
            let cut = (client % 8) as f64;
            let mut seen = Vec::with_capacity(REQUESTS_PER_CLIENT);
            for _ in 0..REQUESTS_PER_CLIENT {
                let body = json!({ "policy": { "kind": "constant_cut", "cut": cut } });
                let request = Request::builder()
                    .method("POST")
                    .uri("/api/v1/policy")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap();

                let response = app.clone().oneshot(request).await.unwrap();
                assert_eq!(response.status(), StatusCode::OK);
                let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
                let value: Value = serde_json::from_slice(&bytes).unwrap();
                seen.push(value["data"]["scores"]["total_squared_deficit"].as_f64().unwrap());
            }
            (cut, seen)
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (cut, seen) = result.unwrap();
        assert!(
            seen.windows(2).all(|w| w[0] == w[1]),
            "scores drifted for cut {cut}: {seen:?}"
        );
    }

    let elapsed = started.elapsed();
    println!(
        "{} evaluations in {:?}",
        CLIENTS * REQUESTS_PER_CLIENT,
        elapsed
    );
    assert!(elapsed < Duration::from_secs(30));
}
