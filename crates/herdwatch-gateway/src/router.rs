//! Axum router wiring.

use axum::{
    middleware,
    routing::{get, put},
    Router,
};

use crate::http::{metrics_api, tracking};
use crate::{app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/iot/metrics",
            get(metrics_api::list_metrics)
                .post(metrics_api::append_metrics)
                .put(metrics_api::refresh_metrics),
        )
        .route("/api/iot/metrics/:animal_id/latest", get(metrics_api::latest_metrics))
        .route("/api/iot/metrics/:animal_id/history", get(metrics_api::metrics_history))
        .route("/api/iot/metrics/:animal_id/simulate", put(metrics_api::simulate_metrics))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .route_layer(middleware::from_fn_with_state(state.clone(), tracking::track_requests))
        .with_state(state)
}
