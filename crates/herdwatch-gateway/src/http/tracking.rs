//! Request accounting middleware (route-level, after routing).

use std::time::Instant;

use axum::extract::{MatchedPath, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;

pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());
    let method = req.method().as_str().to_owned();

    let metrics = state.metrics();
    metrics.http_in_flight.inc(&[("route", route.as_str())]);
    let started = Instant::now();

    let resp = next.run(req).await;

    let elapsed = started.elapsed();
    let status = resp.status().as_u16().to_string();
    metrics.http_in_flight.dec(&[("route", route.as_str())]);
    metrics.http_requests.inc(&[
        ("route", route.as_str()),
        ("method", method.as_str()),
        ("status", status.as_str()),
    ]);
    metrics.request_duration.observe(&[("route", route.as_str())], elapsed);

    tracing::debug!(
        %route,
        %method,
        %status,
        elapsed_us = elapsed.as_micros() as u64,
        "request served"
    );
    resp
}
