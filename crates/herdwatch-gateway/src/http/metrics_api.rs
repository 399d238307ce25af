//! `/api/iot/metrics` handlers.
//!
//! Routes:
//! - `GET  /api/iot/metrics?animal_id=&limit=`      newest readings
//! - `POST /api/iot/metrics`                        record a reading
//! - `PUT  /api/iot/metrics?animal_id=`             refresh in place
//! - `GET  /api/iot/metrics/:animal_id/latest`      newest reading or 404
//! - `GET  /api/iot/metrics/:animal_id/history`     readings in the last `hours`
//! - `PUT  /api/iot/metrics/:animal_id/simulate`    record a synthetic reading

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use herdwatch_core::error::HerdError;
use herdwatch_core::{ReadingDraft, SensorReading};

use crate::app_state::AppState;
use crate::config::RefreshMissing;
use crate::http::ApiResult;

const DEFAULT_HISTORY_HOURS: u32 = 24;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub animal_id: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct AppendRequest {
    #[serde(default)]
    pub animal_id: Option<String>,
    #[serde(flatten)]
    pub draft: ReadingDraft,
}

#[derive(Debug, Default, Deserialize)]
pub struct RefreshQuery {
    #[serde(default)]
    pub animal_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub hours: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct MetricsList {
    pub metrics: Vec<SensorReading>,
    /// Matching readings before `limit` truncation.
    pub total: usize,
    /// Filtered animal, or `"all"`.
    pub animal_id: String,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct Recorded {
    pub metrics: SensorReading,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Refreshed {
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<SensorReading>,
}

pub async fn list_metrics(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<MetricsList>> {
    let Query(q) = query?;
    let cfg = &state.cfg().store;

    let filter = q.animal_id.as_deref().filter(|id| !id.is_empty());
    let limit = q
        .limit
        .unwrap_or(cfg.default_query_limit)
        .min(cfg.max_query_limit);

    let page = state.store().query(filter, limit)?;
    Ok(Json(MetricsList {
        metrics: page.readings,
        total: page.matched,
        animal_id: filter.unwrap_or("all").to_string(),
        last_updated: state.store().now(),
    }))
}

pub async fn append_metrics(
    State(state): State<AppState>,
    payload: Result<Json<AppendRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Recorded>)> {
    let Json(req) = payload?;
    let animal_id = req.animal_id.unwrap_or_default();

    let reading = state.store().append(&animal_id, req.draft)?;
    Ok((
        StatusCode::CREATED,
        Json(Recorded {
            metrics: reading,
            message: "IoT metrics recorded successfully",
        }),
    ))
}

/// Refresh the animal's first reading. An animal without readings is a
/// silent success unless `store.refresh_missing` is `reject`.
pub async fn refresh_metrics(
    State(state): State<AppState>,
    query: Result<Query<RefreshQuery>, QueryRejection>,
) -> ApiResult<Json<Refreshed>> {
    let Query(q) = query?;
    let animal_id = q.animal_id.unwrap_or_default();

    let refreshed = state.store().refresh(&animal_id)?;
    if refreshed.is_none() && state.cfg().store.refresh_missing == RefreshMissing::Reject {
        return Err(HerdError::NotFound(format!("no metrics found for animal {animal_id}")).into());
    }

    Ok(Json(Refreshed {
        message: "Real-time data updated",
        timestamp: state.store().now(),
        metrics: refreshed,
    }))
}

pub async fn latest_metrics(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<SensorReading>> {
    let Path(animal_id) = path?;
    let reading = state
        .store()
        .latest(&animal_id)?
        .ok_or_else(|| HerdError::NotFound(format!("no metrics found for animal {animal_id}")))?;
    Ok(Json(reading))
}

pub async fn metrics_history(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> ApiResult<Json<MetricsList>> {
    let Path(animal_id) = path?;
    let Query(q) = query?;

    let readings = state
        .store()
        .history(&animal_id, q.hours.unwrap_or(DEFAULT_HISTORY_HOURS))?;
    Ok(Json(MetricsList {
        total: readings.len(),
        metrics: readings,
        animal_id,
        last_updated: state.store().now(),
    }))
}

pub async fn simulate_metrics(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<(StatusCode, Json<Recorded>)> {
    let Path(animal_id) = path?;
    let reading = state.store().simulate(&animal_id)?;
    Ok((
        StatusCode::CREATED,
        Json(Recorded {
            metrics: reading,
            message: "IoT metrics simulated",
        }),
    ))
}
