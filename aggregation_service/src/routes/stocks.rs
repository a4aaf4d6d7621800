use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ServiceError;
use crate::service::{AverageResponse, CorrelationResponse};
use crate::state::AppState;

// ── Query params ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AverageQuery {
    /// Kept as a raw string and parsed by hand so a missing or malformed
    /// value surfaces as our own 400 payload instead of an extractor
    /// rejection.
    minutes: Option<String>,
    aggregation: Option<String>,
}

/// Parses the `minutes` query value. Absent and empty both count as
/// missing; anything else must be a `u32`.
fn parse_minutes(raw: Option<String>) -> Result<Option<u32>, ServiceError> {
    let Some(value) = raw.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    value.parse::<u32>().map(Some).map_err(|_| {
        ServiceError::Validation("Parameter minutes must be a non-negative integer".to_string())
    })
}

// ── Route definitions ────────────────────────────────────────────────────

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stocks", get(list_stocks))
        .route("/stocks/{ticker}", get(stock_average))
        .route("/stockcorrelation", get(stock_correlation))
}

// ── Handlers ─────────────────────────────────────────────────────────────

async fn list_stocks(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ServiceError> {
    Ok(Json(state.queries.list_stocks().await?))
}

async fn stock_average(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
    Query(query): Query<AverageQuery>,
) -> Result<Json<AverageResponse>, ServiceError> {
    // An empty `aggregation=` counts as absent, same as a missing param.
    if let Some(aggregation) = query.aggregation.as_deref().filter(|s| !s.is_empty()) {
        if aggregation != "average" {
            return Err(ServiceError::Validation(
                "Only aggregation=average is supported".to_string(),
            ));
        }
    }

    let minutes = parse_minutes(query.minutes)?;
    let response = state.queries.average_price(&ticker, minutes).await?;
    Ok(Json(response))
}

async fn stock_correlation(
    State(state): State<Arc<AppState>>,
    // Raw pairs rather than a struct: `ticker` legitimately repeats and a
    // keyed extractor would only observe one occurrence.
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<CorrelationResponse>, ServiceError> {
    let mut minutes = None;
    let mut tickers = Vec::new();

    for (key, value) in params {
        match key.as_str() {
            "minutes" => minutes = parse_minutes(Some(value))?,
            "ticker" => tickers.push(value),
            _ => {}
        }
    }

    let response = state.queries.correlation(&tickers, minutes).await?;
    Ok(Json(response))
}
