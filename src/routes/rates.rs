use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::info;

use crate::models::{RateSource, RateTable};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_rates))
        .route("/refresh", post(refresh_rates))
}

#[derive(Debug, Serialize)]
pub struct RatesResponse {
    pub table: RateTable,
    pub source: RateSource,
}

pub async fn get_rates(State(state): State<AppState>) -> Json<RatesResponse> {
    info!("GET /api/rates");
    let (table, source) = state.dashboard.rate_table();
    Json(RatesResponse { table, source })
}

/// POST /api/rates/refresh
/// Refetches the current base and waits for the result
pub async fn refresh_rates(State(state): State<AppState>) -> Json<RatesResponse> {
    info!("POST /api/rates/refresh");
    let ticket = state.dashboard.begin_rate_refresh();
    state.dashboard.refresh_rates(ticket).await;

    let (table, source) = state.dashboard.rate_table();
    Json(RatesResponse { table, source })
}
