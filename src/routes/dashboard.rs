use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::{Conversion, HistoryPoint};
use crate::services::dashboard_controller::DashboardSnapshot;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard))
        .route("/conversion", get(get_conversion))
        .route("/history", get(get_history))
}

/// GET /api/dashboard
/// Everything the home view renders, from a single state read
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    info!("GET /api/dashboard");
    Json(state.dashboard.snapshot())
}

pub async fn get_conversion(State(state): State<AppState>) -> Json<Conversion> {
    info!("GET /api/conversion");
    Json(state.dashboard.conversion())
}

pub async fn get_history(State(state): State<AppState>) -> Json<Vec<HistoryPoint>> {
    info!("GET /api/history");
    Json(state.dashboard.history())
}
