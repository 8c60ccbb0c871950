use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::Insight;
use crate::services::dashboard_controller::Completion;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_insight).post(analyze))
}

/// GET /api/insight
/// Last stored insight, 404 before the first analysis
pub async fn get_insight(State(state): State<AppState>) -> Result<Json<Insight>, AppError> {
    info!("GET /api/insight");
    state.dashboard.insight().map(Json).ok_or(AppError::NotFound)
}

/// POST /api/insight
/// Runs a new analysis; `applied` is false when a newer one superseded it
pub async fn analyze(State(state): State<AppState>) -> Json<Completion<Insight>> {
    info!("POST /api/insight - analyzing current pair");
    Json(state.dashboard.analyze().await)
}
