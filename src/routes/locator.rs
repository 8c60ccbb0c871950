use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{LocateOutcome, LocateRequest};
use crate::services::dashboard_controller::Completion;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/search", post(search))
}

/// POST /api/locator/search
/// Body: `{latitude, longitude}`, `{location}` or `{geolocation_denied: true}`
pub async fn search(
    State(state): State<AppState>,
    Json(request): Json<LocateRequest>,
) -> Result<Json<Completion<LocateOutcome>>, AppError> {
    info!("POST /api/locator/search");
    let completion = state.dashboard.locate(request).await.map_err(|e| {
        warn!("Rejected locate request: {}", e);
        e
    })?;
    Ok(Json(completion))
}
