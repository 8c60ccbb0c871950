use axum::extract::State;
use axum::routing::{patch, post};
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::SelectionUpdate;
use crate::services::dashboard_controller::{DashboardSnapshot, RateTicket};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", patch(update_selection))
        .route("/swap", post(swap_currencies))
}

/// PATCH /api/selection
/// Applies the given fields at once; a base change fetches rates in the
/// background while the previous table keeps serving
pub async fn update_selection(
    State(state): State<AppState>,
    Json(update): Json<SelectionUpdate>,
) -> Result<Json<DashboardSnapshot>, AppError> {
    info!("PATCH /api/selection - {:?}", update);

    let ticket = state.dashboard.apply_update(update).map_err(|e| {
        error!("Rejected selection update: {}", e);
        e
    })?;

    if let Some(ticket) = ticket {
        spawn_rate_refresh(&state, ticket);
    }

    Ok(Json(state.dashboard.snapshot()))
}

/// POST /api/selection/swap
pub async fn swap_currencies(State(state): State<AppState>) -> Json<DashboardSnapshot> {
    info!("POST /api/selection/swap");
    let ticket = state.dashboard.swap();
    spawn_rate_refresh(&state, ticket);
    Json(state.dashboard.snapshot())
}

fn spawn_rate_refresh(state: &AppState, ticket: RateTicket) {
    let dashboard = state.dashboard.clone();
    tokio::spawn(async move {
        dashboard.refresh_rates(ticket).await;
    });
}
