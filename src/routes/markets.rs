use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::{MarketQuote, PopularConversion};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_market_board))
        .route("/popular", get(get_popular_conversions))
}

pub async fn get_market_board(State(state): State<AppState>) -> Json<Vec<MarketQuote>> {
    info!("GET /api/markets");
    Json(state.dashboard.market_board())
}

pub async fn get_popular_conversions(State(state): State<AppState>) -> Json<Vec<PopularConversion>> {
    info!("GET /api/markets/popular");
    Json(state.dashboard.popular_conversions())
}
