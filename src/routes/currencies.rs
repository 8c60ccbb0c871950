use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;

use crate::models::currency::search_currencies;
use crate::models::CurrencyInfo;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_currencies))
}

#[derive(Debug, Deserialize)]
pub struct CurrencySearch {
    pub q: Option<String>,
}

pub async fn list_currencies(Query(params): Query<CurrencySearch>) -> Json<Vec<CurrencyInfo>> {
    let query = params.q.unwrap_or_default();
    info!("GET /api/currencies - query: '{}'", query);
    Json(search_currencies(&query).into_iter().copied().collect())
}
