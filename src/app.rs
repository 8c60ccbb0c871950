use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::routes::{currencies, dashboard, health, insight, locator, markets, rates, selection};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api", dashboard::router())
        .nest("/api/currencies", currencies::router())
        .nest("/api/selection", selection::router())
        .nest("/api/rates", rates::router())
        .nest("/api/markets", markets::router())
        .nest("/api/insight", insight::router())
        .nest("/api/locator", locator::router())
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
        .with_state(state)
}
