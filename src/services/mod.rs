pub mod dashboard_controller;
pub mod history_service;
pub mod insight_service;
pub mod locator_service;
pub mod market_service;
pub mod rate_service;
