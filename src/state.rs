use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::external::gemini::GeminiClient;
use crate::external::generative::GenerativeProvider;
use crate::external::open_er_api::OpenErApiProvider;
use crate::external::rate_provider::RateProvider;
use crate::services::dashboard_controller::DashboardController;
use crate::services::insight_service::InsightService;
use crate::services::locator_service::LocatorService;
use crate::services::rate_service::RateService;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<DashboardController>,
}

impl AppState {
    pub fn new(rate_provider: Arc<dyn RateProvider>, generative: Arc<dyn GenerativeProvider>) -> Self {
        let dashboard = DashboardController::new(
            RateService::new(rate_provider),
            InsightService::new(generative.clone()),
            LocatorService::new(generative),
        );
        Self { dashboard: Arc::new(dashboard) }
    }

    /// Wires the real providers, sharing one HTTP client with the configured timeout.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        let rate_provider = Arc::new(OpenErApiProvider::new(client.clone(), config.rates_api_url.clone()));
        let generative = Arc::new(GeminiClient::new(client, &config.llm));

        Ok(Self::new(rate_provider, generative))
    }
}
