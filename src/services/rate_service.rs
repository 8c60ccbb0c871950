use std::sync::Arc;

use tracing::{info, warn};

use crate::external::rate_provider::RateProvider;
use crate::models::RateFetch;

/// Fetches rate tables from the configured provider.
///
/// A failed fetch never surfaces as an error. It comes back as
/// [`RateFetch::Failed`] and the caller keeps whatever table it already has.
pub struct RateService {
    provider: Arc<dyn RateProvider>,
}

impl RateService {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch_rates(&self, base: &str) -> RateFetch {
        info!("Fetching latest rates for base {}", base);

        match self.provider.fetch_latest(base).await {
            Ok(table) => {
                info!("Fetched {} rates for base {}", table.len(), base);
                RateFetch::Live(table)
            }
            Err(e) => {
                warn!("Rate fetch failed for base {}, keeping previous table: {}", base, e);
                RateFetch::Failed
            }
        }
    }
}
