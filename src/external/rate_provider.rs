use async_trait::async_trait;
use thiserror::Error;

use crate::models::RateTable;

#[derive(Debug, Error)]
pub enum RateProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for RateProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RateProviderError::Timeout
        } else if e.is_decode() {
            RateProviderError::Parse(e.to_string())
        } else {
            RateProviderError::Network(e.to_string())
        }
    }
}

/// A remote service quoting every currency against one base.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_latest(&self, base: &str) -> Result<RateTable, RateProviderError>;
}
