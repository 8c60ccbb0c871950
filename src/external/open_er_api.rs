use std::collections::HashMap;

use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;

use crate::external::rate_provider::{RateProvider, RateProviderError};
use crate::models::RateTable;

/// Client for the open.er-api.com "latest" endpoint (no API key).
pub struct OpenErApiProvider {
    client: reqwest::Client,
    base_url: String,
}

impl OpenErApiProvider {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

// Minimal response struct (only what we need)
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    base_code: Option<String>,
    time_last_update_unix: Option<i64>,
    rates: Option<HashMap<String, f64>>,
}

#[async_trait]
impl RateProvider for OpenErApiProvider {
    async fn fetch_latest(&self, base: &str) -> Result<RateTable, RateProviderError> {
        let url = format!("{}/v6/latest/{}", self.base_url, base);

        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RateProviderError::BadResponse(format!("HTTP {}", status)));
        }

        let body: LatestRatesResponse = resp
            .json()
            .await
            .map_err(|e| RateProviderError::Parse(e.to_string()))?;

        if let Some(result) = body.result.as_deref() {
            if result != "success" {
                let reason = body.error_type.unwrap_or_else(|| result.to_string());
                return Err(RateProviderError::BadResponse(format!("provider returned error: {}", reason)));
            }
        }

        let rates: HashMap<String, f64> = body
            .rates
            .ok_or_else(|| RateProviderError::BadResponse("missing rates in response".into()))?
            .into_iter()
            .filter(|(_, rate)| rate.is_finite() && *rate > 0.0)
            .collect();

        if rates.is_empty() {
            return Err(RateProviderError::BadResponse("no usable rates in response".into()));
        }

        let mut table = RateTable::new(body.base_code.unwrap_or_else(|| base.to_string()), rates);
        if let Some(at) = body.time_last_update_unix.and_then(|ts| DateTime::from_timestamp(ts, 0)) {
            table = table.with_last_updated(at);
        }

        Ok(table)
    }
}
