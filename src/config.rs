use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

pub const DEFAULT_RATES_API_URL: &str = "https://open.er-api.com";
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_INSIGHT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_LOCATOR_MODEL: &str = "gemini-2.5-flash";

/// Configuration for the generative (LLM) service
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub enabled: bool,
    pub provider: String,
    pub api_key: Option<String>,
    pub api_url: String,
    pub insight_model: String,
    pub locator_model: String,
    pub max_attempts: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: "gemini".to_string(),
            api_key: None,
            api_url: DEFAULT_GEMINI_API_URL.to_string(),
            insight_model: DEFAULT_INSIGHT_MODEL.to_string(),
            locator_model: DEFAULT_LOCATOR_MODEL.to_string(),
            max_attempts: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub rates_api_url: String,
    pub http_timeout: Duration,
    pub llm: LlmConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            rates_api_url: DEFAULT_RATES_API_URL.to_string(),
            http_timeout: Duration::from_secs(15),
            llm: LlmConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads the environment (call `dotenvy::dotenv()` first).
    ///
    /// `GEMINI_API_KEY` is the only credential. Without it the insight and
    /// locator features still answer, with their fallback outcomes.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw
                .parse::<SocketAddr>()
                .with_context(|| format!("BIND_ADDR is not a socket address: {raw}"))?,
            Err(_) => defaults.bind_addr,
        };

        let rates_api_url = std::env::var("RATES_API_URL")
            .unwrap_or_else(|_| DEFAULT_RATES_API_URL.to_string());
        Url::parse(&rates_api_url).with_context(|| format!("invalid RATES_API_URL: {rates_api_url}"))?;

        let http_timeout = match std::env::var("HTTP_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout_secs(&raw)?,
            Err(_) => defaults.http_timeout,
        };

        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let api_url = std::env::var("GEMINI_API_URL")
            .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string());
        Url::parse(&api_url).with_context(|| format!("invalid GEMINI_API_URL: {api_url}"))?;

        let max_attempts = std::env::var("LLM_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(defaults.llm.max_attempts)
            .max(1);

        let llm = LlmConfig {
            enabled: api_key.is_some(),
            api_key,
            api_url,
            insight_model: std::env::var("INSIGHT_MODEL")
                .unwrap_or_else(|_| DEFAULT_INSIGHT_MODEL.to_string()),
            locator_model: std::env::var("LOCATOR_MODEL")
                .unwrap_or_else(|_| DEFAULT_LOCATOR_MODEL.to_string()),
            max_attempts,
            ..LlmConfig::default()
        };

        Ok(Self {
            bind_addr,
            rates_api_url,
            http_timeout,
            llm,
        })
    }
}

/// `HTTP_TIMEOUT_SECS`: whole seconds, at least 1.
fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    let secs = raw
        .trim()
        .parse::<u64>()
        .with_context(|| format!("HTTP_TIMEOUT_SECS must be an integer: {raw}"))?;
    if secs == 0 {
        bail!("HTTP_TIMEOUT_SECS must be at least 1");
    }
    Ok(Duration::from_secs(secs))
}
