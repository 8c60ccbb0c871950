use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::config::LlmConfig;
use crate::errors::LlmError;
use crate::external::generative::{GenerativeProvider, GroundedResponse, GroundingChunk, LatLng};

/// Gemini `generateContent` request/response structures
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_config: Option<ToolConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_maps: GoogleMaps,
}

#[derive(Debug, Serialize)]
struct GoogleMaps {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ToolConfig {
    retrieval_config: RetrievalConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievalConfig {
    lat_lng: LatLng,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    fn into_grounded(self) -> GroundedResponse {
        let text = self.text();
        let chunks = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.grounding_metadata)
            .map(|m| m.grounding_chunks)
            .unwrap_or_default();
        GroundedResponse { text, chunks }
    }
}

fn user_content(prompt: String) -> Vec<Content> {
    vec![Content {
        role: "user".to_string(),
        parts: vec![Part { text: prompt }],
    }]
}

fn structured_request(prompt: String, schema: serde_json::Value) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: user_content(prompt),
        generation_config: Some(GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: schema,
        }),
        tools: Vec::new(),
        tool_config: None,
    }
}

fn grounded_request(prompt: String, location: Option<LatLng>) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: user_content(prompt),
        generation_config: None,
        tools: vec![Tool { google_maps: GoogleMaps {} }],
        tool_config: location.map(|lat_lng| ToolConfig {
            retrieval_config: RetrievalConfig { lat_lng },
        }),
    }
}

/// Gemini REST provider implementation
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    api_url: String,
    insight_model: String,
    locator_model: String,
    max_attempts: u32,
}

impl GeminiClient {
    /// `client` should carry the request timeout; a timeout is treated like
    /// any other transport failure.
    pub fn new(client: Client, config: &LlmConfig) -> Self {
        let api_key = if config.enabled {
            config.api_key.clone().filter(|k| !k.is_empty())
        } else {
            None
        };
        if api_key.is_none() {
            warn!("Gemini API key not configured. AI insight and locator run in fallback mode.");
        } else {
            info!(
                "Initializing {} client (insight: {}, locator: {})",
                config.provider, config.insight_model, config.locator_model
            );
        }

        Self {
            client,
            api_key,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            insight_model: config.insight_model.clone(),
            locator_model: config.locator_model.clone(),
            max_attempts: config.max_attempts.max(1),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn call_with_retry(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let mut attempt = 1;
        let mut delay = Duration::from_millis(500);

        loop {
            match self.call(model, request).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_transient() && attempt < self.max_attempts => {
                    warn!(
                        "Gemini call failed (attempt {}/{}): {}. Retrying in {:?}...",
                        attempt, self.max_attempts, e, delay
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                    delay *= 2;
                }
                Err(e) => {
                    error!("Gemini call failed after {} attempt(s): {}", attempt, e);
                    return Err(e);
                }
            }
        }
    }

    async fn call(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::Disabled)?;
        let url = format!("{}/v1beta/models/{}:generateContent", self.api_url, model);

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout
                } else {
                    LlmError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::ApiError(format!("HTTP {}: {}", status, error_text)));
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl GenerativeProvider for GeminiClient {
    async fn generate_structured(
        &self,
        prompt: String,
        schema: serde_json::Value,
    ) -> Result<String, LlmError> {
        info!("Generating structured completion (model: {})", self.insight_model);

        let request = structured_request(prompt, schema);
        let response = self.call_with_retry(&self.insight_model, &request).await?;

        let text = response.text();
        if text.trim().is_empty() {
            return Err(LlmError::InvalidResponse("No text in response".to_string()));
        }
        Ok(text)
    }

    async fn generate_grounded(
        &self,
        prompt: String,
        location: Option<LatLng>,
    ) -> Result<GroundedResponse, LlmError> {
        info!(
            "Generating grounded completion (model: {}, with location: {})",
            self.locator_model,
            location.is_some()
        );

        let request = grounded_request(prompt, location);
        let response = self.call_with_retry(&self.locator_model, &request).await?;
        let grounded = response.into_grounded();

        info!("Grounded completion returned {} chunk(s)", grounded.chunks.len());
        Ok(grounded)
    }
}
