use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::LlmError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

/// Map entry attached to a grounding citation.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MapsSource {
    pub title: Option<String>,
    pub address: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WebSource {
    pub title: Option<String>,
    pub uri: Option<String>,
}

/// A citation linking part of the answer to an external source.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GroundingChunk {
    pub maps: Option<MapsSource>,
    pub web: Option<WebSource>,
}

/// Free text plus the grounding citations that back it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundedResponse {
    pub text: String,
    pub chunks: Vec<GroundingChunk>,
}

/// Trait for generative (LLM) providers
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Generate JSON text constrained by `schema`
    async fn generate_structured(
        &self,
        prompt: String,
        schema: serde_json::Value,
    ) -> Result<String, LlmError>;

    /// Generate an answer grounded with the maps tool, optionally anchored
    /// at a coordinate pair
    async fn generate_grounded(
        &self,
        prompt: String,
        location: Option<LatLng>,
    ) -> Result<GroundedResponse, LlmError>;
}
