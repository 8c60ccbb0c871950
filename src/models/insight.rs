use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// AI market commentary for a currency pair. Replaced wholesale, never merged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Insight {
    pub trend: Trend,
    pub analysis: String,
    pub recommendation: String,
    pub volatility: String,
}

impl Insight {
    /// Canned neutral insight shown whenever the generative service fails.
    pub fn fallback() -> Self {
        Self {
            trend: Trend::Neutral,
            analysis: "Unable to reach AI analysis at the moment. Market seems stable based on current technical indicators.".to_string(),
            recommendation: "Monitor the rates closely before making large exchanges.".to_string(),
            volatility: "Moderate".to_string(),
        }
    }
}

/// Response schema sent with every analysis request.
pub fn insight_response_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "trend": { "type": "STRING", "enum": ["up", "down", "neutral"] },
            "analysis": { "type": "STRING" },
            "recommendation": { "type": "STRING" },
            "volatility": { "type": "STRING" }
        },
        "required": ["trend", "analysis", "recommendation", "volatility"]
    })
}
