use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::LlmError;
use crate::external::generative::GenerativeProvider;
use crate::models::{insight_response_schema, Insight, Language};

/// Points of the chart tail embedded in the prompt.
pub const TREND_POINTS: usize = 10;

pub struct InsightService {
    provider: Arc<dyn GenerativeProvider>,
}

impl InsightService {
    pub fn new(provider: Arc<dyn GenerativeProvider>) -> Self {
        Self { provider }
    }

    /// Asks the generative service for a structured market insight.
    ///
    /// Never fails: transport errors, invalid JSON and schema violations all
    /// resolve to [`Insight::fallback`].
    pub async fn analyze(
        &self,
        base: &str,
        target: &str,
        current_rate: f64,
        trend_summary: &str,
        language: Language,
    ) -> Insight {
        info!("Generating market insight for {}/{} (language: {})", base, target, language.code());

        let prompt = build_insight_prompt(base, target, current_rate, trend_summary, language);
        let result = self
            .provider
            .generate_structured(prompt, insight_response_schema())
            .await
            .and_then(|text| parse_insight_response(&text));

        match result {
            Ok(insight) => insight,
            Err(e) => {
                warn!("Insight generation failed for {}/{}, using fallback: {}", base, target, e);
                Insight::fallback()
            }
        }
    }
}

/// Trend context line: "Last points: [a, b, ...]. Current range: 1M".
pub fn trend_summary(tail: &str, range_label: &str) -> String {
    format!("Last points: [{}]. Current range: {}", tail, range_label)
}

fn build_insight_prompt(
    base: &str,
    target: &str,
    current_rate: f64,
    trend_summary: &str,
    language: Language,
) -> String {
    format!(
        r#"Analyze the current currency market trend for {base} to {target}.
Current Rate: {current_rate}.
Historical context: {trend_summary}.

Provide a professional financial insight including trend direction, concise analysis, recommendation for travelers/investors, and a volatility assessment.
PLEASE RESPOND IN THIS LANGUAGE: {language}"#,
        language = language.code(),
    )
}

/// Parses the model's JSON text into an [`Insight`].
///
/// Text that is not JSON at all is an invalid response; JSON that misses a
/// field or carries an unknown trend is a schema violation.
fn parse_insight_response(text: &str) -> Result<Insight, LlmError> {
    let value: serde_json::Value =
        serde_json::from_str(text.trim()).map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

    let insight: Insight =
        serde_json::from_value(value).map_err(|e| LlmError::SchemaViolation(e.to_string()))?;

    if insight.analysis.trim().is_empty() || insight.recommendation.trim().is_empty() {
        return Err(LlmError::SchemaViolation("empty analysis or recommendation".to_string()));
    }

    Ok(insight)
}
