#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::Notify;

use ratego_backend::errors::LlmError;
use ratego_backend::external::generative::{GenerativeProvider, GroundedResponse, LatLng};
use ratego_backend::external::rate_provider::{RateProvider, RateProviderError};
use ratego_backend::models::RateTable;
use ratego_backend::state::AppState;

pub fn table(base: &str, pairs: &[(&str, f64)]) -> RateTable {
    RateTable::new(base, pairs.iter().map(|(c, r)| (c.to_string(), *r)).collect::<HashMap<_, _>>())
}

/// Rate provider replaying queued steps; fails once the queue is empty.
#[derive(Default)]
pub struct ScriptedRates {
    responses: Mutex<VecDeque<Step<RateTable, RateProviderError>>>,
    pub requested: Mutex<Vec<String>>,
    /// Signalled every time a fetch has taken its step off the queue.
    pub entered: Notify,
}

impl ScriptedRates {
    pub fn with(responses: Vec<Result<RateTable, RateProviderError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().map(Step::now).collect()),
            ..Self::default()
        })
    }

    pub fn push(&self, step: Step<RateTable, RateProviderError>) {
        self.responses.lock().push_back(step);
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().clone()
    }
}

#[async_trait]
impl RateProvider for ScriptedRates {
    async fn fetch_latest(&self, base: &str) -> Result<RateTable, RateProviderError> {
        self.requested.lock().push(base.to_string());
        let step = self.responses.lock().pop_front();
        self.entered.notify_one();

        let Some(step) = step else {
            return Err(RateProviderError::Network("connection refused".into()));
        };
        if let Some(gate) = step.gate {
            gate.notified().await;
        }
        step.reply
    }
}

/// One scripted reply, optionally held until `gate` is notified.
pub struct Step<T, E = LlmError> {
    pub reply: Result<T, E>,
    pub gate: Option<Arc<Notify>>,
}

impl<T, E> Step<T, E> {
    pub fn now(reply: Result<T, E>) -> Self {
        Self { reply, gate: None }
    }

    pub fn gated(reply: Result<T, E>, gate: Arc<Notify>) -> Self {
        Self { reply, gate: Some(gate) }
    }
}

#[derive(Default)]
pub struct ScriptedGenerative {
    structured: Mutex<VecDeque<Step<String>>>,
    grounded: Mutex<VecDeque<Step<GroundedResponse>>>,
    pub prompts: Mutex<Vec<String>>,
    pub locations: Mutex<Vec<Option<LatLng>>>,
    /// Signalled every time a call has taken its step off the queue.
    pub entered: Notify,
}

impl ScriptedGenerative {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_structured(&self, step: Step<String>) {
        self.structured.lock().push_back(step);
    }

    pub fn push_grounded(&self, step: Step<GroundedResponse>) {
        self.grounded.lock().push_back(step);
    }
}

#[async_trait]
impl GenerativeProvider for ScriptedGenerative {
    async fn generate_structured(&self, prompt: String, _schema: serde_json::Value) -> Result<String, LlmError> {
        self.prompts.lock().push(prompt);
        let step = self.structured.lock().pop_front();
        self.entered.notify_one();

        let Some(step) = step else {
            return Err(LlmError::Disabled);
        };
        if let Some(gate) = step.gate {
            gate.notified().await;
        }
        step.reply
    }

    async fn generate_grounded(&self, prompt: String, location: Option<LatLng>) -> Result<GroundedResponse, LlmError> {
        self.prompts.lock().push(prompt);
        self.locations.lock().push(location);
        let step = self.grounded.lock().pop_front();
        self.entered.notify_one();

        let Some(step) = step else {
            return Err(LlmError::Disabled);
        };
        if let Some(gate) = step.gate {
            gate.notified().await;
        }
        step.reply
    }
}

pub fn insight_json(trend: &str, analysis: &str) -> String {
    serde_json::json!({
        "trend": trend,
        "analysis": analysis,
        "recommendation": "Exchange in smaller tranches",
        "volatility": "Low"
    })
    .to_string()
}

pub fn app_state(rates: Arc<ScriptedRates>, generative: Arc<ScriptedGenerative>) -> AppState {
    AppState::new(rates, generative)
}
