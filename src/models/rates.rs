use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::currency::{FALLBACK_BASE, FALLBACK_RATES};

/// Exchange rates quoted against `base`: 1 base = `rates[code]` code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateTable {
    pub base: String,
    pub rates: HashMap<String, f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl RateTable {
    pub fn new(base: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        Self {
            base: base.into(),
            rates,
            last_updated: None,
        }
    }

    /// The static table the dashboard starts from and falls back to.
    pub fn fallback() -> Self {
        let rates = FALLBACK_RATES
            .iter()
            .map(|(code, rate)| (code.to_string(), *rate))
            .collect();
        Self::new(FALLBACK_BASE, rates)
    }

    pub fn with_last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = Some(at);
        self
    }

    pub fn get(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Rate for `code`, or 1.0 when the table does not quote it.
    pub fn rate_for(&self, code: &str) -> f64 {
        match self.rates.get(code) {
            Some(rate) if *rate > 0.0 && rate.is_finite() => *rate,
            _ => 1.0,
        }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Where the committed table came from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Static table, no successful fetch yet.
    Fallback,
    /// Returned by the provider for the requested base.
    Live,
    /// Provider failed; previous table kept.
    Cached,
}

/// Result of one rate fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum RateFetch {
    Live(RateTable),
    /// The provider failed. Whatever table is committed stays in place.
    Failed,
}

/// Amount converted at the current pair rate.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub base: String,
    pub target: String,
    pub rate: f64,
    pub converted: f64,
    pub formatted: String,
}

impl Conversion {
    pub fn compute(amount: f64, base: &str, target: &str, table: &RateTable) -> Self {
        let rate = table.rate_for(target);
        let converted = amount * rate;
        Self {
            amount,
            base: base.to_string(),
            target: target.to_string(),
            rate,
            converted,
            formatted: format_amount(converted),
        }
    }
}

/// Two decimals with comma thousands grouping: 1234.5 -> "1,234.50".
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0.00".to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}
