use chrono::Locale;
use serde::{Deserialize, Serialize};

use crate::models::history::TimeRange;

/// Display languages offered in the header switcher.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
    Ja,
    Id,
    Ms,
    Th,
    Ko,
    Ar,
    De,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Id => "id",
            Language::Ms => "ms",
            Language::Th => "th",
            Language::Ko => "ko",
            Language::Ar => "ar",
            Language::De => "de",
            Language::Es => "es",
        }
    }

    /// Locale used for chart labels.
    pub fn locale(&self) -> Locale {
        match self {
            Language::En => Locale::en_US,
            Language::Zh => Locale::zh_CN,
            Language::Ja => Locale::ja_JP,
            Language::Id => Locale::id_ID,
            Language::Ms => Locale::ms_MY,
            Language::Th => Locale::th_TH,
            Language::Ko => Locale::ko_KR,
            Language::Ar => Locale::ar_SA,
            Language::De => Locale::de_DE,
            Language::Es => Locale::es_ES,
        }
    }
}

/// Top-level views of the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Markets,
    MoneyChanger,
    Terms,
    Privacy,
}

/// The single authoritative copy of what the user has selected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    pub amount: f64,
    pub base: String,
    pub target: String,
    pub range: TimeRange,
    pub language: Language,
    pub view: View,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            amount: 100.0,
            base: "USD".to_string(),
            target: "EUR".to_string(),
            range: TimeRange::OneMonth,
            language: Language::En,
            view: View::Home,
        }
    }
}

/// Partial update applied to the selection in one step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionUpdate {
    pub amount: Option<f64>,
    pub base: Option<String>,
    pub target: Option<String>,
    pub range: Option<TimeRange>,
    pub language: Option<Language>,
    pub view: Option<View>,
}

pub fn validate_amount(amount: f64) -> Result<f64, String> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(format!("Amount must be a non-negative number, got {amount}"));
    }
    Ok(amount)
}
