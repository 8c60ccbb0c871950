use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Chart range selectable in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    SevenDays,
    #[default]
    OneMonth,
    ThreeMonths,
    OneYear,
}

impl TimeRange {
    pub const ALL: [TimeRange; 4] = [
        TimeRange::SevenDays,
        TimeRange::OneMonth,
        TimeRange::ThreeMonths,
        TimeRange::OneYear,
    ];

    /// Unrecognized labels fall back to one month.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "7D" => TimeRange::SevenDays,
            "3M" => TimeRange::ThreeMonths,
            "1Y" => TimeRange::OneYear,
            _ => TimeRange::OneMonth,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::SevenDays => "7D",
            TimeRange::OneMonth => "1M",
            TimeRange::ThreeMonths => "3M",
            TimeRange::OneYear => "1Y",
        }
    }

    /// Days back from today; the series has `days() + 1` points.
    pub fn days(&self) -> u32 {
        match self {
            TimeRange::SevenDays => 7,
            TimeRange::OneMonth => 30,
            TimeRange::ThreeMonths => 90,
            TimeRange::OneYear => 365,
        }
    }

    /// Fractional band bounding the synthetic fluctuation.
    pub fn volatility(&self) -> f64 {
        match self {
            TimeRange::OneYear => 0.15,
            _ => 0.05,
        }
    }
}

impl Serialize for TimeRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TimeRange::from_label(&raw))
    }
}

/// One point of the chart series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryPoint {
    pub label: String,
    pub date: NaiveDate,
    pub rate: f64,
}

/// Last `n` rates at 4 decimals, comma-joined: the compact trend text fed
/// to the insight prompt.
pub fn trend_tail(points: &[HistoryPoint], n: usize) -> String {
    let start = points.len().saturating_sub(n);
    points[start..]
        .iter()
        .map(|p| format!("{:.4}", p.rate))
        .collect::<Vec<_>>()
        .join(", ")
}
