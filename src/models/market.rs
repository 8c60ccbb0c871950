use serde::Serialize;

/// Codes shown on the markets board, in display order.
pub const FAMOUS_CODES: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "HKD", "SGD", "INR", "BTC",
];

/// Candidates for the "popular conversions" panel.
pub const POPULAR_CODES: &[&str] = &["EUR", "GBP", "JPY", "CNY", "AUD"];

/// A row of the markets board. `change_pct` is synthetic, like the chart history.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MarketQuote {
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub flag: String,
    pub rate: f64,
    pub change_pct: f64,
    pub is_up: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PopularConversion {
    pub base: String,
    pub code: String,
    pub rate: f64,
}
