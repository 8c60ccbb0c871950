use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rand::Rng;

use crate::models::{HistoryPoint, Language, TimeRange};

/// Builds a chart series ending today for `current_rate`.
///
/// The values are synthetic: each point is the current rate plus uniform
/// noise of up to half the range's volatility band. This is a placeholder
/// for real historical quotes, not history; only the shape (length, dates,
/// labels, bounds) is stable across calls.
pub fn synthesize<R: Rng>(
    current_rate: f64,
    range: TimeRange,
    language: Language,
    today: DateTime<Utc>,
    rng: &mut R,
) -> Vec<HistoryPoint> {
    let days = range.days() as i64;
    let volatility = range.volatility();
    let locale = language.locale();
    let label_format = match range {
        TimeRange::OneYear => "%b %y",
        _ => "%b %-d",
    };

    (0..=days)
        .rev()
        .map(|offset| {
            let at = today - ChronoDuration::days(offset);
            let fluctuation = rng.random_range(-0.5..0.5) * current_rate * volatility;

            HistoryPoint {
                label: at.format_localized(label_format, locale).to_string(),
                date: at.date_naive(),
                rate: current_rate + fluctuation,
            }
        })
        .collect()
}

/// [`synthesize`] against the wall clock and the thread RNG.
pub fn synthesize_now(current_rate: f64, range: TimeRange, language: Language) -> Vec<HistoryPoint> {
    synthesize(current_rate, range, language, Utc::now(), &mut rand::rng())
}
