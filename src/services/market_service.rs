use rand::Rng;

use crate::models::currency::find_currency;
use crate::models::{MarketQuote, PopularConversion, RateTable, FAMOUS_CODES, POPULAR_CODES};

/// Markets board rows for the famous codes quoted by `table`.
///
/// Daily change is synthetic (uniform in [-0.4, 0.4] percent, two decimals);
/// there is no real previous close to compare against.
pub fn market_board<R: Rng>(table: &RateTable, rng: &mut R) -> Vec<MarketQuote> {
    FAMOUS_CODES
        .iter()
        .filter_map(|code| {
            let currency = find_currency(code)?;
            let rate = table.get(code).filter(|r| *r > 0.0)?;

            let change_pct = (rng.random_range(-0.4..0.4) * 100.0_f64).round() / 100.0;

            Some(MarketQuote {
                code: currency.code.to_string(),
                name: currency.name.to_string(),
                symbol: currency.symbol.to_string(),
                flag: currency.flag.to_string(),
                rate,
                change_pct,
                is_up: change_pct >= 0.0,
            })
        })
        .collect()
}

/// Up to five popular pairs against `base`, rate 0 when unquoted.
pub fn popular_conversions(table: &RateTable, base: &str) -> Vec<PopularConversion> {
    POPULAR_CODES
        .iter()
        .filter(|code| **code != base)
        .take(5)
        .map(|code| PopularConversion {
            base: base.to_string(),
            code: code.to_string(),
            rate: table.get(code).unwrap_or(0.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn table() -> RateTable {
        RateTable::new(
            "USD",
            HashMap::from([
                ("USD".to_string(), 1.0),
                ("EUR".to_string(), 0.92),
                ("JPY".to_string(), 151.4),
                ("XAU".to_string(), 0.0004),
            ]),
        )
    }

    #[test]
    fn test_board_only_lists_quoted_famous_codes() {
        let board = market_board(&table(), &mut StdRng::seed_from_u64(5));
        let codes: Vec<&str> = board.iter().map(|q| q.code.as_str()).collect();
        assert_eq!(codes, vec!["USD", "EUR", "JPY"]);
    }

    #[test]
    fn test_board_change_is_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            for quote in market_board(&table(), &mut rng) {
                assert!(quote.change_pct.abs() <= 0.4);
                assert_eq!(quote.is_up, quote.change_pct >= 0.0);
            }
        }
    }

    #[test]
    fn test_popular_excludes_base() {
        let popular = popular_conversions(&table(), "EUR");
        let codes: Vec<&str> = popular.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["GBP", "JPY", "CNY", "AUD"]);
        assert_eq!(popular[0].rate, 0.0);
        assert_eq!(popular[1].rate, 151.4);
    }
}
