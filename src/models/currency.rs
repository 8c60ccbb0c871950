use serde::Serialize;

/// An entry of the static supported-currency catalog.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
    pub flag: &'static str,
}

const fn currency(code: &'static str, name: &'static str, symbol: &'static str, flag: &'static str) -> CurrencyInfo {
    CurrencyInfo { code, name, symbol, flag }
}

pub const CURRENCIES: &[CurrencyInfo] = &[
    currency("USD", "US Dollar", "$", "🇺🇸"),
    currency("EUR", "Euro", "€", "🇪🇺"),
    currency("GBP", "British Pound", "£", "🇬🇧"),
    currency("JPY", "Japanese Yen", "¥", "🇯🇵"),
    currency("AUD", "Australian Dollar", "A$", "🇦🇺"),
    currency("CAD", "Canadian Dollar", "C$", "🇨🇦"),
    currency("CHF", "Swiss Franc", "Fr", "🇨🇭"),
    currency("CNY", "Chinese Yuan", "¥", "🇨🇳"),
    currency("HKD", "Hong Kong Dollar", "HK$", "🇭🇰"),
    currency("SGD", "Singapore Dollar", "S$", "🇸🇬"),
    currency("INR", "Indian Rupee", "₹", "🇮🇳"),
    currency("IDR", "Indonesian Rupiah", "Rp", "🇮🇩"),
    currency("MYR", "Malaysian Ringgit", "RM", "🇲🇾"),
    currency("THB", "Thai Baht", "฿", "🇹🇭"),
    currency("KRW", "South Korean Won", "₩", "🇰🇷"),
    currency("SAR", "Saudi Riyal", "﷼", "🇸🇦"),
    currency("AED", "UAE Dirham", "د.إ", "🇦🇪"),
    currency("NZD", "New Zealand Dollar", "NZ$", "🇳🇿"),
    currency("PHP", "Philippine Peso", "₱", "🇵🇭"),
    currency("VND", "Vietnamese Dong", "₫", "🇻🇳"),
    currency("MXN", "Mexican Peso", "$", "🇲🇽"),
    currency("BRL", "Brazilian Real", "R$", "🇧🇷"),
    currency("ZAR", "South African Rand", "R", "🇿🇦"),
    currency("SEK", "Swedish Krona", "kr", "🇸🇪"),
    currency("NOK", "Norwegian Krone", "kr", "🇳🇴"),
    currency("BTC", "Bitcoin", "₿", "🪙"),
];

/// USD-quoted table used until the first successful fetch.
pub const FALLBACK_BASE: &str = "USD";

pub const FALLBACK_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("EUR", 0.92),
    ("GBP", 0.79),
    ("JPY", 151.4),
    ("AUD", 1.52),
    ("CAD", 1.36),
    ("CHF", 0.90),
    ("CNY", 7.23),
    ("HKD", 7.82),
    ("SGD", 1.35),
    ("INR", 83.3),
    ("IDR", 15_850.0),
    ("MYR", 4.74),
    ("THB", 36.4),
    ("KRW", 1_350.0),
    ("SAR", 3.75),
    ("AED", 3.67),
    ("NZD", 1.66),
    ("PHP", 56.2),
    ("VND", 24_700.0),
    ("MXN", 16.9),
    ("BRL", 5.05),
    ("ZAR", 18.7),
    ("SEK", 10.6),
    ("NOK", 10.8),
];

pub fn find_currency(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code == code)
}

pub fn is_supported(code: &str) -> bool {
    find_currency(code).is_some()
}

/// Case-insensitive substring match on code or name, catalog order.
pub fn search_currencies(query: &str) -> Vec<&'static CurrencyInfo> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return CURRENCIES.iter().collect();
    }
    CURRENCIES
        .iter()
        .filter(|c| c.code.to_lowercase().contains(&query) || c.name.to_lowercase().contains(&query))
        .collect()
}

/// Normalizes user input ("eur " -> "EUR") and checks it against the catalog.
pub fn normalize_code(raw: &str) -> Result<&'static str, String> {
    let upper = raw.trim().to_uppercase();
    find_currency(&upper)
        .map(|c| c.code)
        .ok_or_else(|| format!("Unsupported currency code: {}", raw.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_codes_are_unique() {
        let mut codes: Vec<&str> = CURRENCIES.iter().map(|c| c.code).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), CURRENCIES.len());
    }

    #[test]
    fn test_fallback_rates_are_supported_and_positive() {
        for (code, rate) in FALLBACK_RATES {
            assert!(is_supported(code), "{code} missing from catalog");
            assert!(*rate > 0.0);
        }
    }

    #[test]
    fn test_search_matches_code_and_name() {
        let by_code: Vec<&str> = search_currencies("usd").iter().map(|c| c.code).collect();
        assert_eq!(by_code, vec!["USD"]);

        let by_name: Vec<&str> = search_currencies("peso").iter().map(|c| c.code).collect();
        assert_eq!(by_name, vec!["PHP", "MXN"]);

        assert_eq!(search_currencies("  ").len(), CURRENCIES.len());
    }

    #[test]
    fn test_normalize_code() {
        assert_eq!(normalize_code(" eur "), Ok("EUR"));
        assert!(normalize_code("XYZ").is_err());
    }
}
