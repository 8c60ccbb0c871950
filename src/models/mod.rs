pub mod currency;
mod history;
mod insight;
mod market;
mod place;
mod rates;
mod selection;

pub use currency::{CurrencyInfo, CURRENCIES};
pub use history::{trend_tail, HistoryPoint, TimeRange};
pub use insight::{insight_response_schema, Insight, Trend};
pub use market::{MarketQuote, PopularConversion, FAMOUS_CODES, POPULAR_CODES};
pub use place::{
    LocateOutcome, LocateQuery, LocateRequest, PlaceResult, EMPTY_RESULT_MESSAGE, FETCH_FAILED_MESSAGE,
    PERMISSION_DENIED_MESSAGE,
};
pub use rates::{format_amount, Conversion, RateFetch, RateSource, RateTable};
pub use selection::{validate_amount, Language, Selection, SelectionUpdate, View};
