use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::currency::normalize_code;
use crate::models::{
    trend_tail, validate_amount, Conversion, HistoryPoint, Insight, LocateOutcome, LocateQuery,
    LocateRequest, MarketQuote, PopularConversion, RateFetch, RateSource, RateTable, Selection,
    SelectionUpdate, View,
};
use crate::services::history_service::synthesize_now;
use crate::services::insight_service::{trend_summary, InsightService, TREND_POINTS};
use crate::services::locator_service::LocatorService;
use crate::services::market_service::{market_board, popular_conversions};
use crate::services::rate_service::RateService;

/// Identifies one in-flight rate fetch. Only the newest ticket may commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTicket {
    pub generation: u64,
    pub base: String,
}

/// Result of an async operation, and whether it reached the shared state.
#[derive(Debug, Clone, Serialize)]
pub struct Completion<T> {
    pub result: T,
    pub applied: bool,
}

/// Everything the presentation layer renders, derived from one state read.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub selection: Selection,
    pub conversion: Conversion,
    pub rate_base: String,
    pub rate_source: RateSource,
    pub rates_last_updated: Option<DateTime<Utc>>,
    pub history: Vec<HistoryPoint>,
    pub insight: Option<Insight>,
    pub locate: Option<LocateOutcome>,
    pub rates_loading: bool,
    pub insight_loading: bool,
    pub locate_loading: bool,
}

struct DashboardState {
    selection: Selection,
    table: RateTable,
    rate_source: RateSource,
    history: Vec<HistoryPoint>,
    insight: Option<Insight>,
    locate: Option<LocateOutcome>,
    rates_loading: bool,
    insight_loading: bool,
    locate_loading: bool,
    rate_generation: u64,
    insight_generation: u64,
    locate_generation: u64,
    view_generation: u64,
}

impl DashboardState {
    fn resynthesize(&mut self) {
        let rate = self.table.rate_for(&self.selection.target);
        self.history = synthesize_now(rate, self.selection.range, self.selection.language);
        debug!(
            "Resynthesized {} history points for {} at {}",
            self.history.len(),
            self.selection.target,
            rate
        );
    }

    fn begin_rate_fetch(&mut self) -> RateTicket {
        self.rate_generation += 1;
        self.rates_loading = true;
        RateTicket {
            generation: self.rate_generation,
            base: self.selection.base.clone(),
        }
    }

    fn conversion(&self) -> Conversion {
        Conversion::compute(
            self.selection.amount,
            &self.selection.base,
            &self.selection.target,
            &self.table,
        )
    }
}

/// Owns the selection and every value derived from it.
///
/// Rate fetches, analyses and lookups run without holding the state lock;
/// each carries a generation number and its result is dropped on arrival
/// if a newer request of the same kind started meanwhile. Insight and
/// locator results are also dropped once the user navigated away from the
/// view that asked for them.
pub struct DashboardController {
    state: RwLock<DashboardState>,
    rates: RateService,
    insights: InsightService,
    locator: LocatorService,
}

impl DashboardController {
    pub fn new(rates: RateService, insights: InsightService, locator: LocatorService) -> Self {
        let mut state = DashboardState {
            selection: Selection::default(),
            table: RateTable::fallback(),
            rate_source: RateSource::Fallback,
            history: Vec::new(),
            insight: None,
            locate: None,
            rates_loading: false,
            insight_loading: false,
            locate_loading: false,
            rate_generation: 0,
            insight_generation: 0,
            locate_generation: 0,
            view_generation: 0,
        };
        state.resynthesize();

        Self {
            state: RwLock::new(state),
            rates,
            insights,
            locator,
        }
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        let state = self.state.read();
        DashboardSnapshot {
            selection: state.selection.clone(),
            conversion: state.conversion(),
            rate_base: state.table.base.clone(),
            rate_source: state.rate_source,
            rates_last_updated: state.table.last_updated,
            history: state.history.clone(),
            insight: state.insight.clone(),
            locate: state.locate.clone(),
            rates_loading: state.rates_loading,
            insight_loading: state.insight_loading,
            locate_loading: state.locate_loading,
        }
    }

    pub fn selection(&self) -> Selection {
        self.state.read().selection.clone()
    }

    pub fn conversion(&self) -> Conversion {
        self.state.read().conversion()
    }

    pub fn rate_table(&self) -> (RateTable, RateSource) {
        let state = self.state.read();
        (state.table.clone(), state.rate_source)
    }

    pub fn history(&self) -> Vec<HistoryPoint> {
        self.state.read().history.clone()
    }

    pub fn insight(&self) -> Option<Insight> {
        self.state.read().insight.clone()
    }

    pub fn market_board(&self) -> Vec<MarketQuote> {
        let state = self.state.read();
        market_board(&state.table, &mut rand::rng())
    }

    pub fn popular_conversions(&self) -> Vec<PopularConversion> {
        let state = self.state.read();
        popular_conversions(&state.table, &state.selection.base)
    }

    /// Applies a partial selection change in one state update.
    ///
    /// Every field is validated before anything changes. Returns a ticket
    /// when the base changed and a rate fetch must follow; target, range and
    /// language changes resynthesize the history immediately.
    pub fn apply_update(&self, update: SelectionUpdate) -> Result<Option<RateTicket>, AppError> {
        let amount = update.amount.map(validate_amount).transpose()?;
        let base = update.base.as_deref().map(normalize_code).transpose()?;
        let target = update.target.as_deref().map(normalize_code).transpose()?;

        let mut state = self.state.write();
        let mut ticket = None;
        let mut derived_changed = false;

        if let Some(amount) = amount {
            state.selection.amount = amount;
        }
        if let Some(base) = base {
            if state.selection.base != base {
                info!("Base currency changed {} -> {}", state.selection.base, base);
                state.selection.base = base.to_string();
                ticket = Some(state.begin_rate_fetch());
            }
        }
        if let Some(target) = target {
            if state.selection.target != target {
                state.selection.target = target.to_string();
                derived_changed = true;
            }
        }
        if let Some(range) = update.range {
            if state.selection.range != range {
                state.selection.range = range;
                derived_changed = true;
            }
        }
        if let Some(language) = update.language {
            if state.selection.language != language {
                state.selection.language = language;
                derived_changed = true;
            }
        }
        if let Some(view) = update.view {
            if state.selection.view != view {
                state.selection.view = view;
                state.view_generation += 1;
            }
        }

        if derived_changed {
            state.resynthesize();
        }

        Ok(ticket)
    }

    /// Exchanges base and target atomically; exactly one rate fetch follows.
    pub fn swap(&self) -> RateTicket {
        let mut state = self.state.write();
        let selection = &mut state.selection;
        std::mem::swap(&mut selection.base, &mut selection.target);
        info!("Swapped pair to {}/{}", state.selection.base, state.selection.target);

        state.resynthesize();
        state.begin_rate_fetch()
    }

    /// Starts a refetch for the current base.
    pub fn begin_rate_refresh(&self) -> RateTicket {
        self.state.write().begin_rate_fetch()
    }

    /// Fetches rates for the ticket's base and commits them if still current.
    pub async fn refresh_rates(&self, ticket: RateTicket) -> bool {
        let fetch = self.rates.fetch_rates(&ticket.base).await;
        self.complete_rate_fetch(&ticket, fetch)
    }

    /// Commits a fetched table unless a newer fetch has started.
    ///
    /// A failed fetch leaves the committed table in place and only marks it
    /// cached; a table the provider never confirmed stays tagged fallback.
    pub fn complete_rate_fetch(&self, ticket: &RateTicket, fetch: RateFetch) -> bool {
        let mut state = self.state.write();
        if ticket.generation != state.rate_generation {
            info!(
                "Discarding stale rates for {} (generation {} < {})",
                ticket.base, ticket.generation, state.rate_generation
            );
            return false;
        }

        state.rates_loading = false;
        match fetch {
            RateFetch::Live(table) => {
                state.table = table;
                state.rate_source = RateSource::Live;
                state.resynthesize();
            }
            RateFetch::Failed => {
                if state.rate_source == RateSource::Live {
                    state.rate_source = RateSource::Cached;
                }
                info!("Keeping {} rates after failed fetch for {}", state.table.base, ticket.base);
            }
        }
        true
    }

    /// Selects a new base and waits for its rates.
    pub async fn change_base(&self, code: &str) -> Result<bool, AppError> {
        let update = SelectionUpdate {
            base: Some(code.to_string()),
            ..SelectionUpdate::default()
        };
        match self.apply_update(update)? {
            Some(ticket) => Ok(self.refresh_rates(ticket).await),
            None => Ok(false),
        }
    }

    /// Requests a fresh insight for the current pair and chart tail.
    ///
    /// Analyses are sequenced: only the most recently started one is stored.
    pub async fn analyze(&self) -> Completion<Insight> {
        let (generation, view_generation, base, target, rate, summary, language) = {
            let mut state = self.state.write();
            state.insight_generation += 1;
            state.insight_loading = true;

            let selection = &state.selection;
            let tail = trend_tail(&state.history, TREND_POINTS);
            (
                state.insight_generation,
                state.view_generation,
                selection.base.clone(),
                selection.target.clone(),
                state.table.rate_for(&selection.target),
                trend_summary(&tail, selection.range.label()),
                selection.language,
            )
        };

        let insight = self
            .insights
            .analyze(&base, &target, rate, &summary, language)
            .await;

        let mut state = self.state.write();
        if generation != state.insight_generation {
            info!("Discarding insight for {}/{}: a newer analysis was requested", base, target);
            return Completion { result: insight, applied: false };
        }

        state.insight_loading = false;
        if view_generation != state.view_generation {
            info!("Discarding insight for {}/{}: view changed while in flight", base, target);
            return Completion { result: insight, applied: false };
        }

        state.insight = Some(insight.clone());
        Completion { result: insight, applied: true }
    }

    /// Runs a money-changer lookup and records its outcome.
    pub async fn locate(&self, request: LocateRequest) -> Result<Completion<LocateOutcome>, AppError> {
        let query = LocateQuery::from_request(&request)?;

        let Some(query) = query else {
            let outcome = LocateOutcome::permission_denied();
            let mut state = self.state.write();
            state.locate_generation += 1;
            state.locate_loading = false;
            state.locate = Some(outcome.clone());
            return Ok(Completion { result: outcome, applied: true });
        };

        let (generation, view_generation, language) = {
            let mut state = self.state.write();
            state.locate_generation += 1;
            state.locate_loading = true;
            (state.locate_generation, state.view_generation, state.selection.language)
        };

        let outcome = self.locator.locate(&query, language).await;

        let mut state = self.state.write();
        if generation != state.locate_generation {
            info!("Discarding stale locator result (generation {})", generation);
            return Ok(Completion { result: outcome, applied: false });
        }

        state.locate_loading = false;
        if view_generation != state.view_generation {
            info!("Discarding locator result: view changed while in flight");
            return Ok(Completion { result: outcome, applied: false });
        }

        state.locate = Some(outcome.clone());
        Ok(Completion { result: outcome, applied: true })
    }

    pub fn active_view(&self) -> View {
        self.state.read().selection.view
    }
}
