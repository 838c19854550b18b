//! Application state shared by the feed, the counsel fetcher and the
//! presentation layer.
//!
//! The window is only appended to by [`Oracle::tick`]; the counsel is only
//! replaced by [`Oracle::run_analysis`]. At most one analysis is in flight,
//! gated by a flag that an [`InFlightGuard`] clears when dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::bus::EventBus;
use crate::config::AppConfig;
use crate::constants::{counsel::AUTO_TRIGGER_THRESHOLD, events as log_events, feed};
use crate::data::counsel::CounselOutcome;
use crate::data::window::EventWindow;
use crate::events::{OracleEvent, TradeEvent};
use crate::llm::Summarizer;
use crate::services::counsel::CounselFetcher;
use crate::services::generator::TradeGenerator;

#[derive(Debug)]
pub struct OracleState {
    pub window: EventWindow,
    pub counsel: Option<CounselOutcome>,
    pub in_flight: bool,
    /// Cleared once the automatic analysis has fired; never re-armed
    auto_armed: bool,
}

impl OracleState {
    fn new(window: EventWindow) -> Self {
        Self {
            window,
            counsel: None,
            in_flight: false,
            auto_armed: true,
        }
    }

    pub fn auto_armed(&self) -> bool {
        self.auto_armed
    }
}

/// Why an analysis request did nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisSkip {
    EmptyWindow,
    InFlight,
}

/// Clears the in-flight flag on drop, whether the analysis completed,
/// fell back, panicked or was dropped mid-flight.
pub struct InFlightGuard {
    state: Arc<Mutex<OracleState>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        lock(&self.state).in_flight = false;
    }
}

/// Permission to run one analysis, holding the window snapshot it covers.
pub struct AnalysisTicket {
    snapshot: Vec<TradeEvent>,
    guard: InFlightGuard,
}

impl AnalysisTicket {
    pub fn snapshot(&self) -> &[TradeEvent] {
        &self.snapshot
    }
}

pub struct TickOutcome {
    pub event: TradeEvent,
    /// Present when this tick fired the one-shot automatic analysis
    pub auto_analysis: Option<AnalysisTicket>,
}

/// Read-only copy of the state for presentation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleSnapshot {
    /// Oldest first
    pub events: Vec<TradeEvent>,
    pub total_volume: u64,
    pub events_seen: u64,
    pub counsel: Option<CounselOutcome>,
    pub analyzing: bool,
}

#[derive(Clone)]
pub struct Oracle {
    state: Arc<Mutex<OracleState>>,
    generator: Arc<Mutex<TradeGenerator>>,
    fetcher: Arc<CounselFetcher>,
    bus: EventBus,
    auto_threshold: usize,
}

impl Oracle {
    pub fn new(generator: TradeGenerator, fetcher: CounselFetcher, window: EventWindow) -> Self {
        Self {
            state: Arc::new(Mutex::new(OracleState::new(window))),
            generator: Arc::new(Mutex::new(generator)),
            fetcher: Arc::new(fetcher),
            bus: EventBus::new(feed::BUS_CAPACITY),
            auto_threshold: AUTO_TRIGGER_THRESHOLD,
        }
    }

    pub fn from_config(config: &AppConfig, llm: Arc<dyn Summarizer>) -> Self {
        let generator = TradeGenerator::new(config.simulation.seed);
        let fetcher = CounselFetcher::with_digest_size(llm, config.counsel.digest_size);
        let window = EventWindow::with_baseline(
            config.simulation.window_size,
            config.simulation.volume_baseline,
        );
        Self::new(generator, fetcher, window).with_auto_threshold(config.counsel.auto_trigger_threshold)
    }

    pub fn with_auto_threshold(mut self, threshold: usize) -> Self {
        self.auto_threshold = threshold.max(1);
        self
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Generate one event, append it to the window and, the first time the
    /// window reaches the auto-trigger threshold with no counsel and nothing in
    /// flight, hand back a ticket for the automatic analysis.
    pub fn tick(&self) -> TickOutcome {
        let event = lock(&self.generator).tick();

        let auto_analysis = {
            let mut state = lock(&self.state);
            state.window.push(event.clone());
            debug!(
                event = log_events::TRADE_GENERATED,
                id = %event.id,
                window = state.window.len(),
                "📡 [FEED] {} {}",
                event.direction.as_str(),
                event.digest_line()
            );

            if state.auto_armed
                && state.window.len() >= self.auto_threshold
                && state.counsel.is_none()
                && !state.in_flight
            {
                state.auto_armed = false;
                info!(
                    event = log_events::AUTO_ANALYSIS_TRIGGERED,
                    window = state.window.len(),
                    "🧠 [COUNSEL] Window reached {} events, starting automatic analysis",
                    self.auto_threshold
                );
                Some(self.begin(&mut state))
            } else {
                None
            }
        };

        self.bus.notify(OracleEvent::Trade(event.clone()));
        TickOutcome {
            event,
            auto_analysis,
        }
    }

    /// Claim the in-flight slot and snapshot the window.
    pub fn try_begin_analysis(&self) -> Result<AnalysisTicket, AnalysisSkip> {
        let mut state = lock(&self.state);
        let skip = if state.in_flight {
            Some(AnalysisSkip::InFlight)
        } else if state.window.is_empty() {
            Some(AnalysisSkip::EmptyWindow)
        } else {
            None
        };
        if let Some(skip) = skip {
            debug!(event = log_events::ANALYSIS_SKIPPED, reason = ?skip, "🧠 [COUNSEL] Analysis request ignored");
            return Err(skip);
        }
        Ok(self.begin(&mut state))
    }

    fn begin(&self, state: &mut OracleState) -> AnalysisTicket {
        state.in_flight = true;
        AnalysisTicket {
            snapshot: state.window.snapshot(),
            guard: InFlightGuard {
                state: Arc::clone(&self.state),
            },
        }
    }

    /// Run the analysis a ticket was issued for and store its result as the
    /// current counsel. The window may keep changing meanwhile; the ticket's
    /// snapshot is what gets analyzed.
    pub async fn run_analysis(&self, ticket: AnalysisTicket) -> Option<CounselOutcome> {
        let AnalysisTicket { snapshot, guard } = ticket;
        let outcome = self.fetcher.analyze(&snapshot).await;

        if let Some(outcome) = &outcome {
            lock(&self.state).counsel = Some(outcome.clone());
            self.bus.notify(OracleEvent::Counsel(outcome.clone()));
        }
        drop(guard);
        outcome
    }

    /// Run the analysis on its own task. Once started it always completes and
    /// stores its counsel, even if whoever awaits the handle goes away.
    pub fn spawn_analysis(&self, ticket: AnalysisTicket) -> JoinHandle<Option<CounselOutcome>> {
        let oracle = self.clone();
        tokio::spawn(async move { oracle.run_analysis(ticket).await })
    }

    /// Manual trigger: a no-op while another analysis is in flight or the
    /// window is empty. Dropping the returned future does not cancel the fetch.
    pub async fn request_analysis(&self) -> Result<CounselOutcome, AnalysisSkip> {
        let ticket = self.try_begin_analysis()?;
        info!("🧠 [COUNSEL] Manual analysis requested ({} events)", ticket.snapshot.len());
        match self.spawn_analysis(ticket).await {
            Ok(outcome) => outcome.ok_or(AnalysisSkip::EmptyWindow),
            Err(e) => {
                error!("❌ [COUNSEL] Analysis task failed: {}", e);
                Ok(CounselOutcome::fallback())
            }
        }
    }

    pub fn is_analyzing(&self) -> bool {
        lock(&self.state).in_flight
    }

    pub fn counsel(&self) -> Option<CounselOutcome> {
        lock(&self.state).counsel.clone()
    }

    pub fn total_volume(&self) -> u64 {
        lock(&self.state).window.total_volume()
    }

    pub fn events(&self) -> Vec<TradeEvent> {
        lock(&self.state).window.snapshot()
    }

    pub fn snapshot(&self) -> OracleSnapshot {
        let state = lock(&self.state);
        OracleSnapshot {
            events: state.window.snapshot(),
            total_volume: state.window.total_volume(),
            events_seen: state.window.events_seen(),
            counsel: state.counsel.clone(),
            analyzing: state.in_flight,
        }
    }

    /// Direct access for inspection; keep the guard short and never across an await.
    pub fn state(&self) -> MutexGuard<'_, OracleState> {
        lock(&self.state)
    }
}

// State is plain data that is consistent between statements, so a poisoned
// lock is still safe to use.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
