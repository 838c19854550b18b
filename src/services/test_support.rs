//! Stub summarizers and fixtures shared by the service unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::data::counsel::{Counsel, StrategyType, TradeAction, TradeOpportunity};
use crate::error::CounselError;
use crate::events::{TradeDirection, TradeEvent};
use crate::llm::Summarizer;

/// Returns the same text on every call.
pub struct CannedSummarizer {
    pub response: String,
    pub calls: AtomicUsize,
}

impl CannedSummarizer {
    pub fn new(response: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: response.into(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for CannedSummarizer {
    async fn complete(&self, _system_prompt: &str, _user_input: &str) -> Result<String, CounselError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Fails every call with a transport error.
#[derive(Default)]
pub struct FailingSummarizer {
    pub calls: AtomicUsize,
}

impl FailingSummarizer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for FailingSummarizer {
    async fn complete(&self, _system_prompt: &str, _user_input: &str) -> Result<String, CounselError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CounselError::Transport("connection refused".to_string()))
    }
}

/// Signals `entered` on each call, then blocks until `release` is notified.
pub struct GatedSummarizer {
    pub response: String,
    pub calls: AtomicUsize,
    pub entered: Notify,
    pub release: Notify,
}

impl GatedSummarizer {
    pub fn new(response: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            response: response.into(),
            calls: AtomicUsize::new(0),
            entered: Notify::new(),
            release: Notify::new(),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Summarizer for GatedSummarizer {
    async fn complete(&self, _system_prompt: &str, _user_input: &str) -> Result<String, CounselError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(self.response.clone())
    }
}

/// Records the user input of the last call.
#[derive(Default)]
pub struct RecordingSummarizer {
    pub last_input: std::sync::Mutex<Option<String>>,
}

#[async_trait]
impl Summarizer for RecordingSummarizer {
    async fn complete(&self, _system_prompt: &str, user_input: &str) -> Result<String, CounselError> {
        *self.last_input.lock().unwrap() = Some(user_input.to_string());
        Ok(serde_json::to_string(&sample_counsel()).unwrap())
    }
}

pub fn sample_counsel() -> Counsel {
    Counsel {
        summary: "Asian semiconductor corridors are running hot.".to_string(),
        market_sentiment: "Bullish".to_string(),
        recommended_action: "Add exposure to Pacific logistics.".to_string(),
        risks: vec!["Port strikes".to_string()],
        opportunities: vec![
            TradeOpportunity {
                pair: "TAIWAN -> USA".to_string(),
                commodity: "Semiconductors".to_string(),
                action: TradeAction::StrongBuy,
                strategy_type: StrategyType::Momentum,
                confidence: 91.5,
                rationale: "Three large shipments in the last window.".to_string(),
                target_yield: "+9.8%".to_string(),
            },
            TradeOpportunity {
                pair: "BRAZIL -> CHINA".to_string(),
                commodity: "Soybeans".to_string(),
                action: TradeAction::Hedge,
                strategy_type: StrategyType::MacroTrend,
                confidence: 120.0,
                rationale: "Demand spike ahead of harvest.".to_string(),
                target_yield: "+4.1%".to_string(),
            },
            TradeOpportunity {
                pair: "UAE -> INDIA".to_string(),
                commodity: "Crude Oil".to_string(),
                action: TradeAction::Watch,
                strategy_type: StrategyType::Arbitrage,
                confidence: -5.0,
                rationale: "Spread between corridors widening.".to_string(),
                target_yield: "+2.0%".to_string(),
            },
        ],
    }
}

pub fn sample_counsel_json() -> String {
    serde_json::to_string(&sample_counsel()).unwrap()
}

pub fn make_event(id: &str, commodity: &str, value: u64) -> TradeEvent {
    make_route(id, "USA", "Vietnam", commodity, value)
}

pub fn make_route(id: &str, origin: &str, destination: &str, commodity: &str, value: u64) -> TradeEvent {
    TradeEvent {
        id: id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        commodity: commodity.to_string(),
        value,
        timestamp: 1_700_000_000_000,
        direction: TradeDirection::Export,
    }
}
