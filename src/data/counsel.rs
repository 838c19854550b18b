//! Counsel data contract: the structured market opinion returned by the
//! analyst model, its validation, and the static fallback.

use serde::{Deserialize, Serialize};

use crate::error::CounselError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeAction {
    #[serde(rename = "STRONG BUY")]
    StrongBuy,
    #[serde(rename = "ACCUMULATE")]
    Accumulate,
    #[serde(rename = "HEDGE")]
    Hedge,
    #[serde(rename = "WATCH")]
    Watch,
}

impl TradeAction {
    pub fn label(&self) -> &'static str {
        match self {
            TradeAction::StrongBuy => "STRONG BUY",
            TradeAction::Accumulate => "ACCUMULATE",
            TradeAction::Hedge => "HEDGE",
            TradeAction::Watch => "WATCH",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyType {
    Arbitrage,
    Momentum,
    #[serde(rename = "Supply Chain")]
    SupplyChain,
    #[serde(rename = "Swing Trade")]
    SwingTrade,
    #[serde(rename = "Macro Trend")]
    MacroTrend,
}

impl StrategyType {
    pub fn label(&self) -> &'static str {
        match self {
            StrategyType::Arbitrage => "Arbitrage",
            StrategyType::Momentum => "Momentum",
            StrategyType::SupplyChain => "Supply Chain",
            StrategyType::SwingTrade => "Swing Trade",
            StrategyType::MacroTrend => "Macro Trend",
        }
    }
}

/// One suggested trade corridor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOpportunity {
    /// e.g. "USA -> VIETNAM"
    pub pair: String,
    pub commodity: String,
    pub action: TradeAction,
    pub strategy_type: StrategyType,
    /// Nominally 0-100 but passed through as received
    pub confidence: f64,
    pub rationale: String,
    /// Display label such as "+12.4%", never parsed
    pub target_yield: String,
}

impl TradeOpportunity {
    /// Confidence clamped to [0, 100] for display. NaN maps to 0.
    pub fn confidence_pct(&self) -> f64 {
        if self.confidence.is_nan() {
            0.0
        } else {
            self.confidence.clamp(0.0, 100.0)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counsel {
    pub summary: String,
    pub market_sentiment: String,
    pub recommended_action: String,
    pub risks: Vec<String>,
    pub opportunities: Vec<TradeOpportunity>,
}

impl Counsel {
    /// Static counsel served whenever the model cannot be used.
    pub fn fallback() -> Self {
        Self {
            summary: "Stable trade flows detected across major tech corridors.".to_string(),
            market_sentiment: "Neutral-Bullish".to_string(),
            recommended_action: "Maintain existing positions in semiconductor logistics."
                .to_string(),
            risks: vec![
                "Shipping lane congestion".to_string(),
                "Regional policy shifts".to_string(),
            ],
            opportunities: vec![TradeOpportunity {
                pair: "USA -> VIETNAM".to_string(),
                commodity: "Semiconductors".to_string(),
                action: TradeAction::StrongBuy,
                strategy_type: StrategyType::SupplyChain,
                confidence: 88.0,
                rationale: "Increased assembly demand in Southeast Asian hubs.".to_string(),
                target_yield: "+14.2%".to_string(),
            }],
        }
    }
}

/// Where a counsel value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounselSource {
    Model,
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounselOutcome {
    pub counsel: Counsel,
    pub source: CounselSource,
}

impl CounselOutcome {
    pub fn from_model(counsel: Counsel) -> Self {
        Self {
            counsel,
            source: CounselSource::Model,
        }
    }

    pub fn fallback() -> Self {
        Self {
            counsel: Counsel::fallback(),
            source: CounselSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == CounselSource::Fallback
    }
}

/// Validate raw model output against the counsel schema.
///
/// Accepts the JSON object bare or wrapped in a Markdown code fence. Every
/// field is required and the enumerated labels must match exactly.
pub fn parse_counsel(raw: &str) -> Result<Counsel, CounselError> {
    let text = strip_code_fence(raw.trim());
    if text.is_empty() {
        return Err(CounselError::EmptyResponse);
    }
    Ok(serde_json::from_str(text)?)
}

fn strip_code_fence(text: &str) -> &str {
    let Some(body) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the optional language tag on the opening fence line
    let body = match body.find('\n') {
        Some(idx) => &body[idx + 1..],
        None => body,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}
