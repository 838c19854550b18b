use serde::{Deserialize, Serialize};

use crate::data::counsel::CounselOutcome;
use crate::data::money::millions_label;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeDirection {
    Export,
    Import,
}

impl TradeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeDirection::Export => "Export",
            TradeDirection::Import => "Import",
        }
    }
}

/// One simulated trade transaction. Immutable once generated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeEvent {
    /// Opaque per-event id, only meaningful as a list identity
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub commodity: String,
    /// USD, in [10_000_000, 60_000_000)
    pub value: u64,
    /// Unix epoch milliseconds at generation
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub direction: TradeDirection,
}

impl TradeEvent {
    /// Value in USD millions.
    pub fn value_millions(&self) -> f64 {
        self.value as f64 / 1e6
    }

    /// Compact line used in the digest sent to the model,
    /// e.g. `USA -> Vietnam: Semiconductors ($42.1M)`.
    pub fn digest_line(&self) -> String {
        format!(
            "{} -> {}: {} ({})",
            self.origin,
            self.destination,
            self.commodity,
            millions_label(self.value, 1)
        )
    }
}

// Global Event Enum
#[derive(Clone, Debug)]
pub enum OracleEvent {
    /// A new event entered the window
    Trade(TradeEvent),
    /// The current counsel was replaced
    Counsel(CounselOutcome),
}
