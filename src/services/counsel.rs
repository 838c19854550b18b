use std::sync::Arc;

use tracing::{info, warn};

use crate::agents::{analyst::MarketAnalystAgent, Agent};
use crate::constants::{counsel::DIGEST_SIZE, events as log_events};
use crate::data::counsel::{parse_counsel, Counsel, CounselOutcome};
use crate::error::CounselError;
use crate::events::TradeEvent;
use crate::llm::Summarizer;

/// Turns a window snapshot into market counsel.
///
/// Never fails: any problem at the summarization boundary is logged and
/// replaced by [`CounselOutcome::fallback`]. Re-entrancy is the caller's
/// concern (see `Oracle`).
pub struct CounselFetcher {
    analyst: MarketAnalystAgent,
    llm: Arc<dyn Summarizer>,
    digest_size: usize,
}

impl CounselFetcher {
    pub fn new(llm: Arc<dyn Summarizer>) -> Self {
        Self::with_digest_size(llm, DIGEST_SIZE)
    }

    pub fn with_digest_size(llm: Arc<dyn Summarizer>, digest_size: usize) -> Self {
        Self {
            analyst: MarketAnalystAgent,
            llm,
            digest_size: digest_size.max(1),
        }
    }

    /// Returns `None` without calling the model when `events` is empty.
    pub async fn analyze(&self, events: &[TradeEvent]) -> Option<CounselOutcome> {
        if events.is_empty() {
            return None;
        }

        let digest = render_digest(events, self.digest_size);
        match self.request(&digest).await {
            Ok(counsel) => {
                info!(
                    event = log_events::COUNSEL_RECEIVED,
                    opportunities = counsel.opportunities.len(),
                    "🧠 [COUNSEL] Market counsel received ({})",
                    counsel.market_sentiment
                );
                Some(CounselOutcome::from_model(counsel))
            }
            Err(e) => {
                warn!(
                    event = log_events::COUNSEL_FALLBACK,
                    "⚠️ [COUNSEL] Analysis failed, serving fallback counsel: {}",
                    e
                );
                Some(CounselOutcome::fallback())
            }
        }
    }

    async fn request(&self, digest: &str) -> Result<Counsel, CounselError> {
        let query = self.analyst.query(digest);
        let response = self.analyst.run(&query, self.llm.as_ref()).await?;
        parse_counsel(&response)
    }
}

/// One digest line per event for the last `limit` events, oldest first.
pub fn render_digest(events: &[TradeEvent], limit: usize) -> String {
    let skip = events.len().saturating_sub(limit);
    events[skip..]
        .iter()
        .map(TradeEvent::digest_line)
        .collect::<Vec<_>>()
        .join("\n")
}
