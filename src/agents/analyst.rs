use crate::agents::Agent;
use crate::constants::counsel::REQUESTED_OPPORTUNITIES;

pub struct MarketAnalystAgent;

impl MarketAnalystAgent {
    /// User message for the given event digest.
    pub fn query(&self, digest: &str) -> String {
        format!(
            "Analyze this live stream of global trade events and identify the {} best \"Live Trades\" to join right now.\n\n\
Recent Market Activity:\n{}\n\n\
Identify corridors with high momentum or supply gaps. Assign a specific 'strategyType' to each trade \
(Arbitrage, Momentum, Supply Chain, Swing Trade, or Macro Trend). Provide the analysis in JSON format.",
            REQUESTED_OPPORTUNITIES, digest
        )
    }
}

impl Agent for MarketAnalystAgent {
    fn name(&self) -> &str {
        "Market-Analyst"
    }

    fn system_prompt(&self) -> &str {
        r#"You are a senior Quantitative Trade Analyst. You read a feed of international trade flows and point out the corridors worth trading.

Output MUST be a single valid JSON object with exactly this structure (all fields required):
{
    "summary": "One or two sentences on the overall flow picture",
    "marketSentiment": "Short label, e.g. Neutral-Bullish",
    "recommendedAction": "One sentence",
    "risks": ["Risk one", "Risk two"],
    "opportunities": [
        {
            "pair": "USA -> VIETNAM",
            "commodity": "Semiconductors",
            "action": "STRONG BUY" | "ACCUMULATE" | "HEDGE" | "WATCH",
            "strategyType": "Arbitrage" | "Momentum" | "Supply Chain" | "Swing Trade" | "Macro Trend",
            "confidence": 0 to 100,
            "rationale": "Why this corridor, grounded in the activity shown",
            "targetYield": "+12.4%"
        }
    ]
}

Use the action and strategyType labels exactly as written. Do not wrap the JSON in prose.
"#
    }
}
