//! Application-wide constants and fixed catalogs
//!
//! The simulated feed draws from the catalogs below. They are fixed and
//! non-empty, and the country set has more than one member, so event
//! generation can never fail.

use std::time::Duration;

/// Trade feed simulation constants
pub mod feed {
    use super::*;

    /// How often the simulated feed emits a new event
    pub const TICK_INTERVAL: Duration = Duration::from_millis(4000);

    /// Number of most recent events kept in the window
    pub const WINDOW_SIZE: usize = 50;

    /// Lower bound (inclusive) of a simulated trade value, in USD
    pub const MIN_TRADE_VALUE: u64 = 10_000_000;

    /// Upper bound (exclusive) of a simulated trade value, in USD
    pub const MAX_TRADE_VALUE: u64 = 60_000_000;

    /// Capacity of the broadcast bus used to notify subscribers
    pub const BUS_CAPACITY: usize = 256;
}

/// Counsel fetching constants
pub mod counsel {
    /// Number of most recent events rendered into the digest sent to the model
    pub const DIGEST_SIZE: usize = 15;

    /// Window length at which the one-shot automatic analysis fires
    pub const AUTO_TRIGGER_THRESHOLD: usize = 5;

    /// Number of opportunities the analyst is asked for
    pub const REQUESTED_OPPORTUNITIES: usize = 3;
}

/// Dashboard series lengths
pub mod dashboard {
    /// Points on the volume momentum timeline
    pub const TIMELINE_POINTS: usize = 20;

    /// Commodities shown in the mix breakdown
    pub const TOP_COMMODITIES: usize = 5;

    /// Arcs drawn on the flow map
    pub const FLOW_ARCS: usize = 8;
}

pub const COUNTRIES: &[&str] = &[
    "USA",
    "China",
    "Germany",
    "Japan",
    "South Korea",
    "Singapore",
    "Netherlands",
    "United Kingdom",
    "France",
    "UAE",
    "Brazil",
    "India",
    "Australia",
    "Canada",
    "Mexico",
    "Vietnam",
    "Taiwan",
    "Malaysia",
];

pub const COMMODITIES: &[&str] = &[
    "Semiconductors",
    "Crude Oil",
    "Natural Gas",
    "Lithium",
    "Rare Earths",
    "Copper",
    "Steel",
    "Soybeans",
    "Pharmaceuticals",
    "Automobiles",
    "Consumer Electronics",
    "Textiles",
];

/// Normalized (0-100) map positions used by the flow map, keyed by country.
pub const COUNTRY_COORDS: &[(&str, f64, f64)] = &[
    ("USA", 20.0, 35.0),
    ("China", 78.0, 40.0),
    ("Germany", 52.0, 30.0),
    ("Japan", 88.0, 38.0),
    ("South Korea", 85.0, 38.0),
    ("Singapore", 78.0, 65.0),
    ("Netherlands", 50.0, 28.0),
    ("United Kingdom", 48.0, 25.0),
    ("France", 49.0, 32.0),
    ("UAE", 62.0, 50.0),
    ("Brazil", 35.0, 75.0),
    ("India", 72.0, 52.0),
    ("Australia", 85.0, 80.0),
    ("Canada", 20.0, 20.0),
    ("Mexico", 18.0, 45.0),
    ("Vietnam", 79.0, 55.0),
    ("Taiwan", 82.0, 45.0),
    ("Malaysia", 76.0, 61.0),
];

/// Logging event names for structured logging
pub mod events {
    pub const TRADE_GENERATED: &str = "trade_generated";
    pub const AUTO_ANALYSIS_TRIGGERED: &str = "auto_analysis_triggered";
    pub const ANALYSIS_SKIPPED: &str = "analysis_skipped";
    pub const COUNSEL_RECEIVED: &str = "counsel_received";
    pub const COUNSEL_FALLBACK: &str = "counsel_fallback";
}
