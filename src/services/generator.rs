//! Synthetic trade feed.
//!
//! Every event is drawn uniformly from the fixed catalogs. The generator is
//! deterministic for a given seed apart from the wall-clock timestamp.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Builder;

use crate::constants::{feed, COMMODITIES, COUNTRIES};
use crate::events::{TradeDirection, TradeEvent};

pub struct TradeGenerator {
    rng: StdRng,
    last_timestamp: i64,
}

impl TradeGenerator {
    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible generator for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            last_timestamp: i64::MIN,
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    /// Produce one event stamped with the current time.
    ///
    /// Timestamps never go backwards across calls, even if the wall clock does.
    pub fn tick(&mut self) -> TradeEvent {
        let now = Utc::now().timestamp_millis().max(self.last_timestamp);
        self.last_timestamp = now;
        self.tick_at(now)
    }

    pub fn tick_at(&mut self, timestamp: i64) -> TradeEvent {
        let origin = self.pick(COUNTRIES);
        // Rejection sampling keeps the draw uniform over the other countries
        let mut destination = self.pick(COUNTRIES);
        while destination == origin {
            destination = self.pick(COUNTRIES);
        }
        let commodity = self.pick(COMMODITIES);
        let value = self.rng.gen_range(feed::MIN_TRADE_VALUE..feed::MAX_TRADE_VALUE);
        let direction = if self.rng.gen_bool(0.5) {
            TradeDirection::Export
        } else {
            TradeDirection::Import
        };
        let id = Builder::from_random_bytes(self.rng.gen()).into_uuid();

        TradeEvent {
            id: id.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            commodity: commodity.to_string(),
            value,
            timestamp,
            direction,
        }
    }

    fn pick(&mut self, catalog: &'static [&'static str]) -> &'static str {
        catalog[self.rng.gen_range(0..catalog.len())]
    }
}
