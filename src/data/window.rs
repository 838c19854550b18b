use std::collections::VecDeque;

use crate::events::TradeEvent;

/// Rolling window over the most recent trade events.
///
/// Events are kept in insertion order: index 0 is the oldest retained event,
/// the back is the newest. Once `limit` is reached each push evicts the oldest
/// event. Eviction never touches the running total.
#[derive(Clone, Debug)]
pub struct EventWindow {
    events: VecDeque<TradeEvent>,
    limit: usize,
    baseline: u64,
    total_volume: u64,
    events_seen: u64,
}

impl EventWindow {
    pub fn new(limit: usize) -> Self {
        Self::with_baseline(limit, 0)
    }

    /// Window whose running total starts at `baseline` instead of zero.
    pub fn with_baseline(limit: usize, baseline: u64) -> Self {
        let limit = limit.max(1);
        Self {
            events: VecDeque::with_capacity(limit),
            limit,
            baseline,
            total_volume: baseline,
            events_seen: 0,
        }
    }

    pub fn push(&mut self, event: TradeEvent) {
        self.total_volume = self.total_volume.saturating_add(event.value);
        self.events_seen += 1;

        if self.events.len() >= self.limit {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Baseline plus the value of every event ever pushed, evicted ones included.
    pub fn total_volume(&self) -> u64 {
        self.total_volume
    }

    /// Sum of pushed values only, without the baseline.
    pub fn generated_volume(&self) -> u64 {
        self.total_volume - self.baseline
    }

    /// Number of events ever pushed.
    pub fn events_seen(&self) -> u64 {
        self.events_seen
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &TradeEvent> + ExactSizeIterator {
        self.events.iter()
    }

    pub fn latest(&self) -> Option<&TradeEvent> {
        self.events.back()
    }

    /// The last `n` events, oldest first.
    pub fn recent(&self, n: usize) -> Vec<TradeEvent> {
        let skip = self.events.len().saturating_sub(n);
        self.events.iter().skip(skip).cloned().collect()
    }

    /// Copy of the whole window, oldest first.
    pub fn snapshot(&self) -> Vec<TradeEvent> {
        self.events.iter().cloned().collect()
    }
}
