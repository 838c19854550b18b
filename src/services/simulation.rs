use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use crate::services::oracle::Oracle;

/// A single scheduled tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick;

/// Drives the feed from a tick channel.
///
/// Production feeds the channel from [`spawn_interval_ticks`]; tests send
/// ticks directly so nothing waits on the wall clock.
pub struct SimulationService {
    oracle: Oracle,
}

impl SimulationService {
    pub fn new(oracle: Oracle) -> Self {
        Self { oracle }
    }

    /// Process ticks until the channel closes. Each tick runs the generator
    /// synchronously; an automatic analysis, when one fires, runs on its own
    /// task so later ticks are not held up by the model.
    pub async fn run(self, mut ticks: mpsc::Receiver<Tick>) {
        info!("📡 [FEED] Simulation started");
        while ticks.recv().await.is_some() {
            let outcome = self.oracle.tick();
            if let Some(ticket) = outcome.auto_analysis {
                self.oracle.spawn_analysis(ticket);
            }
        }
        info!("📡 [FEED] Tick source closed, simulation stopped");
    }

    pub fn start(self, ticks: mpsc::Receiver<Tick>) -> JoinHandle<()> {
        tokio::spawn(self.run(ticks))
    }
}

/// Emit a [`Tick`] every `period`, first one after one full period. Stops when
/// the receiver is dropped.
pub fn spawn_interval_ticks(period: Duration) -> (mpsc::Receiver<Tick>, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel(1);
    let start = tokio::time::Instant::now() + period;
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(start, period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            if tx.send(Tick).await.is_err() {
                break;
            }
        }
    });
    (rx, handle)
}
