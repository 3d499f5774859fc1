// Launcher - paced, fire-and-forget dispatch of single-operation units

use super::completion::CompletionBarrier;
use std::future::Future;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

/// Which side of the queue a launcher drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Producer,
    Consumer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Producer => write!(f, "producer"),
            Role::Consumer => write!(f, "consumer"),
        }
    }
}

/// Spawns `count` units, one per tick of `interval`
///
/// Units are not awaited; each one is registered on the barrier before it
/// is spawned and released when it exits.
pub struct Launcher {
    role: Role,
    count: usize,
    interval: Duration,
}

impl Launcher {
    pub fn new(role: Role, count: usize, interval: Duration) -> Self {
        Self {
            role,
            count,
            interval,
        }
    }

    /// Run the dispatch loop
    ///
    /// `unit` receives the 1-based spawn index. The loop waits one full
    /// interval after the last spawn as well, so a launcher of N units
    /// occupies N intervals.
    pub async fn run<F, Fut>(self, barrier: CompletionBarrier, unit: F)
    where
        F: Fn(u64) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        info!(
            role = %self.role,
            count = self.count,
            interval_ms = self.interval.as_millis() as u64,
            "Launcher started"
        );

        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;

        for index in 1..=self.count as u64 {
            let guard = barrier.register();
            let work = unit(index);
            tokio::spawn(async move {
                let _guard = guard;
                work.await;
            });
            debug!(role = %self.role, index, "Unit spawned");

            ticker.tick().await;
        }

        info!(role = %self.role, "Launcher finished spawning");
    }
}
