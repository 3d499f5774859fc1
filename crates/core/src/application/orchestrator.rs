//! Orchestrator - single-shot producer/consumer batch
//!
//! Wires one producer launcher and one consumer launcher against a shared
//! `MessageQueue`:
//! - every tracked task (both launchers and every unit) sits on one
//!   `CompletionBarrier`
//! - consumer units forward what they pop into a bounded result channel
//! - the channel closes when the last consumer-side sender is dropped,
//!   which happens before the barrier reaches zero

use super::completion::CompletionBarrier;
use super::config::RunConfig;
use super::launcher::{Launcher, Role};
use crate::domain::{Message, RunPhase, RunReport};
use crate::error::Result;
use crate::port::MessageQueue;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[derive(Default)]
struct RunStats {
    produced: AtomicUsize,
    empty_reads: AtomicUsize,
}

pub struct Orchestrator {
    queue: Arc<dyn MessageQueue>,
    config: RunConfig,
}

impl Orchestrator {
    pub fn new(queue: Arc<dyn MessageQueue>, config: RunConfig) -> Self {
        Self { queue, config }
    }

    /// Run the batch to completion
    ///
    /// Blocks (no timeout) until every launcher and unit has exited, then
    /// reports what was produced, consumed and left behind. Results are
    /// drained while the run is in flight, so a small channel capacity
    /// only delays consumer units.
    pub async fn run(self) -> Result<RunReport> {
        self.config.validate()?;

        let mut phase = RunPhase::Idle;
        let barrier = CompletionBarrier::new();
        let stats = Arc::new(RunStats::default());
        let (result_tx, mut result_rx) = mpsc::channel::<Message>(self.config.result_capacity);

        let collector = tokio::spawn(async move {
            let mut consumed = Vec::new();
            while let Some(message) = result_rx.recv().await {
                consumed.push(message);
            }
            consumed
        });

        advance(&mut phase, RunPhase::Dispatching)?;
        self.spawn_producer_launcher(&barrier, Arc::clone(&stats));
        self.spawn_consumer_launcher(&barrier, Arc::clone(&stats), result_tx);

        advance(&mut phase, RunPhase::Draining)?;
        barrier.wait().await;

        // Every sender lived inside a tracked task, so the channel is closed now
        advance(&mut phase, RunPhase::Closed)?;
        let consumed = collector.await?;

        let report = RunReport {
            produced: stats.produced.load(Ordering::Relaxed),
            consumed,
            empty_reads: stats.empty_reads.load(Ordering::Relaxed),
            remaining: self.queue.len().await,
        };
        advance(&mut phase, RunPhase::Terminal)?;

        info!(
            produced = report.produced,
            consumed = report.consumed.len(),
            empty_reads = report.empty_reads,
            remaining = report.remaining,
            "Run finished"
        );
        Ok(report)
    }

    fn spawn_producer_launcher(&self, barrier: &CompletionBarrier, stats: Arc<RunStats>) {
        let launcher = Launcher::new(
            Role::Producer,
            self.config.producer_count,
            self.config.spawn_interval(),
        );
        let queue = Arc::clone(&self.queue);
        let units = barrier.clone();
        let guard = barrier.register();

        tokio::spawn(async move {
            let _guard = guard;
            launcher
                .run(units, move |index| {
                    let queue = Arc::clone(&queue);
                    let stats = Arc::clone(&stats);
                    async move {
                        queue.produce(Message::numbered(index)).await;
                        stats.produced.fetch_add(1, Ordering::Relaxed);
                    }
                })
                .await;
        });
    }

    fn spawn_consumer_launcher(
        &self,
        barrier: &CompletionBarrier,
        stats: Arc<RunStats>,
        result_tx: mpsc::Sender<Message>,
    ) {
        let launcher = Launcher::new(
            Role::Consumer,
            self.config.consumer_count,
            self.config.spawn_interval(),
        );
        let queue = Arc::clone(&self.queue);
        let units = barrier.clone();
        let guard = barrier.register();

        tokio::spawn(async move {
            let _guard = guard;
            launcher
                .run(units, move |_index| {
                    let queue = Arc::clone(&queue);
                    let stats = Arc::clone(&stats);
                    let result_tx = result_tx.clone();
                    async move {
                        match queue.consume().await {
                            Some(message) => {
                                if let Err(e) = result_tx.send(message).await {
                                    warn!(message = %e.0, "Result channel closed, dropping message");
                                }
                            }
                            // Lost attempt: not retried, nothing left pending
                            None => {
                                stats.empty_reads.fetch_add(1, Ordering::Relaxed);
                            }
                        }
                    }
                })
                .await;
        });
    }
}

fn advance(phase: &mut RunPhase, to: RunPhase) -> Result<()> {
    let from = *phase;
    phase.transition(to)?;
    info!(from = %from, to = %to, "Run phase changed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::error::AppError;
    use crate::port::message_queue::mocks::MockMessageQueue;
    use std::collections::HashSet;
    use std::time::Duration;
    use tokio::time::Instant;

    fn config(producers: usize, consumers: usize) -> RunConfig {
        RunConfig {
            producer_count: producers,
            consumer_count: consumers,
            ..Default::default()
        }
    }

    fn assert_accounting(report: &RunReport, producers: usize, consumers: usize) {
        assert_eq!(report.produced, producers);
        assert_eq!(report.consumed.len() + report.empty_reads, consumers);
        assert_eq!(report.consumed.len() + report.remaining, report.produced);
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_run_terminates_after_pacing() {
        let queue = Arc::new(MockMessageQueue::new_fifo());
        let start = Instant::now();

        let report = Orchestrator::new(queue.clone(), RunConfig::default())
            .run()
            .await
            .unwrap();

        assert_eq!(start.elapsed(), Duration::from_secs(5));
        assert_accounting(&report, 5, 5);
        assert_eq!(queue.produce_calls(), 5);
        assert_eq!(queue.consume_calls(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_consumed_messages_are_unique_and_intact() {
        let queue = Arc::new(MockMessageQueue::new_fifo());
        let report = Orchestrator::new(queue, RunConfig::default())
            .run()
            .await
            .unwrap();

        let mut ids = HashSet::new();
        for message in &report.consumed {
            assert!(ids.insert(message.id()), "duplicate id {}", message.id());
            assert_eq!(message, &Message::numbered(message.id()));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_consumers_leaves_everything_queued() {
        let queue = Arc::new(MockMessageQueue::new_fifo());
        let report = Orchestrator::new(queue.clone(), config(5, 0))
            .run()
            .await
            .unwrap();

        assert!(report.consumed.is_empty());
        assert_eq!(report.remaining, 5);
        assert_eq!(queue.len().await, 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_producers_means_every_read_is_empty() {
        let queue = Arc::new(MockMessageQueue::new_fifo());
        let report = Orchestrator::new(queue, config(0, 5)).run().await.unwrap();

        assert_eq!(report.empty_reads, 5);
        assert!(report.consumed.is_empty());
        assert_eq!(report.remaining, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_capacity_below_consumer_count_still_terminates() {
        let queue = Arc::new(MockMessageQueue::new_fifo());
        let run_config = RunConfig {
            producer_count: 8,
            consumer_count: 8,
            spawn_interval_ms: 10,
            result_capacity: 1,
        };

        let report = Orchestrator::new(queue, run_config).run().await.unwrap();
        assert_accounting(&report, 8, 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_panicking_unit_does_not_block_termination() {
        let queue = Arc::new(MockMessageQueue::new_panic_inducing("consume exploded"));
        let report = Orchestrator::new(queue.clone(), config(0, 3))
            .run()
            .await
            .unwrap();

        assert_eq!(queue.consume_calls(), 3);
        assert!(report.consumed.is_empty());
        assert_eq!(report.empty_reads, 0);
    }

    #[tokio::test]
    async fn test_invalid_config_rejected_before_dispatch() {
        let queue = Arc::new(MockMessageQueue::new_fifo());
        let run_config = RunConfig {
            result_capacity: 0,
            ..Default::default()
        };

        let err = Orchestrator::new(queue.clone(), run_config)
            .run()
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Domain(DomainError::ValidationError(_))
        ));
        assert_eq!(queue.produce_calls(), 0);
    }
}
