//! msgqueue - Main Entry Point
//! Single-shot producer/consumer batch over an in-memory queue

mod logging;
mod settings;

use anyhow::Result;
use logging::LogFormat;
use std::sync::Arc;
use tracing::info;

use msgqueue_core::application::Orchestrator;
use msgqueue_core::port::MessageQueue;
use msgqueue_infra_memory::InMemoryMessageQueue;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let log_format = LogFormat::from_env();
    logging::init_logging(log_format)?;

    info!("msgqueue v{} starting...", VERSION);

    // 2. Load configuration
    let run_config = settings::load_run_config()
        .map_err(|e| anyhow::anyhow!("Configuration load failed: {}", e))?;

    info!(
        producer_count = run_config.producer_count,
        consumer_count = run_config.consumer_count,
        spawn_interval_ms = run_config.spawn_interval_ms,
        result_capacity = run_config.result_capacity,
        "Configuration loaded"
    );

    // 3. Wire dependencies and run the batch
    let queue: Arc<dyn MessageQueue> = Arc::new(InMemoryMessageQueue::new());
    let report = Orchestrator::new(queue, run_config)
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("Run failed: {}", e))?;

    // 4. Summary
    match log_format {
        LogFormat::Json => {
            info!(report = %serde_json::to_string(&report)?, "Run report");
        }
        LogFormat::Compact | LogFormat::Pretty => {
            info!(
                "Consumed {} of {} produced messages ({} empty reads, {} left in queue)",
                report.consumed.len(),
                report.produced,
                report.empty_reads,
                report.remaining
            );
        }
    }

    Ok(())
}
