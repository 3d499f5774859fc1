//! Run configuration loading
//!
//! Built-in defaults, overridden by `MSGQUEUE_*` environment variables:
//! `MSGQUEUE_PRODUCER_COUNT`, `MSGQUEUE_CONSUMER_COUNT`,
//! `MSGQUEUE_SPAWN_INTERVAL_MS`, `MSGQUEUE_RESULT_CAPACITY`.

use config::{Config, Environment};
use msgqueue_core::application::RunConfig;
use msgqueue_core::error::{AppError, Result};

const ENV_PREFIX: &str = "MSGQUEUE";

/// Load from the process environment
pub fn load_run_config() -> Result<RunConfig> {
    load_from(Environment::with_prefix(ENV_PREFIX))
}

fn load_from(environment: Environment) -> Result<RunConfig> {
    let run_config: RunConfig = Config::builder()
        .add_source(environment.try_parsing(true))
        .build()
        .and_then(|settings| settings.try_deserialize())
        .map_err(|e| AppError::Config(e.to_string()))?;

    run_config.validate()?;
    Ok(run_config)
}
