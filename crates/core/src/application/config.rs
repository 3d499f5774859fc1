// Run configuration

use super::constants::*;
use crate::domain::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Orchestrator configuration
///
/// Deserializable so the composition root can layer it from external
/// sources; every field falls back to the built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub producer_count: usize,
    pub consumer_count: usize,
    pub spawn_interval_ms: u64,
    pub result_capacity: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            producer_count: DEFAULT_PRODUCER_COUNT,
            consumer_count: DEFAULT_CONSUMER_COUNT,
            spawn_interval_ms: DEFAULT_SPAWN_INTERVAL_MS,
            result_capacity: DEFAULT_RESULT_CAPACITY,
        }
    }
}

impl RunConfig {
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Reject values the runtime primitives cannot accept
    ///
    /// A capacity below the consumer count is allowed: results are drained
    /// while the run is in flight, so consumers only wait for room.
    pub fn validate(&self) -> DomainResult<()> {
        if self.spawn_interval_ms == 0 {
            return Err(DomainError::ValidationError(
                "spawn_interval_ms must be greater than 0".to_string(),
            ));
        }
        if self.result_capacity == 0 {
            return Err(DomainError::ValidationError(
                "result_capacity must be greater than 0".to_string(),
            ));
        }
        if self.result_capacity < self.consumer_count {
            warn!(
                result_capacity = self.result_capacity,
                consumer_count = self.consumer_count,
                "Result channel smaller than consumer count, consumers may wait on send"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_batch() {
        let config = RunConfig::default();
        assert_eq!(config.producer_count, 5);
        assert_eq!(config.consumer_count, 5);
        assert_eq!(config.spawn_interval(), Duration::from_secs(1));
        assert_eq!(config.result_capacity, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = RunConfig {
            spawn_interval_ms: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("spawn_interval_ms"));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = RunConfig {
            result_capacity: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("result_capacity"));
    }

    #[test]
    fn test_small_capacity_allowed() {
        let config = RunConfig {
            consumer_count: 8,
            result_capacity: 2,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: RunConfig = serde_json::from_value(serde_json::json!({
            "consumer_count": 7
        }))
        .unwrap();
        assert_eq!(config.consumer_count, 7);
        assert_eq!(config.producer_count, DEFAULT_PRODUCER_COUNT);
        assert_eq!(config.spawn_interval_ms, DEFAULT_SPAWN_INTERVAL_MS);
    }
}
