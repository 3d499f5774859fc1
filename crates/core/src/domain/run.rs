// Run Domain Model - one single-shot producer/consumer batch

use super::error::{DomainError, Result};
use super::message::Message;
use serde::Serialize;

/// Run phase (single shot, strictly forward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunPhase {
    Idle,
    Dispatching,
    Draining,
    Closed,
    Terminal,
}

impl RunPhase {
    /// The only phase this one may advance to
    pub fn next(self) -> Option<RunPhase> {
        match self {
            RunPhase::Idle => Some(RunPhase::Dispatching),
            RunPhase::Dispatching => Some(RunPhase::Draining),
            RunPhase::Draining => Some(RunPhase::Closed),
            RunPhase::Closed => Some(RunPhase::Terminal),
            RunPhase::Terminal => None,
        }
    }

    /// Advance to `to`, rejecting skips and backwards moves
    pub fn transition(&mut self, to: RunPhase) -> Result<()> {
        if self.next() != Some(to) {
            return Err(DomainError::InvalidStateTransition {
                from: self.to_string(),
                to: to.to_string(),
            });
        }
        *self = to;
        Ok(())
    }
}

impl std::fmt::Display for RunPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunPhase::Idle => write!(f, "IDLE"),
            RunPhase::Dispatching => write!(f, "DISPATCHING"),
            RunPhase::Draining => write!(f, "DRAINING"),
            RunPhase::Closed => write!(f, "CLOSED"),
            RunPhase::Terminal => write!(f, "TERMINAL"),
        }
    }
}

/// Outcome of a finished run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Messages appended to the queue
    pub produced: usize,
    /// Messages received from the result channel, in arrival order
    pub consumed: Vec<Message>,
    /// Consume attempts that found the queue empty (lost, not retried)
    pub empty_reads: usize,
    /// Messages still queued when the run terminated
    pub remaining: usize,
}
