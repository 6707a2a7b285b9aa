//! Message-dispatch pipeline
//!
//! threshold pre-check -> rate limit -> render -> repeat collapse -> sinks
//!
//! `Pipeline` is plain data with no locking; `Logger` owns one behind a mutex
//! so each message runs through every stage atomically.

mod rate_limit;
mod record;
mod repeat;

pub use rate_limit::RateLimiter;
pub use record::{render, SourceLocation};
pub use repeat::RepeatCollapser;

use crate::constants::TIMESTAMP_FORMAT;
use crate::error::{LogError, Result};
use crate::sink::{Sinks, Thresholds};
use crate::Severity;
use chrono::{DateTime, Local};
use std::fmt;

/// All mutable logger state
#[derive(Default)]
pub struct Pipeline {
    pub thresholds: Thresholds,
    pub limiter: RateLimiter,
    pub collapser: RepeatCollapser,
    pub sinks: Sinks,
}

/// What happened to one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Reached the sink stage
    Dispatched,
    /// More verbose than every threshold; no state touched
    BelowThresholds,
    /// Over the per-second budget
    RateLimited,
}

impl Pipeline {
    pub fn new(sinks: Sinks) -> Self {
        Self {
            sinks,
            ..Default::default()
        }
    }

    /// Run one message through every stage, sampled at `now`
    pub fn process(
        &mut self,
        now: DateTime<Local>,
        level: Severity,
        location: &SourceLocation,
        message: fmt::Arguments<'_>,
    ) -> Result<Outcome> {
        if !self.thresholds.any_accepts(level) {
            return Ok(Outcome::BelowThresholds);
        }
        if !self.limiter.admit(now.timestamp()) {
            return Ok(Outcome::RateLimited);
        }

        let rendered = render(level, location, message);
        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
        let line = self.collapser.collapse(&rendered, &timestamp);

        let failures = self
            .sinks
            .dispatch(&self.thresholds, level, &rendered, &line);
        if failures.is_empty() {
            Ok(Outcome::Dispatched)
        } else {
            Err(LogError::Sinks { failures })
        }
    }
}
