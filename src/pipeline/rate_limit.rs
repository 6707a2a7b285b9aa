//! Per-second message budget
//!
//! Counts admitted messages within the current wall-clock second. The caller
//! samples the clock once per dispatch and passes that second in, so the
//! boundary check and the reset always agree.

/// Fixed-window rate limiter keyed on Unix seconds
#[derive(Debug, Default)]
pub struct RateLimiter {
    /// Maximum messages per second, `<= 0` disables limiting
    max_per_second: i64,
    /// Second the counter belongs to
    this_second: i64,
    /// Messages admitted during `this_second`
    admitted: i64,
}

impl RateLimiter {
    pub fn new(max_per_second: i64) -> Self {
        Self {
            max_per_second,
            ..Default::default()
        }
    }

    pub fn max_per_second(&self) -> i64 {
        self.max_per_second
    }

    /// Change the budget; the current window keeps its count
    pub fn set_max_per_second(&mut self, max: i64) {
        self.max_per_second = max;
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.max_per_second > 0
    }

    /// Returns true if a message sampled at `now_secs` may proceed
    pub fn admit(&mut self, now_secs: i64) -> bool {
        if !self.is_enabled() {
            return true;
        }
        if now_secs != self.this_second {
            self.this_second = now_secs;
            self.admitted = 1;
            return true;
        }
        if self.admitted < self.max_per_second {
            self.admitted += 1;
            return true;
        }
        false
    }
}
