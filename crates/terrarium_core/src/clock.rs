//! Monotonic millisecond clocks.
//!
//! The frame loop samples its clock once per tick and compares every timer
//! against that single sample.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Milliseconds since the clock started. Never decreases.
    fn now_ms(&self) -> u64;

    /// Block (or jump) until `deadline_ms` has been reached.
    fn wait_until(&mut self, deadline_ms: u64);
}

/// Wall clock backed by `Instant`.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    started: Instant,
}

impl MonotonicClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn wait_until(&mut self, deadline_ms: u64) {
        let now = self.now_ms();
        if deadline_ms > now {
            std::thread::sleep(Duration::from_millis(deadline_ms - now));
        }
    }
}

/// Virtual clock for headless runs and tests. Waiting jumps straight to the
/// deadline.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn at(now: u64) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn wait_until(&mut self, deadline_ms: u64) {
        self.now = self.now.max(deadline_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_jumps_forward_only() {
        let mut clock = ManualClock::at(100);
        clock.wait_until(116);
        assert_eq!(clock.now_ms(), 116);
        clock.wait_until(50);
        assert_eq!(clock.now_ms(), 116);
        clock.advance(4);
        assert_eq!(clock.now_ms(), 120);
    }

    #[test]
    fn test_monotonic_clock_waits() {
        let mut clock = MonotonicClock::start();
        let before = clock.now_ms();
        clock.wait_until(before + 5);
        assert!(clock.now_ms() >= before + 5);
    }
}
