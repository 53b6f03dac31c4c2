//! Fixed-interval tick clock.
//!
//! Physics advances in whole ticks of a fixed interval (16 ms by default,
//! about 60 Hz), independent of the display refresh rate. The host feeds
//! wall time into [`TickClock::advance`] once per frame and runs as many
//! physics ticks as it returns.
//!
//! # Example
//!
//! ```
//! use explodiemoji::clock::TickClock;
//! use std::time::{Duration, Instant};
//!
//! let mut clock = TickClock::new(Duration::from_millis(16), 4);
//! let t0 = Instant::now();
//!
//! clock.start(t0);
//! assert_eq!(clock.advance(t0 + Duration::from_millis(40)), 2);
//!
//! // Idle hosts stop the clock; nothing accumulates while stopped
//! clock.stop();
//! assert_eq!(clock.advance(t0 + Duration::from_secs(5)), 0);
//! ```

use crate::config::AppConfig;
use std::time::{Duration, Instant};

/// Converts elapsed wall time into a count of due physics ticks.
#[derive(Debug)]
pub struct TickClock {
    /// Time between ticks.
    interval: Duration,
    /// Most ticks returned by a single `advance`.
    max_catch_up: u32,
    /// When `advance` last ran; `None` while stopped.
    last: Option<Instant>,
    /// Time elapsed but not yet consumed by a tick.
    accumulator: Duration,
    /// Total ticks delivered since creation.
    tick_count: u64,
}

impl TickClock {
    /// Create a stopped clock.
    ///
    /// `max_catch_up` is raised to at least 1.
    pub fn new(interval: Duration, max_catch_up: u32) -> Self {
        Self {
            interval,
            max_catch_up: max_catch_up.max(1),
            last: None,
            accumulator: Duration::ZERO,
            tick_count: 0,
        }
    }

    /// Clock with the interval and catch-up limit from `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Duration::from_millis(config.tick_interval_ms),
            config.max_catch_up_ticks,
        )
    }

    /// Start ticking. The first tick is due one interval after `now`.
    ///
    /// Does nothing if the clock is already running.
    pub fn start(&mut self, now: Instant) {
        if self.last.is_none() {
            self.last = Some(now);
            self.accumulator = Duration::ZERO;
        }
    }

    /// Stop ticking and drop any partially elapsed interval.
    pub fn stop(&mut self) {
        self.last = None;
        self.accumulator = Duration::ZERO;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.last.is_some()
    }

    /// Number of ticks due at `now`.
    ///
    /// The remainder of a partial interval carries over to the next call.
    /// After a stall, at most `max_catch_up` ticks are returned and the rest
    /// of the backlog is dropped.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let Some(last) = self.last else {
            return 0;
        };
        self.accumulator += now.saturating_duration_since(last);
        self.last = Some(now);

        let mut due = 0;
        while self.accumulator >= self.interval && due < self.max_catch_up {
            self.accumulator -= self.interval;
            due += 1;
        }
        if self.accumulator >= self.interval {
            log::trace!("dropping {:?} of tick backlog", self.accumulator);
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += u64::from(due);
        due
    }

    /// Time between ticks.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total ticks delivered since creation.
    #[inline]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(16), 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_clock_new_is_stopped() {
        let mut clock = TickClock::default();
        assert!(!clock.is_running());
        assert_eq!(clock.interval(), ms(16));
        assert_eq!(clock.advance(Instant::now()), 0);
        assert_eq!(clock.tick_count(), 0);
    }

    #[test]
    fn test_first_tick_after_one_interval() {
        let mut clock = TickClock::default();
        let t0 = Instant::now();
        clock.start(t0);

        assert_eq!(clock.advance(t0 + ms(15)), 0);
        assert_eq!(clock.advance(t0 + ms(16)), 1);
        assert_eq!(clock.advance(t0 + ms(48)), 2);
        assert_eq!(clock.tick_count(), 3);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = TickClock::default();
        let t0 = Instant::now();
        clock.start(t0);

        assert_eq!(clock.advance(t0 + ms(10)), 0);
        assert_eq!(clock.advance(t0 + ms(20)), 1);
        assert_eq!(clock.advance(t0 + ms(31)), 0);
        assert_eq!(clock.advance(t0 + ms(32)), 1);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut clock = TickClock::new(ms(16), 4);
        let t0 = Instant::now();
        clock.start(t0);

        assert_eq!(clock.advance(t0 + Duration::from_secs(1)), 4);
        // Backlog dropped rather than replayed
        assert_eq!(clock.advance(t0 + Duration::from_secs(1) + ms(1)), 0);
    }

    #[test]
    fn test_start_while_running_keeps_phase() {
        let mut clock = TickClock::default();
        let t0 = Instant::now();
        clock.start(t0);
        assert_eq!(clock.advance(t0 + ms(10)), 0);

        clock.start(t0 + ms(12));
        assert_eq!(clock.advance(t0 + ms(16)), 1);
    }

    #[test]
    fn test_stop_discards_partial_interval() {
        let mut clock = TickClock::default();
        let t0 = Instant::now();
        clock.start(t0);
        clock.advance(t0 + ms(10));
        clock.stop();
        assert!(!clock.is_running());

        clock.start(t0 + ms(100));
        assert_eq!(clock.advance(t0 + ms(110)), 0);
        assert_eq!(clock.advance(t0 + ms(116)), 1);
    }

    #[test]
    fn test_zero_catch_up_raised_to_one() {
        let mut clock = TickClock::new(ms(16), 0);
        let t0 = Instant::now();
        clock.start(t0);
        assert_eq!(clock.advance(t0 + ms(100)), 1);
    }
}
