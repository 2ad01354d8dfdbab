//! Nanosecond wall clock used to stamp order events.
//!
//! `NanoClock` reads UTC time through `chrono` and never hands out the same value twice:
//! if the wall clock has not advanced (coarse resolution) or stepped backwards, the next
//! value is one nanosecond past the previous one.

use chrono::Utc;

/// Current UTC time in nanoseconds since the Unix epoch.
///
/// Returns `0` if the clock reads before the epoch or beyond the range of `i64` nanoseconds.
pub fn now_nanos() -> u64 {
    Utc::now()
        .timestamp_nanos_opt()
        .map_or(0, |ns| u64::try_from(ns).unwrap_or(0))
}

/// Strictly increasing, always positive nanosecond timestamps.
#[derive(Debug, Default)]
pub struct NanoClock {
    last: u64,
}

impl NanoClock {
    /// Create a clock that has not issued any timestamp yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the current time.
    pub fn now(&mut self) -> u64 {
        self.next_after(now_nanos())
    }

    fn next_after(&mut self, wall: u64) -> u64 {
        let ts = wall.max(self.last.saturating_add(1));
        self.last = ts;
        ts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_clock_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(now_nanos() > 1_577_836_800_000_000_000);
    }

    #[test]
    fn consecutive_samples_strictly_increase() {
        let mut clock = NanoClock::new();
        let mut prev = clock.now();
        for _ in 0..10_000 {
            let ts = clock.now();
            assert!(ts > prev);
            prev = ts;
        }
    }

    #[test]
    fn stalled_or_backwards_wall_clock_still_advances() {
        let mut clock = NanoClock::new();
        assert_eq!(clock.next_after(1_000), 1_000);
        assert_eq!(clock.next_after(1_000), 1_001);
        assert_eq!(clock.next_after(500), 1_002);
        assert_eq!(clock.next_after(5_000), 5_000);
    }

    #[test]
    fn first_sample_is_positive_even_at_epoch() {
        let mut clock = NanoClock::new();
        assert_eq!(clock.next_after(0), 1);
    }
}
