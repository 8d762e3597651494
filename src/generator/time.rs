//! Time sources for FlakeID generation
//!
//! Generators read time through [`Clock`] so the source can be swapped
//! for a controllable one.

use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, TimeDelta, Utc};

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock read once, then advanced by a monotonic timer.
///
/// Readings never go backwards: stepping the system clock (NTP, manual
/// changes) after construction does not move this clock. Readings drift
/// from the system clock by however much it is adjusted.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    anchor: DateTime<Utc>,
    started: Instant,
}

impl MonotonicClock {
    /// Anchor to the current system time
    pub fn new() -> Self {
        Self::anchored_at(Utc::now())
    }

    /// Start counting from `anchor` as of now
    pub fn anchored_at(anchor: DateTime<Utc>) -> Self {
        Self {
            anchor,
            started: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        TimeDelta::from_std(self.started.elapsed())
            .ok()
            .and_then(|elapsed| self.anchor.checked_add_signed(elapsed))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// The system wall clock, following every adjustment made to it
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    #[inline(always)]
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_system_time_is_reasonable() {
        let now = SystemClock.now().timestamp_millis();
        // Should be after 2024-01-01
        assert!(now > 1704067200000);
        // Should be before 2100-01-01
        assert!(now < 4102444800000);
    }

    #[test]
    fn test_monotonic_starts_at_system_time() {
        let before = Utc::now();
        let clock = MonotonicClock::new();
        let read = clock.now();
        let after = Utc::now();

        assert!(read >= before);
        assert!(read <= after + TimeDelta::milliseconds(1));
    }

    #[test]
    fn test_monotonic_never_reads_backward() {
        let clock = MonotonicClock::default();
        let mut previous = clock.now();
        for _ in 0..100_000 {
            let current = clock.now();
            assert!(current >= previous, "{current} read after {previous}");
            previous = current;
        }
    }

    #[test]
    fn test_monotonic_advances_from_anchor() {
        let clock = MonotonicClock::anchored_at(DateTime::UNIX_EPOCH);
        thread::sleep(Duration::from_millis(5));

        let elapsed = clock.now().timestamp_millis();
        assert!(elapsed >= 5);
        assert!(elapsed < 60_000);
    }

    #[test]
    fn test_shared_clock_delegates() {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let before = Utc::now();
        let read = clock.now();
        assert!(read >= before);
    }
}
