//! Wait and backoff strategies for sequence exhaustion
//!
//! A bounded spin followed by sleeps with exponential backoff until the
//! clock passes a given millisecond

use std::thread;
use std::time::Duration;

use crate::config::FlakeConfig;

/// Maximum backoff duration in milliseconds
pub const MAX_BACKOFF_MS: u64 = 100;

/// Perform spin-wait loop, checking for timestamp advancement
///
/// Returns Some(new_ts) if timestamp advanced, None if spin loops exhausted
#[inline]
pub fn spin_wait<F>(from_timestamp: i64, config: &FlakeConfig, get_time: F) -> Option<i64>
where
    F: Fn() -> i64,
{
    if !config.spin_enabled() || config.spin_loops() == 0 {
        return None;
    }

    let yield_every = config.spin_yield_every();

    for i in 0..config.spin_loops() {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return Some(new_ts);
        }

        std::hint::spin_loop();

        if yield_every != 0 && i % yield_every == yield_every - 1 {
            thread::yield_now();
        }
    }

    None
}

/// Sleep with exponential backoff, returning new timestamp once advanced
#[inline]
pub fn sleep_until_next_ms<F>(from_timestamp: i64, mut backoff_ms: u64, get_time: F) -> i64
where
    F: Fn() -> i64,
{
    loop {
        let new_ts = get_time();
        if new_ts > from_timestamp {
            return new_ts;
        }
        thread::sleep(Duration::from_millis(backoff_ms));
        backoff_ms = next_backoff(backoff_ms);
    }
}

/// Calculate next backoff duration with exponential growth capped at MAX_BACKOFF_MS
#[inline(always)]
pub const fn next_backoff(current: u64) -> u64 {
    let next = current.saturating_mul(2);
    if next > MAX_BACKOFF_MS {
        MAX_BACKOFF_MS
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_next_backoff() {
        assert_eq!(next_backoff(1), 2);
        assert_eq!(next_backoff(50), 100);
        assert_eq!(next_backoff(100), 100); // Capped at MAX_BACKOFF_MS
        assert_eq!(next_backoff(200), 100); // Already over, still capped
    }

    #[test]
    fn test_spin_wait_disabled() {
        let config = FlakeConfig::builder().enable_spin(false).build().unwrap();
        let result = spin_wait(100, &config, || 200);
        assert!(result.is_none());
    }

    #[test]
    fn test_spin_wait_immediate_advance() {
        let config = FlakeConfig::builder()
            .enable_spin(true)
            .spin_loops(10)
            .build()
            .unwrap();
        let result = spin_wait(100, &config, || 200);
        assert_eq!(result, Some(200));
    }

    #[test]
    fn test_spin_wait_gives_up() {
        let config = FlakeConfig::builder()
            .spin_loops(8)
            .spin_yield_every(2)
            .build()
            .unwrap();
        let reads = Cell::new(0u32);
        let result = spin_wait(100, &config, || {
            reads.set(reads.get() + 1);
            100
        });
        assert!(result.is_none());
        assert_eq!(reads.get(), 8);
    }

    #[test]
    fn test_sleep_returns_without_sleeping_when_already_past() {
        let reads = Cell::new(0u32);
        let ts = sleep_until_next_ms(100, 1, || {
            reads.set(reads.get() + 1);
            101
        });
        assert_eq!(ts, 101);
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn test_sleep_until_clock_advances() {
        let now = Cell::new(100i64);
        let ts = sleep_until_next_ms(101, 1, || {
            let t = now.get();
            now.set(t + 1);
            t
        });
        assert_eq!(ts, 102);
    }
}
