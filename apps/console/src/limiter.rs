//! Command-rate throttle: a fixed quota over a fixed window with a hard reset.
//!
//! Once `max` submissions land inside the window, everything else is rejected
//! until the full window has elapsed since the window opened. The reset
//! restores the entire quota at once — no leaky-bucket decay.

use std::time::{Duration, Instant};

pub struct RateLimiter {
    max: u32,
    window: Duration,
    count: u32,
    window_start: Instant,
}

impl RateLimiter {
    pub fn new(max: u32, window: Duration) -> Self {
        Self {
            max,
            window,
            count: 0,
            window_start: Instant::now(),
        }
    }

    /// Records one submission attempt. Returns `false` when the quota for the
    /// current window is already spent.
    pub fn check(&mut self) -> bool {
        self.check_at(Instant::now())
    }

    // Clock-injected core so tests never sleep.
    pub(crate) fn check_at(&mut self, now: Instant) -> bool {
        if now.duration_since(self.window_start) >= self.window {
            self.window_start = now;
            self.count = 0;
        }

        if self.count >= self.max {
            return false;
        }

        self.count += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_exactly_max_then_rejects() {
        let mut limiter = RateLimiter::new(3, Duration::from_secs(10));
        let now = Instant::now();

        assert!(limiter.check_at(now));
        assert!(limiter.check_at(now));
        assert!(limiter.check_at(now));
        assert!(!limiter.check_at(now));
        assert!(!limiter.check_at(now));
    }

    #[test]
    fn test_quota_restored_after_window_elapses() {
        let mut limiter = RateLimiter::new(2, Duration::from_secs(10));
        let now = Instant::now();

        assert!(limiter.check_at(now));
        assert!(limiter.check_at(now));
        assert!(!limiter.check_at(now));

        // The full quota comes back at once after the window, regardless of
        // how overdrawn the previous window was.
        let later = now + Duration::from_secs(10);
        assert!(limiter.check_at(later));
        assert!(limiter.check_at(later));
        assert!(!limiter.check_at(later));
    }

    #[test]
    fn test_partial_window_does_not_reset() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(10));
        let now = Instant::now();

        assert!(limiter.check_at(now));
        assert!(!limiter.check_at(now + Duration::from_secs(9)));
    }
}
