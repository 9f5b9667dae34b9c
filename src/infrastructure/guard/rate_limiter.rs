//! Rate limiter implementation
//!
//! Provides fixed window rate limiting per client identity.

use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::domain::{ClientIdentity, RateLimitConfig};

/// Result of a rate limit check
#[derive(Debug, Clone)]
pub struct RateLimitResult {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Remaining requests in the current window
    pub remaining: u32,
    /// Total limit for the window
    pub limit: u32,
    /// Time until the window resets (in seconds)
    pub reset_in_seconds: u64,
}

/// Request count for one identity
#[derive(Debug, Clone, Copy)]
struct RateWindow {
    count: u32,
    window_start: Instant,
}

/// Rate limiter keyed by client identity.
///
/// Each identity's read-increment-compare runs under that entry's shard
/// lock, so concurrent requests from one client cannot both see a stale
/// count. Unrelated identities do not contend on a single lock.
#[derive(Debug)]
pub struct RateLimiter {
    window: Duration,
    max_requests: u32,
    windows: DashMap<ClientIdentity, RateWindow>,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            window: config.window(),
            max_requests: config.max_requests,
            windows: DashMap::new(),
        }
    }

    /// Count a request and decide whether it may proceed
    pub fn admit(&self, identity: ClientIdentity) -> RateLimitResult {
        self.admit_at(identity, Instant::now())
    }

    /// Count a request observed at `now`
    pub fn admit_at(&self, identity: ClientIdentity, now: Instant) -> RateLimitResult {
        let mut entry = self.windows.entry(identity).or_insert(RateWindow {
            count: 0,
            window_start: now,
        });
        let record = entry.value_mut();

        let elapsed = now.saturating_duration_since(record.window_start);
        if record.count == 0 || elapsed >= self.window {
            record.count = 1;
            record.window_start = now;
        } else {
            record.count = record.count.saturating_add(1);
        }

        let reset_in = self
            .window
            .saturating_sub(now.saturating_duration_since(record.window_start));

        RateLimitResult {
            allowed: record.count <= self.max_requests,
            remaining: self.max_requests.saturating_sub(record.count),
            limit: self.max_requests,
            reset_in_seconds: reset_in.as_secs().max(1),
        }
    }

    /// Drop windows that have elapsed. Returns how many were removed.
    pub fn cleanup(&self) -> usize {
        self.cleanup_at(Instant::now())
    }

    fn cleanup_at(&self, now: Instant) -> usize {
        let before = self.windows.len();
        let window = self.window;

        self.windows
            .retain(|_, record| now.saturating_duration_since(record.window_start) < window);

        before.saturating_sub(self.windows.len())
    }

    /// Number of identities currently tracked
    pub fn tracked(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;

    fn identity(last: u8) -> ClientIdentity {
        ClientIdentity::new(IpAddr::V4(Ipv4Addr::new(192, 0, 2, last)))
    }

    fn limiter(window_secs: u64, max_requests: u32) -> RateLimiter {
        RateLimiter::new(&RateLimitConfig::new(window_secs, max_requests))
    }

    #[test]
    fn test_rate_limiter_allows_first_request() {
        let limiter = limiter(60, 10);

        let result = limiter.admit(identity(1));

        assert!(result.allowed);
        assert_eq!(result.remaining, 9);
        assert_eq!(result.limit, 10);
    }

    #[test]
    fn test_rate_limiter_blocks_over_limit() {
        let limiter = limiter(60, 2);
        let start = Instant::now();

        assert!(limiter.admit_at(identity(1), start).allowed);
        assert!(limiter.admit_at(identity(1), start).allowed);

        let result = limiter.admit_at(identity(1), start + Duration::from_secs(1));
        assert!(!result.allowed);
        assert_eq!(result.remaining, 0);
    }

    #[test]
    fn test_nth_plus_one_rejected_iff_n_reaches_max() {
        let max = 5;
        let limiter = limiter(60, max);
        let start = Instant::now();

        for n in 0..max {
            assert!(
                limiter.admit_at(identity(1), start).allowed,
                "request {} should be admitted",
                n + 1
            );
        }

        for _ in 0..3 {
            assert!(!limiter.admit_at(identity(1), start).allowed);
        }
    }

    #[test]
    fn test_window_elapsed_always_admits() {
        let limiter = limiter(60, 1);
        let start = Instant::now();

        assert!(limiter.admit_at(identity(1), start).allowed);
        for _ in 0..10 {
            assert!(!limiter.admit_at(identity(1), start).allowed);
        }

        let result = limiter.admit_at(identity(1), start + Duration::from_secs(60));
        assert!(result.allowed);
        assert_eq!(result.remaining, 0);

        assert!(!limiter.admit_at(identity(1), start + Duration::from_secs(61)).allowed);
    }

    #[test]
    fn test_window_resets_once_per_window() {
        let limiter = limiter(60, 2);
        let start = Instant::now();

        limiter.admit_at(identity(1), start);
        // Second window starts at +60s, not at +90s.
        limiter.admit_at(identity(1), start + Duration::from_secs(60));
        limiter.admit_at(identity(1), start + Duration::from_secs(90));

        assert!(!limiter.admit_at(identity(1), start + Duration::from_secs(119)).allowed);
        assert!(limiter.admit_at(identity(1), start + Duration::from_secs(120)).allowed);
    }

    #[test]
    fn test_rate_limiter_different_identities() {
        let limiter = limiter(60, 1);

        limiter.admit(identity(1));

        assert!(limiter.admit(identity(2)).allowed);
        assert!(!limiter.admit(identity(1)).allowed);
    }

    #[test]
    fn test_reset_in_seconds_counts_down() {
        let limiter = limiter(300, 10);
        let start = Instant::now();

        assert_eq!(limiter.admit_at(identity(1), start).reset_in_seconds, 300);
        assert_eq!(
            limiter
                .admit_at(identity(1), start + Duration::from_secs(100))
                .reset_in_seconds,
            200
        );
    }

    #[test]
    fn test_cleanup_drops_elapsed_windows() {
        let limiter = limiter(60, 10);
        let start = Instant::now();

        limiter.admit_at(identity(1), start);
        limiter.admit_at(identity(2), start + Duration::from_secs(30));
        assert_eq!(limiter.tracked(), 2);

        let removed = limiter.cleanup_at(start + Duration::from_secs(60));

        assert_eq!(removed, 1);
        assert_eq!(limiter.tracked(), 1);
    }

    #[test]
    fn test_concurrent_admits_do_not_undercount() {
        let limiter = Arc::new(limiter(60, 50));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                std::thread::spawn(move || {
                    (0..25)
                        .filter(|_| limiter.admit(identity(1)).allowed)
                        .count()
                })
            })
            .collect();

        let admitted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();

        assert_eq!(admitted, 50);
    }
}
