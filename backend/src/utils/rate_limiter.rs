use dashmap::DashMap;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub const CONTACT_MAX_REQUESTS: usize = 2;
pub const CONTACT_WINDOW: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed,
    Limited { retry_after: Duration },
}

/// Sliding-window log keyed by client address.
///
/// Each key keeps the instants of its accepted requests inside the window.
/// Rejected requests are not recorded, so a client is let through again as
/// soon as its oldest accepted request ages out.
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    hits: DashMap<String, VecDeque<Instant>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            hits: DashMap::new(),
        }
    }

    pub fn for_contact_form() -> Self {
        Self::new(CONTACT_MAX_REQUESTS, CONTACT_WINDOW)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn check(&self, key: &str) -> RateDecision {
        let mut log = self.hits.entry(key.to_string()).or_default();
        // Read the clock under the entry lock so every log stays ordered.
        self.record(&mut log, Instant::now())
    }

    pub fn check_at(&self, key: &str, now: Instant) -> RateDecision {
        let mut log = self.hits.entry(key.to_string()).or_default();
        self.record(&mut log, now)
    }

    // Callers hold the entry guard, so evict + count + record is atomic for
    // the key.
    fn record(&self, log: &mut VecDeque<Instant>, now: Instant) -> RateDecision {
        while let Some(oldest) = log.front() {
            if now.saturating_duration_since(*oldest) >= self.window {
                log.pop_front();
            } else {
                break;
            }
        }

        if log.len() >= self.max_requests {
            let retry_after = log
                .front()
                .map(|oldest| self.window.saturating_sub(now.saturating_duration_since(*oldest)))
                .unwrap_or(self.window);
            return RateDecision::Limited { retry_after };
        }

        log.push_back(now);
        RateDecision::Allowed
    }

    /// Drops keys whose every recorded hit has left the window.
    pub fn purge_expired(&self, now: Instant) -> usize {
        let before = self.hits.len();
        self.hits.retain(|_, log| {
            log.back()
                .map(|newest| now.saturating_duration_since(*newest) < self.window)
                .unwrap_or(false)
        });
        before - self.hits.len()
    }

    pub fn tracked_clients(&self) -> usize {
        self.hits.len()
    }
}
