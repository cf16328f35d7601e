//! Per-conversation send throttling.
//!
//! Each conversation keeps the instants of its accepted sends inside a
//! sliding window. A rejected send is reported as `AppError::RateLimited`
//! carrying the time until the oldest send expires, which the hub surfaces
//! to the user as a retry hint.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use crate::error::AppError;

/// Sliding-window send limiter keyed by conversation id.
pub struct RateLimiter {
    /// Accepted send instants per conversation, oldest first.
    sends: HashMap<String, VecDeque<Instant>>,
    /// Sends allowed per conversation within the `window`.
    limit: usize,
    /// Length of the sliding window.
    window: Duration,
}

impl RateLimiter {
    /// # Arguments
    ///
    /// * `limit` - The number of sends allowed per conversation per `window`.
    /// * `window` - The time duration of the sliding window.
    pub fn new(limit: usize, window: Duration) -> Self {
        RateLimiter {
            sends: HashMap::new(),
            limit,
            window,
        }
    }

    /// Records a send within a conversation, or rejects it.
    ///
    /// On rejection nothing is recorded and the error reports how long the
    /// conversation has to wait for a slot to free up.
    pub fn check(&mut self, conversation_id: &str) -> Result<(), AppError> {
        let now = Instant::now();
        self.expire(now);

        let sends = self.sends.entry(conversation_id.to_string()).or_default();
        if sends.len() >= self.limit {
            // Sends are oldest-first, so the front one frees the next slot.
            let oldest = sends.front().copied().unwrap_or(now);
            let retry_after = self.window.saturating_sub(now - oldest);
            return Err(AppError::RateLimited { retry_after });
        }

        sends.push_back(now);
        Ok(())
    }

    /// Number of conversations currently holding sends in the window.
    pub fn tracked(&self) -> usize {
        self.sends.len()
    }

    /// Drops sends that left the window and conversations left with none,
    /// so idle conversations do not accumulate.
    fn expire(&mut self, now: Instant) {
        let Some(window_start) = now.checked_sub(self.window) else {
            return;
        };
        self.sends.retain(|_, sends| {
            while sends.front().is_some_and(|&t| t <= window_start) {
                sends.pop_front();
            }
            !sends.is_empty()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_rate_limiter_allows_sends_within_limit() {
        let mut limiter = RateLimiter::new(5, Duration::from_secs(1));
        for _ in 0..5 {
            limiter.check("conversation-1").unwrap();
        }
        assert!(limiter.check("conversation-1").is_err());
    }

    #[test]
    fn test_rate_limiter_tracks_conversations_independently() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(1));
        limiter.check("conversation-1").unwrap();
        limiter.check("conversation-2").unwrap();
        assert!(limiter.check("conversation-1").is_err());
    }

    #[test]
    fn test_rate_limiter_resets_after_window() {
        let mut limiter = RateLimiter::new(2, Duration::from_millis(50));
        limiter.check("conversation-3").unwrap();
        limiter.check("conversation-3").unwrap();
        assert!(limiter.check("conversation-3").is_err());

        thread::sleep(Duration::from_millis(60));

        limiter.check("conversation-3").unwrap();
    }

    #[test]
    fn test_rejection_reports_retry_after() {
        let mut limiter = RateLimiter::new(1, Duration::from_secs(60));
        limiter.check("conversation-4").unwrap();

        let err = limiter.check("conversation-4").unwrap_err();
        match err {
            AppError::RateLimited { retry_after } => {
                assert!(retry_after > Duration::from_secs(59));
                assert!(retry_after <= Duration::from_secs(60));
            }
            other => panic!("expected RateLimited, got {:?}", other),
        }
    }

    #[test]
    fn test_rejected_send_is_not_recorded() {
        let mut limiter = RateLimiter::new(1, Duration::from_millis(50));
        limiter.check("conversation-5").unwrap();
        assert!(limiter.check("conversation-5").is_err());

        thread::sleep(Duration::from_millis(60));

        // Only the accepted send counted against the window.
        limiter.check("conversation-5").unwrap();
    }

    #[test]
    fn test_idle_conversations_are_pruned() {
        let mut limiter = RateLimiter::new(2, Duration::from_millis(20));
        limiter.check("conversation-a").unwrap();
        assert_eq!(limiter.tracked(), 1);

        thread::sleep(Duration::from_millis(30));

        limiter.check("conversation-b").unwrap();
        assert_eq!(limiter.tracked(), 1);
    }
}
