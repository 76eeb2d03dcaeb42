// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-actor sliding-window rate limiting.
//!
//! Buckets are keyed by (operation, actor) and live in process memory
//! only; they are never persisted or shared across instances. On each
//! attempt, timestamps older than the window are pruned; a full bucket
//! rejects the attempt without recording it, so a rejected caller does not
//! push their own window forward.

use crate::guard::Operation;
use clinic_rota_domain::StaffId;
use std::collections::HashMap;
use thiserror::Error;
use time::{Duration, OffsetDateTime};

/// One operation's rate-limit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum admitted requests per window.
    pub max_requests: u32,
    /// Window length.
    pub window: Duration,
}

impl RateLimit {
    /// Creates a new `RateLimit`.
    #[must_use]
    pub const fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
        }
    }
}

/// Rate-limiting errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateLimitError {
    /// The actor exhausted the operation's window.
    #[error(
        "Rate limit exceeded for '{operation}': at most {max_requests} requests per {window_secs}s"
    )]
    Exceeded {
        /// The limited operation.
        operation: &'static str,
        /// The configured ceiling.
        max_requests: u32,
        /// The window length in seconds.
        window_secs: i64,
    },
}

/// Sliding-window limiter over (operation, actor) buckets.
///
/// The current time is supplied by the caller so the window behavior is
/// deterministic under test.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    limits: HashMap<Operation, RateLimit>,
    buckets: HashMap<(Operation, StaffId), Vec<OffsetDateTime>>,
}

impl RateLimiter {
    /// Creates a limiter with an explicit configuration. Operations absent
    /// from the map are unlimited.
    #[must_use]
    pub fn new(limits: HashMap<Operation, RateLimit>) -> Self {
        Self {
            limits,
            buckets: HashMap::new(),
        }
    }

    /// Creates a limiter with the default production configuration:
    /// auto-assign at 2 per minute, manual assignment at 20 per minute.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut limits: HashMap<Operation, RateLimit> = HashMap::new();
        limits.insert(
            Operation::AutoAssign,
            RateLimit::new(2, Duration::seconds(60)),
        );
        limits.insert(
            Operation::AssignShift,
            RateLimit::new(20, Duration::seconds(60)),
        );
        Self::new(limits)
    }

    /// Admits or rejects one attempt at `now`.
    ///
    /// Prunes the actor's bucket to the window, rejects without recording
    /// when the bucket is full, and records `now` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `RateLimitError::Exceeded` when the actor's bucket is full.
    pub fn check(
        &mut self,
        operation: Operation,
        actor_id: &StaffId,
        now: OffsetDateTime,
    ) -> Result<(), RateLimitError> {
        let Some(limit) = self.limits.get(&operation).copied() else {
            return Ok(());
        };

        let bucket: &mut Vec<OffsetDateTime> = self
            .buckets
            .entry((operation, actor_id.clone()))
            .or_default();
        bucket.retain(|t| now - *t < limit.window);

        if bucket.len() >= limit.max_requests as usize {
            return Err(RateLimitError::Exceeded {
                operation: operation.name(),
                max_requests: limit.max_requests,
                window_secs: limit.window.whole_seconds(),
            });
        }

        bucket.push(now);
        Ok(())
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH
    }

    fn limiter(max: u32, secs: i64) -> RateLimiter {
        let mut limits: HashMap<Operation, RateLimit> = HashMap::new();
        limits.insert(
            Operation::AssignShift,
            RateLimit::new(max, Duration::seconds(secs)),
        );
        RateLimiter::new(limits)
    }

    #[test]
    fn test_admits_up_to_limit_then_rejects() {
        let mut limiter: RateLimiter = limiter(3, 60);
        let actor: StaffId = StaffId::new("u1");
        let now: OffsetDateTime = base();

        for _ in 0..3 {
            assert!(limiter.check(Operation::AssignShift, &actor, now).is_ok());
        }
        assert!(limiter.check(Operation::AssignShift, &actor, now).is_err());
    }

    #[test]
    fn test_window_slides_and_frees_capacity() {
        let mut limiter: RateLimiter = limiter(2, 60);
        let actor: StaffId = StaffId::new("u1");

        assert!(limiter.check(Operation::AssignShift, &actor, base()).is_ok());
        assert!(
            limiter
                .check(Operation::AssignShift, &actor, base() + Duration::seconds(30))
                .is_ok()
        );
        assert!(
            limiter
                .check(Operation::AssignShift, &actor, base() + Duration::seconds(45))
                .is_err()
        );

        // 61s after the first attempt, that timestamp ages out
        assert!(
            limiter
                .check(Operation::AssignShift, &actor, base() + Duration::seconds(61))
                .is_ok()
        );
    }

    #[test]
    fn test_rejected_attempts_are_not_recorded() {
        let mut limiter: RateLimiter = limiter(1, 60);
        let actor: StaffId = StaffId::new("u1");

        assert!(limiter.check(Operation::AssignShift, &actor, base()).is_ok());
        // Hammering while limited must not extend the window
        for s in 1..10 {
            assert!(
                limiter
                    .check(Operation::AssignShift, &actor, base() + Duration::seconds(s))
                    .is_err()
            );
        }
        // Exactly one window after the single admitted attempt
        assert!(
            limiter
                .check(Operation::AssignShift, &actor, base() + Duration::seconds(60))
                .is_ok()
        );
    }

    #[test]
    fn test_buckets_are_per_actor() {
        let mut limiter: RateLimiter = limiter(1, 60);

        assert!(
            limiter
                .check(Operation::AssignShift, &StaffId::new("u1"), base())
                .is_ok()
        );
        assert!(
            limiter
                .check(Operation::AssignShift, &StaffId::new("u2"), base())
                .is_ok()
        );
        assert!(
            limiter
                .check(Operation::AssignShift, &StaffId::new("u1"), base())
                .is_err()
        );
    }

    #[test]
    fn test_buckets_are_per_operation() {
        let mut limits: HashMap<Operation, RateLimit> = HashMap::new();
        limits.insert(
            Operation::AssignShift,
            RateLimit::new(1, Duration::seconds(60)),
        );
        limits.insert(
            Operation::AutoAssign,
            RateLimit::new(1, Duration::seconds(60)),
        );
        let mut limiter: RateLimiter = RateLimiter::new(limits);
        let actor: StaffId = StaffId::new("u1");

        assert!(limiter.check(Operation::AssignShift, &actor, base()).is_ok());
        assert!(limiter.check(Operation::AutoAssign, &actor, base()).is_ok());
        assert!(limiter.check(Operation::AssignShift, &actor, base()).is_err());
    }

    #[test]
    fn test_unconfigured_operations_are_unlimited() {
        let mut limiter: RateLimiter = limiter(1, 60);
        let actor: StaffId = StaffId::new("u1");

        for _ in 0..50 {
            assert!(limiter.check(Operation::GetSwaps, &actor, base()).is_ok());
        }
    }

    #[test]
    fn test_default_configuration_matches_production_settings() {
        let mut limiter: RateLimiter = RateLimiter::with_defaults();
        let actor: StaffId = StaffId::new("u1");

        assert!(limiter.check(Operation::AutoAssign, &actor, base()).is_ok());
        assert!(limiter.check(Operation::AutoAssign, &actor, base()).is_ok());
        assert!(limiter.check(Operation::AutoAssign, &actor, base()).is_err());
    }
}
