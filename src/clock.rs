//! Time source abstraction.
//!
//! Post ids are creation timestamps in milliseconds and `createdAt` is an
//! ISO-8601 string; both come from a [`Clock`] so tests can pin time
//! instead of racing the wall clock.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

/// Source of the current time.
pub trait Clock {
    /// Current time in milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;

    /// Current time as an ISO-8601 string (`2024-01-15T10:30:00.000Z`).
    fn now_iso8601(&self) -> String {
        let ts = Utc
            .timestamp_millis_opt(self.now_millis())
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH);
        ts.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Clock pinned to a fixed instant, advanced manually.
///
/// Used by tests that need deterministic ids and timestamps.
#[derive(Debug, Default)]
pub struct FixedClock {
    millis: AtomicI64,
}

impl FixedClock {
    /// Create a clock pinned to `millis` since the Unix epoch.
    pub fn new(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    /// Advance the clock by `delta` milliseconds.
    pub fn advance(&self, delta: i64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}
