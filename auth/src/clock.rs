use std::sync::atomic::AtomicI64;
use std::sync::atomic::Ordering;

use chrono::Utc;

/// Source of the current time in whole seconds since the Unix epoch.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> i64;
}

/// Wall clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// Manually driven clock for tests and simulations.
#[derive(Debug, Default)]
pub struct FixedClock(AtomicI64);

impl FixedClock {
    pub fn new(now: i64) -> Self {
        Self(AtomicI64::new(now))
    }

    pub fn set(&self, now: i64) {
        self.0.store(now, Ordering::SeqCst);
    }

    pub fn advance(&self, seconds: i64) {
        self.0.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(1_000);
        assert_eq!(clock.now(), 1_000);

        clock.advance(5);
        assert_eq!(clock.now(), 1_005);

        clock.set(42);
        assert_eq!(clock.now(), 42);
    }

    #[test]
    fn test_system_clock_is_after_2020() {
        assert!(SystemClock.now() > 1_577_836_800);
    }
}
