//! Ambient clock abstraction
//!
//! Birth times and fertility seeds sample the environment clock. The trait
//! seam lets tests pin the sample, keeping the oracle's draws reproducible.

use chrono::Utc;

/// Source of the environment-clock sample (unix seconds).
pub trait Clock {
    fn now(&self) -> i64;
}

/// Wall clock via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_instant() {
        assert_eq!(FixedClock(1_650_000_000).now(), 1_650_000_000);
    }

    #[test]
    fn system_clock_is_monotone_enough() {
        let a = SystemClock.now();
        let b = SystemClock.now();
        assert!(b >= a);
    }
}
