use chrono::{DateTime, Utc};

/// Ambient current-time source.
///
/// Every operation whose contract mentions "now" takes a `Clock` instead of
/// reading the system time directly, so the calendar logic stays
/// deterministic under test.
pub trait Clock {
    /// The current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// The real system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a single instant, for tests and reproducible output
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_is_constant() {
        let instant = Utc.with_ymd_and_hms(2025, 4, 8, 12, 0, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn test_system_clock_advances_from_epoch() {
        let now = SystemClock.now();
        assert!(now.timestamp() > 0);
    }
}
