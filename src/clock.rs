use chrono::{DateTime, FixedOffset, Local};

/// Source of wall-clock time for `date` and `ls` stamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Always reports the same instant. Used to pin output in tests.
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    pub fn parse(rfc3339: &str) -> anyhow::Result<Self> {
        Ok(Self(DateTime::parse_from_rfc3339(rfc3339)?))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// `Fri Oct 16 2026 10:00:00 GMT+0200`
pub fn format_date(now: &DateTime<FixedOffset>) -> String {
    now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string()
}

/// `Oct 16 2026`, the stamp column of `ls`.
pub fn format_stamp(now: &DateTime<FixedOffset>) -> String {
    now.format("%b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_formats() {
        let clock = FixedClock::parse("2026-10-16T10:00:00+02:00").unwrap();
        assert_eq!(format_date(&clock.now()), "Fri Oct 16 2026 10:00:00 GMT+0200");
        assert_eq!(format_stamp(&clock.now()), "Oct 16 2026");
    }
}
