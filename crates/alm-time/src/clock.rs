//! Injected clock abstraction.
//!
//! The engines never read a wall clock: the host resolves "today" once per
//! tick and hands the same [`Date`] to every computation, which keeps the
//! holiday, event, and payday countdowns mutually consistent across a
//! day-boundary rollover.  Tests pin an arbitrary date with [`FixedClock`].

use crate::date::Date;

/// Source of the current local calendar date.
pub trait Clock: std::fmt::Debug {
    /// The current date in the host's timezone.
    fn today(&self) -> Date;
}

/// A clock pinned to a fixed date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

/// The system wall clock, read in the local timezone.
#[cfg(feature = "system-clock")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "system-clock")]
impl Clock for SystemClock {
    fn today(&self) -> Date {
        use chrono::Datelike;
        let now = chrono::Local::now().date_naive();
        Date::from_ymd(now.year() as u16, now.month() as u8, now.day() as u8)
            .expect("system date outside supported range")
    }
}
