//! `Date` — a timezone-free calendar date.
//!
//! Dates are stored as a serial number of days since **January 1, 1900**
//! (serial 0).  A `Date` carries no time-of-day component: by construction it
//! already denotes local midnight, which is what keeps the countdown engines
//! free of time-of-day and DST off-by-one errors.
//!
//! The supported range is 1900-01-01 through 2199-12-31.

use crate::weekday::Weekday;
use alm_core::errors::{Error, Result};

/// A calendar date represented as days since 1900-01-01.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

impl Date {
    /// Minimum supported date: January 1, 1900.
    pub const MIN: Date = Date(0);

    /// Maximum supported date: December 31, 2199.
    pub const MAX: Date = Date(109_572);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1900-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < 0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [0, {}]",
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year (1900–2199), month (1–12), and day of month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1900..=2199).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [1900, 2199]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {last}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// Anything else — wrong width, wrong separators, non-digits, or an
    /// impossible calendar date — is an error.  Callers that receive dates
    /// from user records treat the error as "exclude this record," not as a
    /// reason to crash.
    pub fn parse_iso(text: &str) -> Result<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(Error::Parse(format!("expected YYYY-MM-DD, got {text:?}")));
        }
        let digits = |range: std::ops::Range<usize>| -> Result<u16> {
            let mut value = 0u16;
            for &b in &bytes[range] {
                if !b.is_ascii_digit() {
                    return Err(Error::Parse(format!("expected YYYY-MM-DD, got {text:?}")));
                }
                value = value * 10 + u16::from(b - b'0');
            }
            Ok(value)
        };
        let year = digits(0..4)?;
        let month = digits(5..7)? as u8;
        let day = digits(8..10)? as u8;
        Self::from_ymd(year, month, day)
            .map_err(|_| Error::Parse(format!("invalid calendar date {text:?}")))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1900-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.  1900-01-01 was a Monday.
    pub fn weekday(&self) -> Weekday {
        let ordinal = (self.0.rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(ordinal).expect("rem_euclid keeps ordinal in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative `n` goes backward).
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// Return the last calendar day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition out of range")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction out of range")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether `year` is a Gregorian leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month of a given year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

// ── Internal conversions ──────────────────────────────────────────────────────
//
// Serial conversions use the era-based civil-calendar algorithm: years are
// shifted so that March is month 0 (pushing the leap day to the end of the
// shifted year) and grouped into 400-year eras of exactly 146 097 days.

/// Days from 1970-01-01 to 1900-01-01.
const UNIX_OFFSET: i64 = -25_567;

fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = i64::from((month + 9) % 12);
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    (era * 146_097 + doe - 719_468 - UNIX_OFFSET) as i32
}

fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let z = i64::from(serial) + UNIX_OFFSET + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = (y + i64::from(month <= 2)) as u16;
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
