//! # alm-time
//!
//! Calendar dates, weekday arithmetic, the Easter computation, the lunar
//! conversion port, and the holiday date-rule evaluators.
//!
//! Everything here is a pure function of its inputs.  The only way to reach
//! the wall clock is through the [`clock::Clock`] abstraction, which hosts
//! resolve once per tick and pass down as a plain [`Date`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Injected clock abstraction.
pub mod clock;

/// `Date` type.
pub mod date;

/// Easter Sunday computation.
pub mod easter;

/// Lunar calendar conversion port.
pub mod lunar;

/// `Month` — month of the year.
pub mod month;

/// Date-generation rules for holidays.
pub mod rules;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock};
#[cfg(feature = "system-clock")]
pub use clock::SystemClock;
pub use date::Date;
pub use easter::easter_sunday;
pub use lunar::{LunarCalendar, SolarDayInfo};
pub use month::Month;
pub use rules::DateRule;
pub use weekday::Weekday;
