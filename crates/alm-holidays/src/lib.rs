//! # alm-holidays
//!
//! The holiday registry and the three countdown engines of the almanac
//! workspace.
//!
//! The registry is a fixed, ordered catalogue of holiday definitions; user
//! preferences arrive as an overlay of per-holiday settings keyed by the
//! registry ids.  The engines — nearest holiday, upcoming events, next
//! payday — are pure functions over immutable snapshots plus a single
//! "today" date the host resolves once per tick.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Nearest-holiday countdown and holidays-for-date lookup.
pub mod countdown;

/// `HolidayDefinition` and `Region`.
pub mod definition;

/// Upcoming user-event countdown.
pub mod events;

/// Next-payday computation.
pub mod payday;

/// The static holiday registry.
pub mod registry;

/// User-editable settings records.
pub mod settings;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use countdown::{holidays_on, nearest_holiday, NextHoliday};
pub use definition::{HolidayDefinition, Region};
pub use events::{upcoming, upcoming_within, UpcomingEvent, DEFAULT_WINDOW_DAYS};
pub use payday::next_payday;
pub use registry::HolidayRegistry;
pub use settings::{EventItem, HolidaySetting, PayFrequency, PaydaySettings};
