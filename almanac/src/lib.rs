//! # almanac
//!
//! Holiday, anniversary, and payday countdown engines for a personal
//! dashboard.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `alm-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use almanac::holidays::{next_payday, PayFrequency, PaydaySettings};
//! use almanac::time::Date;
//!
//! let settings = PaydaySettings {
//!     frequency: PayFrequency::Monthly,
//!     day_of_month: Some(15),
//!     day_of_week: None,
//!     bi_weekly_reference_date: None,
//! };
//! let today = Date::from_ymd(2025, 6, 20).unwrap();
//! assert_eq!(next_payday(&settings, today), Some(25));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and host abstractions.
pub use alm_core as core;

/// Calendar dates, weekday arithmetic, and holiday date rules.
pub use alm_time as time;

/// The holiday registry, settings overlay, and countdown engines.
pub use alm_holidays as holidays;
