//! Lunar calendar conversion port.
//!
//! The Chinese lunisolar calendar cannot be derived from Gregorian arithmetic
//! alone; it needs astronomical tables or an equivalent algorithm.  The
//! almanac crates therefore treat the conversion as an external oracle: a
//! host wires in an implementation (wrapping whatever lunar-calendar library
//! it ships with) and the rule evaluators consume it through this trait.
//!
//! Implementations must be deterministic and synchronous.

use crate::date::Date;
use alm_core::errors::Result;

/// Description of a solar (Gregorian) day in lunar-calendar terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolarDayInfo {
    /// Lunar month name, e.g. `"八"` for the eighth month.
    pub lunar_month_name: String,
    /// Lunar day name, e.g. `"十五"`.
    pub lunar_day_name: String,
    /// Sexagenary (gan-zhi) year name, e.g. `"甲辰"`.
    pub gan_zhi_year: String,
    /// Solar term (jieqi) falling on this day, if any, e.g. `"清明"`.
    pub solar_term: Option<String>,
}

/// Conversion oracle between the Chinese lunisolar and Gregorian calendars.
pub trait LunarCalendar: std::fmt::Debug + Send + Sync {
    /// Convert a lunar date to the Gregorian calendar.
    ///
    /// `lunar_year` names the lunar year, not the Gregorian year of the
    /// result: dates late in the lunar year (such as month 12) usually fall
    /// in the **following** Gregorian year.  Callers must use the year of
    /// the returned date, never assume it equals `lunar_year`.
    ///
    /// Errors when the oracle's tables do not cover the requested year.
    fn from_lunar(&self, lunar_year: u16, lunar_month: u8, lunar_day: u8) -> Result<Date>;

    /// Describe a Gregorian date in lunar-calendar terms.
    ///
    /// Errors when the oracle's tables do not cover the date.
    fn from_solar(&self, date: Date) -> Result<SolarDayInfo>;
}
