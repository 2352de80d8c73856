//! Date-generation rules for holidays.
//!
//! A [`DateRule`] answers one question: on which Gregorian date does a
//! holiday fall in a given year?  `None` means the rule does not apply in
//! that year (Inauguration Day in a non-inauguration year) or the answer is
//! outside the supported range.  Evaluation never panics for years in the
//! library's operating range.

use crate::date::{days_in_month, Date};
use crate::easter::easter_sunday;
use crate::lunar::LunarCalendar;
use crate::month::Month;
use crate::weekday::Weekday;

/// Sentinel for "the last occurrence of the weekday in the month."
pub const LAST: i8 = -1;

/// A pure `year -> Option<Date>` rule describing when a holiday falls.
#[derive(Debug, Clone, Copy)]
pub enum DateRule {
    /// A fixed Gregorian month/day, every year.
    Fixed {
        /// Month of the holiday.
        month: Month,
        /// Day of the month.
        day: u8,
    },

    /// The n-th (or, with [`LAST`], final) occurrence of a weekday in a month.
    NthWeekday {
        /// Month to search.
        month: Month,
        /// Weekday to match.
        weekday: Weekday,
        /// 1-based occurrence, or [`LAST`] for the final occurrence.
        nth: i8,
    },

    /// Easter Sunday (Meeus/Jones/Butcher).
    Easter,

    /// Another rule's date shifted by a fixed number of days.
    Relative {
        /// The rule supplying the anchor date.
        anchor: &'static DateRule,
        /// Day offset added to the anchor (negative moves earlier).
        offset_days: i32,
    },

    /// A date on the Chinese lunisolar calendar.
    ///
    /// The Gregorian date returned by the conversion may fall in a different
    /// year than the queried one (lunar month 12 usually does); the rule
    /// reports the conversion's own result either way.
    Lunar {
        /// Lunar month (1–12).
        month: u8,
        /// Lunar day (1–30).
        day: u8,
    },

    /// The day a named solar term (jieqi) falls on.
    SolarTerm {
        /// Solar term name as the lunar oracle reports it, e.g. `"清明"`.
        term: &'static str,
        /// Month whose days are searched for the term.
        month: Month,
    },

    /// Another rule, applicable only in years satisfying a predicate.
    Conditional {
        /// Year predicate; `false` makes the rule yield `None`.
        applies: fn(u16) -> bool,
        /// The rule evaluated when the predicate holds.
        inner: &'static DateRule,
    },
}

impl DateRule {
    /// Evaluate the rule for `year`.
    ///
    /// `lunar` is consulted only by the [`DateRule::Lunar`] and
    /// [`DateRule::SolarTerm`] variants.  Oracle failures and out-of-range
    /// results yield `None`, never a panic.
    pub fn evaluate(&self, year: u16, lunar: &dyn LunarCalendar) -> Option<Date> {
        match *self {
            DateRule::Fixed { month, day } => Date::from_ymd(year, month.number(), day).ok(),

            DateRule::NthWeekday {
                month,
                weekday,
                nth,
            } => nth_weekday_of_month(year, month, weekday, nth),

            DateRule::Easter => easter_sunday(year),

            DateRule::Relative {
                anchor,
                offset_days,
            } => anchor.evaluate(year, lunar)?.add_days(offset_days).ok(),

            DateRule::Lunar { month, day } => lunar.from_lunar(year, month, day).ok(),

            DateRule::SolarTerm { term, month } => {
                let last = days_in_month(year, month.number());
                for day in 1..=last {
                    let date = Date::from_ymd(year, month.number(), day).ok()?;
                    let info = match lunar.from_solar(date) {
                        Ok(info) => info,
                        Err(_) => return None,
                    };
                    if info.solar_term.as_deref() == Some(term) {
                        return Some(date);
                    }
                }
                None
            }

            DateRule::Conditional { applies, inner } => {
                if applies(year) {
                    inner.evaluate(year, lunar)
                } else {
                    None
                }
            }
        }
    }
}

/// The n-th (`nth > 0`) or last (`nth == LAST`) `weekday` of `month`.
///
/// Real date arithmetic throughout: the first occurrence is found from the
/// weekday of the 1st, the last from the weekday of the month's final day.
/// Any other `nth`, or an occurrence past the end of the month, yields
/// `None`.
fn nth_weekday_of_month(year: u16, month: Month, weekday: Weekday, nth: i8) -> Option<Date> {
    let first = Date::from_ymd(year, month.number(), 1).ok()?;
    let last = days_in_month(year, month.number());
    if nth > 0 {
        let skip = first.weekday().days_until(weekday);
        let day = 1 + skip + 7 * (nth as u32 - 1);
        if day > u32::from(last) {
            return None;
        }
        Date::from_ymd(year, month.number(), day as u8).ok()
    } else if nth == LAST {
        let end = first.end_of_month();
        let back = weekday.days_until(end.weekday()) as u8;
        Date::from_ymd(year, month.number(), last - back).ok()
    } else {
        None
    }
}
