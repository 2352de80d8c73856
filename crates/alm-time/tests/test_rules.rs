//! Property tests for the date-rule evaluators.

use alm_core::errors::{Error, Result};
use alm_time::date::days_in_month;
use alm_time::rules::LAST;
use alm_time::{Date, DateRule, LunarCalendar, Month, SolarDayInfo, Weekday};
use proptest::prelude::*;

/// An oracle that answers nothing — the properties below only exercise
/// Gregorian rule families.
#[derive(Debug)]
struct NoLunar;

impl LunarCalendar for NoLunar {
    fn from_lunar(&self, y: u16, m: u8, d: u8) -> Result<Date> {
        Err(Error::Lunar(format!("unsupported: {y}-{m}-{d}")))
    }

    fn from_solar(&self, date: Date) -> Result<SolarDayInfo> {
        Err(Error::Lunar(format!("unsupported: {date}")))
    }
}

fn month_strategy() -> impl Strategy<Value = Month> {
    (1u8..=12).prop_map(|n| Month::from_number(n).unwrap())
}

fn weekday_strategy() -> impl Strategy<Value = Weekday> {
    (1u8..=7).prop_map(|n| Weekday::from_ordinal(n).unwrap())
}

proptest! {
    /// Easter stays within March 22 – April 25 and lands on a Sunday for the
    /// whole operating range.
    #[test]
    fn easter_window_and_weekday(year in 1900u16..=2100) {
        let easter = DateRule::Easter.evaluate(year, &NoLunar).unwrap();
        let lo = Date::from_ymd(year, 3, 22).unwrap();
        let hi = Date::from_ymd(year, 4, 25).unwrap();
        prop_assert!(easter >= lo && easter <= hi);
        prop_assert_eq!(easter.weekday(), Weekday::Sunday);
    }

    /// Good Friday is exactly two days before Easter and lands on a Friday.
    #[test]
    fn good_friday_offset(year in 1900u16..=2100) {
        static EASTER: DateRule = DateRule::Easter;
        let rule = DateRule::Relative { anchor: &EASTER, offset_days: -2 };
        let good_friday = rule.evaluate(year, &NoLunar).unwrap();
        let easter = DateRule::Easter.evaluate(year, &NoLunar).unwrap();
        prop_assert_eq!(easter - good_friday, 2);
        prop_assert_eq!(good_friday.weekday(), Weekday::Friday);
    }

    /// A forward nth-weekday hit has the right weekday and is preceded by
    /// exactly `nth - 1` earlier occurrences in the month.
    #[test]
    fn nth_weekday_forward_is_nth(
        year in 1900u16..=2100,
        month in month_strategy(),
        weekday in weekday_strategy(),
        nth in 1i8..=5,
    ) {
        let rule = DateRule::NthWeekday { month, weekday, nth };
        if let Some(hit) = rule.evaluate(year, &NoLunar) {
            prop_assert_eq!(hit.month(), month.number());
            prop_assert_eq!(hit.weekday(), weekday);
            // Count matching days strictly before the hit.
            let mut earlier: i8 = 0;
            for day in 1..hit.day_of_month() {
                if Date::from_ymd(year, month.number(), day).unwrap().weekday() == weekday {
                    earlier += 1;
                }
            }
            prop_assert_eq!(earlier, nth - 1);
        } else {
            // Only the 5th occurrence can be missing.
            prop_assert_eq!(nth, 5);
        }
    }

    /// The "last" rule always hits, has the right weekday, and no later day
    /// of the month shares it.
    #[test]
    fn last_weekday_is_final(
        year in 1900u16..=2100,
        month in month_strategy(),
        weekday in weekday_strategy(),
    ) {
        let rule = DateRule::NthWeekday { month, weekday, nth: LAST };
        let hit = rule.evaluate(year, &NoLunar).unwrap();
        prop_assert_eq!(hit.month(), month.number());
        prop_assert_eq!(hit.weekday(), weekday);
        for day in hit.day_of_month() + 1..=days_in_month(year, month.number()) {
            let later = Date::from_ymd(year, month.number(), day).unwrap();
            prop_assert_ne!(later.weekday(), weekday);
        }
    }

    /// Date serial/ymd conversions round-trip across the operating range.
    #[test]
    fn date_roundtrip(serial in 0i32..=109_572) {
        let date = Date::from_serial(serial).unwrap();
        let rebuilt = Date::from_ymd(date.year(), date.month(), date.day_of_month()).unwrap();
        prop_assert_eq!(rebuilt, date);
    }
}
