//! Nearest-holiday countdown and holidays-for-date lookup.

use crate::definition::HolidayDefinition;
use crate::registry::HolidayRegistry;
use crate::settings::HolidaySetting;
use alm_time::{Date, LunarCalendar};

/// The nearest enabled upcoming holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextHoliday {
    /// Registry id of the holiday.
    pub id: &'static str,
    /// Native-language display name.
    pub name: &'static str,
    /// Whole days from today to the holiday.  Zero means the holiday is
    /// today — callers render that as its own state, not as "0 days left."
    pub days_until: u32,
}

/// Find the nearest upcoming holiday among those enabled for the countdown.
///
/// For each enabled holiday the rule is evaluated for this year and the
/// next, and the first non-past date (in year order) becomes the holiday's
/// candidate; holidays whose rule yields no such date contribute nothing.
/// Among the candidates the smallest distance wins, and on equal distance
/// the holiday registered earliest — registry order is the deterministic
/// tie-break.
pub fn nearest_holiday(
    today: Date,
    settings: &[HolidaySetting],
    lunar: &dyn LunarCalendar,
) -> Option<NextHoliday> {
    let mut best: Option<NextHoliday> = None;
    for def in HolidayRegistry::all() {
        let enabled = settings
            .iter()
            .any(|s| s.show_in_countdown && s.id == def.id);
        if !enabled {
            continue;
        }
        let candidate = [today.year(), today.year() + 1]
            .into_iter()
            .filter_map(|year| def.rule.evaluate(year, lunar))
            .find(|date| *date >= today);
        let Some(date) = candidate else {
            continue;
        };
        let days_until = (date - today) as u32;
        if best.map_or(true, |b| days_until < b.days_until) {
            best = Some(NextHoliday {
                id: def.id,
                name: def.local_name,
                days_until,
            });
        }
    }
    best
}

/// The holidays falling on `date`, filtered to those shown on the calendar.
///
/// Lunar-dated holidays near a year boundary belong to the previous lunar
/// year (Laba in early January), so both the previous and the current year's
/// evaluations are checked against `date`.  Registry order is preserved in
/// the result.
pub fn holidays_on(
    date: Date,
    settings: &[HolidaySetting],
    lunar: &dyn LunarCalendar,
) -> Vec<&'static HolidayDefinition> {
    let years = [date.year().saturating_sub(1), date.year()];
    HolidayRegistry::all()
        .iter()
        .filter(|def| {
            settings
                .iter()
                .any(|s| s.show_in_calendar && s.id == def.id)
        })
        .filter(|def| {
            years
                .iter()
                .any(|&year| def.rule.evaluate(year, lunar) == Some(date))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::HolidaySetting;
    use alm_core::errors::{Error, Result};
    use alm_time::SolarDayInfo;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Settings enabling exactly `ids` for the countdown.
    fn countdown_only(ids: &[&str]) -> Vec<HolidaySetting> {
        let mut settings = HolidaySetting::defaults();
        for s in &mut settings {
            s.show_in_countdown = ids.contains(&s.id.as_str());
        }
        settings
    }

    /// Oracle covering the conversions these tests touch (real-world dates).
    #[derive(Debug)]
    struct TableLunar;

    impl LunarCalendar for TableLunar {
        fn from_lunar(&self, lunar_year: u16, lunar_month: u8, lunar_day: u8) -> Result<Date> {
            let (y, m, d) = match (lunar_year, lunar_month, lunar_day) {
                (2024, 1, 1) => (2024, 2, 10),
                (2025, 1, 1) => (2025, 1, 29),
                (2026, 1, 1) => (2026, 2, 17),
                (2024, 1, 15) => (2024, 2, 24),
                (2025, 1, 15) => (2025, 2, 12),
                (2026, 1, 15) => (2026, 3, 3),
                (2024, 5, 5) => (2024, 6, 10),
                (2025, 5, 5) => (2025, 5, 31),
                (2026, 5, 5) => (2026, 6, 19),
                (2024, 8, 15) => (2024, 9, 17),
                (2025, 8, 15) => (2025, 10, 6),
                (2026, 8, 15) => (2026, 9, 25),
                (2024, 12, 8) => (2025, 1, 7),
                (2025, 12, 8) => (2026, 1, 26),
                _ => {
                    return Err(Error::Lunar(format!(
                        "no table entry for {lunar_year}-{lunar_month}-{lunar_day}"
                    )))
                }
            };
            Date::from_ymd(y, m, d)
        }

        fn from_solar(&self, date: Date) -> Result<SolarDayInfo> {
            let qingming = match date.year() {
                2024 => Date::from_ymd(2024, 4, 4)?,
                2025 => Date::from_ymd(2025, 4, 4)?,
                2026 => Date::from_ymd(2026, 4, 5)?,
                other => return Err(Error::Lunar(format!("no table entry for {other}"))),
            };
            Ok(SolarDayInfo {
                lunar_month_name: String::new(),
                lunar_day_name: String::new(),
                gan_zhi_year: String::new(),
                solar_term: (qingming == date).then(|| "清明".to_owned()),
            })
        }
    }

    #[test]
    fn picks_the_nearest_enabled_holiday() {
        // 2025-06-20 (Friday): with the default overlay the next countdown
        // holiday is Independence Day, 14 days out.
        let next = nearest_holiday(date(2025, 6, 20), &HolidaySetting::defaults(), &TableLunar)
            .unwrap();
        assert_eq!(next.id, "independence-day");
        assert_eq!(next.days_until, 14);
    }

    #[test]
    fn disabled_holidays_are_ignored() {
        // Same day, but only Christmas enabled.
        let settings = countdown_only(&["christmas-day"]);
        let next = nearest_holiday(date(2025, 6, 20), &settings, &TableLunar).unwrap();
        assert_eq!(next.id, "christmas-day");
        assert_eq!(next.days_until, 188);
    }

    #[test]
    fn rolls_into_next_year() {
        // 2025-12-26: Christmas has passed, so the candidate comes from the
        // next year's evaluation.
        let settings = countdown_only(&["christmas-day"]);
        let next = nearest_holiday(date(2025, 12, 26), &settings, &TableLunar).unwrap();
        assert_eq!(next.days_until, 364);
    }

    #[test]
    fn zero_days_on_the_holiday_itself() {
        let settings = countdown_only(&["christmas-day"]);
        let next = nearest_holiday(date(2025, 12, 25), &settings, &TableLunar).unwrap();
        assert_eq!(next.days_until, 0);
    }

    #[test]
    fn tie_breaks_on_registry_order() {
        // Qingming and Easter Sunday both fall on 2026-04-05.  Qingming is
        // registered first, so it wins the tie.
        let settings = countdown_only(&["easter-sunday", "qingming-festival"]);
        let next = nearest_holiday(date(2026, 4, 1), &settings, &TableLunar).unwrap();
        assert_eq!(next.id, "qingming-festival");
        assert_eq!(next.days_until, 4);
    }

    #[test]
    fn conditional_holiday_without_candidate_contributes_nothing() {
        // Mid-2025: Inauguration Day 2025 has passed and 2026 is not an
        // inauguration year, so the two-year window holds no candidate.
        let settings = countdown_only(&["inauguration-day"]);
        assert_eq!(
            nearest_holiday(date(2025, 6, 20), &settings, &TableLunar),
            None
        );
    }

    #[test]
    fn lunar_holiday_counts_from_conversion_date() {
        // Laba for lunar year 2024 falls on 2025-01-07: this year's
        // evaluation yields a date in the next Gregorian year, and the
        // countdown uses that date as returned.
        let settings = countdown_only(&["laba-festival"]);
        let next = nearest_holiday(date(2024, 12, 1), &settings, &TableLunar).unwrap();
        assert_eq!(next.id, "laba-festival");
        assert_eq!(next.days_until, 37);
    }

    #[test]
    fn holidays_on_matches_coinciding_holidays() {
        let settings = HolidaySetting::defaults();
        let hits = holidays_on(date(2026, 4, 5), &settings, &TableLunar);
        let ids: Vec<_> = hits.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["qingming-festival", "easter-sunday"]);
    }

    #[test]
    fn holidays_on_respects_show_in_calendar() {
        let mut settings = HolidaySetting::defaults();
        for s in &mut settings {
            if s.id == "qingming-festival" {
                s.show_in_calendar = false;
            }
        }
        let hits = holidays_on(date(2026, 4, 5), &settings, &TableLunar);
        let ids: Vec<_> = hits.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["easter-sunday"]);
    }

    #[test]
    fn holidays_on_finds_year_boundary_lunar_dates() {
        // Laba 2025-01-07 comes from the *previous* year's evaluation.
        let hits = holidays_on(date(2025, 1, 7), &HolidaySetting::defaults(), &TableLunar);
        let ids: Vec<_> = hits.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["laba-festival"]);
    }
}
