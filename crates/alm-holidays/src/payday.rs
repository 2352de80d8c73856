//! Next-payday computation.

use crate::settings::{PayFrequency, PaydaySettings};
use alm_time::date::days_in_month;
use alm_time::Date;

/// Days of a bi-weekly pay cycle.
const CYCLE_DAYS: i32 = 14;

/// Whole days from `today` to the next payday, or `None` when the schedule
/// is not fully configured.
///
/// Zero means today is payday — callers render that as its own state.  Only
/// the fields of the active frequency are consulted; stale values left over
/// from a previously selected frequency are ignored.  A reference date that
/// fails to parse counts as "not configured," matching the library's
/// treatment of incomplete settings.
pub fn next_payday(settings: &PaydaySettings, today: Date) -> Option<u32> {
    match settings.frequency {
        PayFrequency::Monthly => {
            let day_of_month = settings.day_of_month?;
            if !(1..=31).contains(&day_of_month) {
                return None;
            }
            next_monthly(day_of_month, today)
        }
        PayFrequency::Weekly => {
            let day_of_week = settings.day_of_week?;
            Some(today.weekday().days_until(day_of_week))
        }
        PayFrequency::BiWeekly => {
            let reference = settings.bi_weekly_reference_date.as_deref()?;
            let reference = Date::parse_iso(reference).ok()?;
            Some(next_bi_weekly(reference, today))
        }
    }
}

/// Monthly schedule: this month's payday, or next month's once it has
/// passed.  A `day_of_month` beyond the target month's length clamps to the
/// month's last day (a 31st-of-the-month salary arrives on Feb 28/29).
fn next_monthly(day_of_month: u8, today: Date) -> Option<u32> {
    let (mut year, mut month) = (today.year(), today.month());
    let mut candidate = clamped(year, month, day_of_month)?;
    if candidate < today {
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
        candidate = clamped(year, month, day_of_month)?;
    }
    Some((candidate - today) as u32)
}

fn clamped(year: u16, month: u8, day: u8) -> Option<Date> {
    Date::from_ymd(year, month, day.min(days_in_month(year, month))).ok()
}

/// Bi-weekly schedule: a strict 14-day cycle phased by the reference date.
/// A reference still in the future is itself the next payday.
fn next_bi_weekly(reference: Date, today: Date) -> u32 {
    if reference >= today {
        return (reference - today) as u32;
    }
    let remainder = (today - reference) % CYCLE_DAYS;
    ((CYCLE_DAYS - remainder) % CYCLE_DAYS) as u32
}
