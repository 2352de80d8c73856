//! Upcoming user-event countdown.

use crate::settings::EventItem;
use alm_time::date::days_in_month;
use alm_time::Date;

/// Default trailing window, in days, for [`upcoming`].
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// A user event due within the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingEvent<'a> {
    /// The event record the countdown refers to.
    pub event: &'a EventItem,
    /// Whole days from today to the event's next occurrence.
    pub days_until: u32,
}

/// Events due within the next [`DEFAULT_WINDOW_DAYS`] days.
pub fn upcoming<'a>(events: &'a [EventItem], today: Date) -> Vec<UpcomingEvent<'a>> {
    upcoming_within(events, today, DEFAULT_WINDOW_DAYS)
}

/// Events due within the next `window_days` days, soonest first.
///
/// Recurring events are re-anchored to this year, or to next year when this
/// year's occurrence has already passed.  Non-recurring events in the past
/// are dropped for good.  Events whose stored date does not parse as
/// `YYYY-MM-DD` are excluded rather than reported — upstream validation owns
/// that contract.  The sort is stable: events at the same distance keep
/// their input order.
pub fn upcoming_within<'a>(
    events: &'a [EventItem],
    today: Date,
    window_days: u32,
) -> Vec<UpcomingEvent<'a>> {
    let mut due: Vec<UpcomingEvent<'a>> = events
        .iter()
        .filter_map(|event| {
            let target = next_occurrence(event, today)?;
            let days_until = (target - today) as u32;
            (days_until <= window_days).then_some(UpcomingEvent { event, days_until })
        })
        .collect();
    due.sort_by_key(|entry| entry.days_until);
    due
}

/// The event's next occurrence on or after `today`, if it has one.
fn next_occurrence(event: &EventItem, today: Date) -> Option<Date> {
    let anchor = Date::parse_iso(&event.date).ok()?;
    if !event.is_recurring {
        return (anchor >= today).then_some(anchor);
    }
    // Re-anchor to this year; a Feb 29 anniversary clamps to Feb 28 in
    // non-leap years.
    let this_year = reanchored(anchor, today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        reanchored(anchor, today.year() + 1)
    }
}

fn reanchored(anchor: Date, year: u16) -> Option<Date> {
    let month = anchor.month();
    let day = anchor.day_of_month().min(days_in_month(year, month));
    Date::from_ymd(year, month, day).ok()
}
