//! User-editable settings records.
//!
//! These are the snapshots the persistence collaborator hands to the
//! engines.  The library never reads or writes storage itself; with the
//! `serde` feature the types derive `Serialize`/`Deserialize` so a host can
//! round-trip them through whatever store it uses.

use crate::registry::HolidayRegistry;
use alm_time::Weekday;
use std::collections::HashSet;

// ── Holiday settings overlay ──────────────────────────────────────────────────

/// Per-holiday user preferences, keyed by the registry id.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HolidaySetting {
    /// Registry id this setting overrides.
    pub id: String,
    /// Show the holiday on the calendar grid.
    pub show_in_calendar: bool,
    /// Include the holiday in the countdown computation.
    pub show_in_countdown: bool,
    /// The user observes this holiday as a day off.
    pub is_day_off: bool,
}

/// Holidays included in the countdown by default.
const DEFAULT_COUNTDOWN_IDS: &[&str] = &[
    "chinese-new-year",
    "mid-autumn-festival",
    "thanksgiving-day",
    "christmas-day",
    "lantern-festival",
    "qingming-festival",
    "dragon-boat-festival",
    "international-womens-day",
    "childrens-day-cn",
    "teachers-day-cn",
    "new-years-day",
    "mlk-day",
    "mothers-day",
    "memorial-day",
    "fathers-day",
    "independence-day",
    "labor-day",
    "halloween",
];

/// Holidays treated as days off by default.
const DEFAULT_DAY_OFF_IDS: &[&str] = &[
    "new-years-day",
    "mlk-day",
    "memorial-day",
    "independence-day",
    "labor-day",
    "thanksgiving-day",
    "christmas-day",
    "chinese-new-year",
    "qingming-festival",
    "dragon-boat-festival",
    "mid-autumn-festival",
];

impl HolidaySetting {
    /// Generate the default overlay: one setting per registry entry, all
    /// visible on the calendar, major holidays in the countdown and marked
    /// as days off.
    pub fn defaults() -> Vec<HolidaySetting> {
        HolidayRegistry::all()
            .iter()
            .map(|def| HolidaySetting {
                id: def.id.to_owned(),
                show_in_calendar: true,
                show_in_countdown: DEFAULT_COUNTDOWN_IDS.contains(&def.id),
                is_day_off: DEFAULT_DAY_OFF_IDS.contains(&def.id),
            })
            .collect()
    }

    /// Whether `settings` covers the registry exactly: same id set, no
    /// extras, no duplicates.
    pub fn covers_registry(settings: &[HolidaySetting]) -> bool {
        if settings.len() != HolidayRegistry::len() {
            return false;
        }
        let ids: HashSet<&str> = settings.iter().map(|s| s.id.as_str()).collect();
        ids.len() == settings.len()
            && HolidayRegistry::all().iter().all(|def| ids.contains(def.id))
    }

    /// Recovery policy for a saved overlay that no longer matches the
    /// registry (holidays added or removed between app versions): keep the
    /// overlay if it still covers the registry, otherwise regenerate the
    /// defaults wholesale.  Partial merges are never attempted.
    pub fn reconcile(settings: Vec<HolidaySetting>) -> Vec<HolidaySetting> {
        if Self::covers_registry(&settings) {
            settings
        } else {
            Self::defaults()
        }
    }
}

// ── User events ───────────────────────────────────────────────────────────────

/// A user-recorded event (anniversary or one-off).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EventItem {
    /// Anchor date, `YYYY-MM-DD`.  For recurring events the year component
    /// records when the event was first observed and is otherwise ignored.
    pub date: String,
    /// Display label.
    pub label: String,
    /// Yearly anniversary (`true`) vs one-off (`false`).
    pub is_recurring: bool,
}

// ── Payday settings ───────────────────────────────────────────────────────────

/// How often the user is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayFrequency {
    /// Once a month on a fixed day of the month.
    #[cfg_attr(feature = "serde", serde(rename = "monthly"))]
    Monthly,
    /// Every week on a fixed weekday.
    #[cfg_attr(feature = "serde", serde(rename = "weekly"))]
    Weekly,
    /// Every 14 days, phased by a reference date.
    #[cfg_attr(feature = "serde", serde(rename = "bi-weekly"))]
    BiWeekly,
}

/// The user's payday schedule.
///
/// Only the fields belonging to the active [`PayFrequency`] are meaningful;
/// the others may hold stale values from a previously selected frequency and
/// must be ignored.  A missing field for the active frequency means the
/// schedule is not fully configured yet — a normal state, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PaydaySettings {
    /// The active schedule variant.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub frequency: PayFrequency,
    /// Day of month (1–31) for [`PayFrequency::Monthly`].
    pub day_of_month: Option<u8>,
    /// Weekday for [`PayFrequency::Weekly`].
    pub day_of_week: Option<Weekday>,
    /// `YYYY-MM-DD` anchor for [`PayFrequency::BiWeekly`].
    pub bi_weekly_reference_date: Option<String>,
}
