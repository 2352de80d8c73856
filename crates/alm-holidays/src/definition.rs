//! `HolidayDefinition` — the static description of one holiday.

use alm_time::DateRule;

/// Regional tradition a holiday belongs to.
///
/// A holiday may belong to several (New Year's Day is celebrated in both).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// United States holidays.
    Us,
    /// Chinese holidays.
    Chinese,
}

/// The immutable definition of one holiday.
///
/// Definitions are `'static` data baked into the registry; the `id` is the
/// stable key every user override refers to.  Renaming an id orphans saved
/// settings, so ids never change once shipped.
#[derive(Debug, Clone, Copy)]
pub struct HolidayDefinition {
    /// Unique stable key, e.g. `"mid-autumn-festival"`.
    pub id: &'static str,
    /// Native-language display name.
    pub local_name: &'static str,
    /// English display name.
    pub english_name: &'static str,
    /// Regional traditions; never empty.
    pub regions: &'static [Region],
    /// The rule producing the holiday's date for a given year.
    pub rule: DateRule,
}

impl HolidayDefinition {
    /// Whether the holiday belongs to `region`.
    pub fn in_region(&self, region: Region) -> bool {
        self.regions.contains(&region)
    }
}
